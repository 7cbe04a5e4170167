//! `ads.*` operations: clients, campaigns, ads, statistics and targeting.
//!
//! Each operation assembles a flat form body and goes through [`VkClient::call`].
//! Batch mutations check their item ceiling first and fail with
//! [`Error::InvalidParameter`](crate::Error::InvalidParameter) without sending anything.

use crate::client::core::VkClient;
use crate::request::{ensure_batch_size, prepare_criteria, FormBody};
use crate::types::{
    Account, AdsFilter, CampaignStatus, CampaignStatusUpdate, ClientLimitUpdate, ClientResponse,
    StatsQuery, TargetingQuery,
};
use crate::Result;
use serde::Serialize;
use serde_json::{Map, Value};

impl VkClient {
    /// Sets the total spending limit of one agency client.
    pub async fn update_client_all_limit(
        &self,
        account: &Account,
        client_id: i64,
        limit: f64,
    ) -> Result<Vec<ClientResponse>> {
        let data = [ClientLimitUpdate {
            client_id,
            all_limit: limit,
        }];
        self.batch("ads.updateClients", account, "data", &data).await
    }

    /// Sets the same status on every listed campaign.
    pub async fn update_campaigns_status(
        &self,
        account: &Account,
        campaign_ids: &[i64],
        status: CampaignStatus,
    ) -> Result<Vec<ClientResponse>> {
        let data: Vec<CampaignStatusUpdate> = campaign_ids
            .iter()
            .map(|&campaign_id| CampaignStatusUpdate {
                campaign_id,
                status,
            })
            .collect();
        self.batch("ads.updateCampaigns", account, "data", &data).await
    }

    /// Audience size for `settings` on links to `link_domain`.
    pub async fn get_coverage(
        &self,
        account: &Account,
        settings: Map<String, Value>,
        link_domain: &str,
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let body = FormBody::new()
            .account(account)
            .json_field("criteria", &prepare_criteria(settings))?
            .field("link_domain", link_domain)
            .field("link_url", "1");
        self.call("ads.getTargetingStats", body).await
    }

    pub async fn get_targeting_stats(
        &self,
        account: &Account,
        query: &TargetingQuery,
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let body = FormBody::new()
            .account(account)
            .json_field("criteria", &prepare_criteria(query.criteria.clone()))?
            .opt_field("ad_id", query.ad_id)
            .opt_field("ad_format", query.ad_format)
            .opt_field("ad_platform", query.ad_platform.as_deref())
            .field("link_url", &query.link_url)
            .opt_field("link_domain", query.link_domain.as_deref());
        self.call("ads.getTargetingStats", body).await
    }

    pub async fn get_clients(&self, account: &Account) -> Result<Vec<ClientResponse>> {
        self.call("ads.getClients", FormBody::new().account(account)).await
    }

    /// Creates agency clients; at most 50 per call.
    pub async fn create_clients<T: Serialize>(
        &self,
        account: &Account,
        clients: &[T],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.createClients", account, "data", clients).await
    }

    /// Updates agency clients; at most 50 per call.
    pub async fn update_clients<T: Serialize>(
        &self,
        account: &Account,
        clients: &[T],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.updateClients", account, "data", clients).await
    }

    /// Archives agency clients; at most 10 per call.
    pub async fn delete_clients(
        &self,
        account: &Account,
        client_ids: &[i64],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.deleteClients", account, "ids", client_ids).await
    }

    /// Campaigns of the cabinet, or of one client for agency cabinets.
    /// An empty `campaign_ids` lists all campaigns.
    pub async fn get_campaigns(
        &self,
        account: &Account,
        client_id: Option<i64>,
        include_deleted: bool,
        campaign_ids: &[i64],
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let body = FormBody::new()
            .account(account)
            .opt_field("client_id", client_id)
            .flag("include_deleted", include_deleted);
        let body = with_ids(body, "campaign_ids", campaign_ids)?;
        self.call("ads.getCampaigns", body).await
    }

    pub async fn create_campaigns<T: Serialize>(
        &self,
        account: &Account,
        campaigns: &[T],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.createCampaigns", account, "data", campaigns).await
    }

    pub async fn update_campaigns<T: Serialize>(
        &self,
        account: &Account,
        campaigns: &[T],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.updateCampaigns", account, "data", campaigns).await
    }

    pub async fn delete_campaigns(
        &self,
        account: &Account,
        campaign_ids: &[i64],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.deleteCampaigns", account, "ids", campaign_ids).await
    }

    pub async fn get_ads(
        &self,
        account: &Account,
        filter: &AdsFilter,
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let body = ads_filter_body(account, filter)?;
        self.call("ads.getAds", body).await
    }

    /// Visual layout (titles, images, links) of the filtered ads.
    pub async fn get_ads_layout(
        &self,
        account: &Account,
        filter: &AdsFilter,
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let body = ads_filter_body(account, filter)?;
        self.call("ads.getAdsLayout", body).await
    }

    pub async fn get_ads_targeting(
        &self,
        account: &Account,
        filter: &AdsFilter,
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let body = ads_filter_body(account, filter)?;
        self.call("ads.getAdsTargeting", body).await
    }

    /// Creates ads; at most 5 per call.
    pub async fn create_ads<T: Serialize>(
        &self,
        account: &Account,
        ads: &[T],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.createAds", account, "data", ads).await
    }

    /// Updates ads; at most 5 per call.
    pub async fn update_ads<T: Serialize>(
        &self,
        account: &Account,
        ads: &[T],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.updateAds", account, "data", ads).await
    }

    /// Archives ads; at most 100 per call.
    pub async fn delete_ads(
        &self,
        account: &Account,
        ad_ids: &[i64],
    ) -> Result<Vec<ClientResponse>> {
        self.batch("ads.deleteAds", account, "ids", ad_ids).await
    }

    pub async fn get_statistics(
        &self,
        account: &Account,
        query: &StatsQuery,
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let body = stats_body(account, query)?;
        self.call("ads.getStatistics", body).await
    }

    pub async fn get_demographics(
        &self,
        account: &Account,
        query: &StatsQuery,
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let body = stats_body(account, query)?;
        self.call("ads.getDemographics", body).await
    }

    /// Interest categories usable in targeting.
    pub async fn get_categories(
        &self,
        access_token: &str,
        lang: Option<&str>,
    ) -> Result<Vec<ClientResponse>> {
        let body = FormBody::new()
            .field("access_token", access_token)
            .opt_field("lang", lang);
        self.call("ads.getCategories", body).await
    }

    async fn batch<T: Serialize>(
        &self,
        method: &str,
        account: &Account,
        field: &str,
        items: &[T],
    ) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        ensure_batch_size(method, field, items.len())?;
        let body = FormBody::new().account(account).json_field(field, items)?;
        self.call(method, body).await
    }
}

fn with_ids(body: FormBody, key: &str, ids: &[i64]) -> Result<FormBody> {
    if ids.is_empty() {
        Ok(body)
    } else {
        body.json_field(key, ids)
    }
}

fn ads_filter_body(account: &Account, filter: &AdsFilter) -> Result<FormBody> {
    let body = FormBody::new()
        .account(account)
        .opt_field("client_id", filter.client_id)
        .flag("include_deleted", filter.include_deleted);
    let body = with_ids(body, "campaign_ids", &filter.campaign_ids)?;
    let body = with_ids(body, "ad_ids", &filter.ad_ids)?;
    Ok(body
        .opt_field("limit", filter.limit)
        .opt_field("offset", filter.offset))
}

fn stats_body(account: &Account, query: &StatsQuery) -> Result<FormBody> {
    Ok(FormBody::new()
        .account(account)
        .field("ids_type", query.ids_type.as_str())
        .json_field("ids", &query.ids)?
        .field("period", query.period.as_str())
        .field("date_from", &query.date_from)
        .field("date_to", &query.date_to))
}
