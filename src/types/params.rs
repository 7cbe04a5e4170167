//! Typed parameters of the ads and database endpoints.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Ads cabinet the call operates on, with the caller's access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: i64,
    pub access_token: String,
}

impl Account {
    pub fn new(account_id: i64, access_token: impl Into<String>) -> Self {
        Self {
            account_id,
            access_token: access_token.into(),
        }
    }
}

/// Campaign state accepted by `ads.updateCampaigns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Stopped,
    Running,
    Deleted,
}

impl CampaignStatus {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Stopped => 0,
            Self::Running => 1,
            Self::Deleted => 2,
        }
    }
}

impl Serialize for CampaignStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// One item of an `ads.updateCampaigns` status batch.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignStatusUpdate {
    pub campaign_id: i64,
    pub status: CampaignStatus,
}

/// One item of an `ads.updateClients` batch that only changes the total limit.
#[derive(Debug, Clone, Serialize)]
pub struct ClientLimitUpdate {
    pub client_id: i64,
    pub all_limit: f64,
}

/// Agency client to create with `ads.createClients`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_limit: Option<i64>,
}

/// Filter shared by `ads.getAds`, `ads.getAdsLayout` and `ads.getAdsTargeting`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdsFilter {
    pub client_id: Option<i64>,
    pub include_deleted: bool,
    pub campaign_ids: Vec<i64>,
    pub ad_ids: Vec<i64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl AdsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }

    pub fn campaign_ids(mut self, ids: Vec<i64>) -> Self {
        self.campaign_ids = ids;
        self
    }

    pub fn ad_ids(mut self, ids: Vec<i64>) -> Self {
        self.ad_ids = ids;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Object type the statistics ids refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdsType {
    Office,
    Client,
    Campaign,
    Ad,
}

impl IdsType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Client => "client",
            Self::Campaign => "campaign",
            Self::Ad => "ad",
        }
    }
}

/// Aggregation period of statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
    Overall,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Overall => "overall",
        }
    }
}

/// Query of `ads.getStatistics` and `ads.getDemographics`.
///
/// `date_from`/`date_to` use the format the period requires
/// (`YYYY-MM-DD` for days, `YYYY-MM` for months, `0` for overall).
#[derive(Debug, Clone, PartialEq)]
pub struct StatsQuery {
    pub ids_type: IdsType,
    pub ids: Vec<i64>,
    pub period: Period,
    pub date_from: String,
    pub date_to: String,
}

/// Query of `ads.getTargetingStats`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetingQuery {
    /// Targeting criteria; normalized with
    /// [`prepare_criteria`](crate::request::prepare_criteria) before sending.
    pub criteria: Map<String, Value>,
    pub ad_id: Option<i64>,
    pub ad_format: Option<i64>,
    pub ad_platform: Option<String>,
    pub link_url: String,
    pub link_domain: Option<String>,
}

/// Paging of the database endpoints. Absent fields fall back to the API defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: Option<u32>,
    pub count: Option<u32>,
}

impl Page {
    pub fn new(offset: u32, count: u32) -> Self {
        Self {
            offset: Some(offset),
            count: Some(count),
        }
    }
}
