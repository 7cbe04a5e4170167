//! Reference lookups: communities and the geo database.

use crate::client::core::VkClient;
use crate::request::FormBody;
use crate::types::{ClientResponse, Page};
use crate::Result;

impl VkClient {
    /// Community by id or screen name, with member count and screen name.
    pub async fn get_group(&self, group: &str) -> Result<Vec<ClientResponse>> {
        let body = FormBody::new()
            .field("group_id", group)
            .field("fields", "members_count,screen_name");
        self.call("groups.getById", body).await
    }

    /// Countries, either the short default list or all (`need_all`).
    /// `code` restricts to comma-separated ISO 3166-1 alpha-2 codes.
    pub async fn get_countries(
        &self,
        need_all: bool,
        code: Option<&str>,
        page: Page,
        lang: Option<&str>,
    ) -> Result<Vec<ClientResponse>> {
        let body = FormBody::new()
            .flag("need_all", need_all)
            .opt_field("code", code);
        self.call("database.getCountries", paged(body, page, lang)).await
    }

    pub async fn get_regions(
        &self,
        country_id: i64,
        q: Option<&str>,
        page: Page,
        lang: Option<&str>,
    ) -> Result<Vec<ClientResponse>> {
        let body = FormBody::new()
            .field("country_id", country_id)
            .opt_field("q", q);
        self.call("database.getRegions", paged(body, page, lang)).await
    }

    pub async fn get_cities(
        &self,
        country_id: i64,
        region_id: Option<i64>,
        q: Option<&str>,
        need_all: bool,
        page: Page,
        lang: Option<&str>,
    ) -> Result<Vec<ClientResponse>> {
        let body = FormBody::new()
            .field("country_id", country_id)
            .opt_field("region_id", region_id)
            .opt_field("q", q)
            .flag("need_all", need_all);
        self.call("database.getCities", paged(body, page, lang)).await
    }
}

fn paged(body: FormBody, page: Page, lang: Option<&str>) -> FormBody {
    body.opt_field("offset", page.offset)
        .opt_field("count", page.count)
        .opt_field("lang", lang)
}
