//! # Types Module
//!
//! Strongly-typed call outcomes and endpoint parameters.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ClientResponse`] | One per-item outcome of a call |
//! | [`Account`] | Ads cabinet id with the caller's access token |
//! | [`AdsFilter`] | Filter of the `ads.getAds*` family |
//! | [`StatsQuery`] | Statistics and demographics query |
//! | [`TargetingQuery`] | Audience estimate query |
//!
//! ## Example
//!
//! ```rust
//! use vk_ads_client::types::{AdsFilter, ClientResponse};
//!
//! let filter = AdsFilter::new().client_id(42).campaign_ids(vec![1, 2]).limit(50);
//! assert_eq!(filter.campaign_ids.len(), 2);
//!
//! let record = ClientResponse::success(200, serde_json::json!({"id": 1}));
//! assert!(!record.is_error());
//! ```

pub mod params;
pub mod response;

pub use params::{
    Account, AdsFilter, CampaignStatus, CampaignStatusUpdate, ClientLimitUpdate, ClientSpec,
    IdsType, Page, Period, StatsQuery, TargetingQuery,
};
pub use response::ClientResponse;
