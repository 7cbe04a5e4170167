//! # Request Assembly
//!
//! Every API call is a `POST` of a flat `x-www-form-urlencoded` body to
//! `<base_url><method>`. Composite parameters (id lists, batch items, targeting
//! criteria) travel as JSON strings inside that flat body.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`limits`] | Per-method batch ceilings, checked before any network access |
//! | [`criteria`] | Normalization of targeting criteria (ages, birthday flags) |

pub mod criteria;
pub mod limits;

pub use criteria::prepare_criteria;
pub use limits::{batch_limit, ensure_batch_size};

use crate::types::Account;
use crate::{codec, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use uuid::Uuid;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Flat key/value body of one call, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn field(mut self, key: &str, value: impl Display) -> Self {
        self.insert(key, value.to_string());
        self
    }

    /// Adds the field only when a value is present.
    pub fn opt_field<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    /// Booleans travel as `1` / `0`.
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.field(key, if value { 1 } else { 0 })
    }

    /// Serializes `value` to JSON and stores it as one string field.
    pub fn json_field<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Result<Self> {
        let encoded = codec::encode(value)?;
        self.insert(key, encoded);
        Ok(self)
    }

    pub fn account(self, account: &Account) -> Self {
        self.field("account_id", account.account_id)
            .field("access_token", &account.access_token)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `application/x-www-form-urlencoded` rendering of the body.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

/// One outgoing call, as handed to the [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Correlation id, also sent as `x-request-id`.
    pub id: String,
    /// API method name, e.g. `ads.getCampaigns`; the transport maps it to a URL path.
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: FormBody,
}

impl ApiRequest {
    pub fn post(method: impl Into<String>, body: FormBody) -> Self {
        Self::with_headers(method, body, BTreeMap::new())
    }

    /// Builds a request with caller headers; the form content type always wins.
    pub fn with_headers(
        method: impl Into<String>,
        body: FormBody,
        mut headers: BTreeMap<String, String>,
    ) -> Self {
        headers.retain(|k, _| !k.eq_ignore_ascii_case("content-type"));
        headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());
        Self {
            id: Uuid::new_v4().to_string(),
            method: method.into(),
            headers,
            body,
        }
    }

    pub fn http_method(&self) -> &'static str {
        "POST"
    }
}
