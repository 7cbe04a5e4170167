//! # vk-ads-client
//!
//! Typed async client for the VK Ads HTTP API.
//!
//! ## Overview
//!
//! Every operation posts a flat form body to `https://api.vk.com/method/<name>`
//! and gets back a JSON envelope whose shape varies: a single object, an array
//! of per-item results, a batch where some items failed, or a top-level error.
//! The client turns that envelope into either a list of [`ClientResponse`]
//! records or one typed [`Error`].
//!
//! - Top-level errors are classified by code into flood control, access
//!   failures and generic API errors (see [`error_code`]).
//! - Item-level errors inside a batch are data: inspect
//!   [`ClientResponse::is_error`] on each record.
//! - Batch mutations refuse oversized batches before sending anything.
//!
//! Retries, rate limiting and token acquisition are left to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vk_ads_client::{Account, VkClient};
//!
//! #[tokio::main]
//! async fn main() -> vk_ads_client::Result<()> {
//!     let client = VkClient::builder().api_version("5.131").build()?;
//!     let account = Account::new(1_900_000_000, "access-token");
//!
//!     for record in client.get_campaigns(&account, None, false, &[]).await? {
//!         if record.is_error() {
//!             eprintln!("item failed: {} {}", record.error_code(), record.error());
//!         } else {
//!             println!("{}", record.content());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, typed operations and envelope classification |
//! | [`error_code`] | VK error code tables and categories |
//! | [`request`] | Form body assembly, batch limits, criteria normalization |
//! | [`transport`] | Transport trait, HTTP and mock implementations |
//! | [`config`] | Client configuration from defaults, env or YAML |
//! | [`types`] | Call outcomes and endpoint parameters |

pub mod client;
pub mod codec;
pub mod config;
pub mod error_code;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{Exchange, VkClient, VkClientBuilder};
pub use config::ClientConfig;
pub use error_code::ErrorCategory;
pub use types::{Account, ClientResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
