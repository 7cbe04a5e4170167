//! VK Ads client.
//!
//! Keep the public surface small and predictable. The client itself and the
//! raw call path live in `core`; typed operations are grouped by API section.

mod ads;
pub mod builder;
pub mod core;
pub mod error_classification;
mod lookups;

pub use builder::VkClientBuilder;
pub use self::core::{Exchange, VkClient};
pub use error_classification::{classify_envelope, parse_error, ItemError};
