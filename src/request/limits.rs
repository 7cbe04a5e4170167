//! Batch ceilings of the mutation methods.
//!
//! The API rejects oversized batches on its own; checking locally fails the
//! call before anything is sent.

use crate::error_code::ERROR_INVALID_INPUT;
use crate::{Error, ErrorContext, Result};

pub const BATCH_LIMITS: &[(&str, usize)] = &[
    ("ads.createClients", 50),
    ("ads.updateClients", 50),
    ("ads.deleteClients", 10),
    ("ads.createCampaigns", 50),
    ("ads.updateCampaigns", 50),
    ("ads.deleteCampaigns", 100),
    ("ads.createAds", 5),
    ("ads.updateAds", 5),
    ("ads.deleteAds", 100),
];

/// Maximum number of items `method` accepts per call, if it is a batch method.
pub fn batch_limit(method: &str) -> Option<usize> {
    BATCH_LIMITS
        .iter()
        .find(|(name, _)| *name == method)
        .map(|(_, max)| *max)
}

/// Fails with [`Error::InvalidParameter`] when `len` exceeds the method's ceiling.
pub fn ensure_batch_size(method: &str, field: &str, len: usize) -> Result<()> {
    let Some(max) = batch_limit(method) else {
        return Ok(());
    };
    if len > max {
        return Err(Error::invalid_parameter_with_context(
            ERROR_INVALID_INPUT,
            format!("{} accepts at most {} items per call, got {}", method, max, len),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(format!("max {}", max))
                .with_source(method),
        ));
    }
    Ok(())
}
