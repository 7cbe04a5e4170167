//! VK API error codes and their classification.
//!
//! The remote API reports failures as integer codes, either in a top-level
//! `error` object or per item inside a `response` array. This module keeps the
//! code tables as data and exposes a single pure classification function.
//!
//! ## Categories
//!
//! | Category | Codes                  | Description                                  |
//! |----------|------------------------|----------------------------------------------|
//! | Flood    | 6, 9, 601              | Caller is rate limited; back off and retry   |
//! | Access   | 2, 4, 5, 101, 600      | Authorization or permission failure          |
//! | Partial  | 602, 603               | Batch call with mixed per-item results       |
//! | Generic  | any other non-zero     | Any other platform failure                   |
//!
//! ## Example
//!
//! ```rust
//! use vk_ads_client::error_code::ErrorCategory;
//!
//! assert_eq!(ErrorCategory::classify(9), Some(ErrorCategory::Flood));
//! assert_eq!(ErrorCategory::classify(0), None);
//! assert_eq!(ErrorCategory::classify(15), Some(ErrorCategory::Generic));
//! ```

use std::fmt;

/// Batch request was only partially completed.
pub const STATUS_PARTIAL_DONE: i64 = 602;
/// Batch request was not completed at all.
pub const STATUS_NOT_DONE: i64 = 603;
/// Client-side validation failure (e.g. too many items in a batch).
pub const ERROR_INVALID_INPUT: i64 = 100;
/// Code used when the failure has no platform code of its own.
pub const ERROR_UNKNOWN: i64 = -100;

pub const FLOOD_CODES: &[i64] = &[6, 9, 601];
pub const ACCESS_CODES: &[i64] = &[2, 4, 5, 101, 600];
pub const PARTIAL_CODES: &[i64] = &[STATUS_PARTIAL_DONE, STATUS_NOT_DONE];

/// Category of a non-zero VK error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Too many requests; the caller decides how to back off.
    Flood,
    /// Invalid token, missing permission or disabled account.
    Access,
    /// The batch went through with per-item failures.
    Partial,
    /// Anything else.
    Generic,
}

impl ErrorCategory {
    /// Classifies a platform error code.
    ///
    /// Returns `None` for `0`, which means "no error" and has no category.
    pub fn classify(code: i64) -> Option<Self> {
        if code == 0 {
            return None;
        }
        let category = if FLOOD_CODES.contains(&code) {
            Self::Flood
        } else if ACCESS_CODES.contains(&code) {
            Self::Access
        } else if PARTIAL_CODES.contains(&code) {
            Self::Partial
        } else {
            Self::Generic
        };
        Some(category)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Access => "access",
            Self::Partial => "partial",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
