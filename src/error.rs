use crate::error_code::ERROR_UNKNOWN;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Request field or configuration key that caused the error (e.g., "data", "base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the limit that was exceeded)
    pub details: Option<String>,
    /// Source of the error (e.g., "ads.createClients", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Category of an [`Error`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Flood,
    Access,
    Api,
    BadResponseContent,
    Connect,
    InvalidParameter,
    Configuration,
}

/// Unified error type of the client.
///
/// Transport and codec failures are converted into these variants at their
/// boundary, so callers only ever match on this enum.
#[derive(Debug, Error)]
pub enum Error {
    /// Top-level error with a flood-control code.
    #[error("Flood control (code {code}): {message}")]
    Flood { code: i64, message: String },

    /// Top-level error with an authorization code.
    #[error("Access denied (code {code}): {message}")]
    Access { code: i64, message: String },

    /// Any other top-level platform error, or an envelope of unknown shape.
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    #[error("Bad response content (code {code}): {message}")]
    BadResponseContent { code: i64, message: String },

    #[error("Connection error (code {code}): {message}")]
    Connect { code: i64, message: String },

    #[error("Invalid parameter (code {code}): {message}{}", format_context(.context))]
    InvalidParameter {
        code: i64,
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn flood(code: i64, msg: impl Into<String>) -> Self {
        Error::Flood {
            code,
            message: msg.into(),
        }
    }

    pub fn access(code: i64, msg: impl Into<String>) -> Self {
        Error::Access {
            code,
            message: msg.into(),
        }
    }

    pub fn api(code: i64, msg: impl Into<String>) -> Self {
        Error::Api {
            code,
            message: msg.into(),
        }
    }

    /// Undecodable body or unencodable parameters; always carries [`ERROR_UNKNOWN`].
    pub fn bad_response_content(msg: impl Into<String>) -> Self {
        Error::BadResponseContent {
            code: ERROR_UNKNOWN,
            message: msg.into(),
        }
    }

    pub fn connect(code: i64, msg: impl Into<String>) -> Self {
        Error::Connect {
            code,
            message: msg.into(),
        }
    }

    /// Create a new invalid-parameter error with structured context
    pub fn invalid_parameter_with_context(
        code: i64,
        msg: impl Into<String>,
        context: ErrorContext,
    ) -> Self {
        Error::InvalidParameter {
            code,
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Flood { .. } => ErrorKind::Flood,
            Error::Access { .. } => ErrorKind::Access,
            Error::Api { .. } => ErrorKind::Api,
            Error::BadResponseContent { .. } => ErrorKind::BadResponseContent,
            Error::Connect { .. } => ErrorKind::Connect,
            Error::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Error::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// Numeric code: the platform code for API errors, a local code otherwise.
    pub fn code(&self) -> i64 {
        match self {
            Error::Flood { code, .. }
            | Error::Access { code, .. }
            | Error::Api { code, .. }
            | Error::BadResponseContent { code, .. }
            | Error::Connect { code, .. }
            | Error::InvalidParameter { code, .. } => *code,
            Error::Configuration { .. } => ERROR_UNKNOWN,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Flood { message, .. }
            | Error::Access { message, .. }
            | Error::Api { message, .. }
            | Error::BadResponseContent { message, .. }
            | Error::Connect { message, .. }
            | Error::InvalidParameter { message, .. }
            | Error::Configuration { message, .. } => message,
        }
    }

    /// Only flood-control errors go away by waiting.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Flood { .. })
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidParameter { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}
