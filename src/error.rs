use thiserror::Error;

/// Failures an import can surface to the caller.
///
/// The messages are deliberately generic: status codes and transport
/// details are logged server-side but never returned over the boundary.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The request carried no `url` field
    #[error("URL is required")]
    MissingUrl,

    /// The upstream fetch returned a non-2xx status or the transport failed
    #[error("Failed to fetch page")]
    Fetch,

    /// The parse/extract stage failed unexpectedly
    #[error("Failed to parse page")]
    Parse,
}

impl ImportError {
    /// Unified status-code policy for callers that embed the importer
    /// behind an HTTP endpoint: bad input 400, upstream failure 502,
    /// internal parse failure 500.
    pub fn http_status(&self) -> u16 {
        match self {
            ImportError::MissingUrl => 400,
            ImportError::Fetch => 502,
            ImportError::Parse => 500,
        }
    }
}
