use thiserror::Error;

/// Errors raised by the wilayah.id client.
///
/// `Request` and `Status` are request errors (the remote could not be
/// reached or refused the path). `Parse` means the body came back but was
/// not a well-formed region envelope. A record that is simply absent from a
/// listing is never an error; lookups return `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum WilayahError {
    #[error("Failed to fetch data from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("wilayah.id returned HTTP {status} for {url}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to parse JSON response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WilayahError {
    /// Network failure, timeout, or a non-2xx response.
    pub fn is_request_error(&self) -> bool {
        matches!(self, WilayahError::Request { .. } | WilayahError::Status { .. })
    }

    /// The response body was not a valid envelope.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, WilayahError::Parse { .. })
    }

    /// HTTP status of the failed request, when the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            WilayahError::Status { status, .. } => Some(*status),
            WilayahError::Request { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WilayahError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_request_error() {
        let err = WilayahError::Status {
            url: "https://wilayah.id/api/regencies/999999.json".to_string(),
            status: 404,
            body: "Not Found".to_string(),
        };
        assert!(err.is_request_error());
        assert!(!err.is_parse_error());
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn test_parse_error_classification() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = WilayahError::Parse {
            url: "https://wilayah.id/api/provinces.json".to_string(),
            source,
        };
        assert!(err.is_parse_error());
        assert!(!err.is_request_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_error_is_neither_kind() {
        let err = WilayahError::Config("WILAYAH_TIMEOUT_SECS must be a valid number".into());
        assert!(!err.is_request_error());
        assert!(!err.is_parse_error());
    }
}
