use std::fmt;

/// Apple Music SDK error type
///
/// Represents all possible errors that can occur when issuing developer
/// tokens or interacting with the Apple Music API.
#[derive(Debug)]
pub enum AppleMusicError {
    /// Malformed or missing input, detected before any network or signing
    /// operation
    InvalidArgument(String),
    /// Developer token issuance failed due to bad key material
    Signing(String),
    /// Network or timeout failure, no response obtained
    Transport(String),
    /// A response was obtained but its status indicates failure
    Upstream { status: u16, body: String },
    /// Response body could not be parsed as JSON
    Decode(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for AppleMusicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppleMusicError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            AppleMusicError::Signing(msg) => write!(f, "Token signing failed: {}", msg),
            AppleMusicError::Transport(msg) => write!(f, "Transport error: {}", msg),
            AppleMusicError::Upstream { status, body } => {
                write!(f, "HTTP {} error: {}", status, body)
            }
            AppleMusicError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppleMusicError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppleMusicError {}

impl From<reqwest::Error> for AppleMusicError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppleMusicError::Transport("Request timeout".to_string())
        } else if err.is_connect() {
            AppleMusicError::Transport(format!("Connection failed: {}", err))
        } else if let Some(status) = err.status() {
            AppleMusicError::Upstream {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            AppleMusicError::Transport(err.to_string())
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppleMusicError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppleMusicError::Signing(err.to_string())
    }
}

/// Catalog resource kinds addressable by identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Songs,
    Albums,
    Artists,
    Playlists,
}

impl ResourceKind {
    /// URL path segment for this resource kind
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Songs => "songs",
            ResourceKind::Albums => "albums",
            ResourceKind::Artists => "artists",
            ResourceKind::Playlists => "playlists",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_path_segments() {
        assert_eq!(ResourceKind::Songs.path_segment(), "songs");
        assert_eq!(ResourceKind::Albums.path_segment(), "albums");
        assert_eq!(ResourceKind::Artists.path_segment(), "artists");
        assert_eq!(ResourceKind::Playlists.path_segment(), "playlists");
    }

    #[test]
    fn test_upstream_error_display_includes_status_and_body() {
        let err = AppleMusicError::Upstream {
            status: 404,
            body: "Resource Not Found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Resource Not Found"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = AppleMusicError::InvalidArgument("term must not be empty".to_string());
        assert!(err.to_string().contains("term must not be empty"));
    }
}
