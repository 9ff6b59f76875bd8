//! Apple Music SDK
//!
//! A Rust library for read-only access to the Apple Music catalog API.
//!
//! This SDK provides:
//! - Developer token issuance (ES256-signed JWT from a MusicKit `.p8` key)
//! - A blocking catalog client for search and song/album/artist/playlist
//!   lookups, scoped to one storefront
//! - A tool registry mapping operation names to handlers for an agent
//!   dispatch layer
//! - Environment-driven configuration with on-demand token issuance
//!
//! # Example
//!
//! ```no_run
//! use applemusic_sdk::{AppleMusicClient, Config, ToolRegistry};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load credentials (APPLE_MUSIC_DEVELOPER_TOKEN, or team id, key id and
//! // private key to issue a token on the spot).
//! let config = Config::from_env();
//! let client = AppleMusicClient::new(config.client_config()?)?;
//!
//! // Direct calls...
//! let results = client.search_catalog("Thriller", "albums", 1, 0)?;
//! println!("{}", results);
//!
//! // ...or through the named-operation registry used by a tool host.
//! let registry = ToolRegistry::new(client);
//! let song = registry.invoke("get_song", &json!({"id": "900032829"}))?;
//! println!("{}", song);
//! # Ok(())
//! # }
//! ```

pub mod apple_music;
pub mod config;
pub mod tools;

// Re-export commonly used types and functions
pub use apple_music::{
    client::{
        AppleMusicClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_SEARCH_LIMIT,
        DEFAULT_SEARCH_TYPES, DEFAULT_STOREFRONT, DEFAULT_TIMEOUT,
    },
    token::{generate_developer_token, DeveloperTokenClaims, DEFAULT_TOKEN_LIFETIME_SECS},
    types::{AppleMusicError, ResourceKind},
};
pub use config::Config;
pub use tools::ToolRegistry;
