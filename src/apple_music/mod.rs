/// Apple Music API integration module
///
/// This module provides the two halves of catalog access, composed
/// sequentially:
///
/// 1. Developer token issuance signs an ES256 JWT from a MusicKit private
///    key (`token`)
/// 2. The catalog client presents that token as a Bearer credential on
///    storefront-scoped search and lookup requests (`client`)
///
/// The issuer has no dependency on the client; the client only ever sees
/// the finished token string.
pub mod client;
pub mod token;
pub mod types;

pub use client::{AppleMusicClient, ClientConfig};
pub use token::{generate_developer_token, DeveloperTokenClaims};
pub use types::{AppleMusicError, ResourceKind};
