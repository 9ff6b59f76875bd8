//! Tool registry exposed to the hosting runtime
//!
//! The host dispatch layer invokes named operations with a JSON object of
//! arguments and expects a JSON value or a structured error back. The
//! mapping from operation name to handler is built once at registry
//! construction; nothing here is global or mutable afterwards.

use std::collections::HashMap;

use serde_json::Value;

use crate::apple_music::client::{AppleMusicClient, DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_TYPES};
use crate::apple_music::types::AppleMusicError;

type ToolHandler = fn(&AppleMusicClient, &Value) -> Result<Value, AppleMusicError>;

/// Named catalog operations backed by one shared client
pub struct ToolRegistry {
    client: AppleMusicClient,
    handlers: HashMap<&'static str, ToolHandler>,
}

impl ToolRegistry {
    /// Build the registry with all catalog tools registered
    pub fn new(client: AppleMusicClient) -> Self {
        let mut handlers: HashMap<&'static str, ToolHandler> = HashMap::new();
        handlers.insert("search_catalog", search_catalog);
        handlers.insert("get_song", get_song);
        handlers.insert("get_album", get_album);
        handlers.insert("get_artist", get_artist);
        handlers.insert("get_playlist", get_playlist);

        Self { client, handlers }
    }

    /// Names of all registered tools, sorted for stable listings
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Invoke a tool by name with a JSON object of arguments
    ///
    /// Unknown names and malformed arguments fail with an invalid-argument
    /// error before any request goes out. Everything else is whatever the
    /// underlying catalog operation returns.
    pub fn invoke(&self, name: &str, arguments: &Value) -> Result<Value, AppleMusicError> {
        let handler = self.handlers.get(name).ok_or_else(|| {
            AppleMusicError::InvalidArgument(format!("unknown tool: {}", name))
        })?;
        tracing::debug!("Invoking tool: {}", name);
        handler(&self.client, arguments)
    }
}

fn search_catalog(client: &AppleMusicClient, args: &Value) -> Result<Value, AppleMusicError> {
    let term = required_str(args, "term")?;
    let types = optional_str(args, "types")?.unwrap_or(DEFAULT_SEARCH_TYPES);
    let limit = optional_u32(args, "limit")?.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let offset = optional_u32(args, "offset")?.unwrap_or(0);
    client.search_catalog(term, types, limit, offset)
}

fn get_song(client: &AppleMusicClient, args: &Value) -> Result<Value, AppleMusicError> {
    client.get_song(required_str(args, "id")?)
}

fn get_album(client: &AppleMusicClient, args: &Value) -> Result<Value, AppleMusicError> {
    client.get_album(required_str(args, "id")?)
}

fn get_artist(client: &AppleMusicClient, args: &Value) -> Result<Value, AppleMusicError> {
    client.get_artist(required_str(args, "id")?)
}

fn get_playlist(client: &AppleMusicClient, args: &Value) -> Result<Value, AppleMusicError> {
    client.get_playlist(required_str(args, "id")?)
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, AppleMusicError> {
    match args.get(key) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(AppleMusicError::InvalidArgument(format!(
            "argument '{}' must be a string",
            key
        ))),
        None => Err(AppleMusicError::InvalidArgument(format!(
            "missing required argument '{}'",
            key
        ))),
    }
}

fn optional_str<'a>(args: &'a Value, key: &str) -> Result<Option<&'a str>, AppleMusicError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(AppleMusicError::InvalidArgument(format!(
            "argument '{}' must be a string",
            key
        ))),
    }
}

fn optional_u32(args: &Value, key: &str) -> Result<Option<u32>, AppleMusicError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let number = value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    AppleMusicError::InvalidArgument(format!(
                        "argument '{}' must be a non-negative integer",
                        key
                    ))
                })?;
            Ok(Some(number))
        }
    }
}
