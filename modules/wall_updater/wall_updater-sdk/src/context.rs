//! Per-call context supplied by the invoking agent runtime.
//!
//! The runtime hands every tool invocation a run configuration and an
//! optional context object. Either may carry the caller's credential. The
//! updater receives this context explicitly and only reads from it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key under which the caller's wall-service token is stored.
pub const PADLET_TOKEN_KEY: &str = "padlet_token";

/// Read access to the two credential-bearing slots of a call context.
///
/// Implementations return `None` for anything that is missing or not
/// shaped like a key/value section. Lookups never fail.
pub trait CallContextAccessor: Send + Sync {
    /// Value of `key` inside the run configuration's `configurable` section.
    fn configurable(&self, key: &str) -> Option<&Value>;

    /// Value of `key` inside the separate context slot.
    fn context(&self, key: &str) -> Option<&Value>;
}

/// Call context as delivered by the runtime: raw JSON for the run config and
/// the context slot.
///
/// `Debug` lists key names only so tokens never reach the logs.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallContext {
    #[serde(default)]
    config: Value,
    #[serde(default)]
    context: Value,
}

impl CallContext {
    /// An empty context with no config and no context slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the run configuration.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }

    /// Replace the context slot.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }

    /// Store `token` under `configurable.padlet_token`, creating the
    /// sections as needed. A non-object config is replaced.
    #[must_use]
    pub fn with_configurable_token(mut self, token: impl Into<String>) -> Self {
        if !self.config.is_object() {
            self.config = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(config) = &mut self.config {
            let section = config
                .entry("configurable")
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            if !section.is_object() {
                *section = Value::Object(serde_json::Map::new());
            }
            if let Value::Object(section) = section {
                section.insert(PADLET_TOKEN_KEY.to_owned(), Value::String(token.into()));
            }
        }
        self
    }
}

impl CallContextAccessor for CallContext {
    fn configurable(&self, key: &str) -> Option<&Value> {
        self.config.get("configurable")?.get(key)
    }

    fn context(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}

fn key_names(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

impl fmt::Debug for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let configurable_keys = self
            .config
            .get("configurable")
            .map(key_names)
            .unwrap_or_default();
        f.debug_struct("CallContext")
            .field("config_keys", &key_names(&self.config))
            .field("configurable_keys", &configurable_keys)
            .field("context_keys", &key_names(&self.context))
            .finish()
    }
}
