//! Agent profile: the static description of an agent that drives the
//! updater through its tools.

use wall_updater_sdk::WallUpdaterError;

use crate::tools::{ToolDescriptor, all_tools};

pub const SUPPORTED_PROVIDERS: &[&str] = &["openai"];

pub const SURFACE_CHAT_V1_NAME: &str = "SurfaceChatAgentV1";
pub const SURFACE_CHAT_V1_MODEL: &str = "gpt-5-2025-08-07";

const SURFACE_CHAT_V1_INSTRUCTIONS: &str = "You are a friendly and helpful assistant aiding \
users in updating and understanding their existing padlets. Call update_padlet at most once \
per user request and include only the fields relevant to the requested change. Use \
search_helpdocs for questions about padlet features.";

/// Validated agent configuration.
#[derive(Debug, Clone)]
pub struct AgentProfile {
    provider: String,
    model: String,
    name: String,
    instructions: String,
    tools: Vec<ToolDescriptor>,
}

impl AgentProfile {
    /// # Errors
    /// Returns [`WallUpdaterError::Config`] if the provider is not supported
    /// or any of model, name or instructions is blank.
    pub fn new(
        provider: impl Into<String>,
        model: impl Into<String>,
        name: impl Into<String>,
        instructions: impl Into<String>,
        tools: Vec<ToolDescriptor>,
    ) -> Result<Self, WallUpdaterError> {
        let profile = Self {
            provider: provider.into(),
            model: model.into(),
            name: name.into(),
            instructions: instructions.into(),
            tools,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// The chat agent that edits the wall it is opened on.
    ///
    /// # Errors
    /// Never in practice; see [`new`](Self::new).
    pub fn surface_chat_v1() -> Result<Self, WallUpdaterError> {
        Self::new(
            "openai",
            SURFACE_CHAT_V1_MODEL,
            SURFACE_CHAT_V1_NAME,
            SURFACE_CHAT_V1_INSTRUCTIONS,
            all_tools(),
        )
    }

    fn validate(&self) -> Result<(), WallUpdaterError> {
        if self.name.trim().is_empty() {
            return Err(WallUpdaterError::config("agent profile must define a name"));
        }
        let name = &self.name;
        if self.provider.trim().is_empty() {
            return Err(WallUpdaterError::config(format!(
                "{name} must define a provider"
            )));
        }
        if !SUPPORTED_PROVIDERS.contains(&self.provider.as_str()) {
            return Err(WallUpdaterError::config(format!(
                "{name} must define a supported provider: {SUPPORTED_PROVIDERS:?}"
            )));
        }
        if self.model.trim().is_empty() {
            return Err(WallUpdaterError::config(format!("{name} must define a model")));
        }
        if self.instructions.trim().is_empty() {
            return Err(WallUpdaterError::config(format!(
                "{name} must define instructions"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[must_use]
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn surface_chat_v1_is_valid() {
        let profile = AgentProfile::surface_chat_v1().unwrap();
        assert_eq!(profile.provider(), "openai");
        assert_eq!(profile.model(), SURFACE_CHAT_V1_MODEL);
        assert_eq!(profile.name(), "SurfaceChatAgentV1");
        assert_eq!(profile.tools().len(), 2);
    }

    #[test]
    fn rejects_unsupported_provider() {
        let err = AgentProfile::new("acme", "m", "A", "do things", vec![]).unwrap_err();
        assert!(matches!(err, WallUpdaterError::Config { ref message } if message.contains("supported provider")));
    }

    #[test]
    fn rejects_blank_fields() {
        for (provider, model, name, instructions) in [
            ("", "m", "A", "i"),
            ("openai", " ", "A", "i"),
            ("openai", "m", "", "i"),
            ("openai", "m", "A", ""),
        ] {
            let result = AgentProfile::new(provider, model, name, instructions, vec![]);
            assert!(
                matches!(result, Err(WallUpdaterError::Config { .. })),
                "expected config error for {provider:?}/{model:?}/{name:?}/{instructions:?}"
            );
        }
    }
}
