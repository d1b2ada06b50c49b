use serde::{Deserialize, Serialize};

use crate::core::{AxisConfig, LabelStrategy};
use crate::error::{AxisError, AxisResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load axis
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisEngineConfig {
    #[serde(default)]
    pub axis: AxisConfig,
    #[serde(default)]
    pub label_strategy: LabelStrategy,
    /// Days in the charted month; 0 disables calendar-aware thinning and
    /// filler padding.
    #[serde(default)]
    pub calendar_length: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for AxisEngineConfig {
    fn default() -> Self {
        Self {
            axis: AxisConfig::default(),
            label_strategy: LabelStrategy::default(),
            calendar_length: 0,
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_owned()
}

impl AxisEngineConfig {
    /// Creates a minimal config with default axis and label behavior.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_label_strategy(mut self, strategy: LabelStrategy) -> Self {
        self.label_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_calendar_length(mut self, calendar_length: u32) -> Self {
        self.calendar_length = calendar_length;
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn validate(self) -> AxisResult<Self> {
        self.axis.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse config: {e}")))
    }
}
