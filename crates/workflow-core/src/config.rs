//! Engine configuration
//!
//! Settings that tune graph handling without changing the node catalog.
//! Loaded from a JSON file, then optionally overridden from the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::connection::ConnectionRules;
use crate::error::{Result, WorkflowError};
use crate::ordering::CyclePolicy;

/// Environment variable overriding `cyclePolicy`
pub const ENV_CYCLE_POLICY: &str = "WORKFLOW_CYCLE_POLICY";
/// Environment variable overriding `enforcePortUniqueness`
pub const ENV_ENFORCE_PORT_UNIQUENESS: &str = "WORKFLOW_ENFORCE_PORT_UNIQUENESS";

/// Default offset applied when a node is cloned
pub const DEFAULT_CLONE_OFFSET: (f64, f64) = (20.0, 20.0);

/// Graph handling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// What execution ordering does with cycles
    pub cycle_policy: CyclePolicy,
    /// Refuse a second connection into an occupied join port
    pub enforce_port_uniqueness: bool,
    /// Position shift for cloned nodes
    pub clone_offset: (f64, f64),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cycle_policy: CyclePolicy::default(),
            enforce_port_uniqueness: true,
            clone_offset: DEFAULT_CLONE_OFFSET,
        }
    }
}

impl EngineConfig {
    /// Parse configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from disk
    ///
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No engine config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!("Engine configuration loaded from {:?}", path);
        Ok(config)
    }

    /// Save configuration to disk as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Engine configuration saved to {:?}", path);
        Ok(())
    }

    /// Apply `WORKFLOW_*` environment overrides
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_CYCLE_POLICY) {
            self.cycle_policy = value.parse()?;
            log::debug!("{} override: {:?}", ENV_CYCLE_POLICY, self.cycle_policy);
        }
        if let Some(value) = lookup(ENV_ENFORCE_PORT_UNIQUENESS) {
            self.enforce_port_uniqueness = parse_flag(ENV_ENFORCE_PORT_UNIQUENESS, &value)?;
            log::debug!(
                "{} override: {}",
                ENV_ENFORCE_PORT_UNIQUENESS,
                self.enforce_port_uniqueness
            );
        }
        Ok(self)
    }

    /// Connection rules derived from these settings
    pub fn connection_rules(&self) -> ConnectionRules {
        ConnectionRules {
            enforce_port_uniqueness: self.enforce_port_uniqueness,
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WorkflowError::InvalidConfig(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
