//! Configuration management
//!
//! This module handles loading, validation, and merging of platform
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::core::models::Role;
use crate::utils::error::{PlatformError, Result};

/// Main configuration struct for the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Access-control configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PlatformError::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PlatformError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.access.admin_roles.is_empty() {
            return Err(PlatformError::config(
                "at least one admin role must be configured",
            ));
        }
        Ok(())
    }
}

/// Access-control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Enable feature gating; when disabled every registered feature is
    /// visible to every role (development mode)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Role assigned to accounts created without an explicit role
    #[serde(default = "default_role")]
    pub default_role: Role,
    /// Roles treated as administrators
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<Role>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            default_role: default_role(),
            admin_roles: default_admin_roles(),
        }
    }
}

impl AccessConfig {
    /// Merge access configurations, the other side taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.enabled = other.enabled;
        self.default_role = other.default_role;
        if !other.admin_roles.is_empty() {
            self.admin_roles = other.admin_roles;
        }
        self
    }
}

fn default_enabled() -> bool {
    true
}

fn default_role() -> Role {
    Role::Student
}

fn default_admin_roles() -> Vec<Role> {
    vec![Role::Admin]
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.access.enabled);
        assert_eq!(config.access.default_role, Role::Student);
        assert_eq!(config.access.admin_roles, vec![Role::Admin]);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let yaml = "access:\n  default_role: teacher\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.access.enabled);
        assert_eq!(config.access.default_role, Role::Teacher);
        assert_eq!(config.access.admin_roles, vec![Role::Admin]);
    }

    #[test]
    fn test_validate_rejects_empty_admin_roles() {
        let mut config = Config::default();
        config.access.admin_roles.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = AccessConfig::default();
        let override_cfg = AccessConfig {
            enabled: false,
            default_role: Role::Parent,
            admin_roles: vec![Role::Admin, Role::Teacher],
        };

        let merged = base.merge(override_cfg);
        assert!(!merged.enabled);
        assert_eq!(merged.default_role, Role::Parent);
        assert_eq!(merged.admin_roles, vec![Role::Admin, Role::Teacher]);
    }

    #[test]
    fn test_merge_keeps_admin_roles_when_other_empty() {
        let base = AccessConfig::default();
        let override_cfg = AccessConfig {
            enabled: true,
            default_role: Role::Student,
            admin_roles: vec![],
        };

        let merged = base.merge(override_cfg);
        assert_eq!(merged.admin_roles, vec![Role::Admin]);
    }
}
