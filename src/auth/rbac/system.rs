//! Access-control core functionality

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use crate::config::AccessConfig;
use crate::core::models::Role;
use crate::utils::error::{PlatformError, Result};

use super::grants::role_grants;
use super::registry::default_features;
use super::types::{Feature, FeatureId};

/// Access-control system over the compiled-in feature catalog
///
/// Constructed once at process initialization and immutable afterwards.
/// Cheap to clone and freely shareable across threads.
#[derive(Debug, Clone)]
pub struct AccessControl {
    /// Access-control configuration
    pub(super) config: AccessConfig,
    /// Feature registry, keyed by id
    pub(super) features: HashMap<FeatureId, Feature>,
}

impl AccessControl {
    /// Create a new access-control system.
    ///
    /// Runs the exhaustive referential-integrity check over the static
    /// tables; any violation is a configuration defect and construction
    /// is refused.
    pub fn new(config: &AccessConfig) -> Result<Self> {
        info!("Initializing access control");

        let mut features = HashMap::new();
        for feature in default_features() {
            let id = feature.id;
            if features.insert(id, feature).is_some() {
                return Err(PlatformError::integrity(format!(
                    "duplicate registry entry for feature {}",
                    id
                )));
            }
        }

        let access = Self {
            config: config.clone(),
            features,
        };
        access.verify_integrity()?;

        debug!("Registered {} features", access.features.len());
        info!("Access control initialized");
        Ok(access)
    }

    /// Create an access-control system with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&AccessConfig::default())
    }

    /// Verify referential integrity between the registry and the
    /// role-permission map. Exhaustive, run once at construction.
    fn verify_integrity(&self) -> Result<()> {
        for id in FeatureId::ALL {
            if !self.features.contains_key(&id) {
                return Err(PlatformError::integrity(format!(
                    "feature {} missing from registry",
                    id
                )));
            }
        }
        if self.features.len() != FeatureId::ALL.len() {
            return Err(PlatformError::integrity(
                "registry size does not match the feature id enumeration",
            ));
        }

        for role in Role::ALL {
            let grants = role_grants(role);
            for id in grants {
                if !self.features.contains_key(id) {
                    return Err(PlatformError::integrity(format!(
                        "role {} granted unregistered feature {}",
                        role, id
                    )));
                }
            }

            let unique: HashSet<&FeatureId> = grants.iter().collect();
            if unique.len() != grants.len() {
                return Err(PlatformError::integrity(format!(
                    "role {} has duplicate grants",
                    role
                )));
            }
        }

        Ok(())
    }

    /// Get a feature's metadata by id
    pub fn get_feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    /// List all registered features, in registry order
    pub fn list_features(&self) -> Vec<&Feature> {
        FeatureId::ALL
            .iter()
            .filter_map(|id| self.features.get(id))
            .collect()
    }

    /// Get access-control configuration
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }
}
