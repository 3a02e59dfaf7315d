//! Access query functions
//!
//! Pure, synchronous reads over the immutable tables built at
//! construction. Negative results are normal outcomes, not errors.

use std::collections::HashMap;

use crate::core::models::{Role, User};

use super::grants::{landing_path, role_grants};
use super::system::AccessControl;
use super::types::{AccessCheck, Feature, FeatureCategory, FeatureId};

impl AccessControl {
    /// True iff the role was granted the feature.
    ///
    /// Total and side-effect free; a feature the role lacks yields
    /// `false`, never an error.
    pub fn has_access(&self, role: Role, feature: FeatureId) -> bool {
        if !self.config.enabled {
            return self.features.contains_key(&feature);
        }
        role_grants(role).contains(&feature)
    }

    /// The role's granted features resolved against the registry, in
    /// stored order.
    pub fn accessible_features(&self, role: Role) -> Vec<&Feature> {
        if !self.config.enabled {
            return self.list_features();
        }

        let grants = role_grants(role);
        let resolved: Vec<&Feature> = grants
            .iter()
            .filter_map(|id| self.features.get(id))
            .collect();
        // Guaranteed by the integrity check at construction.
        debug_assert_eq!(resolved.len(), grants.len());
        resolved
    }

    /// The role's features grouped by category, preserving stored order
    /// within each group. Categories with no features for the role are
    /// never materialized.
    pub fn features_by_category(&self, role: Role) -> HashMap<FeatureCategory, Vec<&Feature>> {
        let mut grouped: HashMap<FeatureCategory, Vec<&Feature>> = HashMap::new();
        for feature in self.accessible_features(role) {
            grouped.entry(feature.category).or_default().push(feature);
        }
        grouped
    }

    /// Detailed access check with a denial reason for UI diagnostics
    pub fn check_access(&self, role: Role, feature: FeatureId) -> AccessCheck {
        let granted = self.has_access(role, feature);
        AccessCheck {
            granted,
            role,
            feature,
            denial_reason: if granted {
                None
            } else {
                Some(format!("role {} has no grant for {}", role, feature))
            },
        }
    }

    /// Look up the feature gating a route, if any
    pub fn feature_for_path(&self, path: &str) -> Option<&Feature> {
        FeatureId::ALL
            .iter()
            .filter_map(|id| self.features.get(id))
            .find(|feature| feature.path == path)
    }

    /// Route guard: true if the role may navigate to the path.
    ///
    /// Paths outside the catalog are not gated.
    pub fn can_access_path(&self, role: Role, path: &str) -> bool {
        match self.feature_for_path(path) {
            Some(feature) => self.has_access(role, feature.id),
            None => true,
        }
    }

    /// Features visible to a user account. Inactive accounts see nothing.
    pub fn user_features(&self, user: &User) -> Vec<&Feature> {
        if !user.is_active {
            return Vec::new();
        }
        self.accessible_features(user.role)
    }

    /// Whether the role is in the configured admin set
    pub fn is_admin(&self, role: Role) -> bool {
        self.config.admin_roles.contains(&role)
    }

    /// Dashboard route the role lands on after login
    pub fn landing_path(&self, role: Role) -> &'static str {
        landing_path(role)
    }
}
