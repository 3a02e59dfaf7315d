//! Authorization system
//!
//! Feature gating for the platform's role model. Session issuance and
//! identity live with the hosting application; this module only answers
//! access questions for an already-authenticated role.

pub mod rbac;

// Re-export commonly used types
pub use crate::core::models::{Role, User};
pub use rbac::{AccessCheck, AccessControl, Feature, FeatureCategory, FeatureId};
