//! Role-based feature gating
//!
//! This module answers, for a user's role, which features of the
//! platform that role may see and which routes it may navigate to.

mod grants;
mod queries;
mod registry;
mod system;
mod types;

// Re-export public types and structs
pub use system::AccessControl;
pub use types::{AccessCheck, Feature, FeatureCategory, FeatureId};
