//! # Edugate
//!
//! Role-based feature gating for a multi-role educational platform
//! (students, teachers, parents/homeschool, counselors, social workers,
//! admins).
//!
//! ## Features
//!
//! - **Closed role and feature enumerations**: adding a role or feature
//!   without updating the grant table is a compile-time error
//! - **Startup integrity check**: every grant must resolve against the
//!   feature registry, verified exhaustively at construction
//! - **Pure queries**: access checks are synchronous, deterministic
//!   reads over immutable tables
//! - **UI-ready listings**: role-scoped feature lists, grouped sparsely
//!   by category, serializable straight into frontend payloads
//!
//! ## Quick Start
//!
//! ```rust
//! use edugate::{AccessControl, FeatureId, Role};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let access = AccessControl::with_defaults()?;
//!
//!     assert!(access.has_access(Role::Student, FeatureId::ViewCourses));
//!     assert!(!access.has_access(Role::Student, FeatureId::ManageUsers));
//!
//!     for feature in access.accessible_features(Role::Teacher) {
//!         println!("{} -> {}", feature.title, feature.path);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export the public surface
pub use crate::auth::rbac::{AccessCheck, AccessControl, Feature, FeatureCategory, FeatureId};
pub use crate::config::{AccessConfig, Config, LoggingConfig};
pub use crate::core::models::{Role, User};
pub use crate::utils::error::{PlatformError, Result};
pub use crate::utils::logging::init_logging;
