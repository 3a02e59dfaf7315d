//! End-to-end tests of the access-control surface as a UI layer would
//! consume it.

use std::io::Write;

use edugate::{AccessConfig, AccessControl, Config, FeatureCategory, FeatureId, Role};

#[test]
fn default_construction_passes_integrity_check() {
    let access = AccessControl::with_defaults().expect("static tables must be consistent");
    assert_eq!(access.list_features().len(), FeatureId::ALL.len());
}

#[test]
fn role_scenarios_match_product_behavior() {
    let access = AccessControl::with_defaults().unwrap();

    assert!(access.has_access(Role::Student, FeatureId::ViewCourses));
    assert!(!access.has_access(Role::Student, FeatureId::ManageUsers));

    assert!(access.has_access(Role::Counselor, FeatureId::AccessMentalHealthRecords));
    assert!(!access.has_access(Role::Counselor, FeatureId::CreateQuiz));

    let parent_ids: Vec<FeatureId> = access
        .accessible_features(Role::Parent)
        .iter()
        .map(|f| f.id)
        .collect();
    assert!(parent_ids.contains(&FeatureId::HomeschoolAiPlanning));
    assert!(!parent_ids.contains(&FeatureId::GradeAssignments));
}

#[test]
fn sidebar_rendering_flow() {
    let access = AccessControl::with_defaults().unwrap();

    // A sidebar renders each category section, then gates navigation on
    // click. Both answers must agree.
    for role in Role::ALL {
        for (_, features) in access.features_by_category(role) {
            for feature in features {
                assert!(access.has_access(role, feature.id));
                assert!(access.can_access_path(role, feature.path));
            }
        }
    }
}

#[test]
fn admin_has_no_mental_health_section() {
    let access = AccessControl::with_defaults().unwrap();

    let grouped = access.features_by_category(Role::Admin);
    assert!(grouped.contains_key(&FeatureCategory::Administration));
    assert!(!grouped.contains_key(&FeatureCategory::MentalHealth));
}

#[test]
fn feature_listing_serializes_to_ui_payload() {
    let access = AccessControl::with_defaults().unwrap();

    let payload = serde_json::to_value(access.accessible_features(Role::Student)).unwrap();
    let items = payload.as_array().unwrap();
    assert!(!items.is_empty());
    assert_eq!(items[0]["id"], "view_courses");
    assert_eq!(items[0]["path"], "/courses");
}

#[tokio::test]
async fn config_loads_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "access:\n  enabled: true\n  default_role: teacher\n  admin_roles:\n    - admin\n    - teacher\nlogging:\n  level: debug\n"
    )
    .unwrap();

    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config.access.default_role, Role::Teacher);
    assert_eq!(config.access.admin_roles, vec![Role::Admin, Role::Teacher]);
    assert_eq!(config.logging.level, "debug");

    let access = AccessControl::new(&config.access).unwrap();
    assert!(access.is_admin(Role::Teacher));
}

#[tokio::test]
async fn config_rejects_empty_admin_roles() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "access:\n  admin_roles: []\n").unwrap();

    let result = Config::from_file(file.path()).await;
    assert!(result.is_err());
}

#[test]
fn gate_disabled_is_development_mode_only_surface() {
    let config = AccessConfig {
        enabled: false,
        default_role: Role::Student,
        admin_roles: vec![Role::Admin],
    };
    let access = AccessControl::new(&config).unwrap();

    // With the gate off, every registered route is reachable.
    for feature in access.list_features() {
        assert!(access.can_access_path(Role::Student, feature.path));
    }
}
