//! Access-control type definitions

use serde::{Deserialize, Serialize};

use crate::core::models::Role;
use crate::utils::error::PlatformError;

/// Identifier of a gateable feature
///
/// The feature set is closed. Every variant must have a record in the
/// registry; the constructor of [`super::AccessControl`] verifies this
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureId {
    // Learning
    ViewCourses,
    TakeQuizzes,
    ViewAssignments,
    AiTutor,
    // Student
    ViewGrades,
    StudyGroups,
    StudentMessages,
    // Teaching
    CreateCourse,
    CreateQuiz,
    GradeAssignments,
    ManageClassroom,
    MessageParents,
    // Homeschool
    HomeschoolAiPlanning,
    HomeschoolCurriculum,
    ProgressReports,
    // Administration
    ManageUsers,
    SystemSettings,
    ViewDistrictAnalytics,
    ManageFieldTrips,
    // Support
    ScheduleAppointments,
    CrisisResources,
    PeerSupport,
    // Special Education
    IepPlans,
    AccommodationTracking,
    // Mental Health
    AccessMentalHealthRecords,
    WellnessCheckins,
    CounselingNotes,
    // Account
    EditProfile,
    NotificationSettings,
}

impl FeatureId {
    /// Every feature id, in registry order.
    pub const ALL: [FeatureId; 29] = [
        FeatureId::ViewCourses,
        FeatureId::TakeQuizzes,
        FeatureId::ViewAssignments,
        FeatureId::AiTutor,
        FeatureId::ViewGrades,
        FeatureId::StudyGroups,
        FeatureId::StudentMessages,
        FeatureId::CreateCourse,
        FeatureId::CreateQuiz,
        FeatureId::GradeAssignments,
        FeatureId::ManageClassroom,
        FeatureId::MessageParents,
        FeatureId::HomeschoolAiPlanning,
        FeatureId::HomeschoolCurriculum,
        FeatureId::ProgressReports,
        FeatureId::ManageUsers,
        FeatureId::SystemSettings,
        FeatureId::ViewDistrictAnalytics,
        FeatureId::ManageFieldTrips,
        FeatureId::ScheduleAppointments,
        FeatureId::CrisisResources,
        FeatureId::PeerSupport,
        FeatureId::IepPlans,
        FeatureId::AccommodationTracking,
        FeatureId::AccessMentalHealthRecords,
        FeatureId::WellnessCheckins,
        FeatureId::CounselingNotes,
        FeatureId::EditProfile,
        FeatureId::NotificationSettings,
    ];

    /// Stable wire name of the feature id.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureId::ViewCourses => "view_courses",
            FeatureId::TakeQuizzes => "take_quizzes",
            FeatureId::ViewAssignments => "view_assignments",
            FeatureId::AiTutor => "ai_tutor",
            FeatureId::ViewGrades => "view_grades",
            FeatureId::StudyGroups => "study_groups",
            FeatureId::StudentMessages => "student_messages",
            FeatureId::CreateCourse => "create_course",
            FeatureId::CreateQuiz => "create_quiz",
            FeatureId::GradeAssignments => "grade_assignments",
            FeatureId::ManageClassroom => "manage_classroom",
            FeatureId::MessageParents => "message_parents",
            FeatureId::HomeschoolAiPlanning => "homeschool_ai_planning",
            FeatureId::HomeschoolCurriculum => "homeschool_curriculum",
            FeatureId::ProgressReports => "progress_reports",
            FeatureId::ManageUsers => "manage_users",
            FeatureId::SystemSettings => "system_settings",
            FeatureId::ViewDistrictAnalytics => "view_district_analytics",
            FeatureId::ManageFieldTrips => "manage_field_trips",
            FeatureId::ScheduleAppointments => "schedule_appointments",
            FeatureId::CrisisResources => "crisis_resources",
            FeatureId::PeerSupport => "peer_support",
            FeatureId::IepPlans => "iep_plans",
            FeatureId::AccommodationTracking => "accommodation_tracking",
            FeatureId::AccessMentalHealthRecords => "access_mental_health_records",
            FeatureId::WellnessCheckins => "wellness_checkins",
            FeatureId::CounselingNotes => "counseling_notes",
            FeatureId::EditProfile => "edit_profile",
            FeatureId::NotificationSettings => "notification_settings",
        }
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FeatureId {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PlatformError::not_found(format!("unknown feature id: {}", s)))
    }
}

/// UI grouping label for feature listings
///
/// A display grouping only, not a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureCategory {
    Learning,
    Student,
    Teaching,
    Homeschool,
    Administration,
    Support,
    #[serde(rename = "Special Education")]
    SpecialEducation,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    Account,
}

impl FeatureCategory {
    /// Human-readable label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureCategory::Learning => "Learning",
            FeatureCategory::Student => "Student",
            FeatureCategory::Teaching => "Teaching",
            FeatureCategory::Homeschool => "Homeschool",
            FeatureCategory::Administration => "Administration",
            FeatureCategory::Support => "Support",
            FeatureCategory::SpecialEducation => "Special Education",
            FeatureCategory::MentalHealth => "Mental Health",
            FeatureCategory::Account => "Account",
        }
    }
}

impl std::fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Feature definition
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    /// Feature identifier
    pub id: FeatureId,
    /// Display title
    pub title: &'static str,
    /// Display description
    pub description: &'static str,
    /// Route the feature gates
    pub path: &'static str,
    /// UI grouping category
    pub category: FeatureCategory,
}

/// Access check result
#[derive(Debug, Clone, Serialize)]
pub struct AccessCheck {
    /// Whether access is granted
    pub granted: bool,
    /// Role the check ran against
    pub role: Role,
    /// Feature the check ran against
    pub feature: FeatureId,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
