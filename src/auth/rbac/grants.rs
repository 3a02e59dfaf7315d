//! Role-permission map
//!
//! Per role, the ordered list of granted feature ids. Order is insertion
//! order and carries no access semantics; display grouping preserves it
//! within a category. The match is exhaustive over [`Role`], so adding a
//! role without granting it features fails to compile.

use super::types::FeatureId;
use crate::core::models::Role;

/// Feature ids granted to the role, in stored order.
pub(super) fn role_grants(role: Role) -> &'static [FeatureId] {
    use FeatureId::*;

    match role {
        Role::Student => &[
            ViewCourses,
            TakeQuizzes,
            ViewAssignments,
            AiTutor,
            ViewGrades,
            StudyGroups,
            StudentMessages,
            ScheduleAppointments,
            CrisisResources,
            PeerSupport,
            EditProfile,
            NotificationSettings,
        ],
        Role::Teacher => &[
            ViewCourses,
            CreateCourse,
            CreateQuiz,
            GradeAssignments,
            ManageClassroom,
            MessageParents,
            AccommodationTracking,
            EditProfile,
            NotificationSettings,
        ],
        Role::Parent => &[
            ViewCourses,
            ViewGrades,
            HomeschoolAiPlanning,
            HomeschoolCurriculum,
            ProgressReports,
            ScheduleAppointments,
            CrisisResources,
            EditProfile,
            NotificationSettings,
        ],
        // The admin list repeats the teaching grants rather than
        // composing them; the two lists are maintained independently.
        Role::Admin => &[
            ManageUsers,
            SystemSettings,
            ViewDistrictAnalytics,
            ManageFieldTrips,
            ViewCourses,
            CreateCourse,
            CreateQuiz,
            GradeAssignments,
            ManageClassroom,
            MessageParents,
            EditProfile,
            NotificationSettings,
        ],
        Role::Counselor => &[
            AccessMentalHealthRecords,
            WellnessCheckins,
            CounselingNotes,
            ScheduleAppointments,
            CrisisResources,
            PeerSupport,
            IepPlans,
            AccommodationTracking,
            EditProfile,
            NotificationSettings,
        ],
        Role::SocialWorker => &[
            AccessMentalHealthRecords,
            WellnessCheckins,
            ScheduleAppointments,
            CrisisResources,
            PeerSupport,
            IepPlans,
            EditProfile,
            NotificationSettings,
        ],
    }
}

/// Dashboard route the role lands on after login.
pub(super) fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Student => "/dashboard/student",
        Role::Teacher => "/dashboard/teacher",
        Role::Parent => "/dashboard/parent",
        Role::Admin => "/dashboard/admin",
        Role::Counselor => "/dashboard/counselor",
        Role::SocialWorker => "/dashboard/social-worker",
    }
}
