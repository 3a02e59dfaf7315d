//! Feature registry
//!
//! The closed catalog of gateable features with their display metadata
//! and routes. Compiled-in, never mutated at runtime.

use super::types::{Feature, FeatureCategory, FeatureId};

/// The default feature catalog, in registry order.
pub(super) fn default_features() -> Vec<Feature> {
    vec![
        // Learning
        Feature {
            id: FeatureId::ViewCourses,
            title: "My Courses",
            description: "Browse enrolled courses and work through lessons",
            path: "/courses",
            category: FeatureCategory::Learning,
        },
        Feature {
            id: FeatureId::TakeQuizzes,
            title: "Quizzes",
            description: "Take assigned quizzes and review results",
            path: "/quizzes",
            category: FeatureCategory::Learning,
        },
        Feature {
            id: FeatureId::ViewAssignments,
            title: "Assignments",
            description: "View and submit course assignments",
            path: "/assignments",
            category: FeatureCategory::Learning,
        },
        Feature {
            id: FeatureId::AiTutor,
            title: "AI Tutor",
            description: "Get step-by-step help from the AI tutor",
            path: "/tutor",
            category: FeatureCategory::Learning,
        },
        // Student
        Feature {
            id: FeatureId::ViewGrades,
            title: "Grades",
            description: "View grades and progress across courses",
            path: "/grades",
            category: FeatureCategory::Student,
        },
        Feature {
            id: FeatureId::StudyGroups,
            title: "Study Groups",
            description: "Join and organize peer study groups",
            path: "/study-groups",
            category: FeatureCategory::Student,
        },
        Feature {
            id: FeatureId::StudentMessages,
            title: "Messages",
            description: "Message classmates and teachers",
            path: "/messages",
            category: FeatureCategory::Student,
        },
        // Teaching
        Feature {
            id: FeatureId::CreateCourse,
            title: "Create Course",
            description: "Author new courses and lesson plans",
            path: "/teacher/courses/new",
            category: FeatureCategory::Teaching,
        },
        Feature {
            id: FeatureId::CreateQuiz,
            title: "Create Quiz",
            description: "Build quizzes and question banks",
            path: "/teacher/quizzes/new",
            category: FeatureCategory::Teaching,
        },
        Feature {
            id: FeatureId::GradeAssignments,
            title: "Grading",
            description: "Grade submitted assignments and leave feedback",
            path: "/teacher/grading",
            category: FeatureCategory::Teaching,
        },
        Feature {
            id: FeatureId::ManageClassroom,
            title: "Classroom",
            description: "Manage rosters, seating, and classroom settings",
            path: "/teacher/classroom",
            category: FeatureCategory::Teaching,
        },
        Feature {
            id: FeatureId::MessageParents,
            title: "Parent Messages",
            description: "Message parents and guardians",
            path: "/teacher/messages",
            category: FeatureCategory::Teaching,
        },
        // Homeschool
        Feature {
            id: FeatureId::HomeschoolAiPlanning,
            title: "AI Lesson Planning",
            description: "Generate homeschool lesson plans with AI assistance",
            path: "/homeschool/planning",
            category: FeatureCategory::Homeschool,
        },
        Feature {
            id: FeatureId::HomeschoolCurriculum,
            title: "Curriculum",
            description: "Browse and customize homeschool curricula",
            path: "/homeschool/curriculum",
            category: FeatureCategory::Homeschool,
        },
        Feature {
            id: FeatureId::ProgressReports,
            title: "Progress Reports",
            description: "Track and export learner progress reports",
            path: "/homeschool/progress",
            category: FeatureCategory::Homeschool,
        },
        // Administration
        Feature {
            id: FeatureId::ManageUsers,
            title: "User Management",
            description: "Create, update, and deactivate platform accounts",
            path: "/admin/users",
            category: FeatureCategory::Administration,
        },
        Feature {
            id: FeatureId::SystemSettings,
            title: "System Settings",
            description: "Configure platform-wide settings",
            path: "/admin/settings",
            category: FeatureCategory::Administration,
        },
        Feature {
            id: FeatureId::ViewDistrictAnalytics,
            title: "District Analytics",
            description: "View usage and outcome analytics across schools",
            path: "/admin/analytics",
            category: FeatureCategory::Administration,
        },
        Feature {
            id: FeatureId::ManageFieldTrips,
            title: "Field Trips",
            description: "Approve and schedule field trips",
            path: "/admin/field-trips",
            category: FeatureCategory::Administration,
        },
        // Support
        Feature {
            id: FeatureId::ScheduleAppointments,
            title: "Appointments",
            description: "Request and schedule support appointments",
            path: "/appointments",
            category: FeatureCategory::Support,
        },
        Feature {
            id: FeatureId::CrisisResources,
            title: "Crisis Resources",
            description: "Directory of crisis lines and immediate help",
            path: "/resources/crisis",
            category: FeatureCategory::Support,
        },
        Feature {
            id: FeatureId::PeerSupport,
            title: "Peer Support",
            description: "Moderated peer-support listings",
            path: "/peer-support",
            category: FeatureCategory::Support,
        },
        // Special Education
        Feature {
            id: FeatureId::IepPlans,
            title: "IEP Plans",
            description: "View and maintain individualized education programs",
            path: "/sped/iep",
            category: FeatureCategory::SpecialEducation,
        },
        Feature {
            id: FeatureId::AccommodationTracking,
            title: "Accommodations",
            description: "Track accommodations applied in the classroom",
            path: "/sped/accommodations",
            category: FeatureCategory::SpecialEducation,
        },
        // Mental Health
        Feature {
            id: FeatureId::AccessMentalHealthRecords,
            title: "Mental Health Records",
            description: "Access confidential mental-health records",
            path: "/records/mental-health",
            category: FeatureCategory::MentalHealth,
        },
        Feature {
            id: FeatureId::WellnessCheckins,
            title: "Wellness Check-ins",
            description: "Run and review student wellness check-ins",
            path: "/wellness/checkins",
            category: FeatureCategory::MentalHealth,
        },
        Feature {
            id: FeatureId::CounselingNotes,
            title: "Counseling Notes",
            description: "Maintain session notes for counseling caseloads",
            path: "/counseling/notes",
            category: FeatureCategory::MentalHealth,
        },
        // Account
        Feature {
            id: FeatureId::EditProfile,
            title: "Profile",
            description: "Edit profile details and avatar",
            path: "/account/profile",
            category: FeatureCategory::Account,
        },
        Feature {
            id: FeatureId::NotificationSettings,
            title: "Notifications",
            description: "Manage notification preferences",
            path: "/account/notifications",
            category: FeatureCategory::Account,
        },
    ]
}
