pub use super::attendance::Entity as Attendance;
pub use super::guide_videos::Entity as GuideVideos;
pub use super::guides::Entity as Guides;
pub use super::meetings::Entity as Meetings;
pub use super::roles::Entity as Roles;
pub use super::team_info::Entity as TeamInfo;
pub use super::users::Entity as Users;
