pub mod prelude;

pub mod attendance;
pub mod guide_videos;
pub mod guides;
pub mod meetings;
pub mod roles;
pub mod team_info;
pub mod users;
