//! Command-line interface for the pitcrew portal.
//!
//! Each subcommand authenticates (where needed), runs one workflow through
//! the library, renders the outcome, and releases the session.

mod commands;

use clap::{Parser, Subcommand};

/// pitcrew - team portal for FTC robotics teams
/// Attendance, guides, scouting, and member administration for one team.
#[derive(Parser)]
#[command(name = "pitcrew")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database URL (defaults to DATABASE_URL, then the saved config)
    #[arg(long, global = true)]
    pub db_url: Option<String>,

    /// Username (defaults to the saved config)
    #[arg(long, short = 'u', global = true)]
    pub username: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the database URL and username for next time
    Login,

    /// Ask to join the team (an admin must approve the account first)
    Join,

    /// Provision a new team database and its first administrator
    CreateTeam {
        /// Official team number
        #[arg(long)]
        team_number: String,
        /// Team name
        #[arg(long)]
        team_name: String,
    },

    /// Team overview: name, number, and active member count
    Status,

    /// Member administration
    Members {
        #[command(subcommand)]
        command: MemberCommands,
    },

    /// Attendance overview and meeting recording
    Attendance {
        #[command(subcommand)]
        command: Option<AttendanceCommands>,
    },

    /// Guide topics and videos
    Guides {
        #[command(subcommand)]
        command: GuideCommands,
    },

    /// Team statistics from FTC Scout
    Scout {
        /// Team number (defaults to your own team)
        team_number: Option<u32>,
        /// Season year (defaults to the current season)
        #[arg(long)]
        season: Option<i32>,
    },

    /// Team settings
    Team {
        #[command(subcommand)]
        command: TeamCommands,
    },

    /// Forget the remembered username
    Logout,
}

#[derive(Subcommand)]
pub enum MemberCommands {
    /// List active members and their roles
    #[command(alias = "ls")]
    List,

    /// List pending join requests
    Pending,

    /// Approve a pending join request (admin)
    Approve {
        user_id: i32,
    },

    /// Reject and delete a pending join request (admin)
    Reject {
        user_id: i32,
    },

    /// Assign a role to a member (admin)
    SetRole {
        user_id: i32,
        role: String,
    },

    /// Grant or revoke admin status (admin)
    ToggleAdmin {
        user_id: i32,
    },

    /// Permanently remove a member and their attendance records (admin)
    #[command(alias = "rm")]
    Remove {
        user_id: i32,
    },

    /// List the available roles
    Roles,
}

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Record a meeting and who attended (admin)
    Record {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated user ids of members who were present
        #[arg(long, value_delimiter = ',')]
        present: Vec<i32>,
    },
}

#[derive(Subcommand)]
pub enum GuideCommands {
    /// List guide topics
    #[command(alias = "ls")]
    List,

    /// Create a new guide topic
    Create {
        topic: String,
    },

    /// List the videos of a topic
    Videos {
        guide_id: i32,
    },

    /// Attach a video to a topic
    AddVideo {
        guide_id: i32,
        url: String,
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TeamCommands {
    /// Rename the team (admin)
    Rename {
        name: String,
    },

    /// Change the team password (admin)
    SetPassword,
}

pub use commands::*;
