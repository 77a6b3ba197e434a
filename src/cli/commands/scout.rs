//! Scouting command handler
//!
//! Registry lookups never touch the session; a failed fetch is reported and
//! that is the end of it.

use crate::cli::Cli;
use crate::cli::commands::{authenticate, separator};
use crate::clients::FtcScoutClient;
use crate::clients::ftcscout::current_season;
use crate::config::LocalConfig;

pub async fn cmd_scout(
    cli: &Cli,
    team_number: Option<u32>,
    season: Option<i32>,
) -> anyhow::Result<()> {
    let team_number = match team_number {
        Some(number) => number,
        None => {
            // no explicit team: look up our own, which needs a login
            let config = LocalConfig::load();
            let (session, _) = authenticate(cli, &config).await?;
            let number = u32::try_from(session.team().team_number)?;
            session.logout().await;
            number
        }
    };

    let client = FtcScoutClient::new();

    println!("Team {team_number}");
    separator();
    match client.get_team(team_number).await {
        Ok(Some(details)) => {
            println!("Name:         {}", details.name.as_deref().unwrap_or("N/A"));
            println!(
                "Organization: {}",
                details.organization.as_deref().unwrap_or("N/A")
            );
            println!(
                "Location:     {}, {}, {}",
                details.city.as_deref().unwrap_or(""),
                details.state_prov.as_deref().unwrap_or(""),
                details.country.as_deref().unwrap_or("")
            );
            if let Some(year) = details.rookie_year {
                println!("Rookie year:  {year}");
            }
            match details.sponsors {
                Some(sponsors) if !sponsors.is_empty() => {
                    println!("Sponsors:     {}", sponsors.join(", "));
                }
                _ => println!("Sponsors:     N/A"),
            }
        }
        Ok(None) => println!("Team {team_number} not found."),
        Err(err) => println!("Could not fetch team details: {err}"),
    }

    let season = season.unwrap_or_else(current_season);
    println!();
    println!("Quick Stats (season {season})");
    separator();
    match client.quick_stats(team_number, Some(season)).await {
        Ok(Some(stats)) => {
            print_stat("OPR", stats.opr);
            print_stat("NPR", stats.npr);
            print_stat("TPR", stats.tpr);
            print_count("Wins", stats.wins);
            print_count("Losses", stats.losses);
            print_count("Ties", stats.ties);
            print_stat("Average rank", stats.rank);
        }
        Ok(None) => println!("No stats for team {team_number} in season {season}."),
        Err(err) => println!("Could not fetch quick stats: {err}"),
    }

    Ok(())
}

fn print_stat(label: &str, value: Option<f64>) {
    match value {
        Some(value) => println!("  {label}: {value:.2}"),
        None => println!("  {label}: N/A"),
    }
}

fn print_count(label: &str, value: Option<i32>) {
    match value {
        Some(value) => println!("  {label}: {value}"),
        None => println!("  {label}: N/A"),
    }
}
