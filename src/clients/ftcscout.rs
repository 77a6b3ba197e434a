use anyhow::Result;
use async_trait::async_trait;
use chrono::Datelike;
use reqwest::Client;
use serde::Deserialize;

const FTCSCOUT_API: &str = "https://api.ftcscout.org/rest/v1";

/// The season year competition data is keyed by.
#[must_use]
pub fn current_season() -> i32 {
    chrono::Utc::now().year()
}

/// What a registry lookup concluded about a team number. `Unverifiable`
/// is a soft outcome: the caller warns and may proceed, it never hard-fails
/// a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCheck {
    Listed,
    Unlisted,
    Unverifiable(String),
}

/// Seam for the external team registry, so workflows can be exercised
/// without network access.
#[async_trait]
pub trait TeamRegistry: Send + Sync {
    async fn check_team(&self, team_number: u32) -> RegistryCheck;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetails {
    pub number: i32,
    pub name: Option<String>,
    pub organization: Option<String>,
    pub city: Option<String>,
    pub state_prov: Option<String>,
    pub country: Option<String>,
    pub rookie_year: Option<i32>,
    #[serde(default)]
    pub sponsors: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct QuickStats {
    pub season: Option<i32>,
    pub opr: Option<f64>,
    pub npr: Option<f64>,
    pub tpr: Option<f64>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub ties: Option<i32>,
    pub rank: Option<f64>,
}

#[derive(Clone)]
pub struct FtcScoutClient {
    client: Client,
}

impl Default for FtcScoutClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FtcScoutClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn get_team(&self, team_number: u32) -> Result<Option<TeamDetails>> {
        let url = format!("{FTCSCOUT_API}/teams/{team_number}");
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("FTC Scout API error: {} - {}", status, body));
        }

        Ok(Some(response.json().await?))
    }

    pub async fn quick_stats(
        &self,
        team_number: u32,
        season: Option<i32>,
    ) -> Result<Option<QuickStats>> {
        let url = format!("{FTCSCOUT_API}/teams/{team_number}/quick-stats");
        let mut request = self.client.get(&url);
        if let Some(season) = season {
            request = request.query(&[("season", season)]);
        }
        let response = request.send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("FTC Scout API error: {} - {}", status, body));
        }

        Ok(Some(response.json().await?))
    }
}

#[async_trait]
impl TeamRegistry for FtcScoutClient {
    /// 200 with a team payload means listed, 404 means unlisted; anything
    /// else (including transport failure) means the check is inconclusive.
    async fn check_team(&self, team_number: u32) -> RegistryCheck {
        let url = format!("{FTCSCOUT_API}/teams/{team_number}");
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => return RegistryCheck::Unverifiable(err.to_string()),
        };

        match response.status() {
            reqwest::StatusCode::OK => match response.json::<TeamDetails>().await {
                Ok(_) => RegistryCheck::Listed,
                // a 200 without a recognizable team body is not a listing
                Err(_) => RegistryCheck::Unlisted,
            },
            reqwest::StatusCode::NOT_FOUND => RegistryCheck::Unlisted,
            status => RegistryCheck::Unverifiable(format!("unexpected status {status}")),
        }
    }
}
