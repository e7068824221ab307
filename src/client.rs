//! Bot backend API client
//!
//! Implements the three read endpoints the dashboard polls:
//! - Per-user stats
//! - Leaderboard
//! - Aggregate system and bot stats
//!
//! Bodies are parsed whatever the HTTP status: the stats endpoint reports
//! failures as `{"error": ...}` with a 500.

use serde::de::DeserializeOwned;

use crate::console::console_debug;
use crate::error::Result;
use crate::types::{LeaderboardEntry, StatsReply, UserStatus};

pub const USER_PATH: &str = "/api/user";
pub const LEADERBOARD_PATH: &str = "/api/leaderboard";
pub const STATS_PATH: &str = "/dashboard/api/stats";

/// Where the pollers get their data from
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn user_status(&self, user_id: i64) -> Result<UserStatus>;

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;

    async fn system_stats(&self) -> Result<StatsReply>;
}

impl<S: DataSource + ?Sized> DataSource for std::rc::Rc<S> {
    async fn user_status(&self, user_id: i64) -> Result<UserStatus> {
        (**self).user_status(user_id).await
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        (**self).leaderboard().await
    }

    async fn system_stats(&self) -> Result<StatsReply> {
        (**self).system_stats().await
    }
}

/// Endpoint URLs under one backend origin
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn user(&self, user_id: i64) -> String {
        format!("{}{USER_PATH}/{user_id}", self.base_url)
    }

    pub fn leaderboard(&self) -> String {
        format!("{}{LEADERBOARD_PATH}", self.base_url)
    }

    pub fn stats(&self) -> String {
        format!("{}{STATS_PATH}", self.base_url)
    }
}

/// Bot backend client
#[derive(Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::new(base_url),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;
        console_debug!("GET {url} -> {}", response.status());
        Ok(response.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl DataSource for DashboardClient {
    async fn user_status(&self, user_id: i64) -> Result<UserStatus> {
        self.get_json(&self.endpoints.user(user_id)).await
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.get_json(&self.endpoints.leaderboard()).await
    }

    async fn system_stats(&self) -> Result<StatsReply> {
        let body = self.get_text(&self.endpoints.stats()).await?;
        Ok(StatsReply::from_json(&body)?)
    }
}
