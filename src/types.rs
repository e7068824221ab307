//! Wire types for the bot backend and host bridge
//!
//! Every field the backend may omit is an `Option`; defaults are applied
//! at render time, never here.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DashboardError, Result};

/// Decode a display field, turning a value of the wrong shape into `None`
/// so one odd field does not sink the rest of the response.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A JSON value that is shown verbatim: the backend sends some fields as
/// either a string or a number depending on its version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Scalar {
    /// Empty strings count as missing
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

/// Temporary income multiplier bought in the shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Bonus in percent (15 means +15%)
    #[serde(default, deserialize_with = "lenient")]
    pub bonus: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub remaining_minutes: Option<i64>,
}

/// `GET /api/user/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub deliveries: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub balance: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub rank: Option<Scalar>,
    /// `None` leaves the rendered list alone; `Some(vec![])` clears it
    #[serde(default, deserialize_with = "lenient")]
    pub active_buffs: Option<Vec<Buff>>,
}

/// One row of `GET /api/leaderboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub deliveries: Option<i64>,
}

/// Host machine metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub cpu: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub memory: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub disk: Option<f64>,
    /// `"1d 2h 3m 4s"` on current backends, bare seconds on older ones
    #[serde(default, deserialize_with = "lenient")]
    pub uptime: Option<Scalar>,
}

/// Aggregate bot counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub total_users: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_deliveries: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_earnings: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub active_buffs: Option<i64>,
}

/// Successful `GET /dashboard/api/stats` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    #[serde(default)]
    pub system: SystemInfo,
    #[serde(default)]
    pub bot: BotInfo,
}

/// Raw stats body before the error check
#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    system: Option<SystemInfo>,
    #[serde(default, deserialize_with = "lenient")]
    bot: Option<BotInfo>,
}

/// Either stats or the backend's error message
#[derive(Debug, Clone, PartialEq)]
pub enum StatsReply {
    Stats(SystemStats),
    Failed(String),
}

impl StatsReply {
    /// Parse a stats body; a non-empty `error` wins over any data alongside it
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let envelope: StatsEnvelope = serde_json::from_str(body)?;
        Ok(match envelope.error {
            Some(message) if !message.is_empty() => StatsReply::Failed(message),
            _ => StatsReply::Stats(SystemStats {
                system: envelope.system.unwrap_or_default(),
                bot: envelope.bot.unwrap_or_default(),
            }),
        })
    }

    /// Backend-reported failures become `DashboardError::Api`
    pub fn into_result(self) -> Result<SystemStats> {
        match self {
            StatsReply::Stats(stats) => Ok(stats),
            StatsReply::Failed(message) => Err(DashboardError::Api(message)),
        }
    }
}

/// Message forwarded to the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    StartDelivery,
    OpenShop,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::StartDelivery, Action::OpenShop];

    /// CSS selector of the button that triggers this action
    pub fn button_selector(self) -> &'static str {
        match self {
            Action::StartDelivery => ".delivery-button",
            Action::OpenShop => ".shop-button",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::StartDelivery => write!(f, "start_delivery"),
            Action::OpenShop => write!(f, "open_shop"),
        }
    }
}
