//! 24-hour activity chart
//!
//! The chart is created once, after the first successful stats poll, and is
//! seeded with placeholder series. Later polls leave it alone.

use std::cell::RefCell;

use chrono::{DateTime, TimeDelta, TimeZone, Timelike};
use rand::Rng;
use serde::Serialize;

use crate::console::{console_error, console_log};
use crate::error::Result;

/// Hourly points including both ends of the window
pub const HOURS: i64 = 24;

const DELIVERIES_MAX: u32 = 100;
const ACTIVE_USERS_MAX: u32 = 50;

/// Chart.js `line` configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<u32>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: &'static str,
}

/// `"{hour}:00"` for every hour from `now - 24h` through `now`
pub fn hourly_labels<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<String> {
    (0..=HOURS)
        .rev()
        .map(|back| {
            let at = now.clone() - TimeDelta::hours(back);
            format!("{}:00", at.hour())
        })
        .collect()
}

fn random_series<R: Rng>(rng: &mut R, len: usize, max: u32) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(0..max)).collect()
}

impl ChartConfig {
    /// Placeholder activity chart ending at `now`
    pub fn placeholder<Tz: TimeZone, R: Rng>(now: &DateTime<Tz>, rng: &mut R) -> Self {
        let labels = hourly_labels(now);
        let points = labels.len();

        Self {
            kind: "line",
            data: ChartData {
                datasets: vec![
                    Dataset {
                        label: "Доставки",
                        data: random_series(rng, points, DELIVERIES_MAX),
                        background_color: "rgba(54, 162, 235, 0.2)",
                        border_color: "rgb(54, 162, 235)",
                        tension: 0.1,
                    },
                    Dataset {
                        label: "Активные пользователи",
                        data: random_series(rng, points, ACTIVE_USERS_MAX),
                        background_color: "rgba(255, 99, 132, 0.2)",
                        border_color: "rgb(255, 99, 132)",
                        tension: 0.1,
                    },
                ],
                labels,
            },
            options: ChartOptions {
                responsive: true,
                plugins: Plugins {
                    legend: Legend { position: "top" },
                    title: Title {
                        display: true,
                        text: "Активность за последние 24 часа",
                    },
                },
            },
        }
    }
}

/// Creates the chart instance on the page
pub trait ChartFactory {
    type Chart;

    fn create(&self) -> Result<Self::Chart>;
}

/// One-way "not created -> created" latch
///
/// A failed creation leaves the latch open so the next poll tries again.
pub struct ChartLatch<F: ChartFactory> {
    factory: F,
    chart: RefCell<Option<F::Chart>>,
}

impl<F: ChartFactory> ChartLatch<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            chart: RefCell::new(None),
        }
    }

    pub fn is_created(&self) -> bool {
        self.chart.borrow().is_some()
    }

    /// Create the chart unless it already exists; true if this call created it
    pub fn ensure(&self) -> bool {
        if self.is_created() {
            return false;
        }
        match self.factory.create() {
            Ok(chart) => {
                *self.chart.borrow_mut() = Some(chart);
                console_log!("Activity chart created");
                true
            }
            Err(e) => {
                console_error!("Error creating activity chart: {e}");
                false
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{ChartJs, ChartJsFactory};

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::{ChartConfig, ChartFactory};
    use crate::error::{DashboardError, Result};

    #[wasm_bindgen]
    extern "C" {
        /// Global `Chart` constructor from Chart.js
        #[wasm_bindgen(js_name = Chart)]
        pub type ChartJs;

        #[wasm_bindgen(constructor, js_class = "Chart", catch)]
        fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> std::result::Result<ChartJs, JsValue>;
    }

    /// Builds a Chart.js line chart on a canvas found by id
    pub struct ChartJsFactory {
        canvas_id: &'static str,
    }

    impl ChartJsFactory {
        pub fn new(canvas_id: &'static str) -> Self {
            Self { canvas_id }
        }
    }

    impl ChartFactory for ChartJsFactory {
        type Chart = ChartJs;

        fn create(&self) -> Result<ChartJs> {
            let canvas = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(self.canvas_id))
                .ok_or_else(|| DashboardError::Dom(format!("canvas #{} not found", self.canvas_id)))?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| DashboardError::Dom(format!("#{} is not a canvas", self.canvas_id)))?;

            let ctx = canvas
                .get_context("2d")?
                .ok_or_else(|| DashboardError::Dom("no 2d context".into()))?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| DashboardError::Dom("unexpected 2d context type".into()))?;

            let config = ChartConfig::placeholder(&chrono::Local::now(), &mut rand::thread_rng());
            let config = js_sys::JSON::parse(&serde_json::to_string(&config)?)?;

            Ok(ChartJs::new(&ctx, &config)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingCharts;
    use chrono::{FixedOffset, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_hourly_labels_wrap_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 5, 42, 0).unwrap();
        let labels = hourly_labels(&now);
        assert_eq!(labels.len(), 25);
        assert_eq!(labels.first().map(String::as_str), Some("5:00"));
        assert_eq!(labels[18], "23:00");
        assert_eq!(labels[19], "0:00");
        assert_eq!(labels.last().map(String::as_str), Some("5:00"));
    }

    #[test]
    fn test_labels_use_local_hour() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = msk.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
        assert_eq!(hourly_labels(&now).last().map(String::as_str), Some("14:00"));
    }

    #[test]
    fn test_placeholder_shape() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let config = ChartConfig::placeholder(&now, &mut rng);

        assert_eq!(config.kind, "line");
        assert_eq!(config.data.labels.len(), 25);
        assert_eq!(config.data.datasets.len(), 2);

        let deliveries = &config.data.datasets[0];
        let users = &config.data.datasets[1];
        assert_eq!(deliveries.data.len(), 25);
        assert_eq!(users.data.len(), 25);
        assert!(deliveries.data.iter().all(|&v| v < 100));
        assert!(users.data.iter().all(|&v| v < 50));
    }

    #[test]
    fn test_placeholder_json_keys() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let config = ChartConfig::placeholder(&now, &mut StdRng::seed_from_u64(1));
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "rgb(54, 162, 235)");
        assert_eq!(json["data"]["datasets"][1]["backgroundColor"], "rgba(255, 99, 132, 0.2)");
        assert_eq!(json["options"]["plugins"]["legend"]["position"], "top");
        assert_eq!(json["options"]["plugins"]["title"]["text"], "Активность за последние 24 часа");
    }

    #[test]
    fn test_latch_creates_once() {
        let latch = ChartLatch::new(CountingCharts::default());
        assert!(!latch.is_created());
        assert!(latch.ensure());
        assert!(!latch.ensure());
        assert!(!latch.ensure());
        assert!(latch.is_created());
        assert_eq!(latch.factory.created(), 1);
    }

    #[test]
    fn test_latch_retries_after_failure() {
        let latch = ChartLatch::new(CountingCharts::failing_first(2));
        assert!(!latch.ensure());
        assert!(!latch.ensure());
        assert!(!latch.is_created());
        assert!(latch.ensure());
        assert!(!latch.ensure());
        assert_eq!(latch.factory.created(), 1);
        assert_eq!(latch.factory.attempts(), 3);
    }
}
