//! Courier Dashboard - Telegram Web App front end for the delivery bot
//!
//! Compiled to WebAssembly and loaded by the two dashboard pages.
//!
//! # Architecture
//! - Two independent poll loops (user/leaderboard every 30s, system/bot
//!   stats every 5s), each a tick stream driving spawned cycles
//! - Pure render step: view models become `DomOp` lists, applied by a sink
//! - Telegram `WebApp` bridge for the user id and outbound actions
//! - Chart.js activity chart, created once after the first good stats poll
//!
//! # Failure model
//! Network, parse and backend errors are logged to the console and the page
//! keeps its previous content until the next tick.

#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(async_fn_in_trait)] // Single-threaded wasm: no Send bounds wanted

mod console;

pub mod actions;
pub mod bridge;
pub mod chart;
pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod poller;
pub mod render;
pub mod schedule;
pub mod types;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
mod testing;

pub use bridge::HostBridge;
pub use chart::{ChartConfig, ChartFactory, ChartLatch};
pub use client::{DashboardClient, DataSource, Endpoints};
pub use config::Config;
pub use console::Level;
pub use dom::DomSink;
pub use error::{DashboardError, Result};
pub use poller::{Sequencer, StatsPoller, UserPoller};
pub use render::{DomOp, Node};
pub use schedule::{PollCycle, run_polling};
pub use types::*;

#[cfg(target_arch = "wasm32")]
mod boot {
    use crate::bridge::{HostBridge, TelegramWebApp};
    use crate::chart::ChartJsFactory;
    use crate::client::DashboardClient;
    use crate::config::Config;
    use crate::console::{self, console_error, console_log, console_warn};
    use crate::dom::DocumentSink;
    use crate::error::Result;
    use crate::page::ids;
    use crate::poller::{StatsPoller, UserPoller};
    use crate::schedule::{BrowserSpawner, IntervalTicks, PollCycle, run_polling};
    use crate::{actions, types};

    fn load_config() -> Result<Config> {
        let config = Config::from_document()?;
        config.validate()?;
        console::set_max_level(config.level()?);
        Ok(config)
    }

    fn spawn_loop<C: PollCycle>(cycle: C, period_ms: u32) -> Result<()> {
        let ticks = IntervalTicks::start(period_ms)?;
        let name = cycle.name();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = run_polling(cycle, ticks, BrowserSpawner).await {
                console_error!("{name} loop stopped: {e}");
            }
        });
        console_log!("{name} loop started, every {period_ms} ms");
        Ok(())
    }

    pub fn user_dashboard() -> Result<()> {
        let config = load_config()?;

        let bridge = TelegramWebApp::detect();
        if bridge.is_none() {
            console_warn!("Telegram WebApp not found; personal stats and actions are unavailable");
        }
        bridge.expand();
        let bound = actions::bind_buttons(&bridge);
        console_log!("Bound {bound} of {} action buttons", types::Action::ALL.len());

        let poller = UserPoller::new(
            DashboardClient::new(&config.api_base),
            DocumentSink::from_window()?,
            bridge,
        );
        spawn_loop(poller, config.user_refresh_ms)
    }

    pub fn stats_dashboard() -> Result<()> {
        let config = load_config()?;

        let poller = StatsPoller::new(
            DashboardClient::new(&config.api_base),
            DocumentSink::from_window()?,
            ChartJsFactory::new(ids::ACTIVITY_CHART),
        );
        spawn_loop(poller, config.stats_refresh_ms)
    }
}

/// Entry point for the user page
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = startUserDashboard)]
pub fn start_user_dashboard() -> std::result::Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    web::when_dom_ready(|| {
        if let Err(e) = boot::user_dashboard() {
            console::console_error!("User dashboard failed to start: {e}");
        }
    })?;
    Ok(())
}

/// Entry point for the stats page
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = startStatsDashboard)]
pub fn start_stats_dashboard() -> std::result::Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    web::when_dom_ready(|| {
        if let Err(e) = boot::stats_dashboard() {
            console::console_error!("Stats dashboard failed to start: {e}");
        }
    })?;
    Ok(())
}
