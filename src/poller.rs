//! The two dashboard poll cycles
//!
//! - `UserPoller`: personal stats (when the bridge knows the user) and the
//!   leaderboard
//! - `StatsPoller`: host load and bot totals, plus the one-time chart
//!
//! Failures are logged and leave the page as it was. Responses that come
//! back after a newer one for the same stream has been rendered are dropped.

use std::cell::Cell;
use std::rc::Rc;

use crate::bridge::HostBridge;
use crate::chart::{ChartFactory, ChartLatch};
use crate::client::DataSource;
use crate::console::{console_debug, console_error};
use crate::dom::DomSink;
use crate::render::{self, DomOp};
use crate::schedule::PollCycle;
use crate::types::StatsReply;

/// Issue-order number of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Lets only the newest response per stream reach the page
#[derive(Debug, Default)]
pub struct Sequencer {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket before sending a request
    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    /// True if `ticket` is newer than anything rendered so far; marks it rendered
    pub fn admit(&self, ticket: Ticket) -> bool {
        if ticket.0 > self.applied.get() {
            self.applied.set(ticket.0);
            true
        } else {
            false
        }
    }
}

fn apply_or_log<D: DomSink>(dom: &D, ops: &[DomOp], what: &str) -> bool {
    match dom.apply(ops) {
        Ok(()) => true,
        Err(e) => {
            console_error!("Error rendering {what}: {e}");
            false
        }
    }
}

struct UserInner<S, D, B> {
    source: S,
    dom: D,
    bridge: B,
    status_seq: Sequencer,
    board_seq: Sequencer,
}

/// User stats + leaderboard cycle
pub struct UserPoller<S, D, B> {
    inner: Rc<UserInner<S, D, B>>,
}

impl<S, D, B> Clone for UserPoller<S, D, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, D, B> UserPoller<S, D, B>
where
    S: DataSource,
    D: DomSink,
    B: HostBridge,
{
    pub fn new(source: S, dom: D, bridge: B) -> Self {
        Self {
            inner: Rc::new(UserInner {
                source,
                dom,
                bridge,
                status_seq: Sequencer::new(),
                board_seq: Sequencer::new(),
            }),
        }
    }

    /// Fetch and render the current user's stats; no-op without a user id
    pub async fn refresh_user(&self) {
        let inner = &self.inner;
        let Some(user_id) = inner.bridge.user_id() else {
            console_debug!("No user id from host yet");
            return;
        };

        let ticket = inner.status_seq.issue();
        match inner.source.user_status(user_id).await {
            Ok(status) => {
                if inner.status_seq.admit(ticket) {
                    apply_or_log(&inner.dom, &render::user_status(&status), "user data");
                } else {
                    console_debug!("Dropping stale user data {ticket:?}");
                }
            }
            Err(e) => console_error!("Error loading user data: {e}"),
        }
    }

    /// Fetch and render the leaderboard
    pub async fn refresh_leaderboard(&self) {
        let inner = &self.inner;
        let ticket = inner.board_seq.issue();
        match inner.source.leaderboard().await {
            Ok(entries) => {
                if inner.board_seq.admit(ticket) {
                    apply_or_log(&inner.dom, &[render::leaderboard(&entries)], "leaderboard");
                } else {
                    console_debug!("Dropping stale leaderboard {ticket:?}");
                }
            }
            Err(e) => console_error!("Error loading leaderboard: {e}"),
        }
    }
}

impl<S, D, B> PollCycle for UserPoller<S, D, B>
where
    S: DataSource + 'static,
    D: DomSink + 'static,
    B: HostBridge + 'static,
{
    fn name(&self) -> &'static str {
        "user"
    }

    async fn poll_once(&self) {
        futures::join!(self.refresh_user(), self.refresh_leaderboard());
    }
}

struct StatsInner<S, D, F: ChartFactory> {
    source: S,
    dom: D,
    chart: ChartLatch<F>,
    seq: Sequencer,
}

/// System/bot stats cycle
pub struct StatsPoller<S, D, F: ChartFactory> {
    inner: Rc<StatsInner<S, D, F>>,
}

impl<S, D, F: ChartFactory> Clone for StatsPoller<S, D, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, D, F> StatsPoller<S, D, F>
where
    S: DataSource,
    D: DomSink,
    F: ChartFactory,
{
    pub fn new(source: S, dom: D, charts: F) -> Self {
        Self {
            inner: Rc::new(StatsInner {
                source,
                dom,
                chart: ChartLatch::new(charts),
                seq: Sequencer::new(),
            }),
        }
    }

    pub fn chart_created(&self) -> bool {
        self.inner.chart.is_created()
    }

    /// Fetch and render stats; creates the chart after the first success
    pub async fn refresh(&self) {
        let inner = &self.inner;
        let ticket = inner.seq.issue();

        let fetched = inner.source.system_stats().await.and_then(StatsReply::into_result);
        let stats = match fetched {
            Ok(stats) => stats,
            Err(e) => {
                console_error!("Error fetching stats: {e}");
                return;
            }
        };

        if !inner.seq.admit(ticket) {
            console_debug!("Dropping stale stats {ticket:?}");
            return;
        }
        if apply_or_log(&inner.dom, &render::system_stats(&stats), "stats") {
            inner.chart.ensure();
        }
    }
}

impl<S, D, F> PollCycle for StatsPoller<S, D, F>
where
    S: DataSource + 'static,
    D: DomSink + 'static,
    F: ChartFactory + 'static,
{
    fn name(&self) -> &'static str {
        "stats"
    }

    async fn poll_once(&self) {
        self.refresh().await;
    }
}
