//! Test doubles for the browser-facing seams

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;

use crate::bridge::HostBridge;
use crate::chart::ChartFactory;
use crate::client::DataSource;
use crate::dom::DomSink;
use crate::error::{DashboardError, Result};
use crate::render::{DomOp, Node};
use crate::types::{LeaderboardEntry, StatsReply, UserStatus};

/// In-memory element state keyed by id
#[derive(Default)]
struct Elements {
    text: HashMap<&'static str, String>,
    styles: HashMap<(&'static str, &'static str), String>,
    attributes: HashMap<(&'static str, &'static str), String>,
    children: HashMap<&'static str, Vec<Node>>,
    mutations: usize,
    missing: HashSet<String>,
}

#[derive(Clone, Default)]
pub struct RecordingDom {
    state: Rc<RefCell<Elements>>,
}

impl RecordingDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page where the given ids do not exist
    pub fn missing(ids: &[&str]) -> Self {
        let dom = Self::default();
        dom.state.borrow_mut().missing = ids.iter().map(|id| (*id).to_string()).collect();
        dom
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.state.borrow().text.get(id).cloned()
    }

    pub fn style(&self, id: &'static str, property: &'static str) -> Option<String> {
        self.state.borrow().styles.get(&(id, property)).cloned()
    }

    pub fn attribute(&self, id: &'static str, name: &'static str) -> Option<String> {
        self.state.borrow().attributes.get(&(id, name)).cloned()
    }

    pub fn children(&self, id: &str) -> Option<Vec<Node>> {
        self.state.borrow().children.get(id).cloned()
    }

    pub fn mutation_count(&self) -> usize {
        self.state.borrow().mutations
    }
}

impl DomSink for RecordingDom {
    fn apply(&self, ops: &[DomOp]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        for op in ops {
            if state.missing.contains(op.target()) {
                return Err(DashboardError::Dom(format!("element #{} not found", op.target())));
            }
            match op.clone() {
                DomOp::SetText { id, text } => {
                    state.text.insert(id, text);
                }
                DomOp::SetStyle {
                    id,
                    property,
                    value,
                } => {
                    state.styles.insert((id, property), value);
                }
                DomOp::SetAttribute { id, name, value } => {
                    state.attributes.insert((id, name), value);
                }
                DomOp::ReplaceChildren { id, children } => {
                    state.children.insert(id, children);
                }
            }
            state.mutations += 1;
        }
        Ok(())
    }
}

/// Bridge with a fixed user id that records outbound payloads
#[derive(Clone, Default)]
pub struct FakeBridge {
    user_id: Option<i64>,
    sent: Rc<RefCell<Vec<String>>>,
}

impl FakeBridge {
    pub fn with_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl HostBridge for FakeBridge {
    fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    fn send_data(&self, payload: &str) -> Result<()> {
        self.sent.borrow_mut().push(payload.to_string());
        Ok(())
    }
}

/// A scripted response: available now, or once the test sends it
pub enum Reply<T> {
    Ready(Result<T>),
    Pending(oneshot::Receiver<Result<T>>),
}

impl<T> Reply<T> {
    pub fn ready(result: Result<T>) -> Self {
        Reply::Ready(result)
    }

    pub fn pending() -> (Self, oneshot::Sender<Result<T>>) {
        let (tx, rx) = oneshot::channel();
        (Reply::Pending(rx), tx)
    }

    async fn resolve(self) -> Result<T> {
        match self {
            Reply::Ready(result) => result,
            Reply::Pending(rx) => rx
                .await
                .unwrap_or_else(|_| Err(DashboardError::Http("request cancelled".into()))),
        }
    }
}

#[derive(Default)]
struct Script {
    users: VecDeque<Reply<UserStatus>>,
    boards: VecDeque<Reply<Vec<LeaderboardEntry>>>,
    stats: VecDeque<Reply<StatsReply>>,
    user_requests: Vec<i64>,
}

/// Data source answering from per-endpoint queues, in call order
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Rc<RefCell<Script>>,
}

fn unscripted<T>() -> Reply<T> {
    Reply::Ready(Err(DashboardError::Http("no scripted reply".into())))
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&self, reply: Reply<UserStatus>) {
        self.script.borrow_mut().users.push_back(reply);
    }

    pub fn push_board(&self, reply: Reply<Vec<LeaderboardEntry>>) {
        self.script.borrow_mut().boards.push_back(reply);
    }

    pub fn push_stats(&self, reply: Reply<StatsReply>) {
        self.script.borrow_mut().stats.push_back(reply);
    }

    pub fn user_requests(&self) -> Vec<i64> {
        self.script.borrow().user_requests.clone()
    }
}

impl DataSource for ScriptedSource {
    async fn user_status(&self, user_id: i64) -> Result<UserStatus> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.user_requests.push(user_id);
            script.users.pop_front().unwrap_or_else(unscripted)
        };
        reply.resolve().await
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let reply = self.script.borrow_mut().boards.pop_front().unwrap_or_else(unscripted);
        reply.resolve().await
    }

    async fn system_stats(&self) -> Result<StatsReply> {
        let reply = self.script.borrow_mut().stats.pop_front().unwrap_or_else(unscripted);
        reply.resolve().await
    }
}

/// Chart factory that counts attempts and can fail the first few
#[derive(Clone, Default)]
pub struct CountingCharts {
    attempts: Rc<Cell<u32>>,
    created: Rc<Cell<u32>>,
    fail_first: u32,
}

impl CountingCharts {
    pub fn failing_first(fail_first: u32) -> Self {
        Self {
            fail_first,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }

    pub fn created(&self) -> u32 {
        self.created.get()
    }
}

impl ChartFactory for CountingCharts {
    type Chart = u32;

    fn create(&self) -> Result<u32> {
        let attempt = self.attempts.get() + 1;
        self.attempts.set(attempt);
        if attempt <= self.fail_first {
            return Err(DashboardError::Js("Chart is not defined".into()));
        }
        self.created.set(self.created.get() + 1);
        Ok(attempt)
    }
}
