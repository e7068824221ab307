//! View models to DOM operations
//!
//! Everything here is pure: the pollers hand the resulting `DomOp` lists to
//! a `DomSink`, which is the only place that touches a real document. This
//! keeps the "what gets shown" rules testable without a browser.

use crate::page::ids;
use crate::types::{Buff, LeaderboardEntry, Scalar, SystemStats, UserStatus};

/// Shown where a text value is missing
pub const PLACEHOLDER: &str = "-";

/// Element to build when replacing a container's children
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            text: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Concatenated text of this node and its descendants, in document order
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}

/// A single mutation of an element looked up by id
#[derive(Debug, Clone, PartialEq)]
pub enum DomOp {
    SetText {
        id: &'static str,
        text: String,
    },
    SetStyle {
        id: &'static str,
        property: &'static str,
        value: String,
    },
    SetAttribute {
        id: &'static str,
        name: &'static str,
        value: String,
    },
    /// Drop every existing child, then append `children` in order
    ReplaceChildren {
        id: &'static str,
        children: Vec<Node>,
    },
}

impl DomOp {
    pub fn target(&self) -> &'static str {
        match self {
            DomOp::SetText { id, .. }
            | DomOp::SetStyle { id, .. }
            | DomOp::SetAttribute { id, .. }
            | DomOp::ReplaceChildren { id, .. } => *id,
        }
    }
}

/// Format a number the way the page always has: `12` not `12.0`, `12.5` as is
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    value.to_string()
}

fn text_or_placeholder(value: Option<&Scalar>) -> String {
    match value {
        Some(v) if !v.is_blank() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn set_text(id: &'static str, text: impl Into<String>) -> DomOp {
    DomOp::SetText {
        id,
        text: text.into(),
    }
}

/// Personal counters plus, when the response carries them, the buff list
pub fn user_status(status: &UserStatus) -> Vec<DomOp> {
    let mut ops = vec![
        set_text(ids::DELIVERIES, status.deliveries.unwrap_or(0).to_string()),
        set_text(ids::BALANCE, format_number(status.balance.unwrap_or(0.0))),
        set_text(ids::RANK, text_or_placeholder(status.rank.as_ref())),
    ];

    if let Some(buffs) = &status.active_buffs {
        ops.push(buff_list(buffs));
    }
    ops
}

/// One `.buff-item` per buff, replacing whatever was listed before
pub fn buff_list(buffs: &[Buff]) -> DomOp {
    DomOp::ReplaceChildren {
        id: ids::BUFFS_LIST,
        children: buffs.iter().map(buff_item).collect(),
    }
}

fn buff_item(buff: &Buff) -> Node {
    let name = buff.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(PLACEHOLDER);
    let bonus = format_number(buff.bonus.unwrap_or(0.0));
    let minutes = buff.remaining_minutes.unwrap_or(0);

    Node::new("div").class("buff-item").child(
        Node::new("div")
            .class("buff-content")
            .child(Node::new("h4").text(name))
            .child(Node::new("p").text(format!("+{bonus}% к доходу")))
            .child(Node::new("p").text(format!("Осталось: {minutes} мин"))),
    )
}

/// Top couriers, numbered from 1 in response order
pub fn leaderboard(entries: &[LeaderboardEntry]) -> DomOp {
    let children = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let name = entry.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(PLACEHOLDER);
            Node::new("div")
                .class("leaderboard-item")
                .child(Node::new("span").class("position").text((index + 1).to_string()))
                .child(Node::new("span").class("name").text(name))
                .child(
                    Node::new("span")
                        .class("score")
                        .text(format!("{} доставок", entry.deliveries.unwrap_or(0))),
                )
        })
        .collect();

    DomOp::ReplaceChildren {
        id: ids::TOP_COURIERS,
        children,
    }
}

/// Text, width and `aria-valuenow` of one progress bar
pub fn percent_bar(id: &'static str, percent: Option<f64>) -> [DomOp; 3] {
    let value = format_number(percent.unwrap_or(0.0));
    [
        DomOp::SetStyle {
            id,
            property: "width",
            value: format!("{value}%"),
        },
        set_text(id, format!("{value}%")),
        DomOp::SetAttribute {
            id,
            name: "aria-valuenow",
            value,
        },
    ]
}

/// Host load bars, uptime and bot totals
pub fn system_stats(stats: &SystemStats) -> Vec<DomOp> {
    let system = &stats.system;
    let bot = &stats.bot;

    let mut ops = Vec::with_capacity(14);
    ops.extend(percent_bar(ids::CPU_USAGE, system.cpu));
    ops.extend(percent_bar(ids::MEMORY_USAGE, system.memory));
    ops.extend(percent_bar(ids::DISK_USAGE, system.disk));
    ops.push(set_text(ids::SYSTEM_UPTIME, text_or_placeholder(system.uptime.as_ref())));

    ops.push(set_text(ids::USERS_COUNT, bot.total_users.unwrap_or(0).to_string()));
    ops.push(set_text(
        ids::DELIVERIES_COUNT,
        bot.total_deliveries.unwrap_or(0).to_string(),
    ));
    ops.push(set_text(
        ids::EARNINGS_COUNT,
        format_number(bot.total_earnings.unwrap_or(0.0)),
    ));
    ops.push(set_text(ids::BUFFS_COUNT, bot.active_buffs.unwrap_or(0).to_string()));
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BotInfo, SystemInfo};

    fn text_of<'a>(ops: &'a [DomOp], target: &str) -> Option<&'a str> {
        ops.iter().find_map(|op| match op {
            DomOp::SetText { id, text } if *id == target => Some(text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1500.75), "1500.75");
    }

    #[test]
    fn test_user_status_values() {
        let status = UserStatus {
            deliveries: Some(42),
            balance: Some(1350.5),
            rank: Some(Scalar::Text("Опытный курьер".into())),
            active_buffs: None,
        };
        let ops = user_status(&status);
        assert_eq!(ops.len(), 3);
        assert_eq!(text_of(&ops, ids::DELIVERIES), Some("42"));
        assert_eq!(text_of(&ops, ids::BALANCE), Some("1350.5"));
        assert_eq!(text_of(&ops, ids::RANK), Some("Опытный курьер"));
    }

    #[test]
    fn test_user_status_fallbacks() {
        let ops = user_status(&UserStatus::default());
        assert_eq!(text_of(&ops, ids::DELIVERIES), Some("0"));
        assert_eq!(text_of(&ops, ids::BALANCE), Some("0"));
        assert_eq!(text_of(&ops, ids::RANK), Some("-"));

        let blank_rank = UserStatus {
            rank: Some(Scalar::Text(String::new())),
            ..UserStatus::default()
        };
        assert_eq!(text_of(&user_status(&blank_rank), ids::RANK), Some("-"));
    }

    #[test]
    fn test_buff_entries() {
        let buffs = vec![
            Buff {
                name: Some("Энергетик".into()),
                bonus: Some(15.0),
                remaining_minutes: Some(42),
            },
            Buff {
                name: Some("Велосипед".into()),
                bonus: Some(50.0),
                remaining_minutes: Some(5),
            },
            Buff {
                name: None,
                bonus: None,
                remaining_minutes: None,
            },
        ];
        let status = UserStatus {
            active_buffs: Some(buffs),
            ..UserStatus::default()
        };
        let ops = user_status(&status);

        let Some(DomOp::ReplaceChildren { id, children }) = ops.last() else {
            panic!("expected buff list replacement");
        };
        assert_eq!(*id, ids::BUFFS_LIST);
        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|c| c.class == Some("buff-item")));

        let first = children[0].text_content();
        assert!(first.contains("Энергетик"));
        assert!(first.contains("+15% к доходу"));
        assert!(first.contains("Осталось: 42 мин"));

        let last = children[2].text_content();
        assert!(last.starts_with('-'));
        assert!(last.contains("+0% к доходу"));
    }

    #[test]
    fn test_empty_buffs_clear_list() {
        let status = UserStatus {
            active_buffs: Some(vec![]),
            ..UserStatus::default()
        };
        let ops = user_status(&status);
        assert_eq!(
            ops.last(),
            Some(&DomOp::ReplaceChildren {
                id: ids::BUFFS_LIST,
                children: vec![]
            })
        );
    }

    #[test]
    fn test_leaderboard_numbering() {
        let entries: Vec<LeaderboardEntry> = ["Аня", "Борис", "Вика", "Гоша"]
            .iter()
            .zip([90_i64, 75, 75, 3])
            .map(|(name, deliveries)| LeaderboardEntry {
                name: Some((*name).to_string()),
                deliveries: Some(deliveries),
            })
            .collect();

        let DomOp::ReplaceChildren { id, children } = leaderboard(&entries) else {
            panic!("expected replacement");
        };
        assert_eq!(id, ids::TOP_COURIERS);
        assert_eq!(children.len(), 4);
        for (i, (row, entry)) in children.iter().zip(&entries).enumerate() {
            assert_eq!(row.children[0].text.as_deref(), Some((i + 1).to_string().as_str()));
            assert_eq!(row.children[1].text, entry.name);
        }
        assert_eq!(children[1].children[2].text.as_deref(), Some("75 доставок"));
    }

    #[test]
    fn test_leaderboard_keeps_markup_as_text() {
        let entries = vec![LeaderboardEntry {
            name: Some("<img src=x onerror=alert(1)>".into()),
            deliveries: None,
        }];
        let DomOp::ReplaceChildren { children, .. } = leaderboard(&entries) else {
            panic!("expected replacement");
        };
        let name = &children[0].children[1];
        assert_eq!(name.text.as_deref(), Some("<img src=x onerror=alert(1)>"));
        assert!(name.children.is_empty());
        assert_eq!(children[0].children[2].text.as_deref(), Some("0 доставок"));
    }

    #[test]
    fn test_system_stats_ops() {
        let stats = SystemStats {
            system: SystemInfo {
                cpu: Some(12.5),
                memory: Some(40.0),
                disk: None,
                uptime: Some(Scalar::Text("3d 4h 5m 6s".into())),
            },
            bot: BotInfo {
                total_users: Some(120),
                total_deliveries: Some(4310),
                total_earnings: Some(98765.25),
                active_buffs: None,
            },
        };
        let ops = system_stats(&stats);
        assert_eq!(ops.len(), 14);

        assert!(ops.contains(&DomOp::SetStyle {
            id: ids::CPU_USAGE,
            property: "width",
            value: "12.5%".into()
        }));
        assert!(ops.contains(&DomOp::SetAttribute {
            id: ids::CPU_USAGE,
            name: "aria-valuenow",
            value: "12.5".into()
        }));
        assert_eq!(text_of(&ops, ids::MEMORY_USAGE), Some("40%"));
        assert_eq!(text_of(&ops, ids::DISK_USAGE), Some("0%"));
        assert_eq!(text_of(&ops, ids::SYSTEM_UPTIME), Some("3d 4h 5m 6s"));
        assert_eq!(text_of(&ops, ids::EARNINGS_COUNT), Some("98765.25"));
        assert_eq!(text_of(&ops, ids::BUFFS_COUNT), Some("0"));
    }

    #[test]
    fn test_system_stats_missing_uptime() {
        let ops = system_stats(&SystemStats::default());
        assert_eq!(text_of(&ops, ids::SYSTEM_UPTIME), Some("-"));
        assert_eq!(text_of(&ops, ids::USERS_COUNT), Some("0"));
    }
}
