//! Page templates - the DOM contract the renderer writes into
//!
//! Separated into HTML and CSS submodules like any static page, plus the
//! element ids shared with `render`.
//!
//! # Pages
//! - `user_page_html`: the Telegram Web App opened from the bot menu
//! - `stats_page_html`: operator view with host load and the activity chart
//!
//! Both pages load the wasm package from `pkg_base` and call the matching
//! exported entry point once the module is initialised. `write_pages` (and
//! the `courier-pages` binary) puts them on disk next to the wasm bundle.

mod css;
mod html;

/// Element ids written by the pollers
pub mod ids {
    pub const DELIVERIES: &str = "deliveries";
    pub const BALANCE: &str = "balance";
    pub const RANK: &str = "rank";
    pub const BUFFS_LIST: &str = "buffs-list";
    pub const TOP_COURIERS: &str = "top-couriers";

    pub const CPU_USAGE: &str = "cpu-usage";
    pub const MEMORY_USAGE: &str = "memory-usage";
    pub const DISK_USAGE: &str = "disk-usage";
    pub const SYSTEM_UPTIME: &str = "system-uptime";
    pub const USERS_COUNT: &str = "stats-users-count";
    pub const DELIVERIES_COUNT: &str = "stats-deliveries-count";
    pub const EARNINGS_COUNT: &str = "stats-earnings-count";
    pub const BUFFS_COUNT: &str = "stats-buffs-count";
    pub const ACTIVITY_CHART: &str = "activity-chart";
}

const TELEGRAM_SCRIPT: &str = "https://telegram.org/js/telegram-web-app.js";
const CHART_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/chart.js";
const PKG_MODULE: &str = "courier_dashboard.js";

/// Generate the user dashboard page
pub fn user_page_html(pkg_base: &str) -> String {
    render_page(
        "Курьерская служба",
        TELEGRAM_SCRIPT,
        html::USER_TEMPLATE,
        pkg_base,
        "startUserDashboard",
    )
}

/// Generate the system stats page
pub fn stats_page_html(pkg_base: &str) -> String {
    render_page(
        "Статистика бота",
        CHART_SCRIPT,
        html::STATS_TEMPLATE,
        pkg_base,
        "startStatsDashboard",
    )
}

/// File names the pages are written under
pub const USER_PAGE_FILE: &str = "index.html";
pub const STATS_PAGE_FILE: &str = "stats.html";

/// Write both pages into `out_dir`, creating it if needed
///
/// `pkg_base` is the URL prefix the wasm-bindgen output is served from.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_pages(
    out_dir: &std::path::Path,
    pkg_base: &str,
) -> crate::error::Result<Vec<std::path::PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(2);
    for (file, html) in [
        (USER_PAGE_FILE, user_page_html(pkg_base)),
        (STATS_PAGE_FILE, stats_page_html(pkg_base)),
    ] {
        let path = out_dir.join(file);
        std::fs::write(&path, html)?;
        written.push(path);
    }
    Ok(written)
}

fn render_page(title: &str, vendor_script: &str, body: &str, pkg_base: &str, entry: &str) -> String {
    let pkg_base = pkg_base.trim_end_matches('/');
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{vendor_script}"></script>
    <style>
{css}
    </style>
</head>
<body>
{body}
    <script type="module">
import init, {{ {entry} }} from '{pkg_base}/{PKG_MODULE}';
await init();
{entry}();
    </script>
</body>
</html>"#,
        css = css::STYLES,
    )
}
