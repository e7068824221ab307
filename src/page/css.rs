//! Dashboard CSS styles
//!
//! Follows the Telegram theme variables when the page runs inside the
//! client, with dark fallbacks for a plain browser.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: var(--tg-theme-bg-color, #0d1117);
    --card: var(--tg-theme-secondary-bg-color, #161b22);
    --border: #30363d;
    --text: var(--tg-theme-text-color, #c9d1d9);
    --text-dim: var(--tg-theme-hint-color, #8b949e);
    --accent: var(--tg-theme-button-color, #58a6ff);
    --accent-text: var(--tg-theme-button-text-color, #ffffff);
    --green: #3fb950;
    --yellow: #d29922;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 16px;
    min-height: 100vh;
}

.container { max-width: 960px; margin: 0 auto; }

h1 { font-size: 22px; font-weight: 600; margin-bottom: 16px; }

/* Grid Layout */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 12px;
}

.wide { grid-column: 1 / -1; }

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 16px;
}

.card-title {
    font-size: 13px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 12px;
}

.card-value { font-size: 26px; font-weight: 700; }

/* Metrics */
.metrics { display: flex; flex-wrap: wrap; gap: 12px; }
.metric { flex: 1; min-width: 90px; }
.metric-label { font-size: 11px; color: var(--text-dim); text-transform: uppercase; }
.metric-value { font-size: 20px; font-weight: 600; margin-top: 2px; }

/* Buttons */
.actions { display: flex; gap: 12px; margin: 16px 0; }

.btn {
    flex: 1;
    padding: 12px 16px;
    border-radius: 8px;
    border: none;
    font-size: 15px;
    font-weight: 600;
    cursor: pointer;
    background: var(--accent);
    color: var(--accent-text);
}

/* Buffs */
.buff-item {
    background: rgba(63, 185, 80, 0.1);
    border-radius: 8px;
    padding: 10px 12px;
    margin-top: 8px;
}

.buff-content h4 { font-size: 14px; }
.buff-content p { font-size: 12px; color: var(--text-dim); margin-top: 2px; }

/* Leaderboard */
.leaderboard-item {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 8px 0;
    border-bottom: 1px solid var(--border);
}

.leaderboard-item:last-child { border-bottom: none; }
.leaderboard-item .position { width: 24px; font-weight: 700; color: var(--yellow); }
.leaderboard-item .name { flex: 1; }
.leaderboard-item .score { font-size: 12px; color: var(--text-dim); }

/* Progress bars */
.progress {
    height: 22px;
    background: rgba(255, 255, 255, 0.06);
    border-radius: 6px;
    overflow: hidden;
    margin-bottom: 10px;
}

.progress-bar {
    height: 100%;
    width: 0%;
    background: var(--accent);
    color: var(--accent-text);
    font-size: 12px;
    line-height: 22px;
    text-align: center;
    transition: width 0.4s;
}

.chart-wrap { position: relative; height: 280px; }

/* Responsive */
@media (max-width: 600px) {
    .grid { grid-template-columns: 1fr; }
    .actions { flex-direction: column; }
}
";
