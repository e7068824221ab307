//! Dashboard HTML templates
//!
//! Two pages:
//! - User page: personal counters, active buffs, top couriers, action buttons
//! - Stats page: host load bars, bot totals, 24h activity chart

pub const USER_TEMPLATE: &str = r#"
    <div class="container">
        <h1>🚚 Курьерская служба</h1>

        <div class="grid">
            <!-- Personal Card -->
            <div class="card">
                <div class="card-title">📦 Мой профиль</div>
                <div class="metrics">
                    <div class="metric">
                        <div class="metric-label">Доставки</div>
                        <div class="metric-value" id="deliveries">0</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Баланс</div>
                        <div class="metric-value" id="balance">0</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Место</div>
                        <div class="metric-value" id="rank">-</div>
                    </div>
                </div>
            </div>

            <!-- Buffs Card -->
            <div class="card">
                <div class="card-title">⚡ Активные бонусы</div>
                <div id="buffs-list"></div>
            </div>

            <!-- Leaderboard -->
            <div class="card wide">
                <div class="card-title">🏆 Лучшие курьеры</div>
                <div id="top-couriers"></div>
            </div>
        </div>

        <div class="actions">
            <button class="btn delivery-button">🚴 Начать доставку</button>
            <button class="btn shop-button">🛒 Магазин</button>
        </div>
    </div>
"#;

pub const STATS_TEMPLATE: &str = r#"
    <div class="container">
        <h1>📊 Статистика бота</h1>

        <div class="grid">
            <!-- Host Card -->
            <div class="card">
                <div class="card-title">🖥️ Система</div>
                <div class="metric-label">CPU</div>
                <div class="progress">
                    <div class="progress-bar" id="cpu-usage" role="progressbar" aria-valuenow="0" aria-valuemin="0" aria-valuemax="100">0%</div>
                </div>
                <div class="metric-label">Память</div>
                <div class="progress">
                    <div class="progress-bar" id="memory-usage" role="progressbar" aria-valuenow="0" aria-valuemin="0" aria-valuemax="100">0%</div>
                </div>
                <div class="metric-label">Диск</div>
                <div class="progress">
                    <div class="progress-bar" id="disk-usage" role="progressbar" aria-valuenow="0" aria-valuemin="0" aria-valuemax="100">0%</div>
                </div>
                <div class="metric-label">Аптайм</div>
                <div class="metric-value" id="system-uptime">-</div>
            </div>

            <!-- Bot Card -->
            <div class="card">
                <div class="card-title">🤖 Бот</div>
                <div class="metrics">
                    <div class="metric">
                        <div class="metric-label">Пользователи</div>
                        <div class="metric-value" id="stats-users-count">0</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Доставки</div>
                        <div class="metric-value" id="stats-deliveries-count">0</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Заработано</div>
                        <div class="metric-value" id="stats-earnings-count">0</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Бонусы</div>
                        <div class="metric-value" id="stats-buffs-count">0</div>
                    </div>
                </div>
            </div>

            <!-- Activity Chart -->
            <div class="card wide">
                <div class="card-title">📈 Активность</div>
                <div class="chart-wrap">
                    <canvas id="activity-chart"></canvas>
                </div>
            </div>
        </div>
    </div>
"#;
