//! Dashboard HTML template
//!
//! Contains the main page structure including:
//! - Header with last-updated time, refresh and add-data controls
//! - Revenue, profit, margin and health score cards
//! - Health bar with tier label
//! - Trends chart canvas and alert list
//! - Data-entry modal

pub const TEMPLATE: &str = r#"
    <div class="container mx-auto max-w-6xl p-6 space-y-6">
        <header class="flex items-center justify-between border-b border-slate-800 pb-4">
            <div>
                <h1 class="text-2xl font-semibold">BizHealth Dashboard</h1>
                <span class="refresh-time" id="refreshTime">Loading...</span>
            </div>
            <div class="flex items-center space-x-3">
                <button class="btn btn-secondary" id="refreshBtn">Refresh</button>
                <button class="btn btn-primary" id="openModalBtn">Add Data</button>
            </div>
        </header>

        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <!-- Revenue Card -->
            <div class="card">
                <div class="card-title">Total Revenue</div>
                <div class="card-value" id="stat-revenue">$--</div>
            </div>

            <!-- Profit Card -->
            <div class="card">
                <div class="card-title">Net Profit</div>
                <div class="card-value" id="stat-profit">$--</div>
            </div>

            <!-- Margin Card -->
            <div class="card">
                <div class="card-title">Profit Margin</div>
                <div class="card-value" id="stat-margin">--%</div>
            </div>

            <!-- Health Card -->
            <div class="card">
                <div class="card-title">Health Score</div>
                <div class="flex items-baseline space-x-2">
                    <span class="card-value" id="stat-health">--</span>
                    <span class="health-label" id="stat-health-label"></span>
                </div>
                <div class="health-track">
                    <div class="bg-slate-600 h-full transition-all duration-1000" id="health-bar" style="width: 0%"></div>
                </div>
            </div>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <!-- Trends Chart -->
            <div class="card md:col-span-2">
                <div class="card-title">Revenue vs Expenses</div>
                <canvas id="trendsChart" height="240"></canvas>
            </div>

            <!-- Alerts -->
            <div class="card">
                <div class="card-title">Smart Alerts</div>
                <div class="space-y-3" id="alerts-container"></div>
            </div>
        </div>
    </div>

    <!-- Data Entry Modal -->
    <div class="modal hidden" id="modal">
        <div class="modal-panel">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold">Add Financial Record</h2>
                <button class="btn btn-secondary" id="closeModalBtn" type="button">Close</button>
            </div>
            <form class="space-y-3" id="dataForm">
                <label class="field">Date <input type="date" id="date" required></label>
                <label class="field">Revenue <input type="number" step="0.01" id="revenue" required></label>
                <label class="field">Expenses <input type="number" step="0.01" id="expenses" required></label>
                <label class="field">Inventory Cost <input type="number" step="0.01" id="inventory" required></label>
                <label class="field">Category
                    <select id="category">
                        <option value="General">General</option>
                        <option value="Retail">Retail</option>
                        <option value="Services">Services</option>
                        <option value="Wholesale">Wholesale</option>
                    </select>
                </label>
                <button class="btn btn-primary w-full" id="submitBtn" type="submit">Save Entry</button>
            </form>
        </div>
    </div>
"#;
