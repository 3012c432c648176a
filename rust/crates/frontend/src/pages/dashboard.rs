//! Dashboard page component with results overview.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{BarChart, BarDatum, StatCard};

/// Department results shown on the dashboard.
const DEPARTMENT_RESULTS: [BarDatum; 4] = [
    BarDatum {
        label: "CSE",
        passed: 90,
        failed: 10,
    },
    BarDatum {
        label: "ECE",
        passed: 80,
        failed: 20,
    },
    BarDatum {
        label: "MECH",
        passed: 70,
        failed: 30,
    },
    BarDatum {
        label: "CIVIL",
        passed: 60,
        failed: 40,
    },
];

/// Overall pass/fail split across all students.
const OVERALL: BarDatum = BarDatum {
    label: "All students",
    passed: 300,
    failed: 100,
};

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let pass_rate = OVERALL.pass_percent();

    html! {
        <div>
            <h1>{"Student Management Dashboard"}</h1>

            <div class="stats-grid">
                <StatCard
                    value={(OVERALL.passed + OVERALL.failed).to_string()}
                    label={"Students"}
                />
                <StatCard
                    value={OVERALL.passed.to_string()}
                    label={"Passed"}
                    tone={"positive"}
                />
                <StatCard
                    value={OVERALL.failed.to_string()}
                    label={"Failed"}
                    tone={"negative"}
                />
                <StatCard
                    value={format!("{pass_rate:.1}%")}
                    label={"Pass Rate"}
                />
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Quick Actions"}</h2>
                </div>
                <div style="display: flex; gap: 1rem;">
                    <Link<Route> to={Route::Students} classes="btn btn-primary">
                        {"Student Records"}
                    </Link<Route>>
                    <Link<Route> to={Route::Register} classes="btn btn-secondary">
                        {"Register Student"}
                    </Link<Route>>
                    <Link<Route> to={Route::Talk} classes="btn btn-secondary">
                        {"Talk To Students"}
                    </Link<Route>>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Department Results"}</h2>
                </div>
                <BarChart data={DEPARTMENT_RESULTS.to_vec()} />
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Overall Pass / Fail"}</h2>
                </div>
                <BarChart data={vec![OVERALL]} />
            </div>
        </div>
    }
}
