//! Dashboard overview and the printable analytics report.

use dioxus::prelude::*;
use store::WorkforceStats;

use crate::icons::{FaArrowTrendUp, FaChartColumn, FaGaugeHigh, FaPrint};
use crate::{platform, use_directory, Icon, StatCard, StatTone};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

const FLOW_LINE: &str = "M0,160 C50,150 70,80 120,90 C170,100 200,40 250,50 C300,60 350,120 400,100";

const FLOW_POINTS: [(u32, u32); 3] = [(120, 90), (250, 50), (400, 100)];

/// Label, bar colour class and share in percent.
const DEPARTMENTS: [(&str, &str, u32); 4] = [
    ("Engineering", "bar-indigo", 45),
    ("Marketing", "bar-emerald", 25),
    ("Design", "bar-amber", 20),
    ("HR", "bar-rose", 10),
];

#[component]
pub fn DashboardView() -> Element {
    let directory = use_directory();
    let stats = WorkforceStats::from_records(&directory.records().read());
    let mut show_reports = use_signal(|| false);

    let (title, subtitle) = if show_reports() {
        (
            "Detailed Analytics Report",
            "Comprehensive workforce metrics and insights.",
        )
    } else {
        (
            "Dashboard Overview",
            "Welcome back! Here's what's happening with your workforce.",
        )
    };

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "page dashboard",
            div {
                class: "page-header no-print",
                div {
                    h1 { class: "page-title", "{title}" }
                    p { class: "page-subtitle", "{subtitle}" }
                }
                div {
                    class: "page-actions",
                    if show_reports() {
                        button {
                            class: "button secondary",
                            onclick: move |_| platform::print_page(),
                            Icon { icon: FaPrint, width: 14, height: 14 }
                            span { "Print Report" }
                        }
                    }
                    button {
                        class: "button primary",
                        onclick: move |_| show_reports.set(!show_reports()),
                        if show_reports() {
                            Icon { icon: FaGaugeHigh, width: 14, height: 14 }
                            span { "Back to Dashboard" }
                        } else {
                            Icon { icon: FaChartColumn, width: 14, height: 14 }
                            span { "View Reports" }
                        }
                    }
                }
            }

            if show_reports() {
                ReportPanel { stats: stats.clone() }
            } else {
                div {
                    class: "stat-grid",
                    StatCard { label: "Total Employees", value: stats.total, tone: StatTone::Total }
                    StatCard { label: "Active", value: stats.active, tone: StatTone::Active }
                    StatCard { label: "Inactive", value: stats.inactive, tone: StatTone::Inactive }
                }
                div {
                    class: "chart-grid",
                    FlowChart {}
                    DepartmentChart {}
                }
                PromoBanner {}
            }
        }
    }
}

#[component]
fn FlowChart() -> Element {
    let area = format!("{FLOW_LINE} L400,200 L0,200 Z");

    rsx! {
        div {
            class: "card flow-chart",
            div {
                class: "card-header",
                div {
                    h4 { "Performance Analysis" }
                    p { class: "card-caption", "Real-time workforce efficiency" }
                }
                div {
                    class: "segmented",
                    span { class: "active", "Flow" }
                    span { "Grid" }
                }
            }
            div {
                class: "flow-canvas",
                svg {
                    "viewBox": "0 0 400 200",
                    "preserveAspectRatio": "none",
                    defs {
                        linearGradient {
                            id: "areaGradient",
                            "x1": "0", "y1": "0", "x2": "0", "y2": "1",
                            stop { "offset": "0%", "stop-color": "#4f46e5", "stop-opacity": "0.3" }
                            stop { "offset": "100%", "stop-color": "#4f46e5", "stop-opacity": "0" }
                        }
                        linearGradient {
                            id: "lineGradient",
                            "x1": "0", "y1": "0", "x2": "1", "y2": "0",
                            stop { "offset": "0%", "stop-color": "#818cf8" }
                            stop { "offset": "50%", "stop-color": "#4f46e5" }
                            stop { "offset": "100%", "stop-color": "#c084fc" }
                        }
                    }
                    for i in 0..5u32 {
                        line {
                            key: "{i}",
                            "x1": "0",
                            "y1": "{i * 40}",
                            "x2": "400",
                            "y2": "{i * 40}",
                            stroke: "#f1f5f9",
                            "stroke-width": "1",
                        }
                    }
                    path { "d": "{area}", fill: "url(#areaGradient)" }
                    path {
                        "d": FLOW_LINE,
                        fill: "none",
                        stroke: "url(#lineGradient)",
                        "stroke-width": "4",
                        "stroke-linecap": "round",
                    }
                    for (x, y) in FLOW_POINTS {
                        circle {
                            key: "{x}",
                            "cx": "{x}",
                            "cy": "{y}",
                            "r": "6",
                            fill: "#fff",
                            stroke: "#4f46e5",
                            "stroke-width": "3",
                        }
                    }
                }
                div {
                    class: "flow-legend",
                    for month in MONTHS {
                        span { key: "{month}", "{month}" }
                    }
                }
                div {
                    class: "flow-badge no-print",
                    Icon { icon: FaArrowTrendUp, width: 10, height: 10 }
                    span { "+12.5%" }
                }
            }
        }
    }
}

#[component]
fn DepartmentChart() -> Element {
    rsx! {
        div {
            class: "card department-chart",
            div {
                class: "card-header",
                div {
                    h4 { "Department Distribution" }
                    p { class: "card-caption", "Workforce split" }
                }
            }
            div {
                class: "bars",
                for (label, color, share) in DEPARTMENTS {
                    div {
                        key: "{label}",
                        class: "bar-row",
                        div {
                            class: "bar-label",
                            span { "{label}" }
                            span { "{share}%" }
                        }
                        div {
                            class: "bar-track",
                            div { class: "bar-fill {color}", style: "width: {share}%" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PromoBanner() -> Element {
    rsx! {
        div {
            class: "promo-banner no-print",
            span { class: "promo-tag", "New Feature" }
            h3 { "Automate your HR workflows today." }
            p { "Save up to 10 hours a week on administrative tasks with our AI tools." }
            button { class: "button light", "Explore Automation" }
        }
    }
}

/// Printable summary computed from the live collection.
#[component]
fn ReportPanel(stats: WorkforceStats) -> Element {
    let today = platform::now().format("%m/%d/%Y").to_string();
    let summary = [
        ("Total Employees", stats.total),
        ("Active", stats.active),
        ("Inactive", stats.inactive),
    ];

    rsx! {
        div {
            class: "card report-panel",
            div {
                class: "print-only print-header",
                h1 { "Workforce Analytics Report" }
                p { "Date: {today} | Admin: EMS PRO" }
            }

            div {
                class: "report-summary",
                for (label, value) in summary {
                    div {
                        key: "{label}",
                        class: "report-metric",
                        p { class: "card-caption", "{label}" }
                        h2 { "{value}" }
                        p { class: "report-share", "{stats.percent(value)}% of workforce" }
                    }
                }
            }

            div {
                class: "report-section",
                h3 {
                    Icon { icon: FaArrowTrendUp, width: 16, height: 16 }
                    span { "Workforce Breakdown" }
                }
                div {
                    class: "report-tables",
                    table {
                        class: "report-table",
                        thead {
                            tr {
                                th { "Gender" }
                                th { "Employees" }
                                th { "Share" }
                            }
                        }
                        tbody {
                            for (gender, count) in stats.by_gender.iter().copied() {
                                tr {
                                    key: "{gender}",
                                    td { "{gender}" }
                                    td { "{count}" }
                                    td { "{stats.percent(count)}%" }
                                }
                            }
                        }
                    }
                    table {
                        class: "report-table",
                        thead {
                            tr {
                                th { "State" }
                                th { "Employees" }
                                th { "Share" }
                            }
                        }
                        tbody {
                            if stats.by_region.is_empty() {
                                tr {
                                    td { colspan: "3", class: "muted", "No employees yet" }
                                }
                            }
                            for (region, count) in stats.by_region.iter().copied() {
                                tr {
                                    key: "{region}",
                                    td { "{region}" }
                                    td { "{count}" }
                                    td { "{stats.percent(count)}%" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "report-section",
                h3 {
                    Icon { icon: FaChartColumn, width: 16, height: 16 }
                    span { "Performance Overview" }
                }
                table {
                    class: "report-table",
                    thead {
                        tr {
                            th { "Metric" }
                            th { "Current Value" }
                            th { "Trend" }
                        }
                    }
                    tbody {
                        tr {
                            td { "Organization Health" }
                            td { "94%" }
                            td { class: "trend-up", "Positive" }
                        }
                        tr {
                            td { "Employee Retention" }
                            td { "88%" }
                            td { class: "trend-up", "Improved" }
                        }
                        tr {
                            td { "Avg. Tenure" }
                            td { "2.4 Years" }
                            td { class: "trend-flat", "Stable" }
                        }
                    }
                }
            }
        }
    }
}
