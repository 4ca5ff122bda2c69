//! Category Charts Component
//!
//! Inline-SVG rendering of the per-category aggregation: a donut of value
//! share by category and grouped value-vs-equity bars.

use leptos::prelude::*;

use crate::charts::{max_bar_value, value_shares, CategoryTotals};
use crate::format::format_currency;

const DONUT_RADIUS: f64 = 50.0;

/// Donut + grouped bars for one asset list's category totals.
#[component]
pub fn CategoryCharts(groups: Vec<CategoryTotals>) -> impl IntoView {
    if groups.is_empty() {
        return view! {
            <div class="empty-state">
                <p>"No data to chart."</p>
            </div>
        }
        .into_any();
    }

    let shares = value_shares(&groups);
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let max_bar = max_bar_value(&groups);

    // One stroke segment per category, offset by the running total.
    let mut offset = 0.0;
    let segments = shares
        .iter()
        .map(|(_, share, color)| {
            let length = share * circumference;
            let segment = view! {
                <circle
                    cx="60"
                    cy="60"
                    r="50"
                    fill="none"
                    stroke=color.clone()
                    stroke-width="16"
                    stroke-dasharray=format!("{:.2} {:.2}", length, circumference - length)
                    stroke-dashoffset=format!("{:.2}", -offset)
                    transform="rotate(-90 60 60)"
                />
            };
            offset += length;
            segment
        })
        .collect_view();

    let legend = shares
        .iter()
        .zip(groups.iter())
        .map(|((name, share, color), group)| {
            view! {
                <div class="legend-row">
                    <span class="legend-dot" style=format!("background: {}", color)></span>
                    <span class="legend-name">{name.clone()}</span>
                    <span class="legend-share">{format!("{:.1}%", share * 100.0)}</span>
                    <span class="legend-value">{format_currency(group.value)}</span>
                </div>
            }
        })
        .collect_view();

    let bars = groups
        .iter()
        .map(|group| {
            let value_pct = if max_bar > 0.0 { group.value / max_bar * 100.0 } else { 0.0 };
            let equity_pct = if max_bar > 0.0 { group.equity / max_bar * 100.0 } else { 0.0 };
            view! {
                <div class="bar-group">
                    <div class="bar-pair">
                        <div
                            class="bar value"
                            style=format!("height: {:.1}%; background: {}", value_pct, group.color)
                            title=format!("Value {}", format_currency(group.value))
                        ></div>
                        <div
                            class="bar equity"
                            style=format!("height: {:.1}%", equity_pct)
                            title=format!("Equity {}", format_currency(group.equity))
                        ></div>
                    </div>
                    <span class="bar-label">{group.name.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="charts-view">
            <div class="chart-card">
                <div class="chart-header">
                    <h3>"Value by Category"</h3>
                </div>
                <div class="chart-body donut-chart">
                    <svg viewBox="0 0 120 120">
                        <circle cx="60" cy="60" r="50" fill="none" stroke="#374151" stroke-width="16"/>
                        {segments}
                    </svg>
                    <div class="chart-legend">{legend}</div>
                </div>
            </div>

            <div class="chart-card">
                <div class="chart-header">
                    <h3>"Value vs. Equity"</h3>
                    <div class="chart-legend inline">
                        <span class="legend-dot value"></span>"Value"
                        <span class="legend-dot equity"></span>"Equity"
                    </div>
                </div>
                <div class="chart-body bar-chart">{bars}</div>
            </div>
        </div>
    }
    .into_any()
}
