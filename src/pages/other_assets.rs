//! Other Assets Page
//!
//! Entity-specific configuration and renderers for the generic asset page.
//! No logic of its own beyond view rendering.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api;
use crate::assets::{edit_values, transform_asset, AssetRecord, RawAsset};
use crate::charts::totals_by_category;
use crate::components::{
    AssetPage, AssetPageConfig, CategoryCharts, EntityOps, EntityRenderers, OpFuture, ViewMode,
};
use crate::format::{format_currency, format_date, format_opt_currency};
use crate::models::{AssetSummary, ListPayload};

const MODES: &[ViewMode] = &[ViewMode::Grid, ViewMode::List, ViewMode::Charts];

fn ops() -> EntityOps<RawAsset> {
    EntityOps {
        fetch_all: Arc::new(|| {
            Box::pin(api::other_assets::fetch_all()) as OpFuture<ListPayload<RawAsset>>
        }),
        create: Arc::new(|fields| Box::pin(api::other_assets::create(fields)) as OpFuture<()>),
        update: Arc::new(|id, fields| {
            Box::pin(api::other_assets::update(id, fields)) as OpFuture<()>
        }),
        delete: Arc::new(|id| Box::pin(api::other_assets::remove(id)) as OpFuture<()>),
        fetch_schema: Arc::new(|| {
            Box::pin(api::other_assets::fetch_schema()) as OpFuture<crate::models::FormSchema>
        }),
    }
}

fn render_card(asset: &AssetRecord) -> AnyView {
    let name = asset.name.clone();
    let badge = asset.category.clone().map(|category| {
        let color = category.color.unwrap_or_else(|| "#64748b".to_string());
        let icon = category.icon;
        view! {
            <span class="category-badge" style=format!("border-color: {}", color)>
                {icon.map(|i| view! { <span class="category-icon">{i}</span> })}
                {category.name}
            </span>
        }
    });
    let purchased = asset.purchase_date.clone().map(|date| {
        view! {
            <div class="card-line">
                <span class="card-label">"Purchased"</span>
                <span>{format_date(&date)}</span>
            </div>
        }
    });
    let notes = asset.notes.clone().map(|notes| {
        view! { <p class="card-notes">{notes}</p> }
    });

    view! {
        <div class="card-title-row">
            <span class="card-name">{name}</span>
            {badge}
        </div>
        <div class="card-line">
            <span class="card-label">"Value"</span>
            <span class="card-value">{format_currency(asset.current_value)}</span>
        </div>
        <div class="card-line">
            <span class="card-label">"Equity"</span>
            <span>{format_currency(asset.equity)}</span>
        </div>
        <div class="card-line">
            <span class="card-label">"Owed"</span>
            <span>{format_opt_currency(asset.amount_owed)}</span>
        </div>
        {purchased}
        {notes}
    }
    .into_any()
}

fn render_list_header() -> AnyView {
    view! {
        <th>"Name"</th>
        <th>"Category"</th>
        <th class="num">"Value"</th>
        <th class="num">"Purchase Price"</th>
        <th class="num">"Owed"</th>
        <th class="num">"Equity"</th>
        <th>"Purchased"</th>
    }
    .into_any()
}

fn render_list_row(asset: &AssetRecord) -> AnyView {
    let category = asset
        .category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "—".to_string());
    let purchased = asset
        .purchase_date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "—".to_string());

    view! {
        <td>{asset.name.clone()}</td>
        <td>{category}</td>
        <td class="num">{format_currency(asset.current_value)}</td>
        <td class="num">{format_opt_currency(asset.purchase_price)}</td>
        <td class="num">{format_opt_currency(asset.amount_owed)}</td>
        <td class="num">{format_currency(asset.equity)}</td>
        <td>{purchased}</td>
    }
    .into_any()
}

fn render_summary(summary: &AssetSummary) -> AnyView {
    view! {
        <div class="summary-cards">
            <div class="summary-card">
                <div class="summary-title">"Assets"</div>
                <div class="summary-value">{summary.count}</div>
            </div>
            <div class="summary-card">
                <div class="summary-title">"Total Value"</div>
                <div class="summary-value">{format_currency(summary.total_value)}</div>
            </div>
            <div class="summary-card">
                <div class="summary-title">"Total Equity"</div>
                <div class="summary-value">{format_currency(summary.total_equity)}</div>
            </div>
        </div>
    }
    .into_any()
}

fn render_charts(assets: &[AssetRecord]) -> AnyView {
    let groups = totals_by_category(assets);
    view! { <CategoryCharts groups=groups/> }.into_any()
}

/// "Other Assets": manually tracked valuables with grid/list/chart views.
#[component]
pub fn OtherAssetsPage() -> impl IntoView {
    let config = AssetPageConfig {
        entity_label: "asset",
        entity_label_plural: "assets",
        modes: MODES,
        ops: ops(),
        transform: Arc::new(transform_asset),
        id_of: Arc::new(|asset: &AssetRecord| asset.id),
        edit_values: Arc::new(edit_values),
        renderers: EntityRenderers {
            card: Arc::new(render_card),
            list_header: Arc::new(render_list_header),
            list_row: Arc::new(render_list_row),
            summary: Arc::new(render_summary),
            charts: Arc::new(render_charts),
        },
    };

    view! { <AssetPage config=config/> }
}
