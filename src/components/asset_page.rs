//! Generic Asset Page Component
//!
//! One parametrized CRUD page: configured async operations, configured
//! renderers per view mode, schema-driven create/edit modal. The component
//! owns lifecycle (fetch on mount, refresh after mutation) and knows nothing
//! about entity-specific fields.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api::ApiError;
use crate::components::{DeleteConfirmButton, EntityModal};
use crate::models::{AssetSummary, FormSchema, ListPayload};

/// Boxed local future for a configured operation.
pub type OpFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

type FieldMap = serde_json::Map<String, Value>;

/// Presentation modes the page can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
    Charts,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
            ViewMode::Charts => "Charts",
        }
    }
}

/// The five async operations a page is built from.
pub struct EntityOps<R: 'static> {
    pub fetch_all: Arc<dyn Fn() -> OpFuture<ListPayload<R>> + Send + Sync>,
    pub create: Arc<dyn Fn(FieldMap) -> OpFuture<()> + Send + Sync>,
    pub update: Arc<dyn Fn(u32, FieldMap) -> OpFuture<()> + Send + Sync>,
    pub delete: Arc<dyn Fn(u32) -> OpFuture<()> + Send + Sync>,
    pub fetch_schema: Arc<dyn Fn() -> OpFuture<FormSchema> + Send + Sync>,
}

impl<R> Clone for EntityOps<R> {
    fn clone(&self) -> Self {
        Self {
            fetch_all: self.fetch_all.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
            fetch_schema: self.fetch_schema.clone(),
        }
    }
}

/// Entity-specific rendering, supplied by the per-entity page module.
pub struct EntityRenderers<T: 'static> {
    /// Card body for grid mode.
    pub card: Arc<dyn Fn(&T) -> AnyView + Send + Sync>,
    /// `<th>` cells for list mode.
    pub list_header: Arc<dyn Fn() -> AnyView + Send + Sync>,
    /// `<td>` cells for one list row.
    pub list_row: Arc<dyn Fn(&T) -> AnyView + Send + Sync>,
    /// Summary cards above grid/list content.
    pub summary: Arc<dyn Fn(&AssetSummary) -> AnyView + Send + Sync>,
    /// Charts mode body for the whole transformed list.
    pub charts: Arc<dyn Fn(&[T]) -> AnyView + Send + Sync>,
}

impl<T> Clone for EntityRenderers<T> {
    fn clone(&self) -> Self {
        Self {
            card: self.card.clone(),
            list_header: self.list_header.clone(),
            list_row: self.list_row.clone(),
            summary: self.summary.clone(),
            charts: self.charts.clone(),
        }
    }
}

/// Full configuration for one entity page.
pub struct AssetPageConfig<R: 'static, T: 'static> {
    /// Singular noun for buttons and confirmations, e.g. "asset".
    pub entity_label: &'static str,
    /// Plural noun for empty states, e.g. "assets".
    pub entity_label_plural: &'static str,
    /// Supported modes; the first one is the default.
    pub modes: &'static [ViewMode],
    pub ops: EntityOps<R>,
    /// Boundary coercion applied before anything reaches a renderer.
    pub transform: Arc<dyn Fn(R) -> T + Send + Sync>,
    pub id_of: Arc<dyn Fn(&T) -> u32 + Send + Sync>,
    /// Prefill for the edit modal.
    pub edit_values: Arc<dyn Fn(&T) -> FieldMap + Send + Sync>,
    pub renderers: EntityRenderers<T>,
}

#[derive(Clone, PartialEq)]
enum ModalState {
    Closed,
    Create,
    Edit(u32, FieldMap),
}

/// Generic CRUD page with grid/list/charts view switching.
#[component]
pub fn AssetPage<R, T>(config: AssetPageConfig<R, T>) -> impl IntoView
where
    R: 'static,
    T: Clone + Send + Sync + 'static,
{
    let AssetPageConfig {
        entity_label,
        entity_label_plural,
        modes,
        ops,
        transform,
        id_of,
        edit_values,
        renderers,
    } = config;

    let (records, set_records) = signal(Vec::<T>::new());
    let (summary, set_summary) = signal(None::<AssetSummary>);
    let (schema, set_schema) = signal(None::<FormSchema>);
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);
    let (mode, set_mode) = signal(modes.first().copied().unwrap_or(ViewMode::Grid));
    let (modal, set_modal) = signal(ModalState::Closed);
    let (modal_error, set_modal_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load entity list on mount and whenever a mutation bumps the trigger.
    // Mode switching reads `records` only; it never refetches.
    {
        let fetch_all = ops.fetch_all.clone();
        let transform = transform.clone();
        Effect::new(move |_| {
            let _ = reload_trigger.get();
            let fetch_all = fetch_all.clone();
            let transform = transform.clone();
            set_loading.set(true);
            spawn_local(async move {
                match fetch_all().await {
                    Ok(payload) => {
                        set_records.set(payload.items.into_iter().map(|r| transform(r)).collect());
                        set_summary.set(payload.summary);
                        set_load_error.set(None);
                    }
                    Err(e) => {
                        log::error!("failed to load {}: {}", entity_label_plural, e);
                        set_load_error.set(Some(e.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    // Schema is fetched once; on failure the create/edit modal stays
    // unavailable instead of taking the page down.
    {
        let fetch_schema = ops.fetch_schema.clone();
        spawn_local(async move {
            match fetch_schema().await {
                Ok(s) => set_schema.set(Some(s)),
                Err(e) => {
                    log::warn!("schema unavailable for {}: {}", entity_label, e);
                    set_schema.set(None);
                }
            }
        });
    }

    let refresh = move || set_reload_trigger.update(|v| *v += 1);

    let on_submit = {
        let create = ops.create.clone();
        let update = ops.update.clone();
        Callback::new(move |fields: FieldMap| {
            let create = create.clone();
            let update = update.clone();
            let state = modal.get_untracked();
            set_submitting.set(true);
            spawn_local(async move {
                let result = match &state {
                    ModalState::Create => create(fields).await,
                    ModalState::Edit(id, _) => update(*id, fields).await,
                    ModalState::Closed => Ok(()),
                };
                match result {
                    Ok(()) => {
                        set_modal.set(ModalState::Closed);
                        set_modal_error.set(None);
                        refresh();
                    }
                    // Keep the modal open; the user's input stays put.
                    Err(e) => set_modal_error.set(Some(e.to_string())),
                }
                set_submitting.set(false);
            });
        })
    };

    let delete_record = {
        let delete = ops.delete.clone();
        Callback::new(move |id: u32| {
            let delete = delete.clone();
            spawn_local(async move {
                match delete(id).await {
                    Ok(()) => refresh(),
                    Err(e) => {
                        log::error!("delete failed: {}", e);
                        if let Some(window) = web_sys::window() {
                            let _ = window
                                .alert_with_message(&format!("Failed to delete {}: {}", entity_label, e));
                        }
                    }
                }
            });
        })
    };

    let open_edit = {
        let edit_values = edit_values.clone();
        let id_of = id_of.clone();
        Callback::new(move |record: T| {
            set_modal_error.set(None);
            set_modal.set(ModalState::Edit(id_of(&record), edit_values(&record)));
        })
    };

    let has_records = move || !records.get().is_empty();
    let show_empty = move || !loading.get() && load_error.get().is_none() && !has_records();

    let grid_renderers = renderers.clone();
    let grid_id_of = id_of.clone();
    let list_renderers = renderers.clone();
    let list_id_of = id_of.clone();
    let charts_renderers = renderers.clone();
    let summary_renderers = renderers.clone();

    view! {
        <div class="asset-page">
            <div class="page-header">
                <div class="view-mode-bar">
                    {modes
                        .iter()
                        .map(|&m| {
                            view! {
                                <button
                                    class=move || {
                                        if mode.get() == m { "mode-btn active" } else { "mode-btn" }
                                    }
                                    on:click=move |_| set_mode.set(m)
                                >
                                    {m.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="add-btn"
                    disabled=move || schema.get().is_none()
                    title=move || {
                        if schema.get().is_none() { "Form schema unavailable" } else { "" }
                    }
                    on:click=move |_| {
                        set_modal_error.set(None);
                        set_modal.set(ModalState::Create);
                    }
                >
                    {format!("Add {}", entity_label)}
                </button>
            </div>

            {move || load_error.get().map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button class="retry-btn" on:click=move |_| refresh()>"Retry"</button>
                </div>
            })}

            <Show when=move || loading.get()>
                <div class="loading-state">
                    <p>{format!("Loading {}...", entity_label_plural)}</p>
                </div>
            </Show>

            <Show when=show_empty>
                <div class="empty-state">
                    <p>{format!("No {} yet.", entity_label_plural)}</p>
                    <p class="empty-hint">
                        {format!("Use \"Add {}\" to create the first one.", entity_label)}
                    </p>
                </div>
            </Show>

            // Summary cards sit above grid and list content.
            <Show when=move || {
                has_records() && !loading.get() && mode.get() != ViewMode::Charts
            }>
                {
                    let renderers = summary_renderers.clone();
                    move || summary.get().map(|s| (renderers.summary)(&s))
                }
            </Show>

            <Show when=move || has_records() && !loading.get() && mode.get() == ViewMode::Grid>
                {
                    let renderers = grid_renderers.clone();
                    let id_of = grid_id_of.clone();
                    move || {
                        let renderers = renderers.clone();
                        let id_of = id_of.clone();
                        view! {
                            <div class="asset-grid">
                                <For
                                    each=move || records.get()
                                    key={
                                        let id_of = id_of.clone();
                                        move |record| id_of(record)
                                    }
                                    children={
                                        let renderers = renderers.clone();
                                        move |record: T| {
                                            let id = id_of(&record);
                                            let for_edit = record.clone();
                                            view! {
                                                <div class="asset-card">
                                                    {(renderers.card)(&record)}
                                                    <div class="card-actions">
                                                        <button
                                                            class="edit-btn"
                                                            on:click={
                                                                let for_edit = for_edit.clone();
                                                                move |_| open_edit.run(for_edit.clone())
                                                            }
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <DeleteConfirmButton
                                                            button_class="delete-btn"
                                                            on_confirm=Callback::new(move |_| {
                                                                delete_record.run(id)
                                                            })
                                                        />
                                                    </div>
                                                </div>
                                            }
                                        }
                                    }
                                />
                            </div>
                        }
                    }
                }
            </Show>

            <Show when=move || has_records() && !loading.get() && mode.get() == ViewMode::List>
                {
                    let renderers = list_renderers.clone();
                    let id_of = list_id_of.clone();
                    move || {
                        let renderers = renderers.clone();
                        let id_of = id_of.clone();
                        view! {
                            <table class="asset-table">
                                <thead>
                                    <tr>
                                        {(renderers.list_header)()}
                                        <th class="actions-col">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || records.get()
                                        key={
                                            let id_of = id_of.clone();
                                            move |record| id_of(record)
                                        }
                                        children={
                                            let renderers = renderers.clone();
                                            move |record: T| {
                                                let id = id_of(&record);
                                                let for_edit = record.clone();
                                                view! {
                                                    <tr>
                                                        {(renderers.list_row)(&record)}
                                                        <td class="row-actions">
                                                            <button
                                                                class="edit-btn"
                                                                on:click={
                                                                    let for_edit = for_edit.clone();
                                                                    move |_| open_edit.run(for_edit.clone())
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <DeleteConfirmButton
                                                                button_class="delete-btn"
                                                                on_confirm=Callback::new(move |_| {
                                                                    delete_record.run(id)
                                                                })
                                                            />
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }
                    }
                }
            </Show>

            <Show when=move || has_records() && !loading.get() && mode.get() == ViewMode::Charts>
                {
                    let renderers = charts_renderers.clone();
                    move || records.with(|list| (renderers.charts)(list))
                }
            </Show>

            {move || {
                let state = modal.get();
                let schema = schema.get()?;
                let (title, initial) = match state {
                    ModalState::Closed => return None,
                    ModalState::Create => {
                        (format!("Add {}", entity_label), serde_json::Map::new())
                    }
                    ModalState::Edit(_, values) => {
                        (format!("Edit {}", entity_label), values)
                    }
                };
                Some(view! {
                    <EntityModal
                        schema=schema
                        title=title
                        initial=initial
                        error=modal_error
                        submitting=submitting
                        on_submit=on_submit
                        on_close=Callback::new(move |_| {
                            set_modal.set(ModalState::Closed);
                            set_modal_error.set(None);
                        })
                    />
                })
            }}
        </div>
    }
}
