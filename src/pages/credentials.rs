//! Credentials Page
//!
//! Lists stored credential metadata (never secret values) and the catalog of
//! supported services. Correctness of a credential is checked by the backend
//! test endpoint only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::format::format_date;
use crate::models::{Credential, ServiceDescriptor};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Credential management: list, test-connection, delete.
#[component]
pub fn CredentialsPage() -> impl IntoView {
    let (credentials, set_credentials) = signal(Vec::<Credential>::new());
    let (services, set_services) = signal(Vec::<ServiceDescriptor>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_credentials().await {
                Ok(list) => {
                    set_credentials.set(list);
                    set_load_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load credentials: {}", e);
                    set_credentials.set(Vec::new());
                    set_load_error.set(Some(e.to_string()));
                }
            }
            // Catalog failure degrades to an empty services section.
            match api::list_services().await {
                Ok(list) => set_services.set(list),
                Err(e) => log::error!("failed to load service catalog: {}", e),
            }
            set_loading.set(false);
        });
    });

    let refresh = move || set_reload_trigger.update(|v| *v += 1);

    let test_connection = move |service_type: String, display_name: String| {
        spawn_local(async move {
            let message = match api::test_credential(&service_type).await {
                Ok(()) => format!("Connection to {} succeeded.", display_name),
                Err(e) => format!("Connection to {} failed: {}", display_name, e),
            };
            alert(&message);
        });
    };

    let remove_credential = move |service_type: String| {
        spawn_local(async move {
            match api::delete_credential(&service_type).await {
                Ok(()) => refresh(),
                Err(e) => {
                    log::error!("failed to delete credential: {}", e);
                    alert(&format!("Failed to delete credential: {}", e));
                }
            }
        });
    };

    view! {
        <div class="credentials-page">
            {move || load_error.get().map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button class="retry-btn" on:click=move |_| refresh()>"Retry"</button>
                </div>
            })}

            <Show when=move || loading.get()>
                <div class="loading-state">
                    <p>"Loading credentials..."</p>
                </div>
            </Show>

            <Show when=move || !loading.get()>
                <section class="credentials-section">
                    <h2>"Stored Credentials"</h2>
                    {move || {
                        if credentials.get().is_empty() {
                            view! {
                                <div class="empty-state">
                                    <p>"No credentials stored yet."</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <table class="credentials-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Service"</th>
                                            <th>"Type"</th>
                                            <th>"Status"</th>
                                            <th>"Added"</th>
                                            <th>"Last Used"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || credentials.get()
                                            key=|cred| cred.id
                                            children=move |cred: Credential| {
                                                let added = cred
                                                    .created_at
                                                    .as_deref()
                                                    .map(format_date)
                                                    .unwrap_or_else(|| "—".to_string());
                                                let last_used = cred
                                                    .last_used
                                                    .as_deref()
                                                    .map(format_date)
                                                    .unwrap_or_else(|| "Never".to_string());
                                                let status = if cred.is_active { "Active" } else { "Inactive" };
                                                let status_class =
                                                    if cred.is_active { "status-badge active" } else { "status-badge" };
                                                let service_for_test = cred.service_type.clone();
                                                let name_for_test = cred.display_name.clone();
                                                let service_for_delete = cred.service_type.clone();
                                                view! {
                                                    <tr>
                                                        <td>{cred.display_name.clone()}</td>
                                                        <td class="monospace">{cred.service_type.clone()}</td>
                                                        <td>{cred.credential_type.clone()}</td>
                                                        <td><span class=status_class>{status}</span></td>
                                                        <td>{added}</td>
                                                        <td>{last_used}</td>
                                                        <td class="row-actions">
                                                            <button
                                                                class="test-btn"
                                                                on:click=move |_| test_connection(
                                                                    service_for_test.clone(),
                                                                    name_for_test.clone(),
                                                                )
                                                            >
                                                                "Test"
                                                            </button>
                                                            <DeleteConfirmButton
                                                                button_class="delete-btn"
                                                                label="Delete"
                                                                on_confirm=Callback::new(move |_| {
                                                                    remove_credential(service_for_delete.clone())
                                                                })
                                                            />
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                    }}
                </section>

                <section class="services-section">
                    <h2>"Supported Services"</h2>
                    <div class="services-grid">
                        <For
                            each=move || services.get()
                            key=|service| service.service_type.clone()
                            children=move |service: ServiceDescriptor| {
                                let service_type = service.service_type.clone();
                                let configured = move || {
                                    credentials.with(|list| {
                                        list.iter().any(|c| c.service_type == service_type)
                                    })
                                };
                                view! {
                                    <div class="service-card">
                                        <div class="service-name">{service.display_name.clone()}</div>
                                        {service.description.clone().map(|d| view! {
                                            <p class="service-description">{d}</p>
                                        })}
                                        <div class="service-type">
                                            {format!("Requires: {}", service.credential_type)}
                                        </div>
                                        {move || {
                                            if configured() {
                                                view! { <span class="configured-badge">"Configured"</span> }
                                                    .into_any()
                                            } else {
                                                // Add flow is not wired up yet.
                                                view! {
                                                    <button
                                                        class="add-btn"
                                                        disabled=true
                                                        title="Adding credentials is not yet available"
                                                    >
                                                        "Add"
                                                    </button>
                                                }
                                                .into_any()
                                            }
                                        }}
                                    </div>
                                }
                            }
                        />
                    </div>
                </section>
            </Show>
        </div>
    }
}
