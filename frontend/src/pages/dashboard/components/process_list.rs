use crate::api::ProcessData;
use crate::components::{empty_state::EmptyState, layout::LoadingSpinner};
use crate::pages::dashboard::{
    utils::{self, StatusFilter},
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn ProcessList() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let email_filter = vm.email_filter;
    let status_filter = vm.status_filter;
    let resource = vm.processes_resource;

    let filter_button_class = |selected: bool| {
        if selected {
            "inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium bg-action-primary-bg text-action-primary-text"
        } else {
            "inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium bg-surface-muted text-fg hover:bg-surface-elevated border border-border"
        }
    };

    view! {
        <div class="space-y-4">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2">
                <input
                    type="search"
                    placeholder="Filtrar por email"
                    class="rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg md:max-w-xs w-full"
                    prop:value=move || email_filter.get()
                    on:input=move |ev| email_filter.set(event_target_value(&ev))
                />
                <div class="flex gap-2">
                    {StatusFilter::OPTIONS
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <button
                                    type="button"
                                    class=move || filter_button_class(status_filter.get() == option)
                                    on:click=move |_| status_filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    resource
                        .get()
                        .map(|result| match result {
                            Ok(processes) => {
                                let filtered = utils::filter_processes(
                                    &processes,
                                    &email_filter.get(),
                                    status_filter.get(),
                                );
                                if filtered.is_empty() {
                                    view! {
                                        <EmptyState
                                            title="No hay procesos que coincidan con el filtro."
                                            description="Crea un proceso o ajusta los filtros."
                                        />
                                    }
                                        .into_view()
                                } else {
                                    view! {
                                        <div class="space-y-3">
                                            {filtered
                                                .into_iter()
                                                .map(|process| view! { <ProcessRow process=process /> })
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_view()
                                }
                            }
                            Err(err) => view! {
                                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
                                    {err.error}
                                </div>
                            }
                                .into_view(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProcessRow(process: ProcessData) -> impl IntoView {
    let vm = use_dashboard_view_model();

    let dot_title = if process.is_running() {
        "Corriendo (con PID)"
    } else if process.status.is_active() {
        "Activo (Esperando)"
    } else {
        "Inactivo"
    };
    let dot_class = if process.is_running() {
        "inline-block w-3 h-3 rounded-full mr-2 bg-status-success-border"
    } else {
        "inline-block w-3 h-3 rounded-full mr-2 bg-surface-muted border border-border"
    };
    let is_active = process.status.is_active();
    let status_label = process.status.to_string();
    let email = process.email.clone();

    let details_vm = vm.clone();
    let details_process = process.clone();
    let stop_vm = vm.clone();
    let stop_email = email.clone();
    let edit_vm = vm.clone();
    let edit_process = process.clone();
    let delete_vm = vm;
    let delete_email = email.clone();

    view! {
        <div class="bg-surface-elevated border border-border rounded-lg p-4 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3">
            <div class="flex items-center">
                <span class=dot_class title=dot_title></span>
                <div>
                    <div class="font-semibold text-fg">{email}</div>
                    <div class="text-sm text-fg-muted capitalize">"Estado: " {status_label}</div>
                </div>
            </div>
            <div class="flex gap-2 justify-end">
                <button
                    type="button"
                    class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium bg-surface-muted text-fg hover:bg-surface-elevated border border-border"
                    on:click=move |_| details_vm.open_details(&details_process)
                >
                    "Ver Detalles"
                </button>
                <Show
                    when=move || is_active
                    fallback=move || {
                        let edit_vm = edit_vm.clone();
                        let edit_process = edit_process.clone();
                        let delete_vm = delete_vm.clone();
                        let delete_email = delete_email.clone();
                        view! {
                            <button
                                type="button"
                                class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium bg-surface-muted text-fg hover:bg-surface-elevated border border-border"
                                on:click=move |_| edit_vm.open_edit(&edit_process)
                            >
                                "Editar"
                            </button>
                            <button
                                type="button"
                                class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                                on:click=move |_| delete_vm.request_delete(delete_email.clone())
                            >
                                "Eliminar"
                            </button>
                        }
                    }
                >
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium bg-action-warning-bg text-action-warning-text hover:bg-action-warning-bg-hover"
                        on:click={
                            let stop_vm = stop_vm.clone();
                            let stop_email = stop_email.clone();
                            move |_| stop_vm.stop(stop_email.clone())
                        }
                    >
                        "Detener"
                    </button>
                </Show>
            </div>
        </div>
    }
}
