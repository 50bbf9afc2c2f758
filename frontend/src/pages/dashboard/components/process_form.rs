use crate::components::error::InlineErrorMessage;
use crate::pages::dashboard::{
    utils::{self, ALLOWED_LOCATIONS},
    view_model::use_dashboard_view_model,
};
use crate::utils::time;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ProcessForm() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let form = vm.form;
    let form_error = vm.form_error;
    let month_window = vm.month_window.clone();
    let window_stop = time::stop_month(&month_window).unwrap_or_default();
    // Editing keeps the cutoff the process was created with.
    let stop_month = move || {
        form.editing
            .get()
            .map(|process| process.stop_month)
            .filter(|month| !month.is_empty())
            .unwrap_or_else(|| window_stop.clone())
    };
    let submitting = vm.submit_action.pending();

    let today = time::today_in_app_tz();
    let last_selectable = time::last_selectable_day(today);
    let blocked_day_input = create_rw_signal(String::new());

    let submit_vm = vm.clone();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    };
    let cancel_vm = vm.clone();

    let on_add_blocked_day = move |_| {
        let raw = blocked_day_input.get_untracked();
        match utils::add_blocked_day(form.blocked_days, &raw, today, last_selectable) {
            Ok(()) => {
                blocked_day_input.set(String::new());
                form_error.set(None);
            }
            Err(err) => form_error.set(Some(err)),
        }
    };

    let chip_class = |selected: bool| {
        if selected {
            "inline-flex items-center rounded-full px-3 py-1 text-sm font-medium mr-2 mt-2 bg-action-primary-bg text-action-primary-text"
        } else {
            "inline-flex items-center rounded-full px-3 py-1 text-sm font-medium mr-2 mt-2 bg-surface-muted text-fg hover:bg-surface-elevated border border-border"
        }
    };

    view! {
        <form
            class="mb-6 p-4 border border-border rounded-lg bg-surface-elevated space-y-4"
            on:submit=handle_submit
        >
            <InlineErrorMessage error={form_error.read_only().into()} />
            <div>
                <label for="process-email" class="block text-sm font-medium text-fg">
                    "Correo Electrónico"
                </label>
                <input
                    id="process-email"
                    type="email"
                    required
                    class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                    prop:value=move || form.email.get()
                    on:input=move |ev| form.email.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="process-password" class="block text-sm font-medium text-fg">
                    "Contraseña"
                </label>
                <input
                    id="process-password"
                    type="password"
                    required
                    class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                    prop:value=move || form.password.get()
                    on:input=move |ev| form.password.set(event_target_value(&ev))
                />
            </div>
            <div>
                <span class="block text-sm font-medium text-fg">
                    "Ubicaciones Permitidas para Agendar Cita"
                </span>
                {ALLOWED_LOCATIONS
                    .iter()
                    .map(|location| {
                        let location = location.to_string();
                        let toggle_target = location.clone();
                        let is_selected = {
                            let location = location.clone();
                            move || form.locations.get().contains(&location)
                        };
                        view! {
                            <button
                                type="button"
                                class=move || chip_class(is_selected())
                                on:click=move |_| utils::toggle_selection(form.locations, &toggle_target)
                            >
                                {location}
                            </button>
                        }
                    })
                    .collect_view()}
                <Show when=move || form.locations.get().is_empty()>
                    <p class="mt-1 text-sm text-status-error-text">"Selecciona al menos una ubicación"</p>
                </Show>
            </div>
            <div>
                <span class="block text-sm font-medium text-fg">
                    "Meses Permitidos para Agendar Cita"
                </span>
                {month_window
                    .iter()
                    .map(|month| {
                        let month = month.clone();
                        let toggle_target = month.clone();
                        let is_selected = {
                            let month = month.clone();
                            move || form.months.get().contains(&month)
                        };
                        view! {
                            <button
                                type="button"
                                class=move || chip_class(is_selected())
                                on:click=move |_| utils::toggle_selection(form.months, &toggle_target)
                            >
                                {month}
                            </button>
                        }
                    })
                    .collect_view()}
                <Show when=move || form.months.get().is_empty()>
                    <p class="mt-1 text-sm text-status-error-text">"Selecciona al menos un mes"</p>
                </Show>
            </div>
            <div>
                <label for="stop-month" class="block text-sm font-medium text-fg">
                    "Mes de Corte"
                </label>
                <input
                    id="stop-month"
                    type="text"
                    disabled
                    class="mt-1 block w-full rounded-md border border-border bg-surface-muted px-3 py-2 text-fg-muted"
                    value=stop_month
                />
                <p class="mt-1 text-sm text-fg-muted">
                    "Se asigna automáticamente el último mes permitido"
                </p>
            </div>
            <div>
                <label for="blocked-day" class="block text-sm font-medium text-fg">
                    "Días Bloqueados"
                </label>
                <div class="flex items-center gap-2 mt-1">
                    <input
                        id="blocked-day"
                        type="date"
                        min=time::format_ymd(today)
                        max=time::format_ymd(last_selectable)
                        class="rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || blocked_day_input.get()
                        on:input=move |ev| blocked_day_input.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-3 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=on_add_blocked_day
                    >
                        "Agregar"
                    </button>
                </div>
                <div>
                    <For
                        each=move || form.blocked_days.get()
                        key=|day| day.clone()
                        children=move |day: String| {
                            let remove_target = day.clone();
                            view! {
                                <span class="inline-flex items-center rounded-full px-3 py-1 text-sm bg-surface-muted text-fg mr-2 mt-2 border border-border">
                                    {day.clone()}
                                    <button
                                        type="button"
                                        aria-label="Quitar día"
                                        class="ml-2 text-fg-muted hover:text-fg"
                                        on:click=move |_| utils::remove_blocked_day(form.blocked_days, &remove_target)
                                    >
                                        {"✕"}
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
            </div>
            <div class="flex justify-end gap-3">
                <button
                    type="button"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated border border-border"
                    on:click=move |_| cancel_vm.cancel_form()
                >
                    "Cancelar"
                </button>
                <button
                    type="submit"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if form.editing.get().is_some() {
                            "Actualizar Proceso"
                        } else {
                            "Crear Proceso"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
