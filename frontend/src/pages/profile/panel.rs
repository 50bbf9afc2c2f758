use crate::components::layout::{Layout, LoadingSpinner};
use crate::state::auth::use_auth;
use leptos::*;

fn display_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth, _) = use_auth();

    view! {
        <Layout>
            {move || {
                let state = auth.get();
                match state.user {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(user) => {
                        let plan = user.plan.clone();
                        view! {
                            <div class="space-y-6 px-4 sm:px-0">
                                <div class="bg-surface-elevated shadow rounded-lg p-6">
                                    <h2 class="text-xl font-semibold text-fg mb-4">{user.display_name()}</h2>
                                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-2 text-sm">
                                        <p><span class="font-semibold">"Usuario: "</span>{user.username.clone()}</p>
                                        <p><span class="font-semibold">"Correo: "</span>{display_or_dash(&user.email)}</p>
                                        <p><span class="font-semibold">"Cargo: "</span>{display_or_dash(&user.position)}</p>
                                        <p><span class="font-semibold">"Chequeos realizados: "</span>{display_or_dash(&user.checks_count)}</p>
                                        <p><span class="font-semibold">"Procesos finalizados: "</span>{display_or_dash(&user.processes_finished)}</p>
                                    </div>
                                </div>
                                <div class="bg-surface-elevated shadow rounded-lg p-6">
                                    <h3 class="text-lg font-semibold text-fg mb-4">"Plan"</h3>
                                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-2 text-sm">
                                        <p><span class="font-semibold">"Tipo: "</span>{display_or_dash(&plan.plan_type)}</p>
                                        <p><span class="font-semibold">"Procesos disponibles: "</span>{display_or_dash(&plan.processes_available)}</p>
                                        <p><span class="font-semibold">"Chequeos disponibles: "</span>{display_or_dash(&plan.checks_available)}</p>
                                        <p><span class="font-semibold">"Inicio: "</span>{display_or_dash(&plan.started)}</p>
                                        <p><span class="font-semibold">"Renovación: "</span>{display_or_dash(&plan.renewed)}</p>
                                        <p><span class="font-semibold">"Expira: "</span>{display_or_dash(&plan.expiration)}</p>
                                    </div>
                                </div>
                            </div>
                        }
                            .into_view()
                    }
                }
            }}
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_shows_identity_and_plan_counters() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <ProfilePage /> }
        });
        assert!(html.contains("Ada Admin"));
        assert!(html.contains("admin@citasbot.test"));
        assert!(html.contains("Procesos disponibles"));
        assert!(html.contains("10"));
        assert!(html.contains("500"));
        assert!(html.contains("2026-12-31"));
    }

    #[test]
    fn profile_spins_while_profile_is_missing() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <ProfilePage /> }
        });
        assert!(html.contains("animate-spin"));
    }
}
