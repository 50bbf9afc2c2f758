use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use components::toast::NotificationToast;
use pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, profile::ProfilePage};
use state::{
    auth::AuthProvider,
    notifications::{use_notifier, NotificationProvider},
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="CitasBot"/>
        <NotificationProvider>
            <ApiProvider>
                <AuthProvider>
                    <NotificationToast />
                    <Router>
                        <Routes>
                            <Route path="/" view=HomePage/>
                            <Route path="/login" view=LoginPage/>
                            <Route path="/dashboard" view=ProtectedDashboard/>
                            <Route path="/profile" view=ProtectedProfile/>
                        </Routes>
                    </Router>
                </AuthProvider>
            </ApiProvider>
        </NotificationProvider>
    }
}

/// Makes one notifier-wired client available to every repository below.
#[component]
fn ApiProvider(children: Children) -> impl IntoView {
    let api = api::ApiClient::new().with_notifier(use_notifier());
    provide_context(api);
    view! { <>{children()}</> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <components::guard::RequireAuth><DashboardPage/></components::guard::RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <components::guard::RequireAuth><ProfilePage/></components::guard::RequireAuth> }
}

#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting CitasBot frontend (wasm)");

    // Runtime config loads in the background; requests issued before it
    // settles await the same future.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(|| view! { <App /> });
}
