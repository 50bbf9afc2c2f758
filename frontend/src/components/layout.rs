use crate::state::auth::{self, use_auth, AuthState};
use crate::state::session::SessionStore;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let session = auth::use_session();

    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.display_name())
            .unwrap_or_default()
    };

    let on_logout = {
        let session = session.clone();
        move |_| {
            set_menu_open.set(false);
            auth::logout(&session, set_auth);
        }
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            "CitasBot"
                        </h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex items-center space-x-4">
                            <a href="/dashboard" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Procesos"
                            </a>
                            <a href="/profile" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Perfil"
                            </a>
                            <span class="text-fg-muted px-3 py-2 text-sm">{display_name}</span>
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Cerrar sesión"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Cerrar menú" } else { "Abrir menú" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <Show
                                    when=move || menu_open.get()
                                    fallback=move || {
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        }
                                    }
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    />
                                </Show>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <MobileNav
                        session=session.clone()
                        set_auth=set_auth
                        set_menu_open=set_menu_open
                    />
                </Show>
            </div>
        </header>
    }
}

// Built fresh on every menu toggle. Creating the logout handler here keeps
// the `Show` children closure free of moved captures.
#[component]
fn MobileNav(
    session: SessionStore,
    set_auth: WriteSignal<AuthState>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    let on_logout = move |_| {
        set_menu_open.set(false);
        auth::logout(&session, set_auth);
    };

    view! {
        <div id="mobile-nav" class="lg:hidden border-t border-border">
            <nav class="px-4 py-3 space-y-2">
                <a
                    href="/dashboard"
                    class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "Procesos"
                </a>
                <a
                    href="/profile"
                    class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "Perfil"
                </a>
                <button
                    on:click=on_logout
                    class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                >
                    "Cerrar sesión"
                </button>
            </nav>
        </div>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            {message}
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            {message}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_nav_links_and_user_name() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Header/> }
        });
        assert!(html.contains("Procesos"));
        assert!(html.contains("Perfil"));
        assert!(html.contains("Cerrar sesión"));
        assert!(html.contains("Ada Admin"));
    }

    #[test]
    fn mobile_nav_renders_links_and_logout() {
        let html = render_to_string(move || {
            let (_auth, set_auth) = create_signal(AuthState::default());
            let (_menu_open, set_menu_open) = create_signal(true);
            view! {
                <MobileNav
                    session=SessionStore::new()
                    set_auth=set_auth
                    set_menu_open=set_menu_open
                />
            }
        });
        assert!(html.contains("mobile-nav"));
        assert!(html.contains("Procesos"));
        assert!(html.contains("Cerrar sesión"));
    }

    #[test]
    fn status_messages_render_their_text() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="algo falló".into() />
                    <SuccessMessage message="listo".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("algo falló"));
        assert!(html.contains("listo"));
    }
}
