//! Recipe Box App
//!
//! Root component: header with theme toggle, status banner, form and list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{RecipeForm, RecipeList, StatusBanner, ThemeToggle};
use crate::config::api_config;
use crate::context::AppContext;
use crate::controller;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme::{self, BrowserStorage};

#[component]
pub fn App() -> impl IntoView {
    let initial_theme = theme::initial_theme(&BrowserStorage, theme::system_prefers_dark());
    let store = Store::new(AppState::new(initial_theme));
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load recipes on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[APP] Loading recipes, trigger={}", trigger);
        controller::load_recipes(store);
    });

    // Keep <html data-theme> in sync
    Effect::new(move |_| {
        theme::apply_to_document(store.theme().get());
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Recipe Box"</h1>
                <div class="header-actions">
                    <button
                        type="button"
                        class="refresh-btn"
                        title="Reload recipes"
                        on:click=move |_| ctx.reload()
                    >
                        "Refresh"
                    </button>
                    <ThemeToggle />
                </div>
            </header>

            <StatusBanner />

            <main class="main-content">
                <RecipeForm />
                <RecipeList />
            </main>

            <footer class="app-footer">
                "API: " {api_config().base_url.clone()}
            </footer>
        </div>
    }
}
