//! Theme Toggle Component

use leptos::prelude::*;

use crate::controller;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::theme::Theme;

/// Switches between light and dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let label = move || match store.theme().get() {
        Theme::Light => "🌙 Dark",
        Theme::Dark => "☀️ Light",
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| controller::toggle_theme(store)
        >
            {label}
        </button>
    }
}
