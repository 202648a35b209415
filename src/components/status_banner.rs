//! Status Banner Component
//!
//! Error banner (dismissable) and the transient success notice.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.error().get().map(|message| view! {
            <div class="banner error" role="alert">
                <span class="banner-text">{message}</span>
                <button
                    type="button"
                    class="banner-dismiss"
                    title="Dismiss"
                    on:click=move |_| store.write().dismiss_error()
                >
                    "×"
                </button>
            </div>
        })}
        {move || store.notice().get().map(|message| view! {
            <div class="banner notice" role="status">{message}</div>
        })}
    }
}
