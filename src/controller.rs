//! View Operations
//!
//! Async glue between UI events, the REST client and the store. Every network call is
//! handled on its own; failures only ever land in the error banner. Overlapping calls are
//! not coordinated, so whichever response arrives last wins.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::form::FormMode;
use crate::models::{Recipe, RecipeId};
use crate::store::AppStore;
use crate::theme::{self, BrowserStorage};

/// How long a success notice stays up
const NOTICE_DURATION_MS: u32 = 3_000;

/// Fetch the full list and replace the store's copy
pub fn load_recipes(store: AppStore) {
    store.write().begin_load();
    spawn_local(async move {
        match api::list_recipes().await {
            Ok(recipes) => {
                log::info!("[APP] Loaded {} recipes", recipes.len());
                store.write().recipes_loaded(recipes);
            }
            Err(e) => {
                log::error!("[APP] Failed to load recipes: {}", e);
                store.write().recipes_failed(e.to_string());
            }
        }
    });
}

/// Validate and POST/PUT the form, then reload
pub fn submit_form(store: AppStore, ctx: AppContext) {
    let Some((mode, payload)) = store.write().prepare_submit() else {
        log::warn!("[FORM] Submission rejected by validation");
        return;
    };
    spawn_local(async move {
        let result = match &mode {
            FormMode::Create => api::create_recipe(&payload).await,
            FormMode::Edit(id) => api::update_recipe(id, &payload).await,
        };
        match result {
            Ok(()) => {
                log::info!("[FORM] Saved \"{}\"", payload.title);
                let seq = store.write().save_succeeded(&mode, &payload.title);
                ctx.reload();
                dismiss_notice_later(store, seq);
            }
            Err(e) => {
                log::error!("[FORM] Save failed: {}", e);
                store.write().save_failed(e.to_string());
            }
        }
    });
}

/// DELETE after the user confirmed, then reload
pub fn delete_recipe(store: AppStore, ctx: AppContext, id: RecipeId) {
    store.write().dismiss_error();
    spawn_local(async move {
        match api::delete_recipe(&id).await {
            Ok(()) => {
                log::info!("[APP] Deleted recipe {}", id);
                let seq = store.write().recipe_deleted(&id);
                ctx.reload();
                dismiss_notice_later(store, seq);
            }
            Err(e) => {
                log::error!("[APP] Delete of {} failed: {}", id, e);
                store.write().fail(e.to_string());
            }
        }
    });
}

pub fn edit_recipe(store: AppStore, recipe: &Recipe) {
    store.write().begin_edit(recipe);
}

pub fn cancel_edit(store: AppStore) {
    store.write().reset_form();
}

/// Flip, persist; the document attribute follows the store via an effect
pub fn toggle_theme(store: AppStore) {
    let theme = store.write().toggle_theme();
    log::info!("[THEME] Switched to {}", theme);
    theme::persist(&BrowserStorage, theme);
}

fn dismiss_notice_later(store: AppStore, seq: u32) {
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_DURATION_MS).await;
        store.write().clear_notice(seq);
    });
}
