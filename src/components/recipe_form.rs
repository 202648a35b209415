//! Recipe Form Component
//!
//! Create/edit form. In edit mode the submit turns into a PUT and a cancel button appears.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller;
use crate::form::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let is_editing = move || store.mode().read().is_editing();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        controller::submit_form(store, ctx);
    };

    let submit_label = move || {
        if store.saving().get() {
            "Saving…"
        } else if is_editing() {
            "Save changes"
        } else {
            "Create recipe"
        }
    };

    view! {
        <form class="recipe-form" on:submit=on_submit>
            <h2>{move || if is_editing() { "Edit recipe" } else { "New recipe" }}</h2>

            <label class="field">
                <span class="field-label">"Title"</span>
                <input
                    type="text"
                    placeholder="Lemon Pasta"
                    maxlength=TITLE_MAX_CHARS.to_string()
                    prop:value=move || store.form().read().title.clone()
                    on:input=move |ev| store.form().write().title = event_target_value(&ev)
                />
                <span class="field-hint">
                    {move || format!("{}/{}", store.form().read().title.chars().count(), TITLE_MAX_CHARS)}
                </span>
            </label>

            <label class="field">
                <span class="field-label">"Description"</span>
                <textarea
                    rows="3"
                    prop:value=move || store.form().read().description.clone()
                    on:input=move |ev| store.form().write().description = event_target_value(&ev)
                ></textarea>
                <span class="field-hint">
                    {move || format!("{}/{}", store.form().read().description.chars().count(), DESCRIPTION_MAX_CHARS)}
                </span>
            </label>

            <label class="field">
                <span class="field-label">"Ingredients (one per line)"</span>
                <textarea
                    rows="5"
                    prop:value=move || store.form().read().ingredients.clone()
                    on:input=move |ev| store.form().write().ingredients = event_target_value(&ev)
                ></textarea>
            </label>

            <label class="field">
                <span class="field-label">"Steps (one per line)"</span>
                <textarea
                    rows="5"
                    prop:value=move || store.form().read().steps.clone()
                    on:input=move |ev| store.form().write().steps = event_target_value(&ev)
                ></textarea>
            </label>

            <div class="field color-field">
                <span class="field-label">"Color"</span>
                <input
                    type="color"
                    prop:value=move || store.form().read().color.clone()
                    on:input=move |ev| store.form().write().color = event_target_value(&ev)
                />
                <input
                    type="text"
                    class="color-text"
                    maxlength="7"
                    prop:value=move || store.form().read().color.clone()
                    on:input=move |ev| store.form().write().color = event_target_value(&ev)
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="submit-btn" disabled=move || store.saving().get()>
                    {submit_label}
                </button>
                <Show when=is_editing>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| controller::cancel_edit(store)
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
