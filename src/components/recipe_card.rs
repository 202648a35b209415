//! Recipe Card Component
//!
//! One recipe in the list, with edit and inline delete.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::controller;
use crate::models::Recipe;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let edit_target = recipe.clone();
    let Recipe { id, title, description, ingredients, steps, color } = recipe;

    // Highlight the card currently loaded into the form
    let card_id = id.clone();
    let card_class = move || {
        if store.mode().read().editing_id() == Some(&card_id) {
            "recipe-card editing"
        } else {
            "recipe-card"
        }
    };

    let on_delete = Callback::new(move |_| {
        controller::delete_recipe(store, ctx, id.clone());
    });

    view! {
        <article class=card_class>
            <header class="recipe-card-header">
                <span class="recipe-color" style=format!("background-color: {};", color)></span>
                <h3 class="recipe-title">{title}</h3>
            </header>

            {(!description.is_empty()).then(|| view! {
                <p class="recipe-description">{description}</p>
            })}

            {(!ingredients.is_empty()).then(|| view! {
                <h4>"Ingredients"</h4>
                <ul class="recipe-ingredients">
                    {ingredients.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            })}

            {(!steps.is_empty()).then(|| view! {
                <h4>"Steps"</h4>
                <ol class="recipe-steps">
                    {steps.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ol>
            })}

            <div class="recipe-card-actions">
                <button
                    type="button"
                    class="edit-btn"
                    on:click=move |_| controller::edit_recipe(store, &edit_target)
                >
                    "Edit"
                </button>
                <DeleteConfirmButton on_confirm=on_delete />
            </div>
        </article>
    }
}
