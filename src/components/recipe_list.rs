//! Recipe List Component

use leptos::prelude::*;

use crate::components::RecipeCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// All recipes from the last fetch
#[component]
pub fn RecipeList() -> impl IntoView {
    let store = use_app_store();

    let is_empty = move || !store.loading().get() && store.recipes().read().is_empty();

    view! {
        <section class="recipe-list">
            <Show when=move || store.loading().get()>
                <p class="loading">"Loading recipes…"</p>
            </Show>
            <Show when=is_empty>
                <p class="empty">"No recipes yet. Add one with the form."</p>
            </Show>

            <For
                each=move || store.recipes().get()
                // Whole record as key so edits made elsewhere re-render the card
                key=|recipe| recipe.clone()
                children=move |recipe| view! { <RecipeCard recipe=recipe /> }
            />

            <p class="recipe-count">
                {move || match store.recipes().read().len() {
                    1 => "1 recipe".to_string(),
                    n => format!("{} recipes", n),
                }}
            </p>
        </section>
    }
}
