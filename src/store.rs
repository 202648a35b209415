//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All state changes go through
//! the plain methods on [`AppState`] so they can be exercised without a browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::{FormMode, RecipeDraft};
use crate::models::{Recipe, RecipeId, RecipePayload};
use crate::theme::Theme;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last fetched recipe list; replaced wholesale on every load
    pub recipes: Vec<Recipe>,
    /// A list fetch is in flight
    pub loading: bool,
    /// A create/update is in flight
    pub saving: bool,
    /// Current form contents
    pub form: RecipeDraft,
    /// Create vs edit (with target id)
    pub mode: FormMode,
    /// Single error banner
    pub error: Option<String>,
    /// Transient success notice
    pub notice: Option<String>,
    /// Bumped on every notice so stale dismiss timers can be ignored
    pub notice_seq: u32,
    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            form: RecipeDraft::fresh(),
            theme,
            ..Default::default()
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn recipes_loaded(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.loading = false;
    }

    /// A failed fetch shows the error and empties the list
    pub fn recipes_failed(&mut self, message: String) {
        self.recipes.clear();
        self.loading = false;
        self.error = Some(message);
    }

    /// Switch to edit mode for `recipe`
    pub fn begin_edit(&mut self, recipe: &Recipe) {
        self.mode = FormMode::Edit(recipe.id.clone());
        self.form = RecipeDraft::from_recipe(recipe);
        self.error = None;
    }

    /// Back to an empty create form
    pub fn reset_form(&mut self) {
        self.mode = FormMode::Create;
        self.form = RecipeDraft::fresh();
    }

    /// Validate the draft. On success marks the save as started and returns what to send;
    /// on failure sets the error banner and nothing is sent.
    pub fn prepare_submit(&mut self) -> Option<(FormMode, RecipePayload)> {
        match self.form.to_payload() {
            Ok(payload) => {
                self.saving = true;
                self.error = None;
                Some((self.mode.clone(), payload))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Returns the notice sequence number for the dismiss timer
    pub fn save_succeeded(&mut self, mode: &FormMode, title: &str) -> u32 {
        self.saving = false;
        self.error = None;
        self.reset_form();
        let message = match mode {
            FormMode::Create => format!("Created \"{}\".", title),
            FormMode::Edit(_) => format!("Saved \"{}\".", title),
        };
        self.show_notice(message)
    }

    /// The form keeps whatever the user typed
    pub fn save_failed(&mut self, message: String) {
        self.saving = false;
        self.error = Some(message);
    }

    /// Returns the notice sequence number for the dismiss timer
    pub fn recipe_deleted(&mut self, id: &RecipeId) -> u32 {
        if self.mode.editing_id() == Some(id) {
            self.reset_form();
        }
        self.error = None;
        self.show_notice("Recipe deleted.".to_string())
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn show_notice(&mut self, message: String) -> u32 {
        self.notice_seq = self.notice_seq.wrapping_add(1);
        self.notice = Some(message);
        self.notice_seq
    }

    /// Clear the notice only if nothing newer replaced it
    pub fn clear_notice(&mut self, seq: u32) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
