//! UI Components
//!
//! Leptos components for the recipe page.

mod delete_confirm_button;
mod recipe_card;
mod recipe_form;
mod recipe_list;
mod status_banner;
mod theme_toggle;

pub use delete_confirm_button::DeleteConfirmButton;
pub use recipe_card::RecipeCard;
pub use recipe_form::RecipeForm;
pub use recipe_list::RecipeList;
pub use status_banner::StatusBanner;
pub use theme_toggle::ThemeToggle;
