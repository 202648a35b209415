//! Recipe Form Draft
//!
//! Text-field draft of a recipe plus the validation and conversion rules applied on submit.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ValidationError;
use crate::models::{Recipe, RecipeId, RecipePayload};

pub const TITLE_MAX_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Default colors offered to a fresh form
pub const COLOR_PALETTE: &[&str] = &[
    "#3b82f6", "#ef4444", "#f59e0b", "#10b981", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

/// `#` followed by exactly six hex digits, either case
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR
        .get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern"))
        .is_match(value)
}

/// One entry per non-blank line, trimmed, in original order
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Pick a palette color at random
pub fn random_color() -> String {
    let index = (random_unit() * COLOR_PALETTE.len() as f64) as usize;
    COLOR_PALETTE[index.min(COLOR_PALETTE.len() - 1)].to_string()
}

#[cfg(target_arch = "wasm32")]
fn random_unit() -> f64 {
    js_sys::Math::random()
}

// Native builds only run unit tests, which don't care which color comes out.
#[cfg(not(target_arch = "wasm32"))]
fn random_unit() -> f64 {
    0.0
}

/// Which request a submission turns into
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    /// POST a new recipe
    #[default]
    Create,
    /// PUT to an existing recipe
    Edit(RecipeId),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<&RecipeId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Raw form contents; list fields are newline-separated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub color: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: String::new(),
            steps: String::new(),
            color: COLOR_PALETTE[0].to_string(),
        }
    }
}

impl RecipeDraft {
    /// Empty draft with a random default color
    pub fn fresh() -> Self {
        Self {
            color: random_color(),
            ..Default::default()
        }
    }

    /// Pre-populate from an existing record
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let color = if recipe.color.is_empty() {
            COLOR_PALETTE[0].to_string()
        } else {
            recipe.color.clone()
        };
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: join_lines(&recipe.ingredients),
            steps: join_lines(&recipe.steps),
            color,
        }
    }

    /// Rules run in order and stop at the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(ValidationError::TitleTooLong { max: TITLE_MAX_CHARS });
        }
        if self.description.trim().chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong { max: DESCRIPTION_MAX_CHARS });
        }
        if !is_valid_hex_color(self.color.trim()) {
            return Err(ValidationError::InvalidColor);
        }
        Ok(())
    }

    /// Validate, then build the request body
    pub fn to_payload(&self) -> Result<RecipePayload, ValidationError> {
        self.validate()?;
        Ok(RecipePayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            ingredients: split_lines(&self.ingredients),
            steps: split_lines(&self.steps),
            color: self.color.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn draft(title: &str, color: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            color: color.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_hex_color_accepts_six_digits_any_case() {
        assert!(is_valid_hex_color("#3b82f6"));
        assert!(is_valid_hex_color("#ABCDEF"));
        assert!(is_valid_hex_color("#aBc123"));
    }

    #[test]
    fn test_hex_color_rejects_bad_forms() {
        assert!(!is_valid_hex_color("#abc"));
        assert!(!is_valid_hex_color("3b82f6"));
        assert!(!is_valid_hex_color("#3b82fg"));
        assert!(!is_valid_hex_color("#3b82f6a"));
        assert!(!is_valid_hex_color(" #3b82f6"));
        assert!(!is_valid_hex_color(""));
    }

    #[test]
    fn test_split_lines_drops_blanks_and_keeps_order() {
        assert_eq!(
            split_lines("  flour \n\n\t\nsugar\r\n  \neggs"),
            vec!["flour", "sugar", "eggs"]
        );
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n \n").is_empty());
    }

    #[test]
    fn test_lines_round_trip() {
        let list = vec!["2 eggs".to_string(), "1 tbsp oil".to_string(), "salt".to_string()];
        assert_eq!(split_lines(&join_lines(&list)), list);
    }

    proptest! {
        #[test]
        fn prop_split_lines_never_yields_blank_entries(text in "[a-z \t\r\n]{0,80}") {
            let lines = split_lines(&text);
            prop_assert!(lines.iter().all(|line| !line.trim().is_empty()));

            let expected: Vec<String> = text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            prop_assert_eq!(lines, expected);
        }

        #[test]
        fn prop_join_then_split_round_trips(list in proptest::collection::vec("[a-z0-9][a-z0-9 ]{0,12}[a-z0-9]", 0..8)) {
            prop_assert_eq!(split_lines(&join_lines(&list)), list);
        }
    }

    #[test]
    fn test_validation_short_circuits_on_title() {
        let mut d = draft("   ", "#3b82f6");
        d.description = "x".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(d.validate(), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn test_validation_limits() {
        let d = draft(&"t".repeat(TITLE_MAX_CHARS), "#3b82f6");
        assert_eq!(d.validate(), Ok(()));

        let d = draft(&"t".repeat(TITLE_MAX_CHARS + 1), "#3b82f6");
        assert_eq!(d.validate(), Err(ValidationError::TitleTooLong { max: TITLE_MAX_CHARS }));

        let mut d = draft("Soup", "#3b82f6");
        d.description = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(
            d.validate(),
            Err(ValidationError::DescriptionTooLong { max: DESCRIPTION_MAX_CHARS })
        );

        let d = draft("Soup", "blue");
        assert_eq!(d.validate(), Err(ValidationError::InvalidColor));
    }

    #[test]
    fn test_payload_trims_and_splits() {
        let d = RecipeDraft {
            title: "  Lemon Pasta ".into(),
            description: " Quick weeknight dinner\n".into(),
            ingredients: "2 eggs\n\n1 tbsp oil".into(),
            steps: " boil water \n\n  toss ".into(),
            color: "#3b82f6".into(),
        };
        let payload = d.to_payload().unwrap();
        assert_eq!(payload.title, "Lemon Pasta");
        assert_eq!(payload.description, "Quick weeknight dinner");
        assert_eq!(payload.ingredients, vec!["2 eggs", "1 tbsp oil"]);
        assert_eq!(payload.steps, vec!["boil water", "toss"]);
        assert_eq!(payload.color, "#3b82f6");
    }

    #[test]
    fn test_invalid_draft_yields_no_payload() {
        assert_eq!(draft("", "#3b82f6").to_payload(), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn test_from_recipe_prepopulates() {
        let recipe = Recipe {
            id: RecipeId::Number(3),
            title: "Pancakes".into(),
            description: "Fluffy".into(),
            ingredients: vec!["flour".into(), "milk".into()],
            steps: vec!["mix".into(), "fry".into()],
            color: "#f59e0b".into(),
        };
        let d = RecipeDraft::from_recipe(&recipe);
        assert_eq!(d.ingredients, "flour\nmilk");
        assert_eq!(d.steps, "mix\nfry");
        assert_eq!(d.color, "#f59e0b");
        assert_eq!(d.to_payload().unwrap().ingredients, recipe.ingredients);
    }

    #[test]
    fn test_fresh_draft_uses_palette_color() {
        let d = RecipeDraft::fresh();
        assert!(d.title.is_empty());
        assert!(COLOR_PALETTE.contains(&d.color.as_str()));
        assert!(is_valid_hex_color(&d.color));
    }

    #[test]
    fn test_mode_editing_id() {
        assert_eq!(FormMode::Create.editing_id(), None);
        let mode = FormMode::Edit(RecipeId::Number(9));
        assert_eq!(mode.editing_id(), Some(&RecipeId::Number(9)));
        assert!(mode.is_editing());
    }
}
