//! Recipes and their ingredient lists.
//!
//! Ingredients are written one per list item as `name: amount unit # notes`:
//!
//! ```markdown
//! ingredients:
//!   - Flour: 200 g # sifted
//!   - Eggs: 2
//!   - Salt: to taste
//! ```
//!
//! Lines that do not match the pattern become a zero-amount ingredient named
//! after the raw text, so `Salt: to taste` is kept rather than dropped.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{Normalizer, Post, PostKind};
use crate::markdown::{FrontmatterMap, FrontmatterValue};

static INGREDIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?):\s*(\d+(?:\.\d+)?)\s*([a-zA-Z%]+)?\s*(?:#\s*(.+?))?\s*$")
        .expect("Invalid ingredient regex")
});

/// Marker for recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Recipe;

/// A normalized recipe.
pub type RecipePost = Post<Recipe>;

/// One ingredient with a numeric amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    /// Ingredient name.
    pub name: String,
    /// Quantity; 0 when the source line had none.
    pub amount: f64,
    /// Unit such as `g`, `ml`, or `%`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Free-text notes following `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ingredient {
    /// Create an ingredient without unit or notes.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: None,
            notes: None,
        }
    }

    /// Parse a `name: amount unit? (# notes)?` line.
    ///
    /// Returns `None` when the line does not match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attic_content::post::Ingredient;
    ///
    /// let flour = Ingredient::parse_line("Flour: 200 g # sifted").unwrap();
    /// assert_eq!(flour.name, "Flour");
    /// assert_eq!(flour.amount, 200.0);
    /// assert_eq!(flour.unit.as_deref(), Some("g"));
    /// assert_eq!(flour.notes.as_deref(), Some("sifted"));
    ///
    /// assert!(Ingredient::parse_line("Salt: to taste").is_none());
    /// ```
    pub fn parse_line(line: &str) -> Option<Self> {
        let caps = INGREDIENT_LINE.captures(line.trim())?;
        let amount = caps.get(2)?.as_str().parse::<f64>().ok()?;
        Some(Self {
            name: caps.get(1)?.as_str().trim().to_string(),
            amount,
            unit: caps.get(3).map(|m| m.as_str().to_string()),
            notes: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }

    /// Parse a line, falling back to a zero-amount ingredient named after
    /// the raw text.
    pub fn from_line(line: &str) -> Self {
        Self::parse_line(line).unwrap_or_else(|| {
            log::debug!("Unrecognized ingredient line kept verbatim: {line}");
            Self::new(line.trim(), 0.0)
        })
    }

    /// A copy with the amount multiplied.
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            amount: self.amount * multiplier,
            ..self.clone()
        }
    }
}

impl fmt::Display for Ingredient {
    /// `name: amount[ unit][ (notes)]`, with whole amounts printed without
    /// a fractional part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.amount)?;
        if let Some(unit) = &self.unit {
            write!(f, " {unit}")?;
        }
        if let Some(notes) = &self.notes {
            write!(f, " ({notes})")?;
        }
        Ok(())
    }
}

/// An ingredient as it arrives for coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientEntry {
    /// A raw `name: amount unit # notes` line.
    Line(String),
    /// An ingredient that already has structured shape.
    Structured(Ingredient),
}

impl From<&str> for IngredientEntry {
    fn from(line: &str) -> Self {
        Self::Line(line.to_string())
    }
}

impl From<String> for IngredientEntry {
    fn from(line: String) -> Self {
        Self::Line(line)
    }
}

impl From<Ingredient> for IngredientEntry {
    fn from(ingredient: Ingredient) -> Self {
        Self::Structured(ingredient)
    }
}

impl IngredientEntry {
    /// Resolve into an ingredient; structured entries pass through unchanged.
    pub fn into_ingredient(self) -> Ingredient {
        match self {
            Self::Line(line) => Ingredient::from_line(&line),
            Self::Structured(ingredient) => ingredient,
        }
    }
}

/// Coerce ingredient entries in order.
pub fn coerce_ingredients<I>(entries: I) -> Vec<Ingredient>
where
    I: IntoIterator,
    I::Item: Into<IngredientEntry>,
{
    entries
        .into_iter()
        .map(|entry| entry.into().into_ingredient())
        .collect()
}

/// Multiply every amount, keeping names, units, and notes.
///
/// # Example
///
/// ```rust
/// use attic_content::post::{scale_ingredients, Ingredient};
///
/// let doubled = scale_ingredients(&[Ingredient::new("Eggs", 2.0)], 2.0);
/// assert_eq!(doubled[0].amount, 4.0);
/// ```
pub fn scale_ingredients(ingredients: &[Ingredient], multiplier: f64) -> Vec<Ingredient> {
    ingredients.iter().map(|i| i.scaled(multiplier)).collect()
}

/// Recipe-specific fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeMeta {
    /// Ingredients in source order.
    pub ingredients: Vec<Ingredient>,
    /// Number of servings, when given. Fractional values such as `2.5`
    /// are kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
}

fn coerce_servings(value: Option<&str>, slug: &str) -> Option<f64> {
    let text = value?.trim();
    match text.parse::<f64>() {
        Ok(servings) if servings.is_finite() => Some(servings),
        _ => {
            log::warn!("Ignoring non-numeric servings '{text}' in '{slug}'");
            None
        }
    }
}

impl PostKind for Recipe {
    type Extra = RecipeMeta;

    const NAME: &'static str = "recipes";
    const REQUIRES_HEADER: bool = false;

    fn extract(fields: &FrontmatterMap, slug: &str) -> RecipeMeta {
        let ingredients = match fields.get("ingredients") {
            Some(FrontmatterValue::List(items)) => coerce_ingredients(items.iter().map(String::as_str)),
            Some(FrontmatterValue::Scalar(_)) => {
                log::warn!("Expected a list of ingredients in '{slug}', found a scalar");
                Vec::new()
            }
            None => Vec::new(),
        };

        RecipeMeta {
            ingredients,
            servings: coerce_servings(fields.get_str("servings"), slug),
        }
    }
}

/// Normalize a recipe with default settings.
///
/// A recipe without a header is treated as all body with no metadata.
pub fn normalize_recipe(raw: &str, slug: &str) -> RecipePost {
    Normalizer::default().normalize(raw, slug)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PANCAKES: &str = "---
title: 'Pancakes'
date: '2024-02-13'
excerpt: 'Shrove Tuesday staple'
tags:
  [
    'breakfast',
    'dessert'
  ]
servings: 4
ingredients:
  - Flour: 200 g # sifted
  - Eggs: 2
  - Milk: 0.5 l
  - Salt: to taste
---

# Pancakes

Whisk, rest, fry.
";

    // ------------------------------------------------------------------------
    // Ingredient lines
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_line_full() {
        let i = Ingredient::parse_line("Butter: 12.5 g # softened").unwrap();
        assert_eq!(i.name, "Butter");
        assert_eq!(i.amount, 12.5);
        assert_eq!(i.unit.as_deref(), Some("g"));
        assert_eq!(i.notes.as_deref(), Some("softened"));
    }

    #[test]
    fn test_parse_line_no_unit() {
        let i = Ingredient::parse_line("Eggs: 2").unwrap();
        assert_eq!(i, Ingredient::new("Eggs", 2.0));
    }

    #[test]
    fn test_parse_line_percent_unit() {
        let i = Ingredient::parse_line("Hydration: 70%").unwrap();
        assert_eq!(i.unit.as_deref(), Some("%"));
    }

    #[test]
    fn test_parse_line_notes_without_unit() {
        let i = Ingredient::parse_line("Lemons: 2 # zested").unwrap();
        assert_eq!(i.unit, None);
        assert_eq!(i.notes.as_deref(), Some("zested"));
    }

    #[test]
    fn test_from_line_fallback() {
        assert_eq!(Ingredient::from_line("Salt"), Ingredient::new("Salt", 0.0));
        assert_eq!(
            Ingredient::from_line("Pepper: a pinch"),
            Ingredient::new("Pepper: a pinch", 0.0)
        );
    }

    #[test]
    fn test_structured_entry_passes_through() {
        let structured = Ingredient {
            name: "Sugar".to_string(),
            amount: 50.0,
            unit: Some("g".to_string()),
            notes: Some("caster".to_string()),
        };
        let coerced = coerce_ingredients(vec![
            IngredientEntry::from(structured.clone()),
            IngredientEntry::from("Eggs: 3"),
        ]);
        assert_eq!(coerced[0], structured);
        assert_eq!(coerced[1], Ingredient::new("Eggs", 3.0));
    }

    // ------------------------------------------------------------------------
    // Display and scaling
    // ------------------------------------------------------------------------

    #[test]
    fn test_display() {
        let i = Ingredient::parse_line("Flour: 200 g # sifted").unwrap();
        assert_eq!(i.to_string(), "Flour: 200 g (sifted)");
        assert_eq!(Ingredient::new("Eggs", 1.5).to_string(), "Eggs: 1.5");
    }

    #[test]
    fn test_scale_ingredients() {
        let base = vec![
            Ingredient::parse_line("Flour: 200 g # sifted").unwrap(),
            Ingredient::new("Eggs", 2.0),
        ];
        let doubled = scale_ingredients(&base, 2.0);
        assert_eq!(doubled[0].amount, 400.0);
        assert_eq!(doubled[0].unit.as_deref(), Some("g"));
        assert_eq!(doubled[0].notes.as_deref(), Some("sifted"));
        assert_eq!(doubled[1].amount, 4.0);
        assert_eq!(base[1].amount, 2.0);
    }

    // ------------------------------------------------------------------------
    // Normalization
    // ------------------------------------------------------------------------

    #[test]
    fn test_normalize_recipe() {
        let recipe = normalize_recipe(PANCAKES, "pancakes");
        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.date, "2024-02-13");
        assert_eq!(recipe.tags, vec!["breakfast", "dessert"]);
        assert_eq!(recipe.extra.servings, Some(4.0));

        let ingredients = &recipe.extra.ingredients;
        assert_eq!(ingredients.len(), 4);
        assert_eq!(ingredients[0].name, "Flour");
        assert_eq!(ingredients[1], Ingredient::new("Eggs", 2.0));
        assert_eq!(ingredients[2].amount, 0.5);
        assert_eq!(ingredients[3], Ingredient::new("Salt: to taste", 0.0));
        assert!(!recipe.html.contains("<h1>"));
    }

    #[test]
    fn test_recipe_without_header_is_all_body() {
        let recipe = normalize_recipe("Just a note about toast.", "toast");
        assert!(!recipe.is_malformed());
        assert_eq!(recipe.title, "Untitled");
        assert_eq!(recipe.content, "Just a note about toast.");
        assert!(recipe.extra.ingredients.is_empty());
    }

    #[test]
    fn test_recipe_unclosed_header_is_malformed() {
        let recipe = normalize_recipe("---\ntitle: Open\ningredients:\n  - Eggs: 2\n", "open");
        assert!(recipe.title.starts_with("Error:"));
        assert!(recipe.extra.ingredients.is_empty());
    }

    #[test]
    fn test_non_numeric_servings_dropped() {
        let recipe = normalize_recipe("---\nservings: a few\n---\nBody", "few");
        assert_eq!(recipe.extra.servings, None);
        let recipe = normalize_recipe("---\nservings: NaN\n---\nBody", "nan");
        assert_eq!(recipe.extra.servings, None);
    }

    #[test]
    fn test_fractional_servings_kept() {
        let recipe = normalize_recipe("---\nservings: 2.5\n---\nBody", "half");
        assert_eq!(recipe.extra.servings, Some(2.5));
    }

    #[test]
    fn test_scalar_ingredients_ignored() {
        let recipe = normalize_recipe("---\ningredients: flour and eggs\n---\nBody", "x");
        assert!(recipe.extra.ingredients.is_empty());
    }

    #[test]
    fn test_comma_separated_scalar_tags() {
        let recipe = normalize_recipe("---\ntags: \"dinner, Quick, quick\"\n---\nBody", "x");
        assert_eq!(recipe.tags, vec!["dinner", "Quick"]);
    }
}
