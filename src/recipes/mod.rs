//! Recipe domain types and the JSON-backed store that persists them.

pub mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MenuError;

pub use store::RecipeStore;

pub const MAX_RECIPE_NAME_LENGTH: usize = 40;

/// A named recipe with its ordered ingredient and step lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A single ingredient line. Ingredients are positional within their recipe.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Returns a copy with every ingredient quantity multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Recipe, MenuError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(MenuError::Validation(format!(
                "scale factor must be a positive number, got `{factor}`"
            )));
        }
        let mut scaled = self.clone();
        for ingredient in &mut scaled.ingredients {
            ingredient.quantity *= factor;
        }
        Ok(scaled)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f, "----------------------------------")?;
        for ingredient in &self.ingredients {
            writeln!(f, "{ingredient}")?;
        }
        if !self.steps.is_empty() {
            writeln!(f)?;
            for (idx, step) in self.steps.iter().enumerate() {
                writeln!(f, "{}. {}", idx + 1, step)?;
            }
        }
        Ok(())
    }
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    /// Parses `name, quantity[, unit]`. The quantity must be a finite,
    /// non-negative number; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Ingredient, MenuError> {
        let items: Vec<&str> = input.split(',').map(str::trim).collect();
        if items.len() < 2 || items.len() > 3 {
            return Err(MenuError::Validation(
                "enter an ingredient as `name, quantity` or `name, quantity, unit`".into(),
            ));
        }

        let name = items[0];
        if name.is_empty() {
            return Err(MenuError::Validation("ingredient name cannot be empty".into()));
        }

        let quantity: f64 = items[1].parse().map_err(|_| {
            MenuError::Validation(format!("ingredient quantity `{}` is not a number", items[1]))
        })?;
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(MenuError::Validation(format!(
                "ingredient quantity `{}` must be zero or more",
                items[1]
            )));
        }

        let unit = items.get(2).copied().unwrap_or_default();
        Ok(Ingredient::new(name, quantity, unit))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = format_quantity(self.quantity);
        if self.unit.is_empty() {
            write!(f, "{}: {}", self.name, quantity)
        } else {
            write!(f, "{}: {} {}", self.name, quantity, self.unit)
        }
    }
}

/// Formats whole quantities without decimals and others with at most two.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{quantity:.0}")
    } else {
        let text = format!("{quantity:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Checks a recipe name against the length and emptiness rules.
pub fn validate_name(name: &str) -> Result<(), MenuError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(MenuError::Validation("recipe name cannot be empty".into()));
    }
    if trimmed.chars().count() > MAX_RECIPE_NAME_LENGTH {
        return Err(MenuError::Validation(format!(
            "name must be {MAX_RECIPE_NAME_LENGTH} characters or less"
        )));
    }
    Ok(())
}
