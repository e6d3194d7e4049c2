//! Domain model shared by every structure in the catalog. A `Recipe` is a
//! plain, immutable data holder: it is validated once at construction and
//! then handed around behind an `Rc` so the index, the meal queue, the
//! history stack and the favorites list can all point at the same value.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::error::{CatalogError, Result};

/// Shared handle to a recipe. Every collection stores these rather than
/// owned copies.
pub type SharedRecipe = Rc<Recipe>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single catalog entry. Fields are private so the invariants checked in
/// [`Recipe::new`] hold for the lifetime of the value.
pub struct Recipe {
    /// Case-insensitive unique key within the index.
    name: String,
    cuisine: String,
    /// Ordered as entered; the ingredient count drives one of the sorts.
    ingredients: Vec<String>,
    /// Minutes. Expected to be positive but not enforced.
    cooking_time: u32,
    servings: u32,
    /// Intended range is 1 to 10; range checks belong to the input layer.
    popularity: u32,
}

impl Recipe {
    /// Build a recipe, rejecting an empty name, cuisine or ingredient list.
    /// No partially built value ever escapes: on error nothing is produced.
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        ingredients: Vec<String>,
        cooking_time: u32,
        servings: u32,
        popularity: u32,
    ) -> Result<Self> {
        let name = name.into();
        let cuisine = cuisine.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyField("name"));
        }
        if cuisine.trim().is_empty() {
            return Err(CatalogError::EmptyField("cuisine"));
        }
        if ingredients.is_empty() {
            return Err(CatalogError::EmptyField("ingredients"));
        }

        Ok(Self {
            name,
            cuisine,
            ingredients,
            cooking_time,
            servings,
            popularity,
        })
    }

    /// Wrap the recipe in the shared handle the collections expect.
    pub fn shared(self) -> SharedRecipe {
        Rc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn popularity(&self) -> u32 {
        self.popularity
    }

    /// Compare this recipe's name against `name`, ignoring case.
    pub fn cmp_name(&self, name: &str) -> Ordering {
        compare_ignore_case(&self.name, name)
    }
}

impl fmt::Display for Recipe {
    /// One row of the six-column recipe table. Widths line up with
    /// [`crate::table::TABLE_HEADER`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {:<20} | {:<15} | {:<30} | {:<15} | {:<8} | {:<10} |",
            self.name,
            self.cuisine,
            self.ingredients.join(", "),
            self.cooking_time,
            self.servings,
            self.popularity
        )
    }
}

/// Ordinal comparison after lowercasing both sides, so "pasta" and "PASTA"
/// are the same key.
pub fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}
