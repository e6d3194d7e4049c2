//! Append-only list of favorite recipes, filled by looking names up in the
//! ordered index.

use std::fmt;

use tracing::debug;

use crate::collections::RecipeBst;
use crate::error::Result;
use crate::models::SharedRecipe;

#[derive(Debug, Default)]
pub struct Favorites {
    recipes: Vec<SharedRecipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Find `name` in `index` and append the hit. Blank names and misses are
    /// passed through from [`RecipeBst::search`]; the list is unchanged then.
    pub fn add_by_name(&mut self, index: &RecipeBst, name: &str) -> Result<SharedRecipe> {
        let recipe = index.search(name)?;
        debug!(recipe = %recipe.name(), "added to favorites");
        self.recipes.push(SharedRecipe::clone(&recipe));
        Ok(recipe)
    }

    /// Favorites in the order they were added, or `None` when there are none.
    pub fn display_all(&self) -> Option<&[SharedRecipe]> {
        if self.recipes.is_empty() {
            None
        } else {
            Some(&self.recipes)
        }
    }
}

impl fmt::Display for Favorites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(recipes) = self.display_all() else {
            return write!(f, "No favorite recipes added.");
        };
        write!(f, "Favorite Recipes:")?;
        for recipe in recipes {
            write!(f, "\n- {} ({})", recipe.name(), recipe.cuisine())?;
        }
        Ok(())
    }
}
