//! History of recently viewed recipes, most recent on top.

use std::fmt;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::SharedRecipe;

#[derive(Debug, Default)]
pub struct RecentStack {
    entries: Vec<SharedRecipe>,
}

impl RecentStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, recipe: SharedRecipe) {
        debug!(recipe = %recipe.name(), depth = self.entries.len() + 1, "recorded recent recipe");
        self.entries.push(recipe);
    }

    /// Drop the most recent entry without returning it.
    pub fn pop(&mut self) -> Result<()> {
        let removed = self.entries.pop().ok_or(CatalogError::StackEmpty)?;
        debug!(recipe = %removed.name(), depth = self.entries.len(), "dropped recent recipe");
        Ok(())
    }

    pub fn peek(&self) -> Option<&SharedRecipe> {
        self.entries.last()
    }

    /// Most recently pushed first.
    pub fn iter(&self) -> impl Iterator<Item = &SharedRecipe> + '_ {
        self.entries.iter().rev()
    }
}

impl fmt::Display for RecentStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No recently viewed recipes.");
        }
        write!(f, "Recently Viewed Recipes (most recent first):")?;
        for recipe in self.iter() {
            write!(f, "\n{recipe}")?;
        }
        Ok(())
    }
}
