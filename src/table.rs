//! Plain-text table layout for recipe listings.

use std::borrow::Borrow;
use std::fmt::Write as _;

use crate::error::{CatalogError, Result};
use crate::models::Recipe;

/// Column titles padded to the same widths as [`Recipe`]'s `Display` row.
pub const TABLE_HEADER: &str = "| Name                 | Cuisine         | Ingredients                    | Cooking Time    | Servings | Popularity |";

/// Render a header, a rule, and one row per recipe.
pub fn render_table<T: Borrow<Recipe>>(recipes: &[T]) -> Result<String> {
    if recipes.is_empty() {
        return Err(CatalogError::EmptySequence);
    }
    let mut out = String::with_capacity((recipes.len() + 2) * (TABLE_HEADER.len() + 1));
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(TABLE_HEADER.len()));
    for recipe in recipes {
        // Writing into a String cannot fail.
        let _ = write!(out, "\n{}", recipe.borrow());
    }
    Ok(out)
}
