//! Core library surface for the recipe manager.
//!
//! The crate is the in-memory data-structure core of a recipe catalog: an
//! ordered index keyed by recipe name, a bounded meal planning queue, a
//! recently viewed stack, a favorites list and three list sorts. Front ends
//! (menus, TUIs, tests) hold a [`Catalog`] and call into it; none of them live
//! here beyond the small demo binary.
pub mod catalog;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod sort;
pub mod table;

/// The aggregate a driver owns, plus the settings used to build it.
pub use catalog::Catalog;
pub use config::Config;

/// Individual structures, usable on their own.
pub use collections::{Favorites, MealQueue, RecentStack, RecipeBst};

pub use error::{CatalogError, ErrorKind, Result};
pub use models::{compare_ignore_case, Recipe, SharedRecipe};
pub use sort::{
    sort_by_cuisine_ascending, sort_by_ingredient_count, sort_by_popularity_descending, SortOrder,
};
pub use table::render_table;
