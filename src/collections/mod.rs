//! In-memory structures split across logical submodules.

mod bst;
mod favorites;
mod meal_queue;
mod recent;

pub use bst::{InOrder, RecipeBst};
pub use favorites::Favorites;
pub use meal_queue::MealQueue;
pub use recent::RecentStack;
