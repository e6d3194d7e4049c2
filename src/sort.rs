//! In-place sorts over a list of recipes. Each routine works on anything that
//! borrows as a [`Recipe`], so both owned recipes and shared handles can be
//! sorted. An empty list is rejected rather than silently accepted.

use std::borrow::Borrow;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::Recipe;

/// Ordering the driver can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Fewest ingredients first (bubble sort, stable).
    IngredientCount,
    /// Most popular first (insertion sort, stable).
    PopularityDescending,
    /// Cuisine name A to Z, case-sensitive (quicksort, not stable).
    CuisineAscending,
}

impl SortOrder {
    pub fn apply<T: Borrow<Recipe>>(self, recipes: &mut [T]) -> Result<()> {
        match self {
            SortOrder::IngredientCount => sort_by_ingredient_count(recipes),
            SortOrder::PopularityDescending => sort_by_popularity_descending(recipes),
            SortOrder::CuisineAscending => sort_by_cuisine_ascending(recipes),
        }
    }
}

fn ensure_not_empty<T>(recipes: &[T]) -> Result<()> {
    if recipes.is_empty() {
        Err(CatalogError::EmptySequence)
    } else {
        Ok(())
    }
}

/// Adjacent-swap bubble sort on ingredient count. Stops early once a full pass
/// makes no swap.
pub fn sort_by_ingredient_count<T: Borrow<Recipe>>(recipes: &mut [T]) -> Result<()> {
    ensure_not_empty(recipes)?;
    let n = recipes.len();
    let mut passes = 0;
    for pass in 0..n - 1 {
        passes = pass + 1;
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if ingredients(&recipes[j]) > ingredients(&recipes[j + 1]) {
                recipes.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    debug!(len = n, passes, "sorted by ingredient count");
    Ok(())
}

/// Insertion sort, highest popularity first. Elements only move past strictly
/// smaller popularity, so ties keep their original order.
pub fn sort_by_popularity_descending<T: Borrow<Recipe>>(recipes: &mut [T]) -> Result<()> {
    ensure_not_empty(recipes)?;
    for i in 1..recipes.len() {
        let key = popularity(&recipes[i]);
        let mut j = i;
        while j > 0 && popularity(&recipes[j - 1]) < key {
            recipes.swap(j - 1, j);
            j -= 1;
        }
    }
    debug!(len = recipes.len(), "sorted by popularity");
    Ok(())
}

/// Quicksort with a Lomuto partition around the last element's cuisine.
pub fn sort_by_cuisine_ascending<T: Borrow<Recipe>>(recipes: &mut [T]) -> Result<()> {
    ensure_not_empty(recipes)?;
    quicksort_by_cuisine(recipes);
    debug!(len = recipes.len(), "sorted by cuisine");
    Ok(())
}

fn quicksort_by_cuisine<T: Borrow<Recipe>>(recipes: &mut [T]) {
    if recipes.len() < 2 {
        return;
    }
    let pivot = partition_by_cuisine(recipes);
    let (lower, upper) = recipes.split_at_mut(pivot);
    quicksort_by_cuisine(lower);
    quicksort_by_cuisine(&mut upper[1..]);
}

/// Move every element whose cuisine sorts before the pivot's to the front and
/// return the pivot's final index.
fn partition_by_cuisine<T: Borrow<Recipe>>(recipes: &mut [T]) -> usize {
    let high = recipes.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if recipes[j].borrow().cuisine() < recipes[high].borrow().cuisine() {
            recipes.swap(store, j);
            store += 1;
        }
    }
    recipes.swap(store, high);
    store
}

fn ingredients<T: Borrow<Recipe>>(recipe: &T) -> usize {
    recipe.borrow().ingredient_count()
}

fn popularity<T: Borrow<Recipe>>(recipe: &T) -> u32 {
    recipe.borrow().popularity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SharedRecipe;

    fn recipe(name: &str, cuisine: &str, ingredient_count: usize, popularity: u32) -> SharedRecipe {
        let ingredients = (0..ingredient_count)
            .map(|i| format!("item{i}"))
            .collect();
        Recipe::new(name, cuisine, ingredients, 10, 2, popularity)
            .unwrap()
            .shared()
    }

    fn names(recipes: &[SharedRecipe]) -> Vec<&str> {
        recipes.iter().map(|recipe| recipe.name()).collect()
    }

    #[test]
    fn empty_lists_are_rejected() {
        let mut empty: Vec<SharedRecipe> = Vec::new();
        for order in [
            SortOrder::IngredientCount,
            SortOrder::PopularityDescending,
            SortOrder::CuisineAscending,
        ] {
            assert_eq!(order.apply(&mut empty), Err(CatalogError::EmptySequence));
        }
    }

    #[test]
    fn bubble_sort_is_stable_by_ingredient_count() {
        let mut recipes = vec![
            recipe("A", "X", 4, 1),
            recipe("B", "X", 2, 1),
            recipe("C", "X", 3, 1),
            recipe("D", "X", 2, 1),
            recipe("E", "X", 1, 1),
        ];
        sort_by_ingredient_count(&mut recipes).unwrap();
        assert_eq!(names(&recipes), ["E", "B", "D", "C", "A"]);
    }

    #[test]
    fn insertion_sort_keeps_ties_in_order() {
        let mut recipes = vec![
            recipe("Pasta", "Italian", 3, 8),
            recipe("Sushi", "Japanese", 3, 9),
            recipe("Pizza", "Italian", 3, 7),
            recipe("Tacos", "Mexican", 3, 6),
            recipe("Burger", "American", 3, 7),
        ];
        sort_by_popularity_descending(&mut recipes).unwrap();
        assert_eq!(names(&recipes), ["Sushi", "Pasta", "Pizza", "Burger", "Tacos"]);
    }

    #[test]
    fn quicksort_orders_cuisines_case_sensitively() {
        let mut recipes = vec![
            recipe("a", "Italian", 1, 1),
            recipe("b", "Japanese", 1, 1),
            recipe("c", "Italian", 1, 1),
            recipe("d", "Mexican", 1, 1),
            recipe("e", "american", 1, 1),
            recipe("f", "American", 1, 1),
        ];
        sort_by_cuisine_ascending(&mut recipes).unwrap();
        let cuisines: Vec<_> = recipes.iter().map(|r| r.cuisine()).collect();
        assert_eq!(
            cuisines,
            ["American", "Italian", "Italian", "Japanese", "Mexican", "american"]
        );
    }

    #[test]
    fn single_element_is_left_alone() {
        let mut recipes = vec![recipe("Solo", "Thai", 2, 5)];
        SortOrder::CuisineAscending.apply(&mut recipes).unwrap();
        SortOrder::IngredientCount.apply(&mut recipes).unwrap();
        SortOrder::PopularityDescending.apply(&mut recipes).unwrap();
        assert_eq!(names(&recipes), ["Solo"]);
    }

    #[test]
    fn sorts_owned_recipes_too() {
        let mut recipes: Vec<Recipe> = vec![
            Recipe::new("Big", "X", vec!["a".into(), "b".into()], 1, 1, 1).unwrap(),
            Recipe::new("Small", "X", vec!["a".into()], 1, 1, 1).unwrap(),
        ];
        sort_by_ingredient_count(&mut recipes).unwrap();
        assert_eq!(recipes[0].name(), "Small");
    }
}
