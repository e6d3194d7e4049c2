//! Built-in recipes loaded into a fresh catalog.

use crate::error::Result;
use crate::models::Recipe;

/// (name, cuisine, ingredients, cooking time, servings, popularity)
type SeedRow = (&'static str, &'static str, [&'static str; 3], u32, u32, u32);

const DEFAULT_RECIPES: [SeedRow; 10] = [
    ("Pasta", "Italian", ["Pasta", "Tomato", "Cheese"], 30, 4, 8),
    ("Sushi", "Japanese", ["Rice", "Fish", "Seaweed"], 20, 2, 9),
    ("Pizza", "Italian", ["Dough", "Cheese", "Tomato"], 40, 6, 7),
    ("Tacos", "Mexican", ["Taco Shell", "Beef", "Cheese"], 15, 2, 6),
    ("Burger", "American", ["Bun", "Beef Patty", "Lettuce"], 25, 4, 7),
    ("Curry", "Indian", ["Chicken", "Spices", "Rice"], 45, 4, 9),
    ("Salad", "Mediterranean", ["Lettuce", "Olives", "Feta"], 10, 2, 6),
    ("Pancakes", "American", ["Flour", "Eggs", "Milk"], 20, 4, 8),
    ("Ramen", "Japanese", ["Noodles", "Broth", "Egg"], 30, 2, 8),
    ("Fried Rice", "Chinese", ["Rice", "Egg", "Vegetables"], 25, 4, 7),
];

/// The starter set, in the order it is inserted.
pub fn default_recipes() -> Result<Vec<Recipe>> {
    DEFAULT_RECIPES
        .iter()
        .map(|(name, cuisine, ingredients, time, servings, popularity)| {
            Recipe::new(
                *name,
                *cuisine,
                ingredients.iter().map(|item| item.to_string()).collect(),
                *time,
                *servings,
                *popularity,
            )
        })
        .collect()
}
