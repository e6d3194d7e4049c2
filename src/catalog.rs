//! The state a recipe-manager front end works against: one ordered index,
//! the working list that gets sorted, a meal queue, the recently viewed
//! stack and the favorites list. Everything is owned by a single `Catalog`
//! value instead of living in process-wide statics, so a driver (menu, TUI,
//! test) simply holds one and calls into it.

use std::rc::Rc;

use tracing::{debug, info};

use crate::collections::{Favorites, MealQueue, RecentStack, RecipeBst};
use crate::config::Config;
use crate::error::Result;
use crate::models::{Recipe, SharedRecipe};
use crate::seed::default_recipes;
use crate::sort::SortOrder;
use crate::table::render_table;

#[derive(Debug)]
pub struct Catalog {
    index: RecipeBst,
    /// Insertion-ordered list that the sort routines rearrange.
    recipes: Vec<SharedRecipe>,
    meal_queue: MealQueue,
    recent: RecentStack,
    favorites: Favorites,
}

impl Catalog {
    /// Empty catalog whose meal queue uses `config.queue_capacity` slots.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            index: RecipeBst::new(),
            recipes: Vec::new(),
            meal_queue: MealQueue::new(config.queue_capacity)?,
            recent: RecentStack::new(),
            favorites: Favorites::new(),
        })
    }

    pub fn with_recipes<I>(config: &Config, recipes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Recipe>,
    {
        let mut catalog = Self::new(config)?;
        for recipe in recipes {
            catalog.add_recipe(recipe);
        }
        Ok(catalog)
    }

    /// Catalog preloaded with the built-in starter recipes.
    pub fn seeded(config: &Config) -> Result<Self> {
        let catalog = Self::with_recipes(config, default_recipes()?)?;
        info!(recipes = catalog.len(), "loaded starter recipes");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Index the recipe and append it to the working list. Returns `false`
    /// (and changes nothing) when the name is already taken.
    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        let recipe = recipe.shared();
        if !self.index.insert(Rc::clone(&recipe)) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    pub fn search(&self, name: &str) -> Result<SharedRecipe> {
        self.index.search(name)
    }

    /// Look a recipe up and record it as recently viewed.
    pub fn view(&mut self, name: &str) -> Result<SharedRecipe> {
        let recipe = self.index.search(name)?;
        self.recent.push(Rc::clone(&recipe));
        Ok(recipe)
    }

    pub fn plan_meal(&mut self, name: &str) -> Result<SharedRecipe> {
        let recipe = self.index.search(name)?;
        self.meal_queue.enqueue(Rc::clone(&recipe))?;
        Ok(recipe)
    }

    pub fn finish_meal(&mut self) -> Result<()> {
        self.meal_queue.dequeue()
    }

    pub fn favorite(&mut self, name: &str) -> Result<SharedRecipe> {
        self.favorites.add_by_name(&self.index, name)
    }

    /// Remove the recipe from the index and from the working list. Entries
    /// already queued, viewed or favorited keep their handle.
    pub fn remove(&mut self, name: &str) -> Result<SharedRecipe> {
        let removed = self.index.delete(name)?;
        self.recipes.retain(|recipe| !Rc::ptr_eq(recipe, &removed));
        debug!(recipe = %removed.name(), remaining = self.recipes.len(), "removed recipe");
        Ok(removed)
    }

    pub fn sort(&mut self, order: SortOrder) -> Result<()> {
        order.apply(&mut self.recipes)
    }

    /// Every indexed recipe in ascending name order.
    pub fn all_recipes(&self) -> Vec<SharedRecipe> {
        self.index.to_vec()
    }

    /// The "display all" table, in name order.
    pub fn render_all(&self) -> Result<String> {
        render_table(&self.all_recipes())
    }

    /// The working list as a table, in its current (possibly sorted) order.
    pub fn render_list(&self) -> Result<String> {
        render_table(&self.recipes)
    }

    pub fn index(&self) -> &RecipeBst {
        &self.index
    }

    pub fn recipes(&self) -> &[SharedRecipe] {
        &self.recipes
    }

    pub fn meal_queue(&self) -> &MealQueue {
        &self.meal_queue
    }

    pub fn recent(&self) -> &RecentStack {
        &self.recent
    }

    pub fn recent_mut(&mut self) -> &mut RecentStack {
        &mut self.recent
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }
}
