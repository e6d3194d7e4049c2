//! Ordered index over recipes keyed by case-insensitive name.
//!
//! The tree owns its nodes through `Option<Box<Node>>` links, so each node has
//! exactly one parent (or is the root). All operations are plain structural
//! recursion over those links.

use std::cmp::Ordering;
use std::mem;

use tracing::{debug, warn};

use crate::error::{require_name, CatalogError, Result};
use crate::models::{compare_ignore_case, SharedRecipe};

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    recipe: SharedRecipe,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(recipe: SharedRecipe) -> Box<Self> {
        Box::new(Self {
            recipe,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree of recipes. Names are unique ignoring case; inserting a
/// second recipe under an existing name keeps the first one.
#[derive(Debug, Default)]
pub struct RecipeBst {
    root: Link,
    len: usize,
}

impl RecipeBst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `recipe` at the first empty link found while descending by name.
    ///
    /// Returns `false` when a recipe with the same name (ignoring case) is
    /// already indexed. The duplicate is discarded and the tree is unchanged.
    pub fn insert(&mut self, recipe: SharedRecipe) -> bool {
        let name = recipe.name().to_string();
        let inserted = insert_node(&mut self.root, recipe);
        if inserted {
            self.len += 1;
            debug!(recipe = %name, size = self.len, "indexed recipe");
        } else {
            warn!(recipe = %name, "duplicate recipe name ignored");
        }
        inserted
    }

    /// Look a recipe up by name, ignoring case.
    pub fn search(&self, name: &str) -> Result<SharedRecipe> {
        let name = require_name(name)?;
        search_node(&self.root, name).cloned().ok_or_else(|| {
            warn!(recipe = %name, "recipe lookup missed");
            CatalogError::NotFound(name.to_string())
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        search_node(&self.root, name).is_some()
    }

    /// Remove the recipe called `name` and hand it back.
    ///
    /// A node with two children takes over its in-order successor (the
    /// minimum of its right subtree), whose original node is then unlinked.
    pub fn delete(&mut self, name: &str) -> Result<SharedRecipe> {
        let name = require_name(name)?;
        match delete_node(&mut self.root, name) {
            Some(removed) => {
                self.len -= 1;
                debug!(recipe = %removed.name(), size = self.len, "removed recipe from index");
                Ok(removed)
            }
            None => {
                warn!(recipe = %name, "cannot delete unknown recipe");
                Err(CatalogError::NotFound(name.to_string()))
            }
        }
    }

    /// Walk the tree in ascending name order. The iterator is lazy; calling
    /// `iter` again restarts from the smallest name.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(&self.root)
    }

    /// Materialize the in-order walk, e.g. for a "display all" listing.
    pub fn to_vec(&self) -> Vec<SharedRecipe> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a RecipeBst {
    type Item = &'a SharedRecipe;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn insert_node(link: &mut Link, recipe: SharedRecipe) -> bool {
    match link {
        None => {
            *link = Some(Node::leaf(recipe));
            true
        }
        Some(node) => match compare_ignore_case(recipe.name(), node.recipe.name()) {
            Ordering::Less => insert_node(&mut node.left, recipe),
            Ordering::Greater => insert_node(&mut node.right, recipe),
            Ordering::Equal => false,
        },
    }
}

fn search_node<'a>(link: &'a Link, name: &str) -> Option<&'a SharedRecipe> {
    let node = link.as_ref()?;
    match node.recipe.cmp_name(name) {
        Ordering::Equal => Some(&node.recipe),
        Ordering::Greater => search_node(&node.left, name),
        Ordering::Less => search_node(&node.right, name),
    }
}

fn delete_node(link: &mut Link, name: &str) -> Option<SharedRecipe> {
    let node = link.as_mut()?;
    match node.recipe.cmp_name(name) {
        Ordering::Greater => delete_node(&mut node.left, name),
        Ordering::Less => delete_node(&mut node.right, name),
        Ordering::Equal => {
            let mut node = link.take()?;
            let removed = match (node.left.take(), node.right.take()) {
                (None, child) | (child, None) => {
                    *link = child;
                    node.recipe
                }
                (left, right) => {
                    node.left = left;
                    node.right = right;
                    let successor = take_min(&mut node.right)?;
                    let removed = mem::replace(&mut node.recipe, successor);
                    *link = Some(node);
                    removed
                }
            };
            Some(removed)
        }
    }
}

/// Unlink the leftmost node under `link`, splicing its right child into its
/// place, and return its recipe.
fn take_min(link: &mut Link) -> Option<SharedRecipe> {
    if link.as_ref()?.left.is_some() {
        return take_min(&mut link.as_mut()?.left);
    }
    let node = link.take()?;
    let Node { recipe, right, .. } = *node;
    *link = right;
    Some(recipe)
}

/// Lazy in-order iterator over a [`RecipeBst`].
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn new(root: &'a Link) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a SharedRecipe;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.recipe)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::ErrorKind;
    use crate::models::Recipe;

    fn recipe(name: &str, cuisine: &str) -> SharedRecipe {
        Recipe::new(name, cuisine, vec!["Salt".to_string()], 10, 2, 5)
            .unwrap()
            .shared()
    }

    fn names(tree: &RecipeBst) -> Vec<&str> {
        tree.iter().map(|recipe| recipe.name()).collect()
    }

    fn sample_tree() -> RecipeBst {
        let mut tree = RecipeBst::new();
        for (name, cuisine) in [
            ("Pasta", "Italian"),
            ("Sushi", "Japanese"),
            ("Pizza", "Italian"),
            ("Tacos", "Mexican"),
        ] {
            assert!(tree.insert(recipe(name, cuisine)));
        }
        tree
    }

    #[test]
    fn traversal_is_sorted_by_name() {
        let tree = sample_tree();
        assert_eq!(names(&tree), ["Pasta", "Pizza", "Sushi", "Tacos"]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn traversal_restarts() {
        let tree = sample_tree();
        let first: Vec<_> = tree.iter().collect();
        let second: Vec<_> = (&tree).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn search_ignores_case() {
        let tree = sample_tree();
        assert_eq!(tree.search("sUSHI").unwrap().cuisine(), "Japanese");
        assert!(tree.contains("tacos"));
    }

    #[test]
    fn search_misses_and_blank_names_are_reported() {
        let tree = sample_tree();
        let err = tree.search("Burger").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LookupMiss);
        assert_eq!(tree.search("  ").unwrap_err(), CatalogError::BlankName);
    }

    #[test]
    fn duplicate_insert_keeps_original() {
        let mut tree = sample_tree();
        assert!(!tree.insert(recipe("PASTA", "Fusion")));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.search("pasta").unwrap().cuisine(), "Italian");
    }

    #[test]
    fn delete_leaf() {
        let mut tree = sample_tree();
        let removed = tree.delete("pizza").unwrap();
        assert_eq!(removed.name(), "Pizza");
        assert_eq!(names(&tree), ["Pasta", "Sushi", "Tacos"]);
        assert!(tree.search("Pizza").is_err());
    }

    #[test]
    fn delete_node_with_one_child() {
        let mut tree = sample_tree();
        tree.delete("Pizza").unwrap();
        // Sushi is left with only Tacos on its right.
        tree.delete("Sushi").unwrap();
        assert_eq!(names(&tree), ["Pasta", "Tacos"]);
        assert_eq!(tree.search("tacos").unwrap().cuisine(), "Mexican");
    }

    #[test]
    fn delete_root_with_two_children_uses_successor() {
        let mut tree = RecipeBst::new();
        for name in ["M", "F", "T", "C", "H", "R", "W", "P", "S"] {
            tree.insert(recipe(name, "Any"));
        }
        let removed = tree.delete("m").unwrap();
        assert_eq!(removed.name(), "M");
        assert_eq!(tree.len(), 8);
        assert_eq!(names(&tree), ["C", "F", "H", "P", "R", "S", "T", "W"]);
        for name in ["C", "F", "H", "P", "R", "S", "T", "W"] {
            assert!(tree.contains(name), "{name} should survive");
        }
    }

    #[test]
    fn delete_returns_the_shared_entity() {
        let mut tree = RecipeBst::new();
        let curry = recipe("Curry", "Indian");
        tree.insert(Rc::clone(&curry));
        let removed = tree.delete("CURRY").unwrap();
        assert!(Rc::ptr_eq(&curry, &removed));
        assert!(tree.is_empty());
    }

    #[test]
    fn delete_unknown_is_lookup_miss() {
        let mut tree = sample_tree();
        let err = tree.delete("Burger").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("Burger".to_string()));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn empty_tree_iterates_nothing() {
        let mut tree = RecipeBst::new();
        assert_eq!(tree.iter().count(), 0);
        assert!(tree.delete("Pasta").is_err());
        assert!(tree.is_empty());
    }
}
