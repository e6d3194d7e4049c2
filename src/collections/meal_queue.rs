//! Fixed-capacity circular queue used for meal planning.

use std::fmt;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::SharedRecipe;

/// FIFO ring buffer of recipes. Adding to a full queue is rejected rather
/// than evicting the oldest entry.
#[derive(Debug)]
pub struct MealQueue {
    slots: Vec<Option<SharedRecipe>>,
    /// Index of the oldest entry; meaningful only while `len > 0`.
    front: usize,
    /// Index of the newest entry; meaningful only while `len > 0`.
    rear: usize,
    len: usize,
}

impl MealQueue {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CatalogError::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: vec![None; capacity],
            front: 0,
            // Starts one slot "behind" 0 so the first enqueue lands at index 0.
            rear: capacity - 1,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn enqueue(&mut self, recipe: SharedRecipe) -> Result<()> {
        if self.is_full() {
            return Err(CatalogError::QueueFull {
                capacity: self.capacity(),
            });
        }
        self.rear = (self.rear + 1) % self.capacity();
        debug!(recipe = %recipe.name(), slot = self.rear, "planned meal");
        self.slots[self.rear] = Some(recipe);
        if self.len == 0 {
            self.front = self.rear;
        }
        self.len += 1;
        Ok(())
    }

    /// Discard the oldest entry. Use [`MealQueue::front`] beforehand to see
    /// what is being removed.
    pub fn dequeue(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(CatalogError::QueueEmpty);
        }
        let removed = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        if let Some(recipe) = removed {
            debug!(recipe = %recipe.name(), remaining = self.len, "finished meal");
        }
        Ok(())
    }

    pub fn front(&self) -> Option<&SharedRecipe> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.front].as_ref()
        }
    }

    /// Entries in FIFO order, wrapping around the end of the slot array.
    pub fn iter(&self) -> impl Iterator<Item = &SharedRecipe> + '_ {
        (0..self.len).filter_map(move |offset| {
            self.slots[(self.front + offset) % self.capacity()].as_ref()
        })
    }
}

impl fmt::Display for MealQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Queue is empty.");
        }
        write!(f, "Meal Planning Queue:")?;
        for recipe in self.iter() {
            write!(f, "\n{recipe}")?;
        }
        Ok(())
    }
}
