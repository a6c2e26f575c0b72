//! Shopping cart state
use serde::{Deserialize, Serialize};

use crate::catalog::{Game, GameId};
use crate::numbers::{clamp_quantity, line_total};

/// A line item in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the record taken when the line was created
    pub game: Game,
    /// Always at least one; a line is removed rather than zeroed
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.game.id
    }

    /// Price of this line in minor units.
    #[must_use]
    pub fn total_minor(&self) -> i64 {
        line_total(self.game.price_minor, self.quantity)
    }
}

/// Cart mutations triggered by the shopper.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add(Game),
    Remove(GameId),
    /// Requested quantities below one clamp to one.
    SetQuantity(GameId, i64),
}

/// Item count and price derived from the current lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: u32,
    pub total_minor: i64,
}

/// Shopping cart state. Lines keep the order in which they were first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a cart line by game ID.
    #[must_use]
    pub fn find_line(&self, id: GameId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    fn find_line_mut(&mut self, id: GameId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    /// Add one copy of `game`. Returns the new quantity for that game.
    pub fn add(&mut self, game: &Game) -> u32 {
        if let Some(line) = self.find_line_mut(game.id) {
            line.quantity = line.quantity.saturating_add(1);
            line.quantity
        } else {
            self.lines.push(CartLine {
                game: game.clone(),
                quantity: 1,
            });
            1
        }
    }

    /// Remove the line for `id`, returning it. Absent lines are a no-op.
    pub fn remove(&mut self, id: GameId) -> Option<CartLine> {
        let pos = self.lines.iter().position(|line| line.id() == id)?;
        Some(self.lines.remove(pos))
    }

    /// Set the quantity of an existing line, clamping to at least one.
    /// Returns the stored quantity, or `None` when no line exists.
    pub fn set_quantity(&mut self, id: GameId, requested: i64) -> Option<u32> {
        let line = self.find_line_mut(id)?;
        line.quantity = clamp_quantity(requested);
        Some(line.quantity)
    }

    /// Apply an action in place. Returns whether the cart changed.
    pub fn apply_mut(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::Add(game) => {
                self.add(&game);
                true
            }
            CartAction::Remove(id) => self.remove(id).is_some(),
            CartAction::SetQuantity(id, requested) => {
                let before = self.quantity_of(id);
                self.set_quantity(id, requested)
                    .is_some_and(|after| after != before)
            }
        }
    }

    /// Next cart after `action`; `self` is left untouched.
    #[must_use]
    pub fn apply(&self, action: CartAction) -> Self {
        let mut next = self.clone();
        next.apply_mut(action);
        next
    }

    /// Get the current quantity of a game in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: GameId) -> u32 {
        self.find_line(id).map_or(0, |line| line.quantity)
    }

    /// Sum of quantities across lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Sum of line totals in minor units.
    #[must_use]
    pub fn total_minor(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |sum, line| sum.saturating_add(line.total_minor()))
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.item_count(),
            total_minor: self.total_minor(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
