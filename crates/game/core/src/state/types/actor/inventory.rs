//! Inventory system for actors.
//!
//! Slots are addressed by index or by letter (`a` is slot 0). Items keep
//! their stored position while carried; it is rewritten on drop.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::types::Item;

/// Ordered, bounded list of carried items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    capacity: usize,
    items: ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    /// Creates an empty inventory. Capacity is capped at
    /// [`GameConfig::MAX_INVENTORY_SLOTS`].
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.min(GameConfig::MAX_INVENTORY_SLOTS),
            items: ArrayVec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Stores an item, handing it back if there is no room.
    pub fn add(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Takes the item out of the given slot, shifting later slots down.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Looks up a slot by its letter, `a` through `z`, case-insensitive.
    pub fn get_by_letter(&self, letter: char) -> Option<&Item> {
        Self::letter_index(letter).and_then(|index| self.get(index))
    }

    pub fn letter_index(letter: char) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        letter
            .is_ascii_lowercase()
            .then(|| (letter as u8 - b'a') as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Empties the inventory, yielding every carried item in slot order.
    pub fn drain(&mut self) -> impl Iterator<Item = Item> + '_ {
        self.items.drain(..)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(GameConfig::MAX_INVENTORY_SLOTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Position, Rgb};

    fn herb(n: u32) -> Item {
        Item::new(Position::ORIGIN, '"', Rgb(0, 200, 0), format!("herb {n}")).consumable(10, 0, 0)
    }

    #[test]
    fn add_refuses_and_returns_item_when_full() {
        let mut inventory = Inventory::new(2);
        assert!(inventory.add(herb(0)).is_ok());
        assert!(inventory.add(herb(1)).is_ok());
        assert!(inventory.is_full());
        let rejected = inventory.add(herb(2)).unwrap_err();
        assert_eq!(rejected.name(), "herb 2");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn letters_map_to_slots() {
        let mut inventory = Inventory::default();
        inventory.add(herb(0)).unwrap();
        inventory.add(herb(1)).unwrap();
        assert_eq!(inventory.get_by_letter('b').map(Item::name), Some("herb 1"));
        assert_eq!(inventory.get_by_letter('A').map(Item::name), Some("herb 0"));
        assert!(inventory.get_by_letter('z').is_none());
        assert!(inventory.get_by_letter('?').is_none());
    }

    #[test]
    fn remove_shifts_later_slots() {
        let mut inventory = Inventory::default();
        for n in 0..3 {
            inventory.add(herb(n)).unwrap();
        }
        assert_eq!(inventory.remove(0).map(|i| i.entity.name), Some("herb 0".into()));
        assert_eq!(inventory.get(0).map(Item::name), Some("herb 1"));
        assert!(inventory.remove(5).is_none());
    }

    #[test]
    fn capacity_is_capped_at_alphabet() {
        assert_eq!(Inventory::new(100).capacity(), GameConfig::MAX_INVENTORY_SLOTS);
    }
}
