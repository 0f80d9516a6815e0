//! Contestant slots and per-slot data storage.
//!
//! ## Slot
//!
//! One of the two contestant positions, `A` or `B`. A slot holds a single
//! player in singles and a team in doubles.
//!
//! ## SlotPair
//!
//! Fixed two-entry storage indexed by `Slot` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Contestant position on the scoreboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// First slot. Serves first in a fresh match.
    #[default]
    A,
    /// Second slot.
    B,
}

impl Slot {
    /// Both slots in display order.
    pub const BOTH: [Slot; 2] = [Slot::A, Slot::B];

    /// The other slot.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    /// Raw index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::A => write!(f, "A"),
            Slot::B => write!(f, "B"),
        }
    }
}

/// Per-slot data storage.
///
/// ## Example
///
/// ```
/// use badminton_scoreboard::core::{Slot, SlotPair};
///
/// let mut scores: SlotPair<u32> = SlotPair::with_value(0);
/// scores[Slot::B] += 3;
///
/// assert_eq!(scores[Slot::A], 0);
/// assert_eq!(scores[Slot::B], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotPair<T> {
    a: T,
    b: T,
}

impl<T> SlotPair<T> {
    /// Create a pair from explicit values.
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Create a pair with values from a factory function.
    pub fn from_fn(factory: impl Fn(Slot) -> T) -> Self {
        Self {
            a: factory(Slot::A),
            b: factory(Slot::B),
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            a: value.clone(),
            b: value,
        }
    }

    /// Get a reference to a slot's data.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &T {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    /// Get a mutable reference to a slot's data.
    pub fn get_mut(&mut self, slot: Slot) -> &mut T {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }

    /// Iterate over (Slot, &T) pairs in A, B order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        [(Slot::A, &self.a), (Slot::B, &self.b)].into_iter()
    }

    /// Apply a function to both entries.
    pub fn map<U>(&self, f: impl Fn(Slot, &T) -> U) -> SlotPair<U> {
        SlotPair {
            a: f(Slot::A, &self.a),
            b: f(Slot::B, &self.b),
        }
    }
}

impl<T> Index<Slot> for SlotPair<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &Self::Output {
        self.get(slot)
    }
}

impl<T> IndexMut<Slot> for SlotPair<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut Self::Output {
        self.get_mut(slot)
    }
}
