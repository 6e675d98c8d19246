//! Auxiliary Session State.
//!
//! Five ingredient slots written by the collect instructions and read by
//! `present`. One `SessionState` belongs to one simulator session; it is passed
//! explicitly to every action through the execution context and is never shared
//! between sessions. Slots can be overwritten but are never cleared.

use std::fmt;

use serde::Serialize;

use crate::common::error::Fault;
use crate::config::UnsetSlotPolicy;

/// One ingredient slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Slot 0.
    Protein,
    /// Slot 1.
    Grains,
    /// Slot 2.
    Vegetable,
    /// Slot 3.
    Fruit,
    /// Slot 4.
    Dairy,
}

impl Slot {
    /// All slots in storage order.
    pub const ALL: [Self; 5] = [
        Self::Protein,
        Self::Grains,
        Self::Vegetable,
        Self::Fruit,
        Self::Dairy,
    ];

    /// Returns the storage index of the slot.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase slot name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Grains => "grains",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Dairy => "dairy",
        }
    }

    /// Returns the prompt shown before reading the slot's line of input.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Protein => "Enter the protein that you would like to add to your dish: ",
            Self::Grains => "Enter the type of grains that you would like to add to your dish: ",
            Self::Vegetable => "Enter the vegetable that you would like to add to your dish: ",
            Self::Fruit => "Enter the fruit that you would like to add to your dish: ",
            Self::Dairy => "Enter the dairy that you would like to add to your dish: ",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-session ingredient slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    slots: [Option<String>; 5],
}

impl SessionState {
    /// Creates a session with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` in `slot`, replacing any earlier value.
    pub fn set(&mut self, slot: Slot, text: impl Into<String>) {
        self.slots[slot.index()] = Some(text.into());
    }

    /// Returns the value of `slot`, if collected.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    /// Returns true once every slot has been collected.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Composes the presentation message.
    ///
    /// Slots are interpolated in the order protein, grains, vegetable, dairy, fruit.
    ///
    /// # Errors
    ///
    /// With `UnsetSlotPolicy::Fault`, returns `Fault::UnsetSlot` naming the first
    /// unset slot in storage order.
    pub fn dish(&self, policy: UnsetSlotPolicy) -> Result<String, Fault> {
        let pick = |slot: Slot| match (self.get(slot), policy) {
            (Some(text), _) => Ok(text),
            (None, UnsetSlotPolicy::Empty) => Ok(""),
            (None, UnsetSlotPolicy::Fault) => Err(Fault::UnsetSlot(slot)),
        };
        if policy == UnsetSlotPolicy::Fault {
            for slot in Slot::ALL {
                let _ = pick(slot)?;
            }
        }
        Ok(format!(
            "Tonight I have prepared for you all a world-class, gourmet, masterpiece of a dish \
             that will surely transform your night. This dish incorporates {}, with {}, {}, and \
             {} for added flavor, as well as {} as garnish, all being of the highest quality. \
             Enjoy!",
            pick(Slot::Protein)?,
            pick(Slot::Grains)?,
            pick(Slot::Vegetable)?,
            pick(Slot::Dairy)?,
            pick(Slot::Fruit)?,
        ))
    }
}
