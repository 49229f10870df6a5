//! Held-key input
//!
//! Key events only edit the held set; the simulation samples it once per
//! tick, so nothing is queued or debounced.

use std::collections::HashSet;

use crate::sim::TickInput;

/// A game control a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
}

impl Control {
    /// Map a DOM `KeyboardEvent.key` value to a control
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Control::TurnLeft),
            "ArrowRight" => Some(Control::TurnRight),
            "ArrowUp" => Some(Control::Thrust),
            " " | "Spacebar" => Some(Control::Fire),
            _ => None,
        }
    }
}

/// Controls currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Control>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the key maps to a control
    pub fn key_down(&mut self, key: &str) -> bool {
        match Control::from_key(key) {
            Some(control) => {
                self.held.insert(control);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match Control::from_key(key) {
            Some(control) => {
                self.held.remove(&control);
                true
            }
            None => false,
        }
    }

    /// Drop everything (focus lost: key-up events will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Snapshot for one tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.is_held(Control::TurnLeft),
            right: self.is_held(Control::TurnRight),
            thrust: self.is_held(Control::Thrust),
            fire: self.is_held(Control::Fire),
        }
    }
}
