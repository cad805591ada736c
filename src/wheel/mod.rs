//! Wheel model: the five colours and the 25-slot layout they are drawn from.

pub mod layout;
pub mod types;

pub use layout::{
    designed_frequency, expected_return, fixed_slot_rng, slot_color, slot_count, spin_wheel,
    WHEEL,
};
pub use types::Color;
