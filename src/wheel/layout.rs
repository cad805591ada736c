//! The physical slot layout of the wheel and drawing from it.

use super::types::Color;
use crate::core::constants::WHEEL_SLOTS;
use rand::rngs::mock::StepRng;
use rand::Rng;

/// Slot-by-slot layout: Yellow 12, Green 6, Blue 4, Purple 2, Red 1.
pub const WHEEL: [Color; WHEEL_SLOTS] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Yellow,
    Color::Purple,
    Color::Yellow,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Yellow,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Purple,
    Color::Yellow,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Yellow,
];

/// Spin the wheel once: a uniform slot in `0..WHEEL_SLOTS`.
pub fn spin_wheel(rng: &mut impl Rng) -> Color {
    WHEEL[rng.gen_range(0..WHEEL_SLOTS)]
}

pub fn slot_color(index: usize) -> Option<Color> {
    WHEEL.get(index).copied()
}

/// A generator whose every spin lands on `slot`, for replaying a known outcome.
/// Returns None for an index past the end of the wheel.
pub fn fixed_slot_rng(slot: usize) -> Option<StepRng> {
    if slot >= WHEEL_SLOTS {
        return None;
    }
    // Smallest u64 whose widening product with the slot count has `slot` in the high word
    let stride = u64::MAX / WHEEL_SLOTS as u64 + 1;
    Some(StepRng::new(stride * slot as u64, 0))
}

/// Number of slots painted with `color`.
pub fn slot_count(color: Color) -> usize {
    WHEEL.iter().filter(|&&slot| slot == color).count()
}

/// Probability that a single spin lands on `color`.
pub fn designed_frequency(color: Color) -> f64 {
    slot_count(color) as f64 / WHEEL_SLOTS as f64
}

/// Scraps returned (stake included) per scrap wagered on `color`, on average.
pub fn expected_return(color: Color) -> f64 {
    designed_frequency(color) * (color.payout_multiplier() + 1) as f64
}
