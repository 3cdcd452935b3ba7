//! Die rolling primitives.
//!
//! Every random draw in the engine funnels through these two functions,
//! so a seeded generator reproduces a whole session face by face.

use rand::Rng;
use sw_core::Die;

/// Rolls a single die.
pub fn roll_die(die: Die, rng: &mut impl Rng) -> u32 {
    rng.random_range(1..=die.sides())
}

/// Rolls `count` dice of the same type, in order.
pub fn roll_dice(die: Die, count: u32, rng: &mut impl Rng) -> Vec<u32> {
    (0..count).map(|_| roll_die(die, rng)).collect()
}
