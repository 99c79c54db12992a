//! Difficulty tiers and depth derivation.

use crate::personality::profile::Personality;

/// Hard cap on search depth. Guards against a misconfigured personality
/// multiplier blowing up the game tree.
pub const MAX_SEARCH_DEPTH: usize = 6;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn base_depth(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 4,
        }
    }
}

/// Base depth for the tier, scaled by the personality's multiplier,
/// floored at one ply and capped at `MAX_SEARCH_DEPTH`.
pub fn search_depth(difficulty: Difficulty, personality: &Personality) -> usize {
    let scaled = (difficulty.base_depth() as f32 * personality.difficulty_multiplier).round();
    (scaled as usize).clamp(1, MAX_SEARCH_DEPTH)
}
