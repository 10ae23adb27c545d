//! RNG seed derivation for deterministic dealing.
//!
//! A match orchestrator holds one base seed per game; each hand's deal gets
//! a distinct deterministic seed derived from it, so replays and audits can
//! reproduce every deal without the engine owning any entropy.

/// Derive the dealing seed for a given hand of a match.
///
/// Same (game_seed, hand_no) always yields the same seed; different hands
/// of the same game never collide in practice.
pub fn derive_dealing_seed(game_seed: i64, hand_no: i16) -> u64 {
    // Cast i64 to u64 for RNG (sign doesn't matter for seed)
    let base = game_seed as u64;

    base.wrapping_add((hand_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}
