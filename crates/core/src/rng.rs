//! RNG module - seeding the maze generator's random source
//!
//! The generator never touches a process-wide RNG. Callers build one of these
//! and hand it over: a fixed seed for tests and replays, the wall clock for
//! normal play.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG from a fixed seed
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seed derived from the current wall-clock time.
///
/// Falls back to 0 if the clock reads before the Unix epoch.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
        .unwrap_or(0)
}

/// Use `seed` if given, else the clock. Returns the seed actually used so it
/// can be logged and replayed.
pub fn seed_or_clock(seed: Option<u64>) -> (u64, StdRng) {
    let seed = seed.unwrap_or_else(seed_from_clock);
    (seed, seeded(seed))
}
