//! Perfect and semi-perfect faro shuffles.
//!
//! A faro splits a deck into halves and interleaves them card for card. Each
//! of the seven shuffle families here is a fixed permutation of deck
//! positions, so repeated shuffling is fully deterministic and eventually
//! restores the deck.
//!
//! - [`engine`]: the position kernel, [`Shuffle`], [`Deck`] and [`Sequence`]
//! - [`cards`]: human-readable card names for a shuffled deck
pub mod cards;
pub mod engine;
pub mod error;

pub use cards::*;
pub use engine::*;
pub use error::*;

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Number of suits a nameable deck divides into.
pub const SUITS: usize = 4;
/// Largest deck that has card names (sixteen values per suit).
pub const MAX_NAMED_DECK: usize = 64;
/// Standard deck size, used when none is given.
pub const DECK: usize = 52;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Output goes to stderr so stdout stays clean for shuffle results.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> std::result::Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
