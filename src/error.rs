//! Errors for shuffling and naming decks.
//!
//! Every check is deterministic and combinatorial, so nothing here is
//! retryable. A failed operation never hands back the input deck.
use crate::engine::Shuffle;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Deck size outside the shuffle family's domain
    #[error("{shuffle} cannot be applied to a deck of {size} cards")]
    InvalidSize { shuffle: Shuffle, size: usize },

    /// Identifier that names none of the seven shuffles
    #[error("unknown shuffle: {0:?} (expected one of fi, fo, si, so, di, do, rfo)")]
    UnknownShuffle(String),

    /// Label outside `0..size`
    #[error("position {position} is out of range for a deck of {size} cards")]
    PositionOutOfRange { position: usize, size: usize },

    /// Labels are not exactly `0..size`
    #[error("deck of {size} cards is not a permutation")]
    NotPermutation { size: usize },

    /// Cycle lcm does not fit in a usize
    #[error("order of the deck of {size} cards overflows")]
    OrderOverflow { size: usize },

    #[error("card names don't exist for a deck of {size} cards (at most {max})")]
    DeckTooLarge { size: usize, max: usize },

    #[error("a deck of {size} cards cannot be divided into four suits")]
    UnevenSuits { size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
