use super::rank::Rank;
use super::suit::Suit;
use crate::MAX_NAMED_DECK;
use crate::SUITS;
use crate::error::Error;
use crate::error::Result;

/// A named playing card.
///
/// A deck of `n` cards (a multiple of four, at most 64) splits into four
/// suits of `n / 4` cards. Index `i` of a fresh deck is rank `i % (n / 4)`
/// of suit `i / (n / 4)`, so a 52-card deck reads A♥ through K♥, then clubs,
/// diamonds and spades. Displayed as `rank.suit`, e.g. `10.D`, or with the
/// suit symbol under `{:#}`, e.g. `10♦`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Cards per suit in a nameable deck of `n` cards.
    pub fn suited(n: usize) -> Result<usize> {
        if n > MAX_NAMED_DECK {
            Err(Error::DeckTooLarge {
                size: n,
                max: MAX_NAMED_DECK,
            })
        } else if n % SUITS != 0 {
            Err(Error::UnevenSuits { size: n })
        } else {
            Ok(n / SUITS)
        }
    }

    /// The card at `index` of a fresh deck of `n` cards.
    pub fn named(index: usize, n: usize) -> Result<Self> {
        let suited = Self::suited(n)?;
        if index >= n {
            return Err(Error::PositionOutOfRange {
                position: index,
                size: n,
            });
        }
        Ok(Self::from((
            Rank::from((index % suited) as u8),
            Suit::from((index / suited) as u8),
        )))
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { suit, rank }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match f.alternate() {
            true => write!(f, "{}{}", self.rank, self.suit.symbol()),
            false => write!(f, "{}.{}", self.rank, self.suit),
        }
    }
}
