use super::deck::Deck;
use super::kernel;
use crate::Arbitrary;
use crate::error::Error;
use crate::error::Result;

/// One of the seven faro families.
///
/// The single faros (in, out, reverse out) cut the deck into two equal
/// halves, so they need an even number of cards. The double and straddle
/// faros act as a period-4 permutation applied block by block, so they need
/// a deck that divides into fours.
///
/// Identifiers follow the usual shorthand: `fi`, `fo`, `si`, `so`, `di`,
/// `do`, `rfo`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shuffle {
    InFaro,
    OutFaro,
    StraddleInFaro,
    StraddleOutFaro,
    DoubleInFaro,
    DoubleOutFaro,
    ReverseOutFaro,
}

impl Shuffle {
    /// All seven families, in identifier order.
    pub const fn all() -> [Self; 7] {
        [
            Self::InFaro,
            Self::OutFaro,
            Self::StraddleInFaro,
            Self::StraddleOutFaro,
            Self::DoubleInFaro,
            Self::DoubleOutFaro,
            Self::ReverseOutFaro,
        ]
    }

    /// Short identifier, as accepted by `TryFrom<&str>`.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InFaro => "fi",
            Self::OutFaro => "fo",
            Self::StraddleInFaro => "si",
            Self::StraddleOutFaro => "so",
            Self::DoubleInFaro => "di",
            Self::DoubleOutFaro => "do",
            Self::ReverseOutFaro => "rfo",
        }
    }

    /// Deck sizes must be a positive multiple of this.
    pub const fn block(&self) -> usize {
        match self {
            Self::InFaro | Self::OutFaro | Self::ReverseOutFaro => 2,
            Self::StraddleInFaro
            | Self::StraddleOutFaro
            | Self::DoubleInFaro
            | Self::DoubleOutFaro => 4,
        }
    }

    /// Whether a deck of `n` cards is in this family's domain.
    pub const fn admits(&self, n: usize) -> bool {
        n > 0 && n % self.block() == 0
    }

    pub fn check(&self, n: usize) -> Result<()> {
        if self.admits(n) {
            Ok(())
        } else {
            Err(Error::InvalidSize {
                shuffle: *self,
                size: n,
            })
        }
    }

    /// Where the card at position `p` lands after one shuffle of `n` cards.
    pub fn image(&self, p: usize, n: usize) -> Result<usize> {
        self.check(n)?;
        if p < n {
            Ok(self.map(p, n))
        } else {
            Err(Error::PositionOutOfRange {
                position: p,
                size: n,
            })
        }
    }

    /// Unchecked dispatch into the kernel.
    /// Callers guarantee `p < n` and `self.admits(n)`.
    pub(crate) const fn map(&self, p: usize, n: usize) -> usize {
        match self {
            Self::InFaro => kernel::in_faro(p, n),
            Self::OutFaro => kernel::out_faro(p, n),
            Self::StraddleInFaro => kernel::straddle_in_faro(p, n),
            Self::StraddleOutFaro => kernel::straddle_out_faro(p, n),
            Self::DoubleInFaro => kernel::double_in_faro(p, n),
            Self::DoubleOutFaro => kernel::double_out_faro(p, n),
            Self::ReverseOutFaro => kernel::reverse_out_faro(p, n),
        }
    }

    /// A family that undoes this one on `n` cards, if any of the seven does.
    /// Looked up in [`Shuffle::all`] order, so a self-inverse family is found
    /// before a distinct inverse listed after it.
    pub fn inverse(&self, n: usize) -> Option<Self> {
        let ref fresh = Deck::identity(n);
        let shuffled = fresh.apply(*self).ok()?;
        Self::all()
            .into_iter()
            .filter(|shuffle| shuffle.admits(n))
            .find(|shuffle| shuffled.apply(*shuffle).is_ok_and(|deck| deck == *fresh))
    }

    /// How many repetitions on `n` cards bring the deck back to its start.
    pub fn order(&self, n: usize) -> Result<usize> {
        Deck::identity(n).apply(*self)?.order()
    }
}

/// str isomorphism
impl TryFrom<&str> for Shuffle {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fi" => Ok(Self::InFaro),
            "fo" => Ok(Self::OutFaro),
            "si" => Ok(Self::StraddleInFaro),
            "so" => Ok(Self::StraddleOutFaro),
            "di" => Ok(Self::DoubleInFaro),
            "do" => Ok(Self::DoubleOutFaro),
            "rfo" => Ok(Self::ReverseOutFaro),
            _ => Err(Error::UnknownShuffle(s.to_string())),
        }
    }
}

impl std::str::FromStr for Shuffle {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl Arbitrary for Shuffle {
    fn random() -> Self {
        Self::all()[rand::random_range(0..Self::all().len())]
    }
}

impl std::fmt::Display for Shuffle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InFaro => write!(f, "in faro"),
            Self::OutFaro => write!(f, "out faro"),
            Self::StraddleInFaro => write!(f, "straddle in faro"),
            Self::StraddleOutFaro => write!(f, "straddle out faro"),
            Self::DoubleInFaro => write!(f, "double in faro"),
            Self::DoubleOutFaro => write!(f, "double out faro"),
            Self::ReverseOutFaro => write!(f, "reverse out faro"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_over_domain() {
        for shuffle in Shuffle::all() {
            for n in (1..=256).filter(|n| shuffle.admits(*n)) {
                let mut seen = vec![false; n];
                for p in 0..n {
                    let q = shuffle.image(p, n).unwrap();
                    assert!(q < n, "{} sends {} outside {} cards", shuffle, p, n);
                    assert!(!seen[q], "{} collides at {} on {} cards", shuffle, q, n);
                    seen[q] = true;
                }
                assert!(seen.iter().all(|&hit| hit));
            }
        }
    }

    #[test]
    fn single_faros_reject_odd() {
        for shuffle in [Shuffle::InFaro, Shuffle::OutFaro, Shuffle::ReverseOutFaro] {
            for n in (1..64).step_by(2) {
                assert!(shuffle.image(0, n) == Err(Error::InvalidSize { shuffle, size: n }));
            }
            assert!(shuffle.image(0, 6).is_ok());
        }
    }

    #[test]
    fn block_faros_reject_unaligned() {
        for shuffle in [
            Shuffle::StraddleInFaro,
            Shuffle::StraddleOutFaro,
            Shuffle::DoubleInFaro,
            Shuffle::DoubleOutFaro,
        ] {
            for n in (1..64).filter(|n| n % 4 != 0) {
                assert!(shuffle.image(0, n) == Err(Error::InvalidSize { shuffle, size: n }));
            }
            assert!(shuffle.image(0, 12).is_ok());
        }
    }

    #[test]
    fn empty_deck_rejected() {
        for shuffle in Shuffle::all() {
            assert!(!shuffle.admits(0));
            assert!(shuffle.check(0).is_err());
            assert!(shuffle.image(0, 0) == Err(Error::InvalidSize { shuffle, size: 0 }));
            assert!(Deck::default().apply(shuffle).is_err());
        }
    }

    #[test]
    fn position_out_of_range() {
        assert!(
            Shuffle::OutFaro.image(8, 8)
                == Err(Error::PositionOutOfRange {
                    position: 8,
                    size: 8
                })
        );
        assert!(Shuffle::DoubleInFaro.image(100, 52).is_err());
    }

    #[test]
    fn out_faro_special_case() {
        assert!(Shuffle::OutFaro.image(3, 8) == Ok(6));
        assert!(Shuffle::OutFaro.image(7, 8) == Ok(7));
    }

    #[test]
    fn parse_codes() {
        for shuffle in Shuffle::all() {
            assert!(Shuffle::try_from(shuffle.code()) == Ok(shuffle));
        }
        assert!(Shuffle::try_from(" FO ") == Ok(Shuffle::OutFaro));
        assert!("Rfo".parse::<Shuffle>() == Ok(Shuffle::ReverseOutFaro));
    }

    #[test]
    fn parse_unknown() {
        assert!(Shuffle::try_from("fx") == Err(Error::UnknownShuffle("fx".to_string())));
        assert!(Shuffle::try_from("").is_err());
        assert!("out".parse::<Shuffle>().is_err());
    }

    #[test]
    fn inverse_pairs() {
        for n in (6..=64).step_by(2) {
            assert!(Shuffle::OutFaro.inverse(n) == Some(Shuffle::ReverseOutFaro));
            assert!(Shuffle::ReverseOutFaro.inverse(n) == Some(Shuffle::OutFaro));
        }
        assert!(Shuffle::OutFaro.inverse(4) == Some(Shuffle::OutFaro));
    }

    #[test]
    fn inverse_depends_on_size() {
        assert!(Shuffle::DoubleOutFaro.inverse(8) == Some(Shuffle::DoubleOutFaro));
        assert!(Shuffle::DoubleOutFaro.inverse(52).is_none());
        assert!(Shuffle::InFaro.inverse(2) == Some(Shuffle::InFaro));
        assert!(Shuffle::InFaro.inverse(52).is_none());
        assert!(Shuffle::DoubleInFaro.inverse(6).is_none());
        assert!(Shuffle::OutFaro.inverse(7).is_none());
    }

    #[test]
    fn inverse_undoes_wherever_found() {
        for shuffle in Shuffle::all() {
            for n in (2..=64).filter(|n| shuffle.admits(*n)) {
                if let Some(inverse) = shuffle.inverse(n) {
                    let deck = Deck::identity(n);
                    let back = deck.apply(shuffle).and_then(|d| d.apply(inverse));
                    assert!(back == Ok(deck), "{} then {} on {}", shuffle, inverse, n);
                }
            }
        }
    }

    #[test]
    fn orders_of_standard_deck() {
        assert!(Shuffle::OutFaro.order(52) == Ok(8));
        assert!(Shuffle::InFaro.order(52) == Ok(52));
        assert!(Shuffle::ReverseOutFaro.order(52) == Ok(8));
        assert!(Shuffle::DoubleOutFaro.order(52) == Ok(20));
        assert!(Shuffle::DoubleInFaro.order(52) == Ok(18));
        assert!(Shuffle::StraddleOutFaro.order(52) == Ok(2184));
        assert!(Shuffle::StraddleInFaro.order(52) == Ok(2184));
    }

    #[test]
    fn orders_of_small_decks() {
        assert!(Shuffle::OutFaro.order(32) == Ok(5));
        assert!(Shuffle::InFaro.order(32) == Ok(10));
        assert!(Shuffle::StraddleOutFaro.order(8) == Ok(7));
        assert!(Shuffle::DoubleInFaro.order(8) == Ok(4));
        assert!(Shuffle::OutFaro.order(7).is_err());
    }
}
