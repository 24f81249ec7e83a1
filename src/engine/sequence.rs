use super::deck::Deck;
use super::shuffle::Shuffle;
use crate::Arbitrary;
use crate::error::Error;
use crate::error::Result;

/// An ordered list of shuffles, applied left to right.
/// The empty sequence leaves any deck unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence(Vec<Shuffle>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = Shuffle> + '_ {
        self.0.iter().copied()
    }
    pub fn push(&mut self, shuffle: Shuffle) {
        self.0.push(shuffle);
    }

    /// The sequence performed `times` times back to back.
    pub fn repeat(&self, times: usize) -> Self {
        Self(self.0.repeat(times))
    }

    /// Every shuffle must admit the deck size. Shuffles never change the
    /// length, so one check against the starting size covers every step.
    pub fn check(&self, n: usize) -> Result<()> {
        self.iter().try_for_each(|shuffle| shuffle.check(n))
    }

    /// Fold the shuffles over the deck, ping-ponging between two buffers.
    /// Nothing is applied unless every shuffle admits the deck size.
    pub fn apply(&self, deck: &Deck) -> Result<Deck> {
        if self.is_empty() {
            return Ok(deck.clone());
        }
        let n = deck.len();
        self.check(n)?;
        log::debug!("applying [{}] to {} cards", self, n);
        let mut from = Vec::from(deck.clone());
        let mut into = vec![0; n];
        for shuffle in self.iter() {
            log::trace!("{}", shuffle);
            Deck::remap(shuffle, &from, &mut into)?;
            std::mem::swap(&mut from, &mut into);
        }
        Ok(Deck::from(from))
    }

    /// How many repetitions of the whole sequence restore a deck of `n`.
    pub fn order(&self, n: usize) -> Result<usize> {
        self.apply(&Deck::identity(n))?.order()
    }
}

impl From<Vec<Shuffle>> for Sequence {
    fn from(shuffles: Vec<Shuffle>) -> Self {
        Self(shuffles)
    }
}
impl From<Sequence> for Vec<Shuffle> {
    fn from(sequence: Sequence) -> Self {
        sequence.0
    }
}

impl FromIterator<Shuffle> for Sequence {
    fn from_iter<I: IntoIterator<Item = Shuffle>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Sequence {
    type Item = Shuffle;
    type IntoIter = std::vec::IntoIter<Shuffle>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// str isomorphism
/// identifiers separated by whitespace or commas, e.g. "fi, fi, so fo di"
impl TryFrom<&str> for Sequence {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|code| !code.is_empty())
            .map(Shuffle::try_from)
            .collect::<Result<Self>>()
    }
}

impl std::str::FromStr for Sequence {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl Arbitrary for Sequence {
    fn random() -> Self {
        (0..rand::random_range(0..=12usize))
            .map(|_| Shuffle::random())
            .collect()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let codes = self
            .iter()
            .map(|shuffle| shuffle.code())
            .collect::<Vec<&str>>()
            .join(" ");
        write!(f, "{}", codes)
    }
}
