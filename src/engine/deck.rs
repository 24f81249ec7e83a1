use super::sequence::Sequence;
use super::shuffle::Shuffle;
use crate::Arbitrary;
use crate::error::Error;
use crate::error::Result;

/// An ordered run of position labels.
///
/// Slot `i` holds the label of whatever is tracked there. Starting from
/// [`Deck::identity`], after shuffling slot `i` holds the position the card
/// that began at `i` has moved to. Shuffles act on the stored labels, not
/// on the slot indices, so applying `A` then `B` composes as `B ∘ A`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck(Vec<usize>);

impl Deck {
    /// A fresh deck of `n` cards, labelled `0..n`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn labels(&self) -> &[usize] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Apply one shuffle to every label, returning the new deck.
    pub fn apply(&self, shuffle: Shuffle) -> Result<Self> {
        let mut next = vec![0; self.len()];
        Self::remap(shuffle, &self.0, &mut next)?;
        Ok(Self(next))
    }

    /// Apply shuffles left to right.
    pub fn shuffle(&self, shuffles: &[Shuffle]) -> Result<Self> {
        Sequence::from(shuffles.to_vec()).apply(self)
    }

    /// Write the image of every label in `from` into the same slot of `into`.
    /// Both slices must be the deck's length.
    pub(crate) fn remap(shuffle: Shuffle, from: &[usize], into: &mut [usize]) -> Result<()> {
        debug_assert!(from.len() == into.len());
        let n = from.len();
        shuffle.check(n)?;
        for (slot, &label) in into.iter_mut().zip(from) {
            if label >= n {
                return Err(Error::PositionOutOfRange {
                    position: label,
                    size: n,
                });
            }
            *slot = shuffle.map(label, n);
        }
        Ok(())
    }

    /// Whether the labels are exactly `0..n` in some order.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.len()];
        self.iter().all(|label| {
            label < seen.len() && !std::mem::replace(&mut seen[label], true)
        })
    }

    /// The permutation that undoes this one: `inverse[deck[i]] == i`.
    pub fn inverse(&self) -> Result<Self> {
        if !self.is_permutation() {
            return Err(Error::NotPermutation { size: self.len() });
        }
        let mut inverse = vec![0; self.len()];
        self.iter()
            .enumerate()
            .for_each(|(slot, label)| inverse[label] = slot);
        Ok(Self(inverse))
    }

    /// Cycle lengths of the permutation, ascending.
    pub fn cycles(&self) -> Result<Vec<usize>> {
        if !self.is_permutation() {
            return Err(Error::NotPermutation { size: self.len() });
        }
        let mut visited = vec![false; self.len()];
        let mut cycles = Vec::new();
        for start in 0..self.len() {
            let mut length = 0;
            let mut at = start;
            while !visited[at] {
                visited[at] = true;
                at = self.0[at];
                length += 1;
            }
            if length > 0 {
                cycles.push(length);
            }
        }
        cycles.sort_unstable();
        Ok(cycles)
    }

    /// Smallest k > 0 such that repeating whatever produced this deck
    /// k times gives the identity. The lcm of the cycle lengths.
    pub fn order(&self) -> Result<usize> {
        let overflow = Error::OrderOverflow { size: self.len() };
        self.cycles()?.into_iter().try_fold(1usize, |order, cycle| {
            (order / gcd(order, cycle))
                .checked_mul(cycle)
                .ok_or_else(|| overflow.clone())
        })
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

impl From<Vec<usize>> for Deck {
    fn from(labels: Vec<usize>) -> Self {
        Self(labels)
    }
}
impl From<Deck> for Vec<usize> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl std::ops::Index<usize> for Deck {
    type Output = usize;
    fn index(&self, slot: usize) -> &usize {
        &self.0[slot]
    }
}

impl IntoIterator for Deck {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// random permutation of a four-suit deck of 4..=64 cards,
/// so that every shuffle family admits it
impl Arbitrary for Deck {
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let n = 4 * rand::random_range(1..=16usize);
        let mut labels = (0..n).collect::<Vec<_>>();
        labels.shuffle(&mut rand::rng());
        Self(labels)
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels = self
            .iter()
            .map(|label| label.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", labels)
    }
}
