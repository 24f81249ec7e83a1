use super::card::Card;
use crate::engine::Deck;
use crate::error::Error;
use crate::error::Result;

/// A shuffled deck laid out face up, top card first.
///
/// A [`Deck`] records where each original card went. The spread inverts
/// that, so slot `j` holds the card that now sits at position `j`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spread(Vec<Card>);

impl Spread {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

impl TryFrom<&Deck> for Spread {
    type Error = Error;
    fn try_from(deck: &Deck) -> Result<Self> {
        let n = deck.len();
        Card::suited(n)?;
        deck.inverse()?
            .iter()
            .map(|origin| Card::named(origin, n))
            .collect::<Result<Vec<Card>>>()
            .map(Self)
    }
}

impl From<Spread> for Vec<Card> {
    fn from(spread: Spread) -> Self {
        spread.0
    }
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = self
            .iter()
            .map(|card| match f.alternate() {
                true => format!("{:#}", card),
                false => card.to_string(),
            })
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}", names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Sequence;
    use crate::engine::Shuffle;

    #[test]
    fn fresh_deck() {
        let spread = Spread::try_from(&Deck::identity(8)).unwrap();
        assert!(spread.to_string() == "A.H, 2.H, A.C, 2.C, A.D, 2.D, A.S, 2.S");
    }

    #[test]
    fn out_faro_of_eight() {
        let deck = Deck::identity(8).apply(Shuffle::OutFaro).unwrap();
        let spread = Spread::try_from(&deck).unwrap();
        assert!(spread.to_string() == "A.H, A.D, 2.H, 2.D, A.C, A.S, 2.C, 2.S");
        assert!(format!("{:#}", spread) == "A♥, A♦, 2♥, 2♦, A♣, A♠, 2♣, 2♠");
    }

    #[test]
    fn eight_out_faros_read_in_order() {
        let deck = Sequence::from(vec![Shuffle::OutFaro; 8])
            .apply(&Deck::identity(52))
            .unwrap();
        let spread = Spread::try_from(&deck).unwrap();
        assert!(spread == Spread::try_from(&Deck::identity(52)).unwrap());
        assert!(spread.cards()[13].to_string() == "A.C");
    }

    #[test]
    fn mixed_sequence_of_thirty_two() {
        let deck = Sequence::try_from("fi fi so fo di")
            .and_then(|sequence| sequence.apply(&Deck::identity(32)))
            .unwrap();
        let spread = Spread::try_from(&deck).unwrap();
        assert!(
            spread.to_string()
                == "2.S, 4.S, A.S, 3.S, 6.S, 8.S, 5.S, 7.S, \
                    6.D, 8.D, 5.D, 7.D, 2.D, 4.D, A.D, 3.D, \
                    2.C, 4.C, A.C, 3.C, 6.C, 8.C, 5.C, 7.C, \
                    6.H, 8.H, 5.H, 7.H, 2.H, 4.H, A.H, 3.H"
        );
    }

    #[test]
    fn empty_deck() {
        let spread = Spread::try_from(&Deck::default()).unwrap();
        assert!(spread.is_empty());
        assert!(spread.to_string() == "");
    }

    #[test]
    fn rejects_unnameable_decks() {
        assert!(
            Spread::try_from(&Deck::identity(68))
                == Err(Error::DeckTooLarge {
                    size: 68,
                    max: crate::MAX_NAMED_DECK
                })
        );
        assert!(Spread::try_from(&Deck::identity(30)) == Err(Error::UnevenSuits { size: 30 }));
        assert!(
            Spread::try_from(&Deck::from(vec![0, 0, 1, 2]))
                == Err(Error::NotPermutation { size: 4 })
        );
    }
}
