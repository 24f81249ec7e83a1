/// Card rank within a suit.
///
/// Suits in decks larger than 52 cards carry extra ranks past the king,
/// up to 16 per suit for a 64-card deck.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
    Fourteen = 13,
    Fifteen = 14,
    Sixteen = 15,
}

impl Rank {
    pub const MAX: Self = Rank::Sixteen;
    pub const MIN: Self = Rank::Ace;
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            13 => Rank::Fourteen,
            14 => Rank::Fifteen,
            15 => Rank::Sixteen,
            _ => unreachable!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Fourteen => "14",
                Rank::Fifteen => "15",
                Rank::Sixteen => "16",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in u8::from(Rank::MIN)..=u8::from(Rank::MAX) {
            assert!(u8::from(Rank::from(n)) == n);
        }
    }

    #[test]
    fn display_court_and_extended() {
        assert!(Rank::Ace.to_string() == "A");
        assert!(Rank::Ten.to_string() == "10");
        assert!(Rank::King.to_string() == "K");
        assert!(Rank::Sixteen.to_string() == "16");
    }
}
