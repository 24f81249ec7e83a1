/// Card suit, in dealing order: hearts, clubs, diamonds, spades.
///
/// A fresh deck runs through each suit in this order,
/// ace first within each suit.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    H = 0,
    C = 1,
    D = 2,
    S = 3,
}

impl Suit {
    /// All four suits in dealing order.
    pub const fn all() -> [Suit; 4] {
        [Suit::H, Suit::C, Suit::D, Suit::S]
    }
    /// Unicode suit symbol, used by the alternate card display.
    pub const fn symbol(&self) -> char {
        match self {
            Suit::H => '♥',
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::S => '♠',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::H,
            1 => Suit::C,
            2 => Suit::D,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::H => write!(f, "H"),
            Suit::C => write!(f, "C"),
            Suit::D => write!(f, "D"),
            Suit::S => write!(f, "S"),
        }
    }
}
