pub mod card;
pub use card::*;

pub mod rank;
pub use rank::*;

pub mod spread;
pub use spread::*;

pub mod suit;
pub use suit::*;
