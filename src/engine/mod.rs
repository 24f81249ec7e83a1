pub(crate) mod kernel;

pub mod deck;
pub use deck::*;

pub mod sequence;
pub use sequence::*;

pub mod shuffle;
pub use shuffle::*;
