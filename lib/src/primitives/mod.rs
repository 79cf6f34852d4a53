pub mod card;
pub mod cardset;
pub mod eplayerindex;
pub mod stich;

pub use card::*;
pub use cardset::*;
pub use eplayerindex::*;
pub use stich::*;
