pub mod bidding;
pub mod playing;

pub use bidding::*;
pub use playing::*;
