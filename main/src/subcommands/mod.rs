pub mod cards;
pub mod simulate;
