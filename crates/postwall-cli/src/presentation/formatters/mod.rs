pub mod card;
pub mod number;
