pub mod inspect;
pub mod open;
pub mod share;
