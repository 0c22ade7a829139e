pub mod compare;
pub mod specials;
