//! Domain layer

mod account;

pub use account::*;
