//! This module contains all the constant values used in the system
mod token;
pub use token::*;

mod price;
pub use price::*;
