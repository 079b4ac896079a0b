//! HTTP handlers

mod contact;
mod health;
mod weather;

pub use contact::*;
pub use health::*;
pub use weather::*;
