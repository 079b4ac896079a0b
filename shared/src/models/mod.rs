//! Domain models for the weather history service

mod city;
mod contact;
mod statistics;
mod weather;

pub use city::*;
pub use contact::*;
pub use statistics::*;
pub use weather::*;
