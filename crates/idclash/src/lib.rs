#![doc = include_str!("../README.md")]

mod analyzer;
mod error;
mod format;
mod generator;
mod parser;
mod probability;
mod rand;
mod simulation;
mod time;

pub use crate::analyzer::*;
pub use crate::error::*;
pub use crate::format::*;
pub use crate::generator::*;
pub use crate::parser::*;
pub use crate::probability::*;
pub use crate::rand::*;
pub use crate::simulation::*;
pub use crate::time::*;
