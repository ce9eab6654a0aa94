//! Helper functions shared by the transformer and the generator

mod date;
mod html;

pub use date::*;
pub use html::*;
