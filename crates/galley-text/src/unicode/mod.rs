//! Unicode machinery for line breaking: code-point decoding, Line_Break
//! classification, and break-opportunity resolution.

pub mod class;
pub mod rules;
mod tables;
pub mod utf8;

pub use class::{BreakClass, break_class};
pub use rules::{BreakOpportunity, resolve_opportunities};
