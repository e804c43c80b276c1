//! Rusty-Form-Errors
//!
//! Per-attribute error accumulation for form objects. Errors are kept in the
//! order attributes were first reported, so summaries render the same way
//! every time.

mod collection;

pub use collection::ErrorCollection;
