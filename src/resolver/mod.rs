//! Variant resolver
//!
//! Computes the class list for one render call from a frozen definition and
//! a caller-supplied parameter set. Never fails: unknown keys, unknown values
//! and `null` lookups contribute nothing.

mod params;
mod resolve;

pub use params::Params;
