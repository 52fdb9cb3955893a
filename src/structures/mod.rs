//! Structures, such as sentences and valuations.

pub mod sentence;
pub mod valuation;
