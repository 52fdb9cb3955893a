//! Procedures over sentences, at present entailment checking alone.

mod check;

pub use check::model_check;
