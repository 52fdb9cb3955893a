/*!
Valuations, mapping atom names to truth values.

The valuation trait is the seam between a sentence and whatever supplies truth values during
evaluation.
[Model] is the canonical implementation, an ordered map from names to values, and implementations
are also provided for the standard maps a caller is likely to already hold.

A valuation may be partial.
Evaluating a sentence containing an atom the valuation does not cover fails, by the contract of
[evaluate](crate::structures::sentence::Sentence::evaluate).
*/

use std::collections::{BTreeMap, HashMap};

/// A source of truth values for atoms, by name.
pub trait Valuation {
    /// The value of the named atom, if the valuation covers it.
    fn value_of(&self, name: &str) -> Option<bool>;
}

/// The canonical valuation, a finite ordered map from atom names to truth values.
pub type Model = BTreeMap<String, bool>;

impl Valuation for BTreeMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Valuation for HashMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}
