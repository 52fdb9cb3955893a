//! The symbols of a sentence.

use std::collections::BTreeSet;

use crate::structures::sentence::Sentence;

impl Sentence {
    /// The set of atom names appearing anywhere in the sentence.
    ///
    /// The set is ordered, so iteration over symbols is deterministic.
    pub fn symbols(&self) -> BTreeSet<String> {
        match self {
            Self::Atom(name) => BTreeSet::from([name.clone()]),

            Self::Not(operand) => operand.symbols(),

            Self::And(operands) | Self::Or(operands) => {
                operands.iter().flat_map(|operand| operand.symbols()).collect()
            }

            Self::Implies {
                antecedent,
                consequent,
            } => {
                let mut symbols = antecedent.symbols();
                symbols.extend(consequent.symbols());
                symbols
            }

            Self::Iff { left, right } => {
                let mut symbols = left.symbols();
                symbols.extend(right.symbols());
                symbols
            }
        }
    }
}
