//! Evaluation of a sentence against a valuation.

use crate::{
    structures::{sentence::Sentence, valuation::Valuation},
    types::err,
};

impl Sentence {
    /// The truth value of the sentence on the given valuation, by the classical semantics of each
    /// connective.
    ///
    /// Fails with [Unvalued](err::EvaluationError::Unvalued) if some atom in the sentence has no
    /// value on the valuation.
    /// The failure propagates unmodified from whichever subtree raised it, with no recovery or
    /// substitution along the way.
    ///
    /// An empty conjunction is true and an empty disjunction false, as the identities of their
    /// connectives.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Result<bool, err::EvaluationError> {
        match self {
            Self::Atom(name) => match valuation.value_of(name) {
                Some(value) => Ok(value),
                None => Err(err::EvaluationError::Unvalued(name.clone())),
            },

            Self::Not(operand) => Ok(!operand.evaluate(valuation)?),

            Self::And(conjuncts) => {
                for conjunct in conjuncts {
                    if !conjunct.evaluate(valuation)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Self::Or(disjuncts) => {
                for disjunct in disjuncts {
                    if disjunct.evaluate(valuation)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Self::Implies {
                antecedent,
                consequent,
            } => Ok(!antecedent.evaluate(valuation)? || consequent.evaluate(valuation)?),

            Self::Iff { left, right } => Ok(left.evaluate(valuation)? == right.evaluate(valuation)?),
        }
    }
}
