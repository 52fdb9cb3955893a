/*!
Sentences of propositional logic.

A sentence is a tree.
Leaves are [atoms](Sentence::Atom), named boolean variables, and every other node is a connective
owning its children outright: negation, conjunction, disjunction, implication, or the
biconditional.

Sentences are built once and then evaluated, rendered, or checked any number of times.
The single exception to immutability is [append](Sentence::append), which extends the operand list
of an existing conjunction and supports building a knowledge base rule by rule.

Equality and hashing are structural and order-sensitive.
Two sentences are equal exactly when their variants and (recursively) their children match, so
`A ∧ B` and `B ∧ A` are distinct sentences even though they are logically equivalent.

```rust
# use modus::structures::sentence::Sentence;
let p = Sentence::atom("P");
let q = Sentence::atom("Q");

let this = Sentence::and(vec![p.clone(), q.clone()]);
let that = Sentence::and(vec![q, p]);

assert_ne!(this, that);
```

For ergonomic construction the boolean operators are overloaded: `!p` negates, while `p & q` and
`p | q` build a conjunction or disjunction.
`&` and `|` flatten into an existing left-hand conjunction or disjunction, so `p & q & r` is a
single three-operand conjunction.
*/

mod evaluate;
mod formula;
mod symbols;

pub use formula::parenthesize;

use crate::types::err;

/// A sentence of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sentence {
    /// A named boolean variable.
    Atom(String),

    /// The negation of a sentence.
    Not(Box<Sentence>),

    /// The conjunction of zero or more sentences, true when every operand is true.
    ///
    /// Operand order is significant for equality and rendering, though not for evaluation.
    And(Vec<Sentence>),

    /// The disjunction of zero or more sentences, true when some operand is true.
    Or(Vec<Sentence>),

    /// An implication, false only when the antecedent is true and the consequent false.
    Implies {
        antecedent: Box<Sentence>,
        consequent: Box<Sentence>,
    },

    /// A biconditional, true when both sides evaluate the same way.
    Iff {
        left: Box<Sentence>,
        right: Box<Sentence>,
    },
}

impl Sentence {
    /// An atom with the given name.
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    /// The negation of the sentence.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// The conjunction of the given sentences, in the given order.
    ///
    /// An empty conjunction is true (the identity of ∧).
    pub fn and(conjuncts: Vec<Sentence>) -> Self {
        Self::And(conjuncts)
    }

    /// The disjunction of the given sentences, in the given order.
    ///
    /// An empty disjunction is false (the identity of ∨).
    pub fn or(disjuncts: Vec<Sentence>) -> Self {
        Self::Or(disjuncts)
    }

    /// The implication from `antecedent` to `consequent`.
    pub fn implies(antecedent: Sentence, consequent: Sentence) -> Self {
        Self::Implies {
            antecedent: Box::new(antecedent),
            consequent: Box::new(consequent),
        }
    }

    /// The biconditional of `left` and `right`.
    pub fn iff(left: Sentence, right: Sentence) -> Self {
        Self::Iff {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Extends a conjunction with a further conjunct, in place.
    ///
    /// Every other variant is immutable once built, and appending to one fails with
    /// [NotAConjunction](err::StructureError::NotAConjunction).
    ///
    /// ```rust
    /// # use modus::structures::sentence::Sentence;
    /// let mut knowledge = Sentence::and(vec![]);
    /// knowledge.append(Sentence::atom("P")).unwrap();
    /// knowledge.append(Sentence::atom("Q")).unwrap();
    ///
    /// assert_eq!(knowledge.formula(), "P ∧ Q");
    /// ```
    pub fn append(&mut self, sentence: Sentence) -> Result<(), err::StructureError> {
        match self {
            Self::And(conjuncts) => {
                conjuncts.push(sentence);
                Ok(())
            }

            _ => Err(err::StructureError::NotAConjunction),
        }
    }
}

// Traits

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}

impl std::ops::Not for Sentence {
    type Output = Sentence;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::BitAnd for Sentence {
    type Output = Sentence;

    fn bitand(self, rhs: Sentence) -> Self::Output {
        match self {
            Self::And(mut conjuncts) => {
                conjuncts.push(rhs);
                Self::And(conjuncts)
            }

            lhs => Self::And(vec![lhs, rhs]),
        }
    }
}

impl std::ops::BitOr for Sentence {
    type Output = Sentence;

    fn bitor(self, rhs: Sentence) -> Self::Output {
        match self {
            Self::Or(mut disjuncts) => {
                disjuncts.push(rhs);
                Self::Or(disjuncts)
            }

            lhs => Self::Or(vec![lhs, rhs]),
        }
    }
}

impl From<&str> for Sentence {
    fn from(name: &str) -> Self {
        Sentence::atom(name)
    }
}
