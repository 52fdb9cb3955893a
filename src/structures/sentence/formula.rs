//! Rendering of a sentence as a formula.

use crate::structures::sentence::Sentence;

impl Sentence {
    /// The sentence as a human-readable formula, with minimal parenthesization.
    ///
    /// - An atom renders as its bare name.
    /// - A negation renders as `¬` followed by the parenthesized operand.
    /// - A conjunction or disjunction with a single operand renders as that operand alone, and
    ///   otherwise as the parenthesized operands joined by `∧` or `∨`.
    /// - An implication or biconditional parenthesizes both sides and joins them with `=>` or
    ///   `<=>`.
    ///
    /// ```rust
    /// # use modus::structures::sentence::Sentence;
    /// let sentence = Sentence::implies(
    ///     Sentence::atom("P").negate(),
    ///     Sentence::or(vec![Sentence::atom("Q"), Sentence::atom("R")]),
    /// );
    ///
    /// assert_eq!(sentence.formula(), "(¬P) => (Q ∨ R)");
    /// ```
    pub fn formula(&self) -> String {
        match self {
            Self::Atom(name) => name.clone(),

            Self::Not(operand) => format!("¬{}", parenthesize(&operand.formula())),

            Self::And(conjuncts) => join(conjuncts, " ∧ "),

            Self::Or(disjuncts) => join(disjuncts, " ∨ "),

            Self::Implies {
                antecedent,
                consequent,
            } => format!(
                "{} => {}",
                parenthesize(&antecedent.formula()),
                parenthesize(&consequent.formula())
            ),

            Self::Iff { left, right } => format!(
                "{} <=> {}",
                parenthesize(&left.formula()),
                parenthesize(&right.formula())
            ),
        }
    }
}

/// The operands joined by the given connective, each parenthesized.
///
/// A single operand renders as itself, with no connective.
fn join(operands: &[Sentence], connective: &str) -> String {
    match operands {
        [operand] => operand.formula(),

        _ => operands
            .iter()
            .map(|operand| parenthesize(&operand.formula()))
            .collect::<Vec<_>>()
            .join(connective),
    }
}

/// The formula wrapped in a single pair of parentheses, unless no wrap is needed.
///
/// A formula is left unchanged if it is empty, is a single alphabetic token, or is already wrapped
/// by one outer pair of parentheses whose interior is balanced.
/// The check is purely syntactic, over the rendered string rather than the tree.
pub fn parenthesize(formula: &str) -> String {
    let wrapped = formula.len() >= 2
        && formula.starts_with('(')
        && formula.ends_with(')')
        && balanced(&formula[1..formula.len() - 1]);

    if formula.chars().all(char::is_alphabetic) || wrapped {
        formula.to_string()
    } else {
        format!("({formula})")
    }
}

/// Whether every parenthesis in the string is matched, with depth never falling below zero.
fn balanced(formula: &str) -> bool {
    let mut depth: usize = 0;

    for character in formula.chars() {
        match character {
            '(' => depth += 1,

            ')' => match depth {
                0 => return false,
                _ => depth -= 1,
            },

            _ => {}
        }
    }

    depth == 0
}
