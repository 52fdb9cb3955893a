/*!
Entailment by exhaustive model checking.

A knowledge base entails a query exactly when every model satisfying the knowledge base also
satisfies the query.
With *S* the union of the symbols of the two sentences, the check examines each of the
2<sup>|S|</sup> total assignments to *S* in turn, eliminating one symbol at a time by recursing
once with the symbol true and once with it false.

The elimination order is the lexicographic order of the symbols, though the result is invariant
under any order: every total assignment is reached exactly once regardless, and the verdict is the
conjunction over all of them.
Termination is immediate, as each recursive call strictly shrinks the list of unbound symbols.

The cost is exponential in |S|.
This is the intended design of a naive decision procedure, suitable only for small symbol counts.
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{sentence::Sentence, valuation::Model},
};

/// Whether the knowledge base entails the query.
///
/// ```rust
/// # use modus::procedures::model_check;
/// # use modus::structures::sentence::Sentence;
/// let a = Sentence::atom("A");
/// let b = Sentence::atom("B");
///
/// // A ∨ B does not settle A.
/// let knowledge = Sentence::or(vec![a.clone(), b]);
/// assert!(!model_check(&knowledge, &a));
/// ```
///
/// The check is total: for any two sentences it returns a definite verdict, with recursion depth
/// bounded by the number of distinct symbols.
pub fn model_check(knowledge: &Sentence, query: &Sentence) -> bool {
    let mut symbols: BTreeSet<String> = knowledge.symbols();
    symbols.extend(query.symbols());

    let symbols = symbols.into_iter().collect::<Vec<_>>();

    log::trace!(target: targets::CHECK, "Checking entailment over {} symbols", symbols.len());

    check_on(knowledge, query, &symbols, &mut Model::new())
}

/// Whether entailment holds on every extension of the model over the unbound symbols.
///
/// With no symbols left the model is total over both sentences: a model failing the knowledge
/// base vacuously entails the query, and otherwise the query must hold.
/// Evaluation cannot fail on a total model, so the error arms fall to the vacuous side for the
/// knowledge base and to the failing side for the query.
fn check_on(knowledge: &Sentence, query: &Sentence, unbound: &[String], model: &mut Model) -> bool {
    match unbound.split_first() {
        None => match knowledge.evaluate(model) {
            Ok(true) => {
                let verdict = query.evaluate(model).is_ok_and(|value| value);
                log::trace!(target: targets::CHECK, "Knowledge satisfied on {model:?}, query: {verdict}");
                verdict
            }

            _ => true,
        },

        Some((symbol, rest)) => {
            model.insert(symbol.clone(), true);
            let mut holds = check_on(knowledge, query, rest, model);

            if holds {
                model.insert(symbol.clone(), false);
                holds = check_on(knowledge, query, rest, model);
            }

            model.remove(symbol);
            holds
        }
    }
}
