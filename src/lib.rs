//! A library for deciding logical entailment over propositional sentences by exhaustive model checking.
//!
//! modus represents propositional sentences as trees built from atoms, negation, conjunction,
//! disjunction, implication, and the biconditional, and decides whether a knowledge base entails a
//! query by checking the query against every model of the symbols at issue.
//!
//! The library is a decision procedure, not a solver.
//! Every one of the 2<sup>|S|</sup> assignments to the relevant symbols *S* is examined, with no
//! propagation, learning, or heuristics of any kind.
//! This is exponential by design, and appropriate only when the symbol count is small.
//!
//! # Orientation
//!
//! - [Sentences](structures::sentence) are built once, then evaluated, rendered, or checked any
//!   number of times.
//! - A [valuation](structures::valuation) maps atom names to truth values, with
//!   [`Model`](structures::valuation::Model) as the canonical map.
//! - [`model_check`](procedures::model_check) decides entailment.
//!
//! # Examples
//!
//! + Modus ponens: from *A → B* and *A*, conclude *B*.
//!
//! ```rust
//! use modus::procedures::model_check;
//! use modus::structures::sentence::Sentence;
//!
//! let a = Sentence::atom("A");
//! let b = Sentence::atom("B");
//!
//! let knowledge = Sentence::and(vec![Sentence::implies(a.clone(), b.clone()), a.clone()]);
//!
//! assert!(model_check(&knowledge, &b));
//! assert!(!model_check(&knowledge, &a.negate()));
//! ```
//!
//! + Evaluation against an explicit model, and rendering.
//!
//! ```rust
//! use modus::structures::sentence::Sentence;
//! use modus::structures::valuation::Model;
//!
//! let rain = Sentence::atom("Rain");
//! let umbrella = Sentence::atom("Umbrella");
//! let sentence = Sentence::implies(rain, umbrella);
//!
//! let model = Model::from([("Rain".to_string(), true), ("Umbrella".to_string(), false)]);
//!
//! assert_eq!(sentence.evaluate(&model), Ok(false));
//! assert_eq!(sentence.formula(), "Rain => Umbrella");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made at trace level during a check, under the targets listed in
//! [misc::log].
//! No log implementation is provided.

pub mod procedures;

pub mod structures;
pub mod types;

pub mod misc;
