use modus::{
    structures::{sentence::Sentence, valuation::Model},
    types::err,
};

mod basic {

    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;

    fn hash_of(sentence: &Sentence) -> u64 {
        let mut hasher = DefaultHasher::new();
        sentence.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn atom_evaluation() {
        let p = Sentence::atom("P");

        let model = Model::from([("P".to_string(), true)]);
        assert_eq!(p.evaluate(&model), Ok(true));

        assert_eq!(
            p.evaluate(&Model::new()),
            Err(err::EvaluationError::Unvalued("P".to_string()))
        );
    }

    #[test]
    fn unvalued_propagation() {
        let sentence = Sentence::implies(Sentence::atom("P"), Sentence::atom("Q"));

        let model = Model::from([("P".to_string(), true)]);

        // The failure surfaces from the atom, untouched by the connective.
        assert_eq!(
            sentence.evaluate(&model),
            Err(err::EvaluationError::Unvalued("Q".to_string()))
        );
    }

    #[test]
    fn connective_semantics() {
        let model = Model::from([("P".to_string(), true), ("Q".to_string(), false)]);

        let p = Sentence::atom("P");
        let q = Sentence::atom("Q");

        assert_eq!(p.clone().negate().evaluate(&model), Ok(false));
        assert_eq!(Sentence::and(vec![p.clone(), q.clone()]).evaluate(&model), Ok(false));
        assert_eq!(Sentence::or(vec![p.clone(), q.clone()]).evaluate(&model), Ok(true));
        assert_eq!(Sentence::implies(p.clone(), q.clone()).evaluate(&model), Ok(false));
        assert_eq!(Sentence::implies(q.clone(), p.clone()).evaluate(&model), Ok(true));
        assert_eq!(Sentence::iff(p.clone(), q.clone()).evaluate(&model), Ok(false));
        assert_eq!(Sentence::iff(q.clone(), q).evaluate(&model), Ok(true));
    }

    #[test]
    fn empty_operand_lists() {
        let model = Model::new();

        assert_eq!(Sentence::and(vec![]).evaluate(&model), Ok(true));
        assert_eq!(Sentence::or(vec![]).evaluate(&model), Ok(false));

        assert!(Sentence::and(vec![]).symbols().is_empty());
        assert!(Sentence::or(vec![]).symbols().is_empty());
    }

    #[test]
    fn structural_equality() {
        let this = Sentence::and(vec![Sentence::atom("P"), Sentence::atom("Q")]);
        let that = Sentence::and(vec![Sentence::atom("P"), Sentence::atom("Q")]);

        assert_eq!(this, that);
        assert_eq!(hash_of(&this), hash_of(&that));

        // Order of operands is part of the structure, logical equivalence notwithstanding.
        let reversed = Sentence::and(vec![Sentence::atom("Q"), Sentence::atom("P")]);
        assert_ne!(this, reversed);

        let disjunction = Sentence::or(vec![Sentence::atom("P"), Sentence::atom("Q")]);
        assert_ne!(this, disjunction);
    }

    #[test]
    fn symbol_collection() {
        let sentence = Sentence::implies(
            Sentence::and(vec![Sentence::atom("A"), Sentence::atom("B")]),
            Sentence::atom("A").negate(),
        );

        let symbols = sentence.symbols();
        assert_eq!(symbols.len(), 2);
        assert!(symbols.contains("A"));
        assert!(symbols.contains("B"));
    }

    #[test]
    fn conjunction_append() {
        let mut knowledge = Sentence::and(vec![]);

        assert!(knowledge.append(Sentence::atom("P")).is_ok());
        assert!(knowledge.append(Sentence::atom("Q").negate()).is_ok());

        assert_eq!(knowledge.symbols().len(), 2);

        let built = Sentence::and(vec![Sentence::atom("P"), Sentence::atom("Q").negate()]);
        assert_eq!(knowledge, built);
    }

    #[test]
    fn append_requires_a_conjunction() {
        let mut atom = Sentence::atom("P");
        assert_eq!(
            atom.append(Sentence::atom("Q")),
            Err(err::StructureError::NotAConjunction)
        );

        let mut disjunction = Sentence::or(vec![Sentence::atom("P")]);
        assert_eq!(
            disjunction.append(Sentence::atom("Q")),
            Err(err::StructureError::NotAConjunction)
        );
    }

    #[test]
    fn errors_unify() {
        let evaluation = Sentence::atom("P").evaluate(&Model::new()).unwrap_err();
        let structure = Sentence::atom("P").append(Sentence::atom("Q")).unwrap_err();

        let kinds: Vec<err::ErrorKind> = vec![evaluation.into(), structure.into()];

        assert_eq!(kinds[0].to_string(), "atom P has no value");
        assert_eq!(kinds[1].to_string(), "append to a non-conjunction");
    }

    #[test]
    fn operator_sugar() {
        let p = Sentence::atom("P");
        let q = Sentence::atom("Q");
        let r = Sentence::atom("R");

        assert_eq!(!p.clone(), p.clone().negate());

        // `&` and `|` flatten to the left.
        assert_eq!(
            p.clone() & q.clone() & r.clone(),
            Sentence::and(vec![p.clone(), q.clone(), r.clone()])
        );
        assert_eq!(p.clone() | q.clone() | r.clone(), Sentence::or(vec![p.clone(), q, r]));

        assert_eq!(Sentence::from("P"), p);
    }
}
