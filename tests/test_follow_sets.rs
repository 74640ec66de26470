mod support;

use first_follow::{Error, FirstSets, FollowSets, Grammar, Symbol};

use support::*;

fn follow_sets(grammar: &Grammar) -> FollowSets {
    FollowSets::new(grammar, &FirstSets::new(grammar).unwrap()).unwrap()
}

#[test]
fn test_alternatives_follow_sets() {
    let follow = follow_sets(&alternatives());

    assert_eq!(follow.get("S"), Some(&set(&["$"])));
    assert_eq!(follow.get("A"), Some(&set(&["b"])));
    assert_eq!(follow.get("B"), Some(&set(&["$"])));
    assert_eq!(follow.get("C"), Some(&set(&["d"])));
    assert_eq!(follow.get("D"), Some(&set(&["$"])));
}

#[test]
fn test_expression_follow_sets() {
    let follow = follow_sets(&expression());

    assert_eq!(follow.get("E"), Some(&set(&["$", ")"])));
    assert_eq!(follow.get("E'"), Some(&set(&["$", ")"])));
    assert_eq!(follow.get("T"), Some(&set(&["+", "$", ")"])));
}

#[test]
fn test_left_recursive_follow_sets() {
    let follow = follow_sets(&left_recursive());

    assert_eq!(follow.get("E"), Some(&set(&["+", ")", "$"])));
    assert_eq!(follow.get("T"), Some(&set(&["+", "*", ")", "$"])));
    assert_eq!(follow.get("F"), Some(&set(&["+", "*", ")", "$"])));
}

#[test]
fn test_epsilon_only_rule_passes_context_through() {
    let follow = follow_sets(&vanishing_tail());

    assert_eq!(follow.get("X"), Some(&set(&["c"])));
    assert_eq!(follow.get("Z"), Some(&set(&["c"])));
    // Z vanishes, so whatever follows X also follows Y
    assert_eq!(follow.get("Y"), Some(&set(&["c"])));
}

#[test]
fn test_follow_looks_past_nullable_symbols() {
    // S -> A B c, A -> a, B -> b | epsilon
    let grammar = Grammar::builder("S")
        .rule("S")
        .rhs(["A", "B", "c"])
        .rule("A")
        .rhs(["a"])
        .rule("B")
        .rhs(["b"])
        .rhs(["epsilon"])
        .build()
        .unwrap();
    let follow = follow_sets(&grammar);

    assert_eq!(follow.get("A"), Some(&set(&["b", "c"])));
    assert_eq!(follow.get("B"), Some(&set(&["c"])));
    assert_eq!(follow.get("S"), Some(&set(&["$"])));
}

#[test]
fn test_start_symbol_is_seeded_with_end_of_input() {
    for grammar in all() {
        let empty = FollowSets::empty(&grammar);
        assert_eq!(empty.get(grammar.start()), Some(&set(&["$"])));

        let follow = follow_sets(&grammar);
        assert!(follow
            .get(grammar.start())
            .unwrap()
            .contains(&Symbol::EndOfInput));
    }
}

#[test]
fn test_epsilon_never_follows() {
    for grammar in all() {
        let follow = follow_sets(&grammar);
        for (_, set) in follow.sets().iter() {
            assert!(!set.contains_epsilon());
            assert!(set
                .iter()
                .all(|symbol| symbol.is_terminal() || *symbol == Symbol::EndOfInput));
        }
    }
}

#[test]
fn test_sweeps_are_monotone_and_idempotent() {
    for grammar in all() {
        let first = FirstSets::new(&grammar).unwrap();
        let mut follow = FollowSets::empty(&grammar);
        while {
            let before = follow.sets().clone();
            let changed = follow.sweep(&grammar, &first).unwrap();
            assert!(follow.sets().is_superset(&before));
            changed
        } {}

        let converged = follow.sets().clone();
        assert!(!follow.sweep(&grammar, &first).unwrap());
        assert_eq!(follow.sets(), &converged);

        let bound = grammar.len() * (grammar.num_terminals() + 2) + 1;
        assert!(FollowSets::new(&grammar, &first).unwrap().passes() <= bound);
    }
}

#[test]
fn test_follow_needs_converged_first_sets() {
    let grammar = alternatives();
    let unsolved = FirstSets::empty(&grammar);
    assert_eq!(
        FollowSets::new(&grammar, &unsolved).unwrap_err(),
        Error::FirstSetsNotConverged
    );

    let mut partial = FirstSets::empty(&grammar);
    assert!(partial.sweep(&grammar).unwrap());
    let mut follow = FollowSets::empty(&grammar);
    assert_eq!(
        follow.sweep(&grammar, &partial),
        Err(Error::FirstSetsNotConverged)
    );

    while partial.sweep(&grammar).unwrap() {}
    let follow = FollowSets::new(&grammar, &partial).unwrap();
    assert_eq!(follow.get("A"), Some(&set(&["b"])));
    assert_eq!(follow.get("C"), Some(&set(&["d"])));
}

#[test]
fn test_follow_rejects_another_grammar() {
    let grammar = alternatives();
    let other = expression();
    let first = FirstSets::new(&grammar).unwrap();

    assert_eq!(
        FollowSets::new(&other, &first).unwrap_err(),
        Error::GrammarMismatch
    );

    let mut follow = FollowSets::empty(&other);
    assert_eq!(follow.sweep(&grammar, &first), Err(Error::GrammarMismatch));
    let other_first = FirstSets::new(&other).unwrap();
    assert_eq!(follow.sweep(&other, &first), Err(Error::GrammarMismatch));
    assert!(follow.sweep(&other, &other_first).unwrap());
}
