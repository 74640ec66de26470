#![allow(dead_code)]

use first_follow::{Grammar, Symbol, SymbolSet};

pub fn set(tokens: &[&str]) -> SymbolSet {
    tokens.iter().map(|token| Symbol::classify(token)).collect()
}

/// E -> T E', E' -> + T E' | epsilon, T -> ( E ) | id
pub fn expression() -> Grammar {
    Grammar::builder("E")
        .rule("E")
        .rhs(["T", "E'"])
        .rule("E'")
        .rhs(["+", "T", "E'"])
        .rhs(["epsilon"])
        .rule("T")
        .rhs(["(", "E", ")"])
        .rhs(["id"])
        .build()
        .unwrap()
}

/// S -> A B | C D, A -> a | epsilon, B -> b, C -> c, D -> d
pub fn alternatives() -> Grammar {
    Grammar::builder("S")
        .rule("S")
        .rhs(["A", "B"])
        .rhs(["C", "D"])
        .rule("A")
        .rhs(["a"])
        .rhs(["epsilon"])
        .rule("B")
        .rhs(["b"])
        .rule("C")
        .rhs(["c"])
        .rule("D")
        .rhs(["d"])
        .build()
        .unwrap()
}

/// S -> X c, X -> Y Z, Y -> y | epsilon, Z -> epsilon
pub fn vanishing_tail() -> Grammar {
    Grammar::builder("S")
        .rule("S")
        .rhs(["X", "c"])
        .rule("X")
        .rhs(["Y", "Z"])
        .rule("Y")
        .rhs(["y"])
        .rhs(["epsilon"])
        .rule("Z")
        .rhs(["epsilon"])
        .build()
        .unwrap()
}

/// E -> E + T | T, T -> T * F | F, F -> ( E ) | id
pub fn left_recursive() -> Grammar {
    Grammar::builder("E")
        .rule("E")
        .rhs(["E", "+", "T"])
        .rhs(["T"])
        .rule("T")
        .rhs(["T", "*", "F"])
        .rhs(["F"])
        .rule("F")
        .rhs(["(", "E", ")"])
        .rhs(["id"])
        .build()
        .unwrap()
}

pub fn all() -> Vec<Grammar> {
    vec![expression(), alternatives(), vanishing_tail(), left_recursive()]
}
