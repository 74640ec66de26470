//! Print FIRST and FOLLOW sets of the built-in demo grammars
// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.
use std::process;

use first_follow::{analyze, Grammar, Mode};
use log::info;

const USAGE: &str = "usage: first-follow [expression|alternatives]... [--first-only|--follow]";

/// E -> T E', E' -> + T E' | epsilon, T -> ( E ) | id
fn expression() -> first_follow::Result<Grammar> {
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
}

/// S -> A B | C D, A -> a | epsilon, B -> b, C -> c, D -> d
fn alternatives() -> first_follow::Result<Grammar> {
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
}

type Load = fn() -> first_follow::Result<Grammar>;
type Demo = (&'static str, Load, Mode);

static DEMOS: [Demo; 2] = [
    ("expression", expression, Mode::First),
    ("alternatives", alternatives, Mode::FirstAndFollow),
];

fn run(name: &str, load: Load, mode: Mode) -> first_follow::Result<()> {
    let grammar = load()?;
    let start = ::std::time::Instant::now();
    let analysis = analyze(&grammar, mode)?;
    info!("{}: execution time {:?}", name, start.elapsed());

    println!("Grammar '{}':\n{}", name, grammar);
    print!("{}", analysis);
    Ok(())
}

fn main() {
    env_logger::init();

    let mut selected = Vec::new();
    let mut mode_override = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--first-only" => mode_override = Some(Mode::First),
            "--follow" => mode_override = Some(Mode::FirstAndFollow),
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            name => match DEMOS.iter().find(|demo| demo.0 == name) {
                Some(demo) => selected.push(demo),
                None => {
                    eprintln!("unknown argument '{}'\n{}", name, USAGE);
                    process::exit(2);
                }
            },
        }
    }
    if selected.is_empty() {
        selected.extend(DEMOS.iter());
    }

    for (i, (name, load, mode)) in selected.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        if let Err(err) = run(name, *load, mode_override.unwrap_or(*mode)) {
            eprintln!("{}: {}", name, err);
            process::exit(1);
        }
    }
}
