//! Command-line definition.
//!
//! Arg builders are split out so both subcommands share the grammar
//! argument with identical help text.

use clap::{Arg, ArgAction, Command};

/// Built-in grammar name (positional).
fn grammar_arg() -> Arg {
    Arg::new("grammar")
        .value_name("GRAMMAR")
        .required(true)
        .value_parser(["foobar", "foobar-recursive", "parens", "sexp"])
        .help("Built-in grammar name")
}

/// Inline input text (-i/--input).
fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("TEXT")
        .help("Input text (read from stdin when omitted)")
}

/// Per-step trace output (--trace).
fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print one line per consumed token")
}

pub fn build_cli() -> Command {
    Command::new("derivnik")
        .about("Recognize inputs against demo grammars via Brzozowski derivatives")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Print a grammar's definitions")
                .arg(grammar_arg()),
        )
        .subcommand(
            Command::new("match")
                .about("Decide whether the input belongs to a grammar's language")
                .arg(grammar_arg())
                .arg(input_arg())
                .arg(trace_arg()),
        )
}
