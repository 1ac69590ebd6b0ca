//! Subcommand implementations.

use std::io::BufRead;
use std::process;

use derivnik_core::PrintTracer;

use crate::grammars;

/// Print every named definition of a built-in grammar.
pub fn show(name: &str) {
    let demo = grammars::build(name);
    for (id, label) in &demo.names {
        println!("{} = {}", label, demo.grammar.dump_named(*id, &demo.names));
    }
}

/// Match input against a built-in grammar; exits 0 on match, 1 otherwise.
pub fn run_match(name: &str, input: Option<String>, trace: bool) {
    let mut demo = grammars::build(name);

    let input = match input {
        Some(text) => text,
        None => {
            let mut line = String::new();
            if let Err(err) = std::io::stdin().lock().read_line(&mut line) {
                eprintln!("error: {}", err);
                process::exit(1);
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let matched = if trace {
        let mut tracer = PrintTracer::new();
        let matched = demo
            .grammar
            .recognize_traced(demo.root, input.chars(), &mut tracer);
        tracer.print();
        matched
    } else {
        let matched = demo.grammar.recognize(demo.root, input.chars());
        println!("{}", if matched { "matched" } else { "no match" });
        matched
    };

    process::exit(if matched { 0 } else { 1 });
}
