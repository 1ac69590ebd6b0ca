//! Built-in demo grammars.

use derivnik_core::{Grammar, NodeId};

/// A built-in grammar: the graph, its root, and printable names for the
/// interesting subgrammars.
pub struct Demo {
    pub grammar: Grammar<char>,
    pub root: NodeId,
    pub names: Vec<(NodeId, &'static str)>,
}

pub fn build(name: &str) -> Demo {
    match name {
        "foobar" => foobar(),
        "foobar-recursive" => foobar_recursive(),
        "parens" => parens(),
        "sexp" => sexp(),
        _ => unreachable!("clap restricts grammar names"),
    }
}

/// ("foo" | "bar")*
fn foobar() -> Demo {
    let mut g = Grammar::new();
    let foo = g.literal("foo".chars());
    let bar = g.literal("bar".chars());
    let either = g.alternate(foo, bar);
    let root = g.repetition(either);
    Demo {
        grammar: g,
        root,
        names: vec![(root, "l")],
    }
}

/// The same language, defined left-recursively: l = (l ("foo" | "bar")) | ε
fn foobar_recursive() -> Demo {
    let mut g = Grammar::new();
    let l = g.placeholder();
    let foo = g.literal("foo".chars());
    let bar = g.literal("bar".chars());
    let either = g.alternate(foo, bar);
    let rec = g.sequence(l, either);
    let empty = g.empty();
    let body = g.alternate(rec, empty);
    g.define(l, body);
    Demo {
        grammar: g,
        root: l,
        names: vec![(l, "l")],
    }
}

/// Balanced parentheses: s = '(' s ')' s | ε
fn parens() -> Demo {
    let mut g = Grammar::new();
    let s = g.placeholder();
    let open = g.terminal('(');
    let close = g.terminal(')');
    let tail = g.sequence(close, s);
    let mid = g.sequence(s, tail);
    let inner = g.sequence(open, mid);
    let empty = g.empty();
    let body = g.alternate(inner, empty);
    g.define(s, body);
    Demo {
        grammar: g,
        root: s,
        names: vec![(s, "s")],
    }
}

/// S-expressions: whitespace-separated atoms (symbols, numbers, booleans)
/// and nested parenthesized lists.
fn sexp() -> Demo {
    let mut g = Grammar::new();

    let alpha =
        g.one_of("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_+-*/<>=!?".chars());
    let symbol = g.one_or_more(alpha);

    let digit = g.one_of("0123456789".chars());
    let minus = g.terminal('-');
    let opt_minus = g.optional(minus);
    let digits = g.repetition(digit);
    let dot = g.terminal('.');
    let opt_dot = g.optional(dot);
    let digits1 = g.one_or_more(digit);
    let fraction = g.sequence(opt_dot, digits1);
    let tail = g.sequence(digits, fraction);
    let number = g.sequence(opt_minus, tail);

    let yes = g.literal("#t".chars());
    let no = g.literal("#f".chars());
    let boolean = g.alternate(yes, no);

    let ws_char = g.one_of(" \r\n\t".chars());
    let whitespace = g.repetition(ws_char);

    let num_or_bool = g.alternate(number, boolean);
    let atom = g.alternate(symbol, num_or_bool);

    let sexplist = g.placeholder();
    let sexp = g.placeholder();

    // sexplist = (sexp whitespace sexplist) | ε
    let rest = g.sequence(whitespace, sexplist);
    let item = g.sequence(sexp, rest);
    let empty = g.empty();
    let list_body = g.alternate(item, empty);
    g.define(sexplist, list_body);

    // sexp = atom | '(' whitespace sexplist whitespace ')'
    let open = g.terminal('(');
    let close = g.terminal(')');
    let p4 = g.sequence(whitespace, close);
    let p3 = g.sequence(sexplist, p4);
    let p2 = g.sequence(whitespace, p3);
    let paren = g.sequence(open, p2);
    let sexp_body = g.alternate(atom, paren);
    g.define(sexp, sexp_body);

    Demo {
        grammar: g,
        root: sexp,
        names: vec![
            (alpha, "alpha"),
            (symbol, "symbol"),
            (digit, "digit"),
            (number, "number"),
            (boolean, "boolean"),
            (whitespace, "whitespace"),
            (sexplist, "sexplist"),
            (sexp, "sexp"),
        ],
    }
}
