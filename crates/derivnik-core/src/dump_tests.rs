//! Tests for grammar rendering.

use crate::grammar::Grammar;
use crate::node::NodeKind;

#[test]
fn leaves() {
    let mut g = Grammar::new();
    let null = g.null();
    let empty = g.empty();
    let a = g.terminal('a');
    insta::assert_snapshot!(g.dump(null), @"∅");
    insta::assert_snapshot!(g.dump(empty), @"ε");
    insta::assert_snapshot!(g.dump(a), @"'a'");
}

#[test]
fn compounds() {
    let mut g = Grammar::new();
    let a = g.terminal('a');
    let b = g.terminal('b');
    let alt = g.alternate(a, b);
    let seq = g.sequence(a, b);
    let star = g.repetition(alt);
    insta::assert_snapshot!(g.dump(alt), @"('a' | 'b')");
    insta::assert_snapshot!(g.dump(seq), @"'a' 'b'");
    insta::assert_snapshot!(g.dump(star), @"(('a' | 'b'))*");
}

#[test]
fn literals_render_as_token_chains() {
    let mut g = Grammar::new();
    let foo = g.literal("foo".chars());
    let bar = g.literal("bar".chars());
    let either = g.alternate(foo, bar);
    let root = g.repetition(either);
    insta::assert_snapshot!(g.dump(root), @"(('f' 'o' 'o' | 'b' 'a' 'r'))*");
}

#[test]
fn unforced_promises_render_as_derivatives() {
    let mut g = Grammar::new();
    let foo = g.literal("foo".chars());
    let lazy = g.arena.allocate(NodeKind::Lazy {
        pattern: foo,
        token: 'f',
    });
    insta::assert_snapshot!(g.dump(lazy), @"∂'f'('f' 'o' 'o')");
}

#[test]
fn cycles_render_as_infinity() {
    let mut g = Grammar::new();
    // l = (l · 'x') | ε
    let l = g.placeholder();
    let x = g.terminal('x');
    let rec = g.sequence(l, x);
    let empty = g.empty();
    let body = g.alternate(rec, empty);
    g.define(l, body);
    insta::assert_snapshot!(g.dump(l), @"(∞ 'x' | ε)");
}

#[test]
fn shared_nodes_render_as_infinity_on_revisit() {
    let mut g = Grammar::new();
    let ab = g.literal("ab".chars());
    let twice = g.sequence(ab, ab);
    insta::assert_snapshot!(g.dump(twice), @"'a' 'b' ∞");
}

#[test]
fn named_subgrammars_render_by_name() {
    let mut g = Grammar::new();
    let l = g.placeholder();
    let foo = g.literal("foo".chars());
    let bar = g.literal("bar".chars());
    let either = g.alternate(foo, bar);
    let rec = g.sequence(l, either);
    let empty = g.empty();
    let body = g.alternate(rec, empty);
    g.define(l, body);

    let names = [(l, "l"), (either, "word")];
    insta::assert_snapshot!(g.dump_named(l, &names), @"(l word | ε)");
}

#[test]
fn the_root_itself_is_not_name_substituted() {
    let mut g = Grammar::new();
    let a = g.terminal('a');
    let b = g.terminal('b');
    let alt = g.alternate(a, b);
    let names = [(alt, "alt")];
    insta::assert_snapshot!(g.dump_named(alt, &names), @"('a' | 'b')");
}
