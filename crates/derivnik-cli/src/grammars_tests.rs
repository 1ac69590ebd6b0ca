//! Tests for the built-in demo grammars.

use crate::grammars::build;

fn accepts(name: &str, input: &str) -> bool {
    let mut demo = build(name);
    demo.grammar.recognize(demo.root, input.chars())
}

#[test]
fn foobar_accepts_interleavings() {
    assert!(accepts("foobar", ""));
    assert!(accepts("foobar", "foobarfoo"));
    assert!(!accepts("foobar", "foob"));
}

#[test]
fn recursive_foobar_matches_the_iterative_one() {
    for input in ["", "foo", "barfoo", "fo", "baz"] {
        assert_eq!(accepts("foobar", input), accepts("foobar-recursive", input));
    }
}

#[test]
fn parens_accepts_balanced_strings() {
    assert!(accepts("parens", "(()())"));
    assert!(!accepts("parens", ")("));
}

#[test]
fn sexp_accepts_nested_forms() {
    assert!(accepts("sexp", "(if #t (a) (b -3))"));
    assert!(!accepts("sexp", "(foo"));
}

#[test]
fn foobar_renders_with_its_name() {
    let demo = build("foobar");
    insta::assert_snapshot!(
        demo.grammar.dump_named(demo.root, &demo.names),
        @"(('f' 'o' 'o' | 'b' 'a' 'r'))*"
    );
}

#[test]
fn recursive_foobar_renders_with_its_name() {
    let demo = build("foobar-recursive");
    insta::assert_snapshot!(
        demo.grammar.dump_named(demo.root, &demo.names),
        @"(l ('f' 'o' 'o' | 'b' 'a' 'r') | ε)"
    );
}
