//! Recognition of context-free languages via Brzozowski derivatives.
//!
//! A grammar is a possibly-cyclic graph of language nodes built from six
//! primitives (∅, ε, terminal, alternation, concatenation, Kleene star).
//! Recognition consumes the input one token at a time: each token takes the
//! derivative of the current root, producing a new graph that recognizes
//! the residual language, and the run ends by asking whether the final
//! graph accepts the empty input.
//!
//! Recursive grammars make three concerns interlock:
//! - **laziness**: a derivative's children are promises, forced only after
//!   the derivative's own identity is reserved, so cycles terminate;
//! - **compaction**: local algebraic identities keep each step's graph
//!   bounded;
//! - **collection**: a mark-sweep pass keyed on the step counter reclaims
//!   everything the new root no longer reaches.
//!
//! Nullability on cyclic graphs is a least fixed point on the two-element
//! lattice.
//!
//! ```
//! use derivnik_core::Grammar;
//!
//! let mut g = Grammar::new();
//! let foo = g.literal("foo".chars());
//! let bar = g.literal("bar".chars());
//! let either = g.alternate(foo, bar);
//! let root = g.repetition(either);
//!
//! assert!(g.recognize(root, "foobar".chars()));
//! assert!(!g.recognize(root, "foob".chars()));
//! ```

mod arena;
mod compact;
mod derive;
mod dump;
mod grammar;
mod node;
mod nullable;
mod recognize;
mod trace;

#[cfg(test)]
mod arena_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod nullable_tests;

pub use arena::Arena;
pub use grammar::Grammar;
pub use node::{EMPTY_ID, NULL_ID, Node, NodeId, NodeKind};
pub use trace::{NoopTracer, PrintTracer, Tracer};
