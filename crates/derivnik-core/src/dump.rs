//! Textual rendering of grammars.
//!
//! Informational only: renders ∅, ε, quoted terminals, `(a | b)`, `a b`,
//! `(p)*`, and `∂'c'(p)` for unforced promises. Cyclic grammars are cut off
//! with "∞" on any revisited composite node; a name table can be supplied
//! to label subgrammars instead of expanding them.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::grammar::Grammar;
use crate::node::{NodeId, NodeKind};

impl<T: fmt::Debug> Grammar<T> {
    /// Render the grammar rooted at `root`.
    pub fn dump(&self, root: NodeId) -> String {
        self.dump_named(root, &[])
    }

    /// Render with named subgrammars: any child found in `names` prints as
    /// its name. The lookup is skipped for `root` itself so a named grammar
    /// still shows its own definition.
    pub fn dump_named(&self, root: NodeId, names: &[(NodeId, &str)]) -> String {
        let names: IndexMap<NodeId, &str> = names.iter().copied().collect();
        let mut visited = IndexSet::new();
        self.render(root, &names, &mut visited, true)
    }

    fn render(
        &self,
        id: NodeId,
        names: &IndexMap<NodeId, &str>,
        visited: &mut IndexSet<NodeId>,
        skip_lookup: bool,
    ) -> String {
        if !skip_lookup
            && let Some(name) = names.get(&id)
        {
            return (*name).to_string();
        }

        let kind = &self.arena.node(id).kind;
        if kind.is_composite() && !visited.insert(id) {
            return "∞".to_string();
        }

        match kind {
            NodeKind::Null => "∅".to_string(),
            NodeKind::Empty => "ε".to_string(),
            NodeKind::Terminal(token) => format!("{:?}", token),
            NodeKind::Alternate { left, right } => {
                let left = self.render(*left, names, visited, false);
                let right = self.render(*right, names, visited, false);
                format!("({} | {})", left, right)
            }
            NodeKind::Sequence { left, right } => {
                let left = self.render(*left, names, visited, false);
                let right = self.render(*right, names, visited, false);
                format!("{} {}", left, right)
            }
            NodeKind::Repetition { pattern } => {
                format!("({})*", self.render(*pattern, names, visited, false))
            }
            NodeKind::Lazy { pattern, token } => {
                format!(
                    "∂{:?}({})",
                    token,
                    self.render(*pattern, names, visited, false)
                )
            }
        }
    }
}
