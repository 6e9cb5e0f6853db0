use std::collections::HashMap;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{Coven, DomainError, DomainResult, VampireId};

/// Renders a lineage as a `termtree` for terminal display.
pub trait LineageTree {
    fn to_tree_string(&self, root: VampireId, show_years: bool) -> DomainResult<Tree<String>>;
}

impl LineageTree for Coven {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: VampireId, show_years: bool) -> DomainResult<Tree<String>> {
        fn label(coven: &Coven, idx: VampireId, show_years: bool) -> DomainResult<String> {
            let vampire = coven.vampire(idx)?;
            Ok(if show_years {
                vampire.to_string()
            } else {
                vampire.name.clone()
            })
        }

        // Children are built before their creator: reverse pre-order.
        let order: Vec<VampireId> = self.lineage(root)?.map(|(idx, _)| idx).collect();
        let mut built: HashMap<VampireId, Tree<String>> = HashMap::with_capacity(order.len());
        for &idx in order.iter().rev() {
            let mut tree = Tree::new(label(self, idx, show_years)?);
            for child_idx in self.offspring(idx)? {
                if let Some(child_tree) = built.remove(child_idx) {
                    tree.push(child_tree);
                }
            }
            built.insert(idx, tree);
        }

        built
            .remove(&root)
            .ok_or(DomainError::UnknownVampire(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{demo_coven, Vampire};

    #[test]
    fn given_demo_coven_when_rendering_then_offspring_nested_in_order() {
        let coven = demo_coven().unwrap();
        let root = coven.originals()[0];

        let rendered = coven.to_tree_string(root, false).unwrap().to_string();

        assert_eq!(rendered, "root\n├── a\n└── b\n    └── c\n");
    }

    #[test]
    fn given_show_years_when_rendering_then_labels_include_year() {
        let coven = demo_coven().unwrap();
        let root = coven.originals()[0];

        let rendered = coven.to_tree_string(root, true).unwrap().to_string();

        assert!(rendered.starts_with("root\n"));
        assert!(rendered.contains("b (1981)"));
        assert!(rendered.contains("c (2004)"));
    }

    #[test]
    fn given_long_chain_when_rendering_then_every_generation_nested() {
        let mut coven = Coven::new();
        let root = coven.spawn(Vampire::new("root", None));
        let mut tip = root;
        for generation in 1..=1_000 {
            let next = coven.spawn(Vampire::new(format!("v{generation}"), None));
            coven.add_offspring(tip, next).unwrap();
            tip = next;
        }

        let mut tree = coven.to_tree_string(root, false).unwrap();
        let mut depth = 0;
        while let Some(child) = tree.leaves.pop() {
            assert!(tree.leaves.is_empty());
            tree = child;
            depth += 1;
        }

        assert_eq!(depth, 1_000);
        assert_eq!(tree.root, "v1000");
    }
}
