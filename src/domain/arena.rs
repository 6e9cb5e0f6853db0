use std::collections::VecDeque;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, warn};

use crate::domain::entities::{Vampire, MILLENNIAL_THRESHOLD};
use crate::domain::error::{DomainError, DomainResult};

/// Handle of a vampire inside its [`Coven`].
pub type VampireId = Index;

/// Genealogy node in the arena.
#[derive(Debug)]
pub struct VampireNode {
    pub vampire: Vampire,
    /// Non-owning handle of the creator, None for originals
    pub creator: Option<VampireId>,
    /// Offspring handles in creation order
    pub offspring: Vec<VampireId>,
}

/// Arena holding one or more vampire genealogies.
///
/// Nodes are never removed, so handles stay valid for the lifetime of the coven
/// and arena order equals spawn order. Several disjoint trees may live side by side.
#[derive(Debug)]
pub struct Coven {
    arena: Arena<VampireNode>,
}

impl Default for Coven {
    fn default() -> Self {
        Self::new()
    }
}

impl Coven {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Creates a standalone vampire: no creator, no offspring.
    #[instrument(level = "trace", skip(self))]
    pub fn spawn(&mut self, vampire: Vampire) -> VampireId {
        self.arena.insert(VampireNode {
            vampire,
            creator: None,
            offspring: Vec::new(),
        })
    }

    /// Appends `child` to the offspring of `creator` and points `child` back at it.
    ///
    /// No cycle or double-attachment check is made. A child that already has a
    /// creator is re-pointed, but stays listed in the previous creator's offspring.
    #[instrument(level = "trace", skip(self))]
    pub fn add_offspring(&mut self, creator: VampireId, child: VampireId) -> DomainResult<()> {
        self.node(child)?;
        self.arena
            .get_mut(creator)
            .ok_or(DomainError::UnknownVampire(creator))?
            .offspring
            .push(child);

        let node = self
            .arena
            .get_mut(child)
            .ok_or(DomainError::UnknownVampire(child))?;
        if let Some(previous) = node.creator.replace(creator) {
            warn!(
                name = %node.vampire.name,
                ?previous,
                "vampire already had a creator, re-pointing"
            );
        }
        Ok(())
    }

    pub fn get(&self, id: VampireId) -> Option<&VampireNode> {
        self.arena.get(id)
    }

    fn node(&self, id: VampireId) -> DomainResult<&VampireNode> {
        self.arena.get(id).ok_or(DomainError::UnknownVampire(id))
    }

    pub fn vampire(&self, id: VampireId) -> DomainResult<&Vampire> {
        self.node(id).map(|node| &node.vampire)
    }

    pub fn creator(&self, id: VampireId) -> DomainResult<Option<VampireId>> {
        self.node(id).map(|node| node.creator)
    }

    pub fn offspring(&self, id: VampireId) -> DomainResult<&[VampireId]> {
        self.node(id).map(|node| node.offspring.as_slice())
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Vampires without a creator, in spawn order.
    pub fn originals(&self) -> Vec<VampireId> {
        self.arena
            .iter()
            .filter(|(_, node)| node.creator.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn number_of_offspring(&self, id: VampireId) -> DomainResult<usize> {
        self.offspring(id).map(<[VampireId]>::len)
    }

    /// Number of creator links between `id` and its original. Originals are 0.
    #[instrument(level = "trace", skip(self))]
    pub fn number_of_vampires_from_original(&self, id: VampireId) -> DomainResult<usize> {
        let mut hops = 0;
        let mut current = self.node(id)?;
        while let Some(creator) = current.creator {
            hops += 1;
            current = self.node(creator)?;
        }
        Ok(hops)
    }

    /// True if `id` is strictly closer to its original than `other`.
    ///
    /// Only meaningful within one tree: depth alone cannot tell two originals apart.
    pub fn is_more_senior_than(&self, id: VampireId, other: VampireId) -> DomainResult<bool> {
        Ok(self.number_of_vampires_from_original(id)?
            < self.number_of_vampires_from_original(other)?)
    }

    /// True if `node` is `ancestor` itself or reachable through offspring links.
    ///
    /// Breadth-first over the lineage of `ancestor`.
    #[instrument(level = "trace", skip(self))]
    pub fn lineage_contains(&self, ancestor: VampireId, node: VampireId) -> DomainResult<bool> {
        self.node(ancestor)?;
        self.node(node)?;
        if ancestor == node {
            return Ok(true);
        }

        let mut queue = VecDeque::from([ancestor]);
        while let Some(current) = queue.pop_front() {
            let offspring = &self.node(current)?.offspring;
            if offspring.contains(&node) {
                return Ok(true);
            }
            queue.extend(offspring.iter().copied());
        }
        Ok(false)
    }

    /// Nearest vampire whose lineage contains both `id` and `other`.
    ///
    /// A direct ancestor is its own answer: for a creator and its child the
    /// creator is returned. Vampires from disjoint trees fail with
    /// [`DomainError::NoCommonAncestor`].
    #[instrument(level = "debug", skip(self))]
    pub fn closest_common_ancestor(
        &self,
        id: VampireId,
        other: VampireId,
    ) -> DomainResult<VampireId> {
        if self.lineage_contains(id, other)? {
            return Ok(id);
        }
        if self.lineage_contains(other, id)? {
            return Ok(other);
        }

        // `id` itself was ruled out above
        let mut ancestor = self.node(id)?.creator;
        while let Some(current) = ancestor {
            if self.lineage_contains(current, other)? {
                debug!(?current, "closest common ancestor found");
                return Ok(current);
            }
            ancestor = self.node(current)?.creator;
        }

        Err(DomainError::NoCommonAncestor {
            left: self.vampire(id)?.name.clone(),
            right: self.vampire(other)?.name.clone(),
        })
    }

    /// Pre-order walk of the lineage rooted at `id`, starting with `id` itself.
    pub fn lineage(&self, id: VampireId) -> DomainResult<LineageIterator<'_>> {
        self.node(id)?;
        Ok(LineageIterator::new(self, id))
    }

    /// Everything below `id` in pre-order; `id` itself is not included.
    pub fn descendants(
        &self,
        id: VampireId,
    ) -> DomainResult<impl Iterator<Item = (VampireId, &VampireNode)> + '_> {
        Ok(self.lineage(id)?.skip(1))
    }

    /// First vampire in pre-order below and including `from` with the given name.
    #[instrument(level = "debug", skip(self))]
    pub fn vampire_with_name(&self, from: VampireId, name: &str) -> DomainResult<VampireId> {
        let root_name = &self.vampire(from)?.name;
        self.lineage(from)?
            .find(|(_, node)| node.vampire.name == name)
            .map(|(idx, _)| idx)
            .ok_or_else(|| DomainError::NameNotFound {
                root: root_name.to_string(),
                name: name.to_string(),
            })
    }

    /// Count of all vampires strictly below `id`.
    pub fn total_descendents(&self, id: VampireId) -> DomainResult<usize> {
        Ok(self.descendants(id)?.count())
    }

    /// Descendants of `id` turned strictly after `year`, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn converted_after(&self, id: VampireId, year: i32) -> DomainResult<Vec<VampireId>> {
        Ok(self
            .descendants(id)?
            .filter(|(_, node)| node.vampire.converted_after(year))
            .map(|(idx, _)| idx)
            .collect())
    }

    /// Descendants of `id` turned after 1980, in pre-order.
    pub fn all_millennial_vampires(&self, id: VampireId) -> DomainResult<Vec<VampireId>> {
        self.converted_after(id, MILLENNIAL_THRESHOLD)
    }

    /// Number of generations in the lineage of `id`, counting `id` itself.
    #[instrument(level = "debug", skip(self))]
    pub fn generations(&self, id: VampireId) -> DomainResult<usize> {
        self.node(id)?;
        let mut deepest = 0;
        let mut stack = vec![(id, 1)];
        while let Some((current, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for &child in &self.node(current)?.offspring {
                stack.push((child, depth + 1));
            }
        }
        Ok(deepest)
    }

    /// Vampires in the lineage of `id` without offspring, in pre-order.
    pub fn leaves(&self, id: VampireId) -> DomainResult<Vec<VampireId>> {
        Ok(self
            .lineage(id)?
            .filter(|(_, node)| node.offspring.is_empty())
            .map(|(idx, _)| idx)
            .collect())
    }
}

pub struct LineageIterator<'a> {
    coven: &'a Coven,
    stack: Vec<VampireId>,
}

impl<'a> LineageIterator<'a> {
    fn new(coven: &'a Coven, start: VampireId) -> Self {
        Self {
            coven,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for LineageIterator<'a> {
    type Item = (VampireId, &'a VampireNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.coven.get(current_idx) {
                // Push offspring in reverse order for creation-order traversal
                self.stack.extend(node.offspring.iter().rev().copied());
                return Some((current_idx, node));
            }
        }
        None
    }
}
