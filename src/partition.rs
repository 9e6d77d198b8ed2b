// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::fmt;
use std::collections::BTreeMap;

use crate::element::{Element, Region, Witness};
use crate::error::{PartitionError, Result};

/// Disjoint regions of tracked elements, each optionally consumed by a transfer.
///
/// Internally a union-find forest keyed by element. Every root is the minimum
/// element of its region and every parent link points to a smaller (or equal)
/// element, so the root of a region is also its canonical representative.
///
/// `Partition` is a plain value: `clone` produces a fully independent copy.
#[derive(Debug, Clone)]
pub struct Partition<W = Witness> {
    // Parent link of every tracked element. Roots link to themselves.
    parents: BTreeMap<Element, Element>,

    // Witness of each consumed region, keyed by the region's root.
    witnesses: BTreeMap<Element, W>,
}

impl<W> Default for Partition<W> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<W> Partition<W> {
    pub fn empty() -> Self {
        Self {
            parents: BTreeMap::new(),
            witnesses: BTreeMap::new(),
        }
    }

    /// Each element becomes its own unconsumed region.
    pub fn separate_regions<I: IntoIterator<Item = Element>>(elements: I) -> Self {
        let mut partition = Self::empty();
        for element in elements {
            partition.parents.insert(element, element);
        }
        partition
    }

    /// All elements are placed in one unconsumed region.
    pub fn single_region<I: IntoIterator<Item = Element>>(elements: I) -> Self {
        let mut partition = Self::empty();
        let elements: Vec<Element> = elements.into_iter().collect();
        if let Some(root) = elements.iter().copied().min() {
            for element in elements {
                partition.parents.insert(element, root);
            }
        }
        partition
    }

    pub fn is_tracked(&self, element: Element) -> bool {
        self.parents.contains_key(&element)
    }

    /// Tracked elements in ascending order.
    pub fn tracked_elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.parents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Canonical representative of the element's region, without path compression.
    pub(crate) fn representative(&self, element: Element) -> Option<Element> {
        let mut current = element;
        loop {
            let parent = *self.parents.get(&current)?;
            if parent == current {
                return Some(current);
            }
            current = parent;
        }
    }

    /// Canonical representative of the element's region.
    ///
    /// Compresses the path so that every element visited links directly to the
    /// root. Roots are region minimums, so compression never changes the result.
    pub(crate) fn find(&mut self, element: Element) -> Option<Element> {
        let root = self.representative(element)?;
        let mut current = element;
        while current != root {
            current = self.parents.insert(current, root)?;
        }
        Some(root)
    }

    pub(crate) fn region_of(&self, element: Element) -> Option<Region> {
        self.representative(element).map(Region::of)
    }

    /// Unions the regions of the two elements. The smaller root survives.
    ///
    /// The merged region is consumed if either side was. When both were, the
    /// surviving root keeps its own witness.
    pub(crate) fn union(&mut self, first: Element, second: Element) -> Option<Element> {
        let first = self.find(first)?;
        let second = self.find(second)?;
        if first == second {
            return Some(first);
        }

        let (root, absorbed) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        self.parents.insert(absorbed, root);
        if let Some(witness) = self.witnesses.remove(&absorbed) {
            self.witnesses.entry(root).or_insert(witness);
        }
        Some(root)
    }

    /// Removes the element from its region, leaving it untracked.
    ///
    /// The remaining members keep the region's consumption state and are
    /// re-rooted at their new minimum.
    pub(crate) fn detach(&mut self, element: Element) {
        let Some(root) = self.find(element) else {
            return;
        };

        let candidates: Vec<Element> = self.parents.keys().copied().collect();
        let mut members = vec![];
        for candidate in candidates {
            if candidate != element && self.find(candidate) == Some(root) {
                members.push(candidate);
            }
        }

        self.parents.remove(&element);
        let witness = self.witnesses.remove(&root);

        // Members are in ascending order.
        let Some(new_root) = members.first().copied() else {
            return;
        };
        for member in members {
            self.parents.insert(member, new_root);
        }
        if let Some(witness) = witness {
            self.witnesses.insert(new_root, witness);
        }
    }

    /// Tracks the element as a singleton unless it is already tracked.
    pub(crate) fn track(&mut self, element: Element) {
        self.parents.entry(element).or_insert(element);
    }

    /// Makes the element a fresh, unconsumed singleton, discarding any prior membership.
    pub(crate) fn insert_fresh(&mut self, element: Element) {
        self.detach(element);
        self.parents.insert(element, element);
    }

    /// Moves the element into the region of `target`. `target` must be tracked.
    pub(crate) fn reassign(&mut self, element: Element, target: Element) -> Option<Element> {
        let target_root = self.find(target)?;
        if element == target || self.find(element) == Some(target_root) {
            return Some(target_root);
        }

        // The element lies outside the target region, so detaching it cannot
        // re-root the target.
        self.detach(element);
        self.parents.insert(element, element);
        self.union(element, target_root)
    }

    /// Marks the element's whole region consumed. An existing witness is retained.
    pub(crate) fn transfer(&mut self, element: Element, witness: W) -> Option<Element> {
        let root = self.find(element)?;
        self.witnesses.entry(root).or_insert(witness);
        Some(root)
    }

    /// Clears consumption of the element's region.
    pub(crate) fn undo_transfer(&mut self, element: Element) -> Option<Element> {
        let root = self.find(element)?;
        self.witnesses.remove(&root);
        Some(root)
    }

    pub(crate) fn is_consumed(&self, element: Element) -> bool {
        self.witness_of(element).is_some()
    }

    pub(crate) fn witness_of(&self, element: Element) -> Option<&W> {
        let root = self.representative(element)?;
        self.witnesses.get(&root)
    }

    pub(crate) fn is_root_consumed(&self, root: Element) -> bool {
        self.witnesses.contains_key(&root)
    }

    pub(crate) fn root_witness(&self, root: Element) -> Option<&W> {
        self.witnesses.get(&root)
    }

    /// Roots of consumed regions and their witnesses, in ascending order.
    pub(crate) fn consumed_roots(&self) -> impl Iterator<Item = (Element, &W)> + '_ {
        self.witnesses.iter().map(|(root, witness)| (*root, witness))
    }

    /// Members of every region keyed by representative. Both levels are ascending.
    pub(crate) fn regions(&self) -> BTreeMap<Element, Vec<Element>> {
        let mut regions: BTreeMap<Element, Vec<Element>> = BTreeMap::new();
        for element in self.parents.keys().copied() {
            if let Some(root) = self.representative(element) {
                regions.entry(root).or_default().push(element);
            }
        }
        regions
    }

    /// Verifies that the forest is in canonical form.
    ///
    /// Every parent link must point to a tracked element no larger than the
    /// child, which makes each root the minimum of its region and rules out
    /// cycles. Witnesses may only be attached to roots.
    pub fn check_invariants(&self) -> Result<()> {
        for (element, parent) in self.parents.iter() {
            if !self.parents.contains_key(parent) {
                return Err(PartitionError::InvariantViolation(format!(
                    "{element} links to untracked element {parent}"
                )));
            }
            if parent > element {
                return Err(PartitionError::InvariantViolation(format!(
                    "{element} links to larger element {parent}"
                )));
            }
        }

        for root in self.witnesses.keys() {
            match self.parents.get(root) {
                Some(parent) if parent == root => (),
                Some(_) => {
                    return Err(PartitionError::InvariantViolation(format!(
                        "witness attached to non-root element {root}"
                    )))
                }
                None => {
                    return Err(PartitionError::InvariantViolation(format!(
                        "witness attached to untracked element {root}"
                    )))
                }
            }
        }

        Ok(())
    }
}

impl<W> PartialEq for Partition<W> {
    fn eq(&self, other: &Self) -> bool {
        Partition::equals(self, other)
    }
}

impl<W> Eq for Partition<W> {}

impl<W> fmt::Display for Partition<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (idx, (root, members)) in self.regions().into_iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            let (open, close) = if self.is_root_consumed(root) {
                ("{", "}")
            } else {
                ("(", ")")
            };
            let members: Vec<String> = members.iter().map(|m| m.id().to_string()).collect();
            write!(f, "{open}{}{close}", members.join(" "))?;
        }
        write!(f, "]")
    }
}
