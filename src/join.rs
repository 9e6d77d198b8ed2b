// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Join and equivalence of partitions flowing into a control-flow merge.
//!
//! `join` is commutative, associative and idempotent with respect to the
//! groupings and consumption states it produces, which is what lets a fixpoint
//! driver visit predecessors and loop iterations in any order.

use log::debug;

use crate::partition::Partition;

impl<W: Clone> Partition<W> {
    /// Conservative merge of two partitions.
    ///
    /// Elements end up in the same region if either input relates them, or if a
    /// chain of such relations connects them through shared elements. A region is
    /// consumed if any region contributing to it was consumed in either input.
    /// Where both inputs supply a witness, the one from `first` is kept.
    pub fn join(first: &Self, second: &Self) -> Self {
        let mut joined = first.clone();

        for element in second.tracked_elements() {
            joined.track(element);
        }

        for element in second.tracked_elements() {
            if let Some(root) = second.representative(element) {
                if root != element {
                    joined.union(element, root);
                }
            }
        }

        for (root, witness) in second.consumed_roots() {
            joined.transfer(root, witness.clone());
        }

        debug!(
            "join of {} and {} elements produced {} elements",
            first.len(),
            second.len(),
            joined.len()
        );
        joined
    }
}

impl<W> Partition<W> {
    /// Whether both partitions track the same elements, group them identically
    /// and agree on which regions are consumed. Witnesses are not compared.
    pub fn equals(first: &Self, second: &Self) -> bool {
        if first.len() != second.len() {
            return false;
        }

        for element in first.tracked_elements() {
            let (Some(left), Some(right)) = (
                first.representative(element),
                second.representative(element),
            ) else {
                return false;
            };

            if left != right {
                return false;
            }

            if element == left && first.is_root_consumed(left) != second.is_root_consumed(right) {
                return false;
            }
        }

        true
    }
}
