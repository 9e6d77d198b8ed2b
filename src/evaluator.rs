// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{debug, trace};

use crate::element::{Element, Witness};
use crate::error::Result;
use crate::op::PartitionOp;
use crate::partition::Partition;

/// Invoked for every `Require` that hits a consumed region, with the operation,
/// the index of the failing operand and the witness stored for the region.
pub type FailureCallback<'a, W> = Box<dyn FnMut(&PartitionOp<W>, usize, &W) + 'a>;

/// Applies partition operations, in order, to one bound partition.
pub struct PartitionOpEvaluator<'a, W = Witness> {
    partition: &'a mut Partition<W>,
    failure_callback: Option<FailureCallback<'a, W>>,
    verify_invariants: bool,
}

impl<'a, W: Clone> PartitionOpEvaluator<'a, W> {
    pub fn new(partition: &'a mut Partition<W>) -> Self {
        Self {
            partition,
            failure_callback: None,
            verify_invariants: cfg!(debug_assertions),
        }
    }

    pub fn with_failure_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&PartitionOp<W>, usize, &W) + 'a,
    {
        self.set_failure_callback(callback);
        self
    }

    pub fn set_failure_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&PartitionOp<W>, usize, &W) + 'a,
    {
        self.failure_callback = Some(Box::new(callback));
    }

    pub fn clear_failure_callback(&mut self) {
        self.failure_callback = None;
    }

    /// Check the partition's canonical form after every operation.
    ///
    /// Enabled by default in debug builds.
    pub fn set_verify_invariants(&mut self, enabled: bool) {
        self.verify_invariants = enabled;
    }

    pub fn partition(&self) -> &Partition<W> {
        &*self.partition
    }

    /// Applies a single operation.
    ///
    /// A `Require` on a consumed region is reported to the failure callback and
    /// is not an error. An error is only returned when invariant verification
    /// is enabled and the partition is left malformed.
    ///
    /// # Panics
    ///
    /// If the operation references an element that was never introduced.
    pub fn apply(&mut self, op: &PartitionOp<W>) -> Result<()> {
        trace!("apply {op}");
        match op {
            PartitionOp::AssignFresh { element } => {
                self.partition.insert_fresh(*element);
            }
            PartitionOp::Assign { dest, src } => {
                self.ensure_tracked(op, *src);
                self.partition.reassign(*dest, *src);
            }
            PartitionOp::Merge { first, second } => {
                self.ensure_tracked(op, *first);
                self.ensure_tracked(op, *second);
                self.partition.union(*first, *second);
            }
            PartitionOp::Transfer { element, witness } => {
                self.ensure_tracked(op, *element);
                self.partition.transfer(*element, witness.clone());
            }
            PartitionOp::UndoTransfer { element, .. } => {
                self.ensure_tracked(op, *element);
                self.partition.undo_transfer(*element);
            }
            PartitionOp::Require { element, .. } => {
                self.ensure_tracked(op, *element);
                if let Some(witness) = self.partition.witness_of(*element) {
                    debug!("{op}: region of {element} has been transferred");
                    if let Some(callback) = self.failure_callback.as_mut() {
                        callback(op, 0, witness);
                    }
                }
            }
        }

        if self.verify_invariants {
            self.partition.check_invariants()?;
        }
        Ok(())
    }

    /// Applies operations in order. Every `Require` is evaluated, so the failure
    /// callback may fire several times.
    ///
    /// # Panics
    ///
    /// On the first operation that references an untracked element. Operations
    /// before it stay applied.
    pub fn apply_all<'o, I>(&mut self, ops: I) -> Result<()>
    where
        I: IntoIterator<Item = &'o PartitionOp<W>>,
        W: 'o,
    {
        for op in ops {
            self.apply(op)?;
        }
        Ok(())
    }

    // Every operand must have been introduced by `AssignFresh` or a constructor.
    fn ensure_tracked(&self, op: &PartitionOp<W>, element: Element) {
        assert!(
            self.partition.is_tracked(element),
            "element {element} is not tracked by the partition (in `{op}`)"
        );
    }
}
