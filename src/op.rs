// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Witness};

/// One atomic mutation or query against a partition.
///
/// Instruction translation lowers each program instruction into zero or more
/// of these; `PartitionOpEvaluator` applies them in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(bound(deserialize = "W: Deserialize<'de>"))]
pub enum PartitionOp<W = Witness> {
    /// Introduce the element as a fresh, unconsumed singleton region.
    AssignFresh { element: Element },

    /// Move `dest` into the region of `src`.
    Assign { dest: Element, src: Element },

    /// Union the regions of both elements.
    Merge { first: Element, second: Element },

    /// Consume the element's region.
    Transfer { element: Element, witness: W },

    /// Clear consumption of the element's region.
    UndoTransfer { element: Element, witness: W },

    /// Report a failure if the element's region is consumed.
    Require {
        element: Element,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        witness: Option<W>,
    },
}

impl<W> PartitionOp<W> {
    pub fn assign_fresh(element: Element) -> Self {
        PartitionOp::AssignFresh { element }
    }

    pub fn assign(dest: Element, src: Element) -> Self {
        PartitionOp::Assign { dest, src }
    }

    pub fn merge(first: Element, second: Element) -> Self {
        PartitionOp::Merge { first, second }
    }

    pub fn transfer(element: Element, witness: W) -> Self {
        PartitionOp::Transfer { element, witness }
    }

    pub fn undo_transfer(element: Element, witness: W) -> Self {
        PartitionOp::UndoTransfer { element, witness }
    }

    pub fn require(element: Element) -> Self {
        PartitionOp::Require {
            element,
            witness: None,
        }
    }

    pub fn require_at(element: Element, witness: W) -> Self {
        PartitionOp::Require {
            element,
            witness: Some(witness),
        }
    }

    /// Element arguments in argument-index order.
    ///
    /// The argument index passed to a failure callback refers to this list.
    pub fn operands(&self) -> Vec<Element> {
        match *self {
            PartitionOp::AssignFresh { element }
            | PartitionOp::Transfer { element, .. }
            | PartitionOp::UndoTransfer { element, .. }
            | PartitionOp::Require { element, .. } => vec![element],
            PartitionOp::Assign { dest, src } => vec![dest, src],
            PartitionOp::Merge { first, second } => vec![first, second],
        }
    }

    /// The witness carried by the operation, if any.
    pub fn witness(&self) -> Option<&W> {
        match self {
            PartitionOp::Transfer { witness, .. } | PartitionOp::UndoTransfer { witness, .. } => {
                Some(witness)
            }
            PartitionOp::Require { witness, .. } => witness.as_ref(),
            PartitionOp::AssignFresh { .. }
            | PartitionOp::Assign { .. }
            | PartitionOp::Merge { .. } => None,
        }
    }
}

impl<W> fmt::Display for PartitionOp<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartitionOp::AssignFresh { element } => write!(f, "assign_fresh {element}"),
            PartitionOp::Assign { dest, src } => write!(f, "assign {dest} = {src}"),
            PartitionOp::Merge { first, second } => write!(f, "merge {first} with {second}"),
            PartitionOp::Transfer { element, .. } => write!(f, "transfer {element}"),
            PartitionOp::UndoTransfer { element, .. } => write!(f, "undo_transfer {element}"),
            PartitionOp::Require { element, .. } => write!(f, "require {element}"),
        }
    }
}
