// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod element;
mod error;
mod evaluator;
mod inspect;
mod join;
mod op;
mod partition;

pub use element::{Element, Region, Witness};
pub use error::{PartitionError, Result};
pub use evaluator::{FailureCallback, PartitionOpEvaluator};
pub use op::PartitionOp;
pub use partition::Partition;

/// Items in `unstable` are likely to change.
///
/// They expose the internal grouping of a partition for assertions and
/// debugging and are not part of the operational API.
pub mod unstable {
    pub use crate::inspect::*;
}

#[cfg(test)]
mod tests;
