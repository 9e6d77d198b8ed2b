// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Errors raised by partition operations.
///
/// None of these describe the analyzed program. A `Require` on a transferred
/// region is reported through the evaluator's failure callback instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// The union-find forest is not in canonical form.
    #[error("partition invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PartitionError>;
