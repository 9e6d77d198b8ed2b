// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Read-only views of a partition for tests and debugging.

use serde::Serialize;

use crate::element::{Element, Region, Witness};
use crate::partition::Partition;

/// A region together with its members and the witness that consumed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionInfo<W = Witness> {
    pub region: Region,
    pub members: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<W>,
}

pub struct Inspector<'a, W = Witness> {
    partition: &'a Partition<W>,
}

impl<'a, W> Inspector<'a, W> {
    pub fn new(partition: &'a Partition<W>) -> Self {
        Self { partition }
    }

    /// The region containing the element, named by its minimum member.
    pub fn region_of(&self, element: Element) -> Option<Region> {
        self.partition.region_of(element)
    }

    pub fn is_consumed(&self, element: Element) -> bool {
        self.partition.is_consumed(element)
    }

    pub fn witness_of(&self, element: Element) -> Option<&'a W> {
        self.partition.witness_of(element)
    }
}

impl<W: Clone> Inspector<'_, W> {
    /// All regions in ascending representative order.
    pub fn regions(&self) -> Vec<RegionInfo<W>> {
        self.partition
            .regions()
            .into_iter()
            .map(|(root, members)| RegionInfo {
                region: Region::of(root),
                members,
                witness: self.partition.root_witness(root).cloned(),
            })
            .collect()
    }
}
