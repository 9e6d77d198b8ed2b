// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::common::*;
use crate::unstable::{Inspector, RegionInfo};
use crate::*;
use anyhow::Result;

#[test]
fn empty_partition() {
    let partition = Partition::<Witness>::empty();
    assert!(partition.is_empty());
    assert_eq!(partition.len(), 0);
    assert_eq!(partition.to_string(), "[]");
    assert_eq!(partition, Partition::default());
}

#[test]
fn separate_regions_are_singletons() {
    let partition = Partition::<Witness>::separate_regions(elements([4, 0, 2]));
    assert_eq!(partition.len(), 3);
    assert_eq!(partition.tracked_elements().collect::<Vec<_>>(), elements([0, 2, 4]));
    assert_eq!(regions_of(&partition, [0, 2, 4]), [0, 2, 4]);
    assert_eq!(partition.to_string(), "[(0) (2) (4)]");

    let inspector = Inspector::new(&partition);
    assert!(!inspector.is_consumed(e(2)));
    assert_eq!(inspector.region_of(e(1)), None);
    assert!(partition.check_invariants().is_ok());
}

#[test]
fn single_region_is_named_by_minimum() {
    let partition = Partition::<Witness>::single_region(elements([9, 5, 3, 7]));
    assert_eq!(regions_of(&partition, [3, 5, 7, 9]), [3, 3, 3, 3]);
    assert_eq!(partition.to_string(), "[(3 5 7 9)]");
    assert!(partition.check_invariants().is_ok());

    let empty = Partition::<Witness>::single_region(vec![]);
    assert!(empty.is_empty());
}

#[test]
fn display_marks_consumed_regions() -> Result<()> {
    let partition = build(&[
        PartitionOp::assign_fresh(e(0)),
        PartitionOp::assign_fresh(e(1)),
        PartitionOp::assign_fresh(e(2)),
        PartitionOp::assign_fresh(e(5)),
        PartitionOp::assign(e(5), e(2)),
        PartitionOp::merge(e(1), e(0)),
        PartitionOp::transfer(e(5), w(1)),
    ])?;
    assert_eq!(partition.to_string(), "[(0 1) {2 5}]");
    Ok(())
}

#[test]
fn regions_report_members_and_witnesses() -> Result<()> {
    let partition = build(&[
        PartitionOp::assign_fresh(e(3)),
        PartitionOp::assign_fresh(e(1)),
        PartitionOp::assign_fresh(e(8)),
        PartitionOp::merge(e(8), e(3)),
        PartitionOp::transfer(e(8), w(0xfead)),
    ])?;

    let regions = Inspector::new(&partition).regions();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].region.representative(), e(1));
    assert_eq!(regions[0].members, elements([1]));
    assert_eq!(regions[0].witness, None);
    assert_eq!(
        regions[1],
        RegionInfo {
            region: regions[1].region,
            members: elements([3, 8]),
            witness: Some(w(0xfead)),
        }
    );
    assert_eq!(regions[1].region.representative(), e(3));

    let json = serde_json::to_value(&regions)?;
    assert_eq!(
        json,
        serde_json::json!([
            {"region": 1, "members": [1]},
            {"region": 3, "members": [3, 8], "witness": 0xfead}
        ])
    );
    Ok(())
}

#[test]
fn clones_are_independent() -> Result<()> {
    let mut original = build(&[
        PartitionOp::assign_fresh(e(0)),
        PartitionOp::assign_fresh(e(1)),
        PartitionOp::assign_fresh(e(2)),
    ])?;
    let copy = original.clone();

    apply(
        &mut original,
        &[
            PartitionOp::merge(e(0), e(1)),
            PartitionOp::merge(e(1), e(2)),
            PartitionOp::transfer(e(2), w(1)),
        ],
    )?;
    assert_eq!(original.to_string(), "[{0 1 2}]");
    assert_eq!(copy.to_string(), "[(0) (1) (2)]");

    let mut copy = original.clone();
    apply(&mut copy, &[PartitionOp::undo_transfer(e(0), w(1))])?;
    apply(&mut copy, &[PartitionOp::assign_fresh(e(1))])?;
    assert_eq!(copy.to_string(), "[(0 2) (1)]");
    assert_eq!(original.to_string(), "[{0 1 2}]");
    Ok(())
}

#[test]
fn equality_ignores_construction_order() -> Result<()> {
    let left = build(&[
        PartitionOp::assign_fresh(e(2)),
        PartitionOp::assign_fresh(e(1)),
        PartitionOp::assign_fresh(e(0)),
        PartitionOp::merge(e(2), e(1)),
        PartitionOp::merge(e(1), e(0)),
    ])?;
    let right = Partition::single_region(elements([0, 1, 2]));
    assert_eq!(left, right);
    assert!(Partition::equals(&left, &right));

    let mut consumed = right.clone();
    apply(&mut consumed, &[PartitionOp::transfer(e(1), w(9))])?;
    assert_ne!(left, consumed);

    let mut larger = right.clone();
    apply(&mut larger, &[PartitionOp::assign_fresh(e(3))])?;
    assert_ne!(left, larger);
    assert_ne!(larger, left);

    let disjoint = Partition::single_region(elements([0, 1, 5]));
    assert_ne!(right, disjoint);
    Ok(())
}

#[test]
fn equality_ignores_witness_identity() -> Result<()> {
    let mut first = Partition::separate_regions(elements([0]));
    let mut second = first.clone();
    apply(&mut first, &[PartitionOp::transfer(e(0), w(1))])?;
    apply(&mut second, &[PartitionOp::transfer(e(0), w(2))])?;
    assert_eq!(first, second);
    Ok(())
}
