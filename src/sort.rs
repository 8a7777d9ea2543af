//! Deterministic in-place ordering of metadata sequences.
//!
//! All keys sorted on here are unique within a well-formed response, so an unstable sort yields
//! the same order as a stable one. Replica lists may repeat IDs in malformed responses; equal
//! integers are indistinguishable, so the result is deterministic either way.

use crate::metadata::{MetadataBroker, MetadataPartition, MetadataTopic};

/// Sort brokers ascending by node ID.
pub fn sort_brokers(brokers: &mut [MetadataBroker]) {
    brokers.sort_unstable_by_key(|b| b.node_id);
}

/// Sort topics ascending by name.
pub fn sort_topics(topics: &mut [MetadataTopic]) {
    topics.sort_unstable_by(|a, b| a.name.cmp(&b.name));
}

/// Sort partitions ascending by partition index.
pub fn sort_partitions(partitions: &mut [MetadataPartition]) {
    partitions.sort_unstable_by_key(|p| p.partition_index);
}

/// Sort a list of broker IDs ascending and hand it back for display.
pub fn sorted_ids(ids: &mut [i32]) -> &[i32] {
    ids.sort_unstable();
    ids
}
