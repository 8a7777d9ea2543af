//! Cluster-wide Kafka metadata, as handed to the renderers.
//!
//! Wire-level sentinels (`-1` for "no controller" or "no leader epoch", `0` for "no error") are
//! normalized into [`Option`]s by the `from_raw` constructors so that the renderers never see them.

use crate::protocol::error::Error as ProtocolError;

/// Metadata container for the entire cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// The cluster ID, if the broker reported one.
    pub cluster_id: Option<String>,

    /// The ID of the controller broker.
    pub controller_id: Option<i32>,

    /// Brokers.
    pub brokers: Vec<MetadataBroker>,

    /// Topics.
    pub topics: Vec<MetadataTopic>,
}

impl Metadata {
    /// Create metadata from response fields, treating a negative controller ID as "no controller".
    pub fn from_raw(
        cluster_id: Option<String>,
        controller_id: i32,
        brokers: Vec<MetadataBroker>,
        topics: Vec<MetadataTopic>,
    ) -> Self {
        Self {
            cluster_id,
            controller_id: (controller_id >= 0).then_some(controller_id),
            brokers,
            topics,
        }
    }
}

/// Metadata for a certain broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBroker {
    /// The broker ID
    pub node_id: i32,

    /// The broker hostname
    pub host: String,

    /// The broker port
    pub port: i32,

    /// Rack.
    pub rack: Option<String>,
}

/// Metadata for a certain topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTopic {
    /// The topic name
    pub name: String,

    /// True if the topic is internal
    pub is_internal: bool,

    /// Each partition in the topic
    pub partitions: Vec<MetadataPartition>,
}

impl MetadataTopic {
    /// Number of replicas of this topic.
    ///
    /// Taken from the first partition in the current partition order, assuming that all
    /// partitions share one replication factor. Zero if the topic has no partitions.
    pub fn replica_count(&self) -> usize {
        self.partitions
            .first()
            .map(|p| p.replica_nodes.len())
            .unwrap_or_default()
    }
}

/// Metadata for a certain partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataPartition {
    /// The partition index
    pub partition_index: i32,

    /// The ID of the leader broker
    pub leader_id: i32,

    /// The leader epoch, if reported
    pub leader_epoch: Option<i32>,

    /// The set of all nodes that host this partition
    pub replica_nodes: Vec<i32>,

    /// The set of offline replicas of this partition
    pub offline_replicas: Vec<i32>,

    /// The error loading this partition, if any
    pub error: Option<ProtocolError>,
}

impl MetadataPartition {
    /// Create partition metadata from response fields.
    ///
    /// A leader epoch of `-1` means "not reported", an error code of `0` means "no error".
    pub fn from_raw(
        partition_index: i32,
        leader_id: i32,
        leader_epoch: i32,
        replica_nodes: Vec<i32>,
        offline_replicas: Vec<i32>,
        error_code: i16,
    ) -> Self {
        Self {
            partition_index,
            leader_id,
            leader_epoch: (leader_epoch != -1).then_some(leader_epoch),
            replica_nodes,
            offline_replicas,
            error: ProtocolError::new(error_code),
        }
    }
}
