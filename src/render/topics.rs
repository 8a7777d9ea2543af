//! The topic section, either one row per topic or a partition table per topic.
use std::fmt::Write;

use tracing::trace;

use crate::{
    metadata::{MetadataPartition, MetadataTopic},
    sort::{sort_partitions, sort_topics, sorted_ids},
    table::{Column, Table, id_list},
};

/// Placeholder for partitions without a load error.
const NO_ERROR: &str = "-";

/// Decides which topics of a response are printed.
#[derive(Debug, Clone, Copy)]
pub struct TopicFilter<'a> {
    names: &'a [String],
    include_internal: bool,
}

impl<'a> TopicFilter<'a> {
    /// Print all topics matching `names` (all topics if empty), skipping internal ones unless
    /// `include_internal` is set.
    pub fn new(names: &'a [String], include_internal: bool) -> Self {
        Self {
            names,
            include_internal,
        }
    }

    /// Whether the topic was asked for by name. Always true without a name filter.
    pub fn requested(&self, topic: &MetadataTopic) -> bool {
        self.names.is_empty() || self.names.iter().any(|n| n == &topic.name)
    }

    pub fn shows(&self, topic: &MetadataTopic) -> bool {
        self.requested(topic) && (self.include_internal || !topic.is_internal)
    }
}

/// Render one `NAME PARTITIONS REPLICAS` row per topic, ordered by name.
///
/// Sorts `topics` and their partitions in place.
pub fn render_topic_summary(topics: &mut [MetadataTopic], filter: &TopicFilter<'_>) -> String {
    sort_topics(topics);
    for topic in &mut *topics {
        sort_partitions(&mut topic.partitions);
    }

    let mut table = Table::new();
    table.push(Column::new("name", |t: &MetadataTopic| t.name.clone()));
    table.push(Column::new("partitions", |t: &MetadataTopic| {
        t.partitions.len().to_string()
    }));
    table.push(Column::new("replicas", |t: &MetadataTopic| {
        t.replica_count().to_string()
    }));

    table.render(topics.iter().filter(|t| filter.shows(t)))
}

/// Render a header line and a nested partition table per topic, ordered by name.
///
/// Sorts `topics`, their partitions, and each partition's replica lists in place. Topics are
/// separated by an empty line.
pub fn render_topic_details(topics: &mut [MetadataTopic], filter: &TopicFilter<'_>) -> String {
    sort_topics(topics);

    let mut out = String::new();
    for topic in topics.iter_mut().filter(|t| filter.shows(t)) {
        if !out.is_empty() {
            out.push('\n');
        }
        render_topic(&mut out, topic);
    }
    out
}

fn render_topic(out: &mut String, topic: &mut MetadataTopic) {
    sort_partitions(&mut topic.partitions);
    for p in &mut topic.partitions {
        sorted_ids(&mut p.replica_nodes);
        sorted_ids(&mut p.offline_replicas);
    }

    // "foo, 20 partitions, 3 replicas"
    out.push_str(&topic.name);
    if topic.is_internal {
        out.push_str(" (internal)");
    }
    // writing to a String cannot fail
    let _ = write!(out, ", {} partitions", topic.partitions.len());
    if !topic.partitions.is_empty() {
        let _ = write!(out, ", {} replicas", topic.replica_count());
    }
    out.push('\n');

    out.push_str(&partition_table(&topic.partitions).render(&topic.partitions));
}

/// Partition columns; optional columns are only included if some partition has data for them.
fn partition_table(partitions: &[MetadataPartition]) -> Table<'static, MetadataPartition> {
    let use_epoch = partitions.iter().any(|p| p.leader_epoch.is_some());
    let use_offline = partitions.iter().any(|p| !p.offline_replicas.is_empty());
    let use_error = partitions.iter().any(|p| p.error.is_some());
    trace!(use_epoch, use_offline, use_error, "partition columns");

    let mut table = Table::new().nested();
    table.push(Column::new("partition", |p: &MetadataPartition| {
        p.partition_index.to_string()
    }));
    table.push(Column::new("leader", |p: &MetadataPartition| {
        p.leader_id.to_string()
    }));
    if use_epoch {
        table.push(Column::new("epoch", |p: &MetadataPartition| match p.leader_epoch {
            Some(epoch) => epoch.to_string(),
            None => "-1".to_owned(),
        }));
    }
    // TODO: add an ISR column once in-sync replicas are carried in `MetadataPartition`
    table.push(Column::new("replicas", |p: &MetadataPartition| {
        id_list(&p.replica_nodes)
    }));
    if use_offline {
        table.push(Column::new("offline-replicas", |p: &MetadataPartition| {
            id_list(&p.offline_replicas)
        }));
    }
    if use_error {
        table.push(Column::new("load-error", |p: &MetadataPartition| match &p.error {
            Some(e) => e.to_string(),
            None => NO_ERROR.to_owned(),
        }));
    }
    table
}
