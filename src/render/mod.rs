//! Printing of the metadata report.
//!
//! Sections are printed in a fixed order: cluster, brokers, topics. If more than one section is
//! turned on, every printed section is introduced by its name and an underline and followed by an
//! empty line.
use std::io::Write;

use tracing::debug;

use crate::{error::Result, metadata::Metadata, sections::Sections};

pub mod brokers;
pub mod topics;

use brokers::render_brokers;
use topics::{TopicFilter, render_topic_details, render_topic_summary};

/// Write the report for `metadata` to `writer`.
///
/// The broker, topic, partition and replica sequences of `metadata` are sorted in place. Clone
/// the metadata beforehand if the original order is still needed.
pub fn print_metadata<W>(metadata: &mut Metadata, sections: &Sections, mut writer: W) -> Result<()>
where
    W: Write,
{
    writer.write_all(render_metadata(metadata, sections).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render the report for `metadata`, see [`print_metadata`].
pub fn render_metadata(metadata: &mut Metadata, sections: &Sections) -> String {
    let mut out = String::new();
    let mut section = |name: &str, body: String| {
        debug!(section = name, "printing metadata section");
        if sections.with_headers() {
            out.push_str(name);
            out.push('\n');
            out.push_str(&"=".repeat(name.len()));
            out.push('\n');
        }
        out.push_str(&body);
        if sections.with_headers() {
            out.push('\n');
        }
    };

    // The cluster ID is only reported by newer brokers.
    if sections.cluster() {
        if let Some(cluster_id) = &metadata.cluster_id {
            section("CLUSTER", format!("{cluster_id}\n"));
        }
    }

    if sections.brokers() {
        section(
            "BROKERS",
            render_brokers(&mut metadata.brokers, metadata.controller_id),
        );
    }

    if sections.topics() {
        let filter = TopicFilter::new(sections.topic_names(), sections.internal());
        if metadata.topics.iter().any(|t| filter.requested(t)) {
            let body = if sections.detailed() {
                render_topic_details(&mut metadata.topics, &filter)
            } else {
                render_topic_summary(&mut metadata.topics, &filter)
            };
            section("TOPICS", body);
        } else {
            debug!("no topics in response, skipping topic section");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_matches::assert_matches;

    use crate::{
        error::Error,
        metadata::{MetadataBroker, MetadataPartition, MetadataTopic},
        sections::SectionRequest,
    };

    fn metadata() -> Metadata {
        Metadata {
            cluster_id: Some("redpanda.test".to_owned()),
            controller_id: Some(1),
            brokers: vec![MetadataBroker {
                node_id: 1,
                host: "localhost".to_owned(),
                port: 9092,
                rack: None,
            }],
            topics: vec![MetadataTopic {
                name: "topic1".to_owned(),
                is_internal: false,
                partitions: vec![MetadataPartition::from_raw(0, 1, -1, vec![1], vec![], 0)],
            }],
        }
    }

    #[test]
    fn test_headers_when_several_sections() {
        let sections = SectionRequest::new().cluster(true).brokers(true).resolve();
        let out = render_metadata(&mut metadata(), &sections);

        assert!(out.starts_with("CLUSTER\n=======\nredpanda.test\n\nBROKERS\n=======\n"));
        assert!(out.ends_with("\n\n"));
        assert!(!out.contains("TOPICS"));
    }

    #[test]
    fn test_no_headers_for_single_section() {
        let sections = SectionRequest::new().cluster(true).resolve();
        let out = render_metadata(&mut metadata(), &sections);
        assert_eq!(out, "redpanda.test\n");
    }

    #[test]
    fn test_missing_cluster_id() {
        let mut metadata = metadata();
        metadata.cluster_id = None;

        let sections = SectionRequest::new().cluster(true).resolve();
        assert_eq!(render_metadata(&mut metadata, &sections), "");

        let sections = SectionRequest::new().resolve();
        let out = render_metadata(&mut metadata, &sections);
        assert!(out.starts_with("BROKERS\n"));
        assert!(!out.contains("CLUSTER"));
    }

    #[test]
    fn test_print_metadata() {
        let sections = SectionRequest::new().cluster(true).resolve();
        let mut buf = vec![];
        print_metadata(&mut metadata(), &sections, &mut buf).unwrap();
        assert_eq!(buf, b"redpanda.test\n");
    }

    #[test]
    fn test_print_metadata_io_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sections = SectionRequest::new().cluster(true).resolve();
        let err = print_metadata(&mut metadata(), &sections, Broken).unwrap_err();
        assert_matches!(err, Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe);
    }
}
