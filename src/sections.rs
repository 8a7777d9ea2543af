//! Deciding which metadata sections to print.
//!
//! There are three sections: the cluster, the list of brokers, and the topics. If no section is
//! requested, all sections are printed, including internal topics. Asking for internal topics,
//! per-partition details or specific topics implies the topic section.
use tracing::debug;

/// Sections requested by the user, before any defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct SectionRequest {
    /// Print cluster section
    #[cfg_attr(feature = "cli", arg(short = 'c', long))]
    pub print_cluster: bool,

    /// Print brokers section
    #[cfg_attr(feature = "cli", arg(short = 'b', long))]
    pub print_brokers: bool,

    /// Print topics section (implied if any topics are specified)
    #[cfg_attr(feature = "cli", arg(short = 't', long))]
    pub print_topics: bool,

    /// Print internal topics (if all topics requested, implies -t)
    #[cfg_attr(feature = "cli", arg(short = 'i', long))]
    pub print_internal_topics: bool,

    /// Print per-partition information for topics (implies -t)
    #[cfg_attr(feature = "cli", arg(short = 'd', long))]
    pub print_detailed_topics: bool,

    /// Topics to describe; all topics if none are given
    #[cfg_attr(feature = "cli", arg(value_name = "TOPICS"))]
    pub topics: Vec<String>,
}

impl SectionRequest {
    /// Create an empty request, which resolves to the full report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the cluster section.
    pub fn cluster(mut self, enabled: bool) -> Self {
        self.print_cluster = enabled;
        self
    }

    /// Request the broker section.
    pub fn brokers(mut self, enabled: bool) -> Self {
        self.print_brokers = enabled;
        self
    }

    /// Request the topic section.
    pub fn topics(mut self, enabled: bool) -> Self {
        self.print_topics = enabled;
        self
    }

    /// Include internal topics.
    pub fn internal_topics(mut self, enabled: bool) -> Self {
        self.print_internal_topics = enabled;
        self
    }

    /// Print per-partition details for each topic.
    pub fn detailed_topics(mut self, enabled: bool) -> Self {
        self.print_detailed_topics = enabled;
        self
    }

    /// Restrict the topic section to the given topic names.
    pub fn topic_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = names.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve the request into the sections to print.
    pub fn resolve(&self) -> Sections {
        let mut cluster = self.print_cluster;
        let mut brokers = self.print_brokers;
        let mut topics = self.print_topics;
        let mut internal = self.print_internal_topics;
        let detailed = self.print_detailed_topics;

        // Must run before counting, otherwise a lone `-d` or `-i` would fall
        // through to the full report.
        if !self.topics.is_empty() || detailed || internal {
            topics = true;
        }

        let mut requested = [cluster, brokers, topics].into_iter().filter(|v| *v).count();
        if requested == 0 {
            cluster = true;
            brokers = true;
            topics = true;
            internal = true;
            requested = 3;
        }

        let sections = Sections {
            cluster,
            brokers,
            topics,
            internal,
            detailed,
            topic_names: self.topics.clone(),
            requested,
        };
        debug!(?sections, "resolved metadata sections");
        sections
    }
}

/// Sections to print, as resolved by [`SectionRequest::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    cluster: bool,
    brokers: bool,
    topics: bool,
    internal: bool,
    detailed: bool,
    topic_names: Vec<String>,
    requested: usize,
}

impl Sections {
    /// Print the cluster section.
    pub fn cluster(&self) -> bool {
        self.cluster
    }

    /// Print the broker section.
    pub fn brokers(&self) -> bool {
        self.brokers
    }

    /// Print the topic section.
    pub fn topics(&self) -> bool {
        self.topics
    }

    /// Include internal topics in the topic section.
    pub fn internal(&self) -> bool {
        self.internal
    }

    /// Print per-partition details in the topic section.
    pub fn detailed(&self) -> bool {
        self.detailed
    }

    /// Topic names the topic section is restricted to; empty means all topics.
    pub fn topic_names(&self) -> &[String] {
        &self.topic_names
    }

    /// Number of sections that are turned on.
    pub fn active_sections(&self) -> usize {
        self.requested
    }

    /// Whether sections get a name header, which is the case once more than one is printed.
    pub fn with_headers(&self) -> bool {
        self.requested > 1
    }

    /// Topics to ask the broker for.
    ///
    /// `None` requests all topics, an empty list requests none.
    pub fn requested_topics(&self) -> Option<Vec<String>> {
        if !self.topic_names.is_empty() {
            Some(self.topic_names.clone())
        } else if !self.topics {
            Some(vec![])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_nothing_requested_defaults_to_everything() {
        let sections = SectionRequest::new().resolve();
        assert!(sections.cluster());
        assert!(sections.brokers());
        assert!(sections.topics());
        assert!(sections.internal());
        assert!(!sections.detailed());
        assert!(sections.with_headers());
        assert_eq!(sections.requested_topics(), None);
    }

    #[test]
    fn test_detailed_implies_topics_only() {
        let sections = SectionRequest::new().detailed_topics(true).resolve();
        assert!(!sections.cluster());
        assert!(!sections.brokers());
        assert!(sections.topics());
        assert!(!sections.internal());
        assert!(sections.detailed());
        assert_eq!(sections.active_sections(), 1);
        assert!(!sections.with_headers());
    }

    #[test]
    fn test_internal_implies_topics() {
        let sections = SectionRequest::new().internal_topics(true).resolve();
        assert!(sections.topics());
        assert!(sections.internal());
        assert!(!sections.cluster());
        assert!(!sections.brokers());
    }

    #[test]
    fn test_topic_names_imply_topics() {
        let sections = SectionRequest::new()
            .brokers(true)
            .topic_names(["foo", "bar"])
            .resolve();
        assert!(!sections.cluster());
        assert!(sections.brokers());
        assert!(sections.topics());
        assert!(!sections.internal());
        assert_eq!(sections.active_sections(), 2);
        assert_eq!(
            sections.requested_topics(),
            Some(vec!["foo".to_owned(), "bar".to_owned()])
        );
    }

    #[test]
    fn test_explicit_sections_kept() {
        let sections = SectionRequest::new().cluster(true).resolve();
        assert!(sections.cluster());
        assert!(!sections.brokers());
        assert!(!sections.topics());
        assert!(!sections.internal());
        assert_eq!(sections.requested_topics(), Some(vec![]));
    }

    proptest! {
        #[test]
        fn test_resolve(request: SectionRequest) {
            let sections = request.resolve();
            prop_assert!(sections.active_sections() > 0);
            prop_assert!(sections.cluster() || sections.brokers() || sections.topics());

            let implies_topics = request.print_detailed_topics
                || request.print_internal_topics
                || !request.topics.is_empty();
            if implies_topics {
                prop_assert!(sections.topics());
                prop_assert_eq!(sections.cluster(), request.print_cluster);
                prop_assert_eq!(sections.brokers(), request.print_brokers);
                prop_assert_eq!(sections.internal(), request.print_internal_topics);
            }
            prop_assert_eq!(sections.detailed(), request.print_detailed_topics);
            prop_assert_eq!(sections.topic_names(), request.topics.as_slice());
        }
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags() {
        use clap::Parser;

        #[derive(Debug, Parser)]
        struct Cli {
            #[command(flatten)]
            request: SectionRequest,
        }

        let cli = Cli::try_parse_from(["metadata", "-b", "-d", "foo", "bar"]).unwrap();
        assert_eq!(
            cli.request,
            SectionRequest::new()
                .brokers(true)
                .detailed_topics(true)
                .topic_names(["foo", "bar"])
        );

        let cli = Cli::try_parse_from(["metadata", "--print-cluster", "--print-internal-topics"])
            .unwrap();
        assert!(cli.request.print_cluster);
        assert!(cli.request.print_internal_topics);
        assert!(cli.request.topics.is_empty());
    }
}
