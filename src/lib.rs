//! Render Kafka cluster metadata (cluster ID, brokers, topics and partitions) as human-readable
//! tables.
//!
//! ```
//! use metadata_report::{
//!     metadata::{Metadata, MetadataBroker},
//!     render::render_metadata,
//!     sections::SectionRequest,
//! };
//!
//! let mut metadata = Metadata {
//!     cluster_id: Some("my-cluster".to_owned()),
//!     controller_id: Some(0),
//!     brokers: vec![MetadataBroker {
//!         node_id: 0,
//!         host: "localhost".to_owned(),
//!         port: 9092,
//!         rack: None,
//!     }],
//!     topics: vec![],
//! };
//!
//! let sections = SectionRequest::new().cluster(true).resolve();
//! assert_eq!(render_metadata(&mut metadata, &sections), "my-cluster\n");
//! ```
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rust_2018_idioms,
    unsafe_code
)]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr
)]
pub mod error;
pub mod metadata;
mod protocol;
pub mod render;
pub mod sections;
mod sort;
mod table;

pub type ProtocolError = protocol::error::Error;
