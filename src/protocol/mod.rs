//! The parts of the Apache Kafka protocol needed to present metadata responses.
//!
//! # References
//! - <https://kafka.apache.org/protocol>
pub mod error;
