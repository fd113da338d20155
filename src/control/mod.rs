//! Control module - module lifecycle surface.
//!
//! The data plane (block encoding and TCP delivery) lives in `codec`,
//! `protocol`, and `transport`. This module carries the integration glue a
//! host embeds: the version string and the read-only info report.

mod info;

pub use info::{InfoReport, VERSION};
