//! Visual line layout
//!
//! Recovers soft-wrapped lines of a rendered container from word geometry.
//! `dom` does the browser measurement; `cluster` is the pure grouping step
//! and works on any measured input.

pub mod cluster;
pub mod dom;
pub mod errors;

pub use cluster::{cluster_rows, merge_fragments, tolerance, visual_lines, ClusterConfig, FontMetrics, MeasuredWord, RenderedBlock, VisualRow};
pub use dom::measure_container;
pub use errors::MeasureError;
