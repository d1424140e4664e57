//! plotly-offline: standalone HTML generation for plotly-style figures.
//!
//! This crate turns a figure (data traces + layout) into either a complete
//! HTML document on disk or an embeddable `<div>` fragment, with the
//! charting engine embedded inline, referenced from a CDN, referenced from
//! a sibling file, or omitted entirely.

pub mod api;
pub mod assets;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{EngineInclude, OutputType, PlotOptions, PlotlyJs, plot};
pub use core::{Figure, Layout, Trace};
pub use error::{PlotError, PlotResult};
