pub mod include;
pub mod options;
pub mod render;
mod viewer;

pub use include::EngineInclude;
pub use options::{CDN_URL, DEFAULT_PLOT_FILENAME, ENGINE_FILENAME, OutputType, PlotOptions, PlotlyJs};
pub use render::plot;
