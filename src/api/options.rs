use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::Value;

/// Default document name for file output, written into the current working
/// directory unless the caller overrides it.
pub const DEFAULT_PLOT_FILENAME: &str = "temp-plot.html";

/// Name of the engine asset written next to the document in directory mode.
pub const ENGINE_FILENAME: &str = "plotly.min.js";

/// Hosted engine location referenced in CDN mode. Never fetched by this
/// crate; only the URL is emitted.
pub const CDN_URL: &str = "https://cdn.plot.ly/plotly-latest.min.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Full `<html>` document written to disk.
    #[default]
    File,
    /// Embeddable `<div>` fragment returned as a string.
    Div,
}

/// Loosely-typed `include_plotlyjs` value.
///
/// Callers historically passed booleans, numbers, or strings here; the
/// variants keep that surface while letting classification match
/// exhaustively. See [`EngineInclude::classify`](super::EngineInclude::classify).
#[derive(Debug, Clone, PartialEq)]
pub enum PlotlyJs {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl PlotlyJs {
    /// Generic truthiness: `false`, `0`, and the empty string are falsy,
    /// everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Str(value) => !value.is_empty(),
        }
    }
}

impl Default for PlotlyJs {
    fn default() -> Self {
        Self::Bool(true)
    }
}

impl From<bool> for PlotlyJs {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PlotlyJs {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for PlotlyJs {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for PlotlyJs {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Rendering options for [`plot`](super::plot).
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub output_type: OutputType,
    pub include_plotlyjs: PlotlyJs,
    /// Display-configuration keys forwarded into the rendered script as
    /// JSON, merged over the `showLink: true` default.
    pub config: IndexMap<String, Value>,
    /// Open the written document in the system viewer. Best effort and
    /// file-mode only.
    pub auto_open: bool,
    /// Output path for file mode. Ignored for div output.
    pub filename: PathBuf,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            output_type: OutputType::File,
            include_plotlyjs: PlotlyJs::default(),
            config: IndexMap::new(),
            auto_open: true,
            filename: PathBuf::from(DEFAULT_PLOT_FILENAME),
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    #[must_use]
    pub fn with_include_plotlyjs(mut self, include: impl Into<PlotlyJs>) -> Self {
        self.include_plotlyjs = include.into();
        self
    }

    #[must_use]
    pub fn with_config_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_auto_open(mut self, auto_open: bool) -> Self {
        self.auto_open = auto_open;
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = filename.into();
        self
    }
}
