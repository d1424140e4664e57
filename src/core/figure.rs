use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// One data series within a figure.
///
/// The record is opaque to the generator: keys are forwarded verbatim into
/// JSON serialization, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace(IndexMap<String, Value>);

impl Trace {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Scatter trace over paired x/y samples.
    #[must_use]
    pub fn scatter<X, Y>(x: Vec<X>, y: Vec<Y>) -> Self
    where
        X: Into<Value>,
        Y: Into<Value>,
    {
        Self::new()
            .with("type", "scatter")
            .with("x", Value::Array(x.into_iter().map(Into::into).collect()))
            .with("y", Value::Array(y.into_iter().map(Into::into).collect()))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Figure-wide display configuration (title, axis sizes, etc.).
///
/// Like [`Trace`], the record is forwarded verbatim into JSON serialization.
/// The generator itself only inspects `width` and `height` to decide whether
/// the rendered document needs a window-resize listener.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Layout(IndexMap<String, Value>);

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with("title", title.into())
    }

    #[must_use]
    pub fn with_width(self, width: u32) -> Self {
        self.with("width", width)
    }

    #[must_use]
    pub fn with_height(self, height: u32) -> Self {
        self.with("height", height)
    }

    #[must_use]
    pub fn width(&self) -> Option<&Value> {
        self.0.get("width")
    }

    #[must_use]
    pub fn height(&self) -> Option<&Value> {
        self.0.get("height")
    }

    /// True when the layout pins both dimensions, in which case the
    /// rendered document skips the window-resize listener.
    #[must_use]
    pub fn has_fixed_size(&self) -> bool {
        self.width().is_some() && self.height().is_some()
    }
}

/// A complete chart definition: ordered data series plus layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    #[must_use]
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }
}
