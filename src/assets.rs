//! Bundled engine asset.

/// Full source text of the bundled charting engine.
///
/// Stable across calls within a process. The generator treats this as an
/// opaque collaborator: it is embedded, written out, or referenced, never
/// interpreted.
#[must_use]
pub fn get_plotlyjs() -> &'static str {
    include_str!("../assets/plotly.min.js")
}
