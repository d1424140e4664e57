use super::options::PlotlyJs;

/// How the rendered document gets at the charting engine.
///
/// Exactly one variant applies per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineInclude {
    /// Inline the full engine source in a `<script>` body.
    Embed,
    /// Reference the hosted engine by URL.
    Cdn,
    /// Reference a sibling `plotly.min.js`, written alongside file output.
    Directory,
    /// No engine reference at all.
    None,
}

impl EngineInclude {
    /// Classifies a loosely-typed `include_plotlyjs` value.
    ///
    /// Case-insensitive string matches take priority over generic
    /// truthiness, so `"CDN"` selects [`Self::Cdn`] even though it is also
    /// a non-empty (truthy) string. Any value that matches neither keyword
    /// falls through to truthiness: truthy embeds, falsy omits.
    #[must_use]
    pub fn classify(value: &PlotlyJs) -> Self {
        if let PlotlyJs::Str(text) = value {
            if text.eq_ignore_ascii_case("cdn") {
                return Self::Cdn;
            }
            if text.eq_ignore_ascii_case("directory") {
                return Self::Directory;
            }
        }
        if value.is_truthy() { Self::Embed } else { Self::None }
    }
}
