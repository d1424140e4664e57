use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::assets::get_plotlyjs;
use crate::core::Figure;
use crate::core::encoding::to_json_string;
use crate::error::PlotResult;

use super::include::EngineInclude;
use super::options::{CDN_URL, ENGINE_FILENAME, OutputType, PlotOptions};
use super::viewer;

static NEXT_PLOT_ID: AtomicU64 = AtomicU64::new(1);

/// Renders `figure` into offline HTML.
///
/// The return value depends on the output type: div mode returns the
/// fragment itself, file mode writes the document to `options.filename`
/// and returns a `file://` path to it. Callers needing the document text
/// in file mode read it back through that path.
pub fn plot(figure: &Figure, options: &PlotOptions) -> PlotResult<String> {
    let include = EngineInclude::classify(&options.include_plotlyjs);
    debug!(
        ?include,
        output_type = ?options.output_type,
        traces = figure.data.len(),
        "rendering offline plot"
    );

    let fragment = render_fragment(figure, options, include)?;
    match options.output_type {
        OutputType::Div => Ok(fragment),
        OutputType::File => write_document(&fragment, options, include),
    }
}

fn render_fragment(
    figure: &Figure,
    options: &PlotOptions,
    include: EngineInclude,
) -> PlotResult<String> {
    let data_json = to_json_string(&figure.data)?;
    let layout_json = to_json_string(&figure.layout)?;
    let config_json = to_json_string(&display_config(options))?;

    let div_id = next_plot_div_id();
    let mut fragment = String::from("<div>");
    if let Some(tag) = engine_script_tag(include) {
        fragment.push_str(&tag);
    }
    fragment.push_str(&format!(
        "<div id=\"{div_id}\" style=\"height: 100%; width: 100%;\" \
         class=\"plotly-graph-div\"></div>"
    ));
    fragment.push_str(&format!(
        "<script type=\"text/javascript\">\
         window.PLOTLYENV=window.PLOTLYENV || {{}};\
         Plotly.newPlot(\"{div_id}\", {data_json}, {layout_json}, {config_json})\
         </script>"
    ));
    if !figure.layout.has_fixed_size() {
        fragment.push_str(&resize_script(&div_id));
    }
    fragment.push_str("</div>");
    Ok(fragment)
}

fn write_document(
    fragment: &str,
    options: &PlotOptions,
    include: EngineInclude,
) -> PlotResult<String> {
    let document = format!(
        "<html><head><meta charset=\"utf-8\" /></head><body>{fragment}</body></html>"
    );

    // Directory mode co-locates the engine asset with the document. Div
    // output never touches the filesystem, so this only happens here.
    if include == EngineInclude::Directory {
        let engine_path = options
            .filename
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(ENGINE_FILENAME);
        fs::write(&engine_path, get_plotlyjs())?;
        debug!(path = %engine_path.display(), "wrote engine asset");
    }

    fs::write(&options.filename, &document)?;
    let absolute = std::path::absolute(&options.filename)?;
    debug!(path = %absolute.display(), bytes = document.len(), "wrote plot document");

    if options.auto_open {
        viewer::open_in_viewer(&options.filename);
    }
    Ok(format!("file://{}", absolute.display()))
}

/// Display configuration forwarded to `Plotly.newPlot`: `showLink`
/// defaults on and caller-supplied keys override it.
fn display_config(options: &PlotOptions) -> IndexMap<String, Value> {
    let mut config = IndexMap::new();
    config.insert("showLink".to_owned(), Value::Bool(true));
    for (key, value) in &options.config {
        config.insert(key.clone(), value.clone());
    }
    config
}

fn engine_script_tag(include: EngineInclude) -> Option<String> {
    match include {
        EngineInclude::Embed => Some(format!(
            "<script type=\"text/javascript\">{}</script>",
            get_plotlyjs()
        )),
        EngineInclude::Cdn => Some(format!("<script src=\"{CDN_URL}\"></script>")),
        EngineInclude::Directory => Some(format!("<script src=\"{ENGINE_FILENAME}\"></script>")),
        EngineInclude::None => None,
    }
}

fn resize_script(div_id: &str) -> String {
    format!(
        "<script type=\"text/javascript\">\
         window.addEventListener(\"resize\", function() {{ \
         Plotly.Plots.resize(document.getElementById(\"{div_id}\")); }});\
         </script>"
    )
}

/// Element ids only need to be unique within the emitting process.
fn next_plot_div_id() -> String {
    let n = NEXT_PLOT_ID.fetch_add(1, Ordering::Relaxed);
    format!("plotly-div-{n}")
}
