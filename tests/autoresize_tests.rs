use std::fs;
use std::path::Path;

use plotly_offline::{Figure, Layout, OutputType, PlotOptions, PlotlyJs, Trace, plot};

const RESIZE_CODE_STRINGS: [&str; 2] =
    [r#"window.addEventListener("resize", "#, "Plotly.Plots.resize("];

fn fixture_figure() -> Figure {
    Figure::new(
        vec![Trace::scatter(vec![1, 2, 3], vec![10, 20, 30])],
        Layout::new().with_title("offline plot"),
    )
}

fn fixed_size_figure() -> Figure {
    Figure::new(
        vec![Trace::scatter(vec![1, 2, 3], vec![10, 20, 30])],
        Layout::new().with_width(500).with_height(500),
    )
}

fn read_html(file_url: &str) -> String {
    let path = file_url.strip_prefix("file://").unwrap_or(file_url);
    fs::read_to_string(path).expect("read plot html")
}

fn file_options(dir: &Path) -> PlotOptions {
    PlotOptions::new()
        .with_auto_open(false)
        .with_filename(dir.join("temp-plot.html"))
}

#[test]
fn unsized_layout_gets_a_resize_listener() {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = plot(&fixture_figure(), &file_options(dir.path())).expect("plot");
    let html = read_html(&url);

    for resize_code in RESIZE_CODE_STRINGS {
        assert!(html.contains(resize_code), "missing {resize_code:?}");
    }
}

#[test]
fn fixed_size_layout_omits_the_resize_listener() {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = plot(&fixed_size_figure(), &file_options(dir.path())).expect("plot");
    let html = read_html(&url);

    for resize_code in RESIZE_CODE_STRINGS {
        assert!(!html.contains(resize_code), "unexpected {resize_code:?}");
    }
}

#[test]
fn div_output_resizes_regardless_of_engine_include() {
    for include in [
        PlotlyJs::from(true),
        PlotlyJs::from(false),
        PlotlyJs::from("cdn"),
        PlotlyJs::from("directory"),
    ] {
        let options = PlotOptions::new()
            .with_output_type(OutputType::Div)
            .with_include_plotlyjs(include);
        let html = plot(&fixture_figure(), &options).expect("plot");

        for resize_code in RESIZE_CODE_STRINGS {
            assert!(html.contains(resize_code), "missing {resize_code:?}");
        }
    }
}

#[test]
fn fixed_size_div_output_omits_the_resize_listener() {
    let options = PlotOptions::new().with_output_type(OutputType::Div);
    let html = plot(&fixed_size_figure(), &options).expect("plot");

    for resize_code in RESIZE_CODE_STRINGS {
        assert!(!html.contains(resize_code), "unexpected {resize_code:?}");
    }
}
