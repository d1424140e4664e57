pub mod encoding;
pub mod figure;

pub use figure::{Figure, Layout, Trace};
