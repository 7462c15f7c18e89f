//! Chart rendering adapters.

mod canvas;
mod png_renderer;

pub use png_renderer::PngChartRenderer;
