pub mod text_renderer;

pub use text_renderer::{render, render_with, render_paragraph, render_run};
