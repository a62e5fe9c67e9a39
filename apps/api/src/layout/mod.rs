// Text layout for the PDF renderer: static font metrics and greedy word-wrap.
// CPU-bound; the render step runs inside tokio::task::spawn_blocking.

pub mod font_metrics;

pub use font_metrics::{
    default_page_config, metrics_for, wrap_words, FontFamily, PageConfig,
};
