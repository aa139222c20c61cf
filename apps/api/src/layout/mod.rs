// Text layout for packaged documents: static Helvetica metrics, page geometry,
// and greedy line wrapping. The PDF writer in `packaging::pdf` consumes this.

pub mod font_metrics;

pub use font_metrics::{default_page_config, get_metrics, FontFamily, PageConfig};
