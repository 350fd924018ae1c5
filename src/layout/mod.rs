//! Section classification and reading order.

mod classifier;
mod options;
mod order;

pub use classifier::{classify, classify_runs, SectionClassifier};
pub use options::LayoutOptions;
pub use order::{compare_reading_order, order_blocks, order_blocks_with};
