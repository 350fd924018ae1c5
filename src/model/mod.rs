//! Data model shared by extraction, classification and export.
//!
//! [`node`] is the host-facing read-only view; [`TextRun`] and
//! [`ClassifiedBlock`] are owned snapshots produced per export and dropped
//! once the [`ExportPayload`] is handed off.

mod block;
pub mod node;
mod payload;
mod run;

pub use block::{ClassifiedBlock, SectionType};
pub use node::{FontName, Mixed, NodeKind, NodeView, Paint, Rgb};
pub use payload::ExportPayload;
pub use run::{Color, FontStyle, FontWeight, TextRun};
