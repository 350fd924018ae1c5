//! JSON scene host.
//!
//! A scene is a serialized snapshot of a design canvas: nested frames and
//! text nodes with their absolute transforms, typography and fills. It lets
//! the engine run outside a design tool and gives tests a concrete tree.
//!
//! Attributes that vary across a run's characters are written as the string
//! `"mixed"`:
//!
//! ```
//! use unframe::scene::SceneDocument;
//!
//! let doc = SceneDocument::from_json(r#"{
//!     "selection": ["1:2"],
//!     "nodes": [{
//!         "id": "1:2", "type": "FRAME", "width": 595, "height": 842,
//!         "children": [{
//!             "type": "TEXT", "characters": "Jane Doe",
//!             "fontSize": 28, "fontWeight": 700, "fills": "mixed"
//!         }]
//!     }]
//! }"#)?;
//! assert_eq!(doc.selected_nodes()?.len(), 1);
//! # Ok::<(), unframe::Error>(())
//! ```

mod document;
mod fonts;
mod node;

pub use document::SceneDocument;
pub use fonts::SceneFonts;
pub use node::{FontRange, SceneNode, WeightValue};
