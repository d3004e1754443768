//! # Pagewright Inspector
//!
//! Typed property projections over the selected node.
//!
//! ## Design
//!
//! Property panels never touch raw props. Each field group (box model,
//! typography, borders, effects, per-component collections) has:
//!
//! - a **getter**: a pure function of the node's current props, re-derived
//!   from scratch whenever the selection changes;
//! - a **setter**: computes the next `className`/`style` through the style
//!   codec and dispatches exactly one `UpdateNode` to the store. Setters are
//!   the single place where codec and store meet.
//!
//! Setters return `bool`: `false` means the input was unusable (unparsable
//! number, unknown token, vanished node) and nothing was dispatched, leaving
//! every other field untouched.
//!
//! Collection helpers (menu items, tabs, steps) maintain the "item N ↔
//! child N" positional correspondence and batch their paired mutations into
//! one undo step.

pub mod borders;
pub mod box_model;
pub mod collections;
mod dispatch;
pub mod effects;
pub mod media;
pub mod typography;

pub use borders::BorderFields;
pub use box_model::BoxModelFields;
pub use collections::{MenuItem, StepItem, TabItem};
pub use effects::EffectFields;
pub use media::UploadTicket;
pub use typography::TypographyFields;
