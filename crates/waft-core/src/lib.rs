//! Core types for the waft learning workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid vocabulary shared by the signal-field and agent crates: cell kinds,
//! validated layouts, positions, actions, and transition records.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod layout;
pub mod transition;

pub use action::Action;
pub use error::LayoutError;
pub use layout::{CellKind, GridLayout, GridPos};
pub use transition::Transition;
