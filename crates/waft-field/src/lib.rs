//! Scent-field propagation for the waft learning workspace.
//!
//! This crate computes a scalar signal field over a [`GridLayout`]: every
//! goal and pit cell emits a decaying scent, and each reachable cell
//! accumulates `strength / (1 + d)` per emitter, where `d` is the BFS walk
//! distance over the 4-connected, wall-excluding adjacency graph. The
//! field exposes point reads and 4-direction gradient probes, the raw
//! material the perceptual agent discretizes into its state encoding.
//!
//! [`GridLayout`]: waft_core::GridLayout

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod emitter;
pub mod signal;

pub use emitter::{strength_for, Emitter};
pub use signal::SignalField;
