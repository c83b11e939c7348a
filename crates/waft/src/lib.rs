//! Waft: scent-field perception and tabular Q-learning for grid navigation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the waft sub-crates. For most users, adding `waft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use waft::prelude::*;
//!
//! // A corridor with a goal at the far end.
//! let layout = GridLayout::parse("...G").unwrap();
//! let field = Arc::new(SignalField::new(&layout));
//!
//! // A perception-indexed learner with reproducible draws.
//! let mut agent = PerceptualAgent::new(
//!     field,
//!     LearningConfig::default(),
//!     PerceptionConfig::default(),
//!     ActionSelector::from_seed(42),
//! );
//!
//! // Drive one hand-rolled step: act, observe, learn.
//! let state = GridPos::new(0, 0);
//! let action = agent.choose_action(state);
//! let transition = Transition {
//!     state,
//!     action,
//!     reward: -0.01,
//!     next_state: GridPos::new(0, 1),
//!     done: false,
//! };
//! agent.update(&transition);
//! assert_eq!(agent.updates(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `waft-core` | Cell kinds, layouts, actions, transitions |
//! | [`field`] | `waft-field` | Emitters and the signal field |
//! | [`agent`] | `waft-agent` | Policies, Q-tables, agent variants |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid types (`waft-core`).
pub mod types {
    pub use waft_core::*;
}

/// Scent-field propagation (`waft-field`).
pub mod field {
    pub use waft_field::*;
}

/// Learning agents and policies (`waft-agent`).
pub mod agent {
    pub use waft_agent::*;
}

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use waft_agent::{
        ActionSelector, Agent, LearningConfig, PerceptionConfig, PerceptualAgent,
        PositionalAgent,
    };
    pub use waft_core::{Action, CellKind, GridLayout, GridPos, Transition};
    pub use waft_field::SignalField;
}
