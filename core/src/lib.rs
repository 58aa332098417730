//! Controller-side logic for Tether records.
//!
//! The record layer in `tether-types` accepts any phase and any version
//! string. This crate layers the discipline on top: a transition guard,
//! the binding operations built on it, engine version admission, and the
//! listing table.

pub mod admission;
pub mod binding;
pub mod display;
pub mod transition;

use tether_config::TetherConfig;

pub use admission::{Admission, AdmissionError};
pub use binding::{
    BindError, Matching, bind_claim, bind_resource, fail, matching, needs_binding, release,
};
pub use display::{HEADERS, Row, format_age, render_table};
pub use transition::{
    TransitionError, TransitionGuard, allowed_targets, is_allowed, is_terminal, may_bind,
};

impl From<&TetherConfig> for TransitionGuard {
    fn from(config: &TetherConfig) -> Self {
        Self::new(config.transitions())
    }
}

impl From<&TetherConfig> for Admission {
    fn from(config: &TetherConfig) -> Self {
        Self::new(config.engine_versions().clone())
    }
}
