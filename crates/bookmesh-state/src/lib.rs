#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod action;
mod area;
mod profile;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use area::Area;
pub use profile::UserProfile;
pub use reducer::{Reducer, UserReducer, reduce};
pub use state::{NO_SELECTION, UserState};
pub use store::Store;

/// Tracing target for state transitions.
pub const TRACING_TARGET: &str = "bookmesh_state";
