//! Generic copy engine
//!
//! The reusable pattern behind every migration step: enumerate a remote
//! collection lazily ([`lister`]), materialize it into an ordered batch,
//! and replay create actions with progress feedback ([`engine`]).

pub mod engine;
pub mod lister;

pub use engine::{copy, PHASE_COPYING, PHASE_FETCHING};
pub use lister::{Page, Paginator, ResourceLister};
