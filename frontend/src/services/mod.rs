//! File handling services.
//!
//! Everything here runs in the browser tab; nothing is sent anywhere.
//!
//! # Services
//!
//! - [`classify`] - accept/reject classification against an [`UploadConfig`](crate::UploadConfig)
//! - [`reconcile`] - held-file state and its derived view
//! - [`selection`] - reading candidates out of input and drop events

pub mod classify;
pub mod reconcile;
pub mod selection;

pub use classify::*;
pub use reconcile::*;
pub use selection::*;
