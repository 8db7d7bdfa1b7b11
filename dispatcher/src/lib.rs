//! # Dispatcher
//!
//! Routes classified updates for one chat at a time: resolves (or bootstraps) the chat session,
//! picks an [`Action`] for the update and performs it through the injected collaborators.
//! Every failure is contained to the update being processed.

mod action;
mod router;

pub use action::{route, Action};
pub use router::Router;
