//! Core logic for the hover preview.
//!
//! This module provides:
//! - [`HoverController`] - Pointer-driven panel and backdrop transitions
//! - [`Animator`], [`Stage`] - Capabilities the controller is driven through
//! - [`Catalog`] - Validated preview catalog

mod animation;
mod catalog;
mod controller;
pub mod error;
mod stage;
#[cfg(test)]
mod testing;

pub use animation::{Animator, Ease, Props, Target, Tween};
pub use catalog::Catalog;
pub use controller::{HoverController, RevertTicket};
pub use stage::Stage;
