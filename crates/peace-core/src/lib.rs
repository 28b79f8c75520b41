//! Peace Site Core
//!
//! Platform-independent state for the Peace marketing page: the mobile
//! navigation menu and the scroll-to-top affordance. Browser bindings live in
//! `peace-site`; everything here is plain Rust and testable without a DOM.

pub mod config;
pub mod interaction;

use thiserror::Error;

pub use config::InteractionConfig;
pub use interaction::{InteractionOrigin, ScrollHost, ViewState, ViewportInteractionController};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
