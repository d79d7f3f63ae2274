//! bizlens
//!
//! Terminal client for a local business search API.
//!
//! Pure core (`model`, `state`, `view_model`) with an impure shell
//! (`client`, `executor`, `view`).

pub mod client;
pub mod config;
pub mod executor;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_model;
