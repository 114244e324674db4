#![forbid(unsafe_code)]

//! Semantic room-map model (headless).
//!
//! Design goals:
//! - lenient decoding: a renderer downstream should always get *some* map,
//!   so malformed room data degrades to empty rather than failing
//! - deterministic iteration: rooms and exits keep the order they were
//!   supplied in, which downstream rendering depends on

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{MapModel, Room};
