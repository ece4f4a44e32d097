//! Word lists for Hurdle
//!
//! Embedded lists compiled into the binary, so a local fallback word source is
//! always available.

mod embedded;
pub mod loader;

pub use embedded::{
    ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, PROPER_NOUNS, PROPER_NOUNS_COUNT,
};
