//! Markdown format tests
//!
//! Block structure and inline spans through the public API.

mod blocks;
mod inline;
mod properties;
