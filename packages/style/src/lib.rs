//! # Pagewright Style
//!
//! Bidirectional codec between a utility-class token string and structured
//! style properties.
//!
//! ## Design
//!
//! Class strings are never regex-matched. Each whitespace-delimited token is
//! classified into a typed [`Category`] by a small tokenizer, and every
//! extract/replace/merge operation works over those categories:
//!
//! - **Extraction** returns the authoritative token of a category; when a
//!   class string carries conflicting tokens, the rightmost one wins.
//! - **Replacement** removes every token of the category and appends the new
//!   one (an empty value clears the category without leaving stray
//!   whitespace).
//! - **Merging** de-duplicates per category with last-write-wins semantics.
//!
//! Malformed or unrecognized tokens classify as [`Category::Other`] and are
//! treated as absent; nothing in this crate fails or panics on bad input.

pub mod border;
pub mod classes;
pub mod spacing;
mod token;

pub use token::{classify, Category, Side};
