//! Structural schema description and validation
//!
//! Every model response and provider payload in the pipeline is untrusted
//! input. This crate is the single chokepoint that turns such a payload into
//! a value the next stage can safely consume: a [`Schema`] describes the
//! expected shape as an explicit value (no reflection), and [`validate`]
//! either produces a conforming value or a [`ValidationError`] naming the
//! exact field path that failed.
//!
//! Coercion rules are deliberately narrow:
//! - missing optional fields take their declared default
//! - missing required fields fail, naming the field path
//! - numeric strings coerce to numbers; nothing else coerces
//! - unknown extra fields are dropped, never an error
//! - out-of-range numbers fail rather than clamp

pub mod error;
pub mod schema;
pub mod validate;

pub use error::ValidationError;
pub use schema::{Field, Schema};
pub use validate::{parse_validated, validate};
