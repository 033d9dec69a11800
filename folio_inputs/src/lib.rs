//! # Folio Inputs
//!
//! The input side of the folio translator. This crate owns the three records the
//! translation is parameterized by and the loaders that read them from disk.
//! It knows nothing about narrative frames.
//!
//! ## Records
//!
//! - **sequence**: operator histogram from the upstream decoder (JSON)
//! - **pictorial**: first row of the pictorial feature counts (CSV)
//! - **decision**: the frame choice and its rationale bullets (plain text)

pub mod decision;
pub mod error;
pub mod pictorial;
pub mod sequence;

pub use decision::*;
pub use error::*;
pub use pictorial::*;
pub use sequence::*;
