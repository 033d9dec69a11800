//! # Translation Core
//!
//! Turns the decoder's input records into readable narrative documents. This
//! crate reads from `folio_inputs`, assembles the two competing narrative frames,
//! and splits every frame into its two reading layers.
//!
//! ## Core Components
//!
//! - **summary**: reduces input records to the values every frame displays
//! - **frame**: twelve-key (long) and seven-step (short) frame assemblers
//! - **layers**: splits a frame into literal and figurative layers and merges them line by line
//! - **pipeline**: picks the frames to render and persists every artifact
//! - **config**: input paths and output layout
//! - **pattern_scan**: naive claim/negation scanner over raw text
//!
//! ## Data Flow
//!
//! Loaders -> summary -> frame -> layers -> files. Every step before the final
//! write is a pure function of its inputs, so rerunning on the same inputs
//! produces byte-identical files.

pub mod config;
pub mod error;
pub mod frame;
pub mod layers;
pub mod pattern_scan;
pub mod pipeline;
pub mod summary;

pub use config::*;
pub use error::*;
pub use frame::*;
pub use layers::*;
pub use pattern_scan::*;
pub use pipeline::*;
pub use summary::*;
