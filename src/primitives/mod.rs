//! Low-level primitives and utilities
//!
//! This module contains the text measurement capability shared by the
//! selection extractor and the command layer.

pub mod display_width;
