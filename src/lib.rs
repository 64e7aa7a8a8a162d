//! Editor-agnostic core for an embedded AI pair-programming assistant
//!
//! A host editor embeds this crate and keeps rendering, key input, and the
//! assistant transport to itself. The core owns the pieces that must be
//! exact and independently testable:
//!
//! - **Selection extraction** ([`selection`]): the text a modal editor
//!   considers selected (character-wise, line-wise, or block-wise),
//!   correct under variable-width multi-byte characters
//! - **Memory notes** ([`memory`]): the persistent markdown file seeding
//!   assistant context
//! - **Status** ([`status`]): host-driven busy indicator state
//! - **Commands** ([`commands`]): explicit data-in/result-out handlers for
//!   the host event dispatcher
//! - **Configuration** ([`config`]): an explicit value handed to operations
//!   at call time, never a hidden global
//!
//! Width and character-boundary queries go through the
//! [`TextMetrics`] capability so hosts with their own width tables can
//! inject them; [`UnicodeMetrics`] is the default.

pub mod commands;
pub mod config;
pub mod host;
pub mod memory;
pub mod primitives;
pub mod selection;
pub mod status;

pub use config::Config;
pub use host::{Host, RawSelection, SnapshotHost};
pub use memory::MemoryStore;
pub use primitives::display_width::{Direction, TextMetrics, UnicodeMetrics};
pub use selection::{extract, extract_with_tag, Position, SelectionMode};
pub use status::Spinner;
