//! Loading and saving simulation state.
//!
//! - `document`: the nested 0/1 array format, current generation only.
//! - `checkpoint`: bincode snapshots of the full engine state.
//!
//! The engine itself performs no I/O; everything here sits on top of it.

pub mod checkpoint;
pub mod document;

pub use checkpoint::{decode_checkpoint, encode_checkpoint, Checkpoint};
pub use document::{
    from_document, from_json_str, grid_from_document, grid_to_document, load, save, to_document,
    to_json_string, GridDocument,
};
