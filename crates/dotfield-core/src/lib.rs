//! Core of the interactive dot field: pulse and pointer input, baked frame
//! playback and the per-cell compositor. Browser-free, so it builds and tests
//! on the host as well as on wasm.

pub mod asset;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod frames;
pub mod grid;
pub mod input;
pub mod pulse;
pub mod render;
pub mod replay;

pub use compositor::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use frames::*;
pub use grid::*;
pub use input::*;
pub use pulse::*;
pub use render::*;
pub use replay::*;
