//! Signature capture and replay
//!
//! This crate records a handwritten signature as a timestamped point
//! sequence and replays it later from the stored data:
//! - [`session::CaptureSession`] - per-surface recorder turning pointer
//!   events into a stroke log
//! - [`types::SignatureRecord`] - exportable bundle of stroke log plus
//!   pen configuration
//! - [`render::render`] - deterministic replay onto any [`surface::DrawingSurface`]
//! - [`surface::CpuSurface`] - CPU pixel-buffer reference backend
//! - [`input`] - page-to-surface coordinate mapping for host toolkits
//!
//! The host UI owns layout, event dispatch, and chrome; this crate owns
//! the gesture-capture-and-replay model only.

pub mod config;
pub mod events;
pub mod input;
pub mod render;
pub mod session;
pub mod surface;
pub mod types;

pub use config::*;
pub use events::*;
pub use input::*;
pub use render::*;
pub use session::*;
pub use surface::*;
pub use types::*;
