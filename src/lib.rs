//! Video surface layout computation.
//!
//! Positions and sizes a video rendering surface inside a container
//! viewport, under changeable video geometry (frame size, visible crop,
//! sample aspect ratio), viewport orientation, and a selectable scale
//! policy. The geometry math is pure and side-effect free; platform views
//! and the renderer command API stay behind the [`SurfaceHost`] seam.
//!
//! # Modules
//!
//! - [`geometry`] — Video geometry state, viewport frames, track metadata
//! - [`solver`] — Scale policies and the pure layout solver
//! - [`coalescer`] — Debounce of notification bursts into one recomputation
//! - [`controller`] — Orchestration, host trait, lifecycle

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod coalescer;
pub mod controller;
pub mod geometry;
pub mod solver;

// Re-exports: core types from each module
pub use coalescer::{LayoutTicket, UpdateCoalescer};
pub use controller::{SurfaceHost, SurfaceLayoutController, Viewport};
pub use geometry::{
    Bounds, DisplayFrame, GeometryUpdate, Size, TrackOrientation, VideoGeometry, VideoTrackInfo,
};
pub use solver::{
    LayoutError, NamedRatio, Ratio, RendererPlacement, ScalePolicy, SurfaceLayout, SurfaceSizing,
    renderer_placement, solve,
};
