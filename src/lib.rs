//! Scratch-to-reveal engine for digital invitations.
//!
//! A [`ScratchSurface`] owns a fixed-size premultiplied RGBA8 [`Raster`] painted with an opaque
//! decorative overlay. Pointer input scratches discs out of it; after every stroke the exact share
//! of fully transparent pixels is measured, and the first time it exceeds the threshold the
//! surface flips to revealed and runs the host's completion callback exactly once.
//!
//! # Event flow
//!
//! 1. **Normalize**: host-native [`InputEvent`] (mouse or touch) -> logical [`PointerEvent`]
//! 2. **Map**: display coordinates -> raster coordinates via the current [`DisplayGeometry`]
//! 3. **Erase**: clear a disc of `erase_radius` around the mapped point
//! 4. **Evaluate**: measure coverage, feed the one-way [`RevealLatch`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Synchronous**: each event runs erase then evaluate to completion before returning.
//! - **Owned state**: every surface owns its raster; there is no shared canvas context.
//! - **Exact coverage**: counts are exact whichever [`CoverageStrategy`] is used.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod input;
mod raster;
mod replay;
mod reveal;
mod style;

pub use foundation::core::{FrameRGBA, MAX_RASTER_DIM, Point, RasterSize, Rect, Rgba8Premul};
pub use foundation::error::{ScratchError, ScratchResult};
pub use input::event::{InputEvent, PointerEvent};
pub use input::mapping::{DisplayGeometry, map_to_raster};
pub use raster::coverage::{
    CoverageStrategy, CoverageThreshold, DEFAULT_THRESHOLD, evaluate_coverage,
};
pub use raster::paint::paint_surface;
pub use raster::surface::{CompositeMode, Raster, erase_disc};
pub use replay::{ReplayReport, ReplayScript, ScriptedEvent, replay};
pub use reveal::latch::RevealLatch;
pub use reveal::pointer::PointerState;
pub use reveal::surface::{ScratchOpts, ScratchStats, ScratchSurface, StrokeOutcome};
pub use style::color::ColorDef;
pub use style::surface_style::{
    BorderStyle, GradientStop, LabelStyle, SparkleStyle, SurfacePreset, SurfaceShape,
    SurfaceStyle,
};
