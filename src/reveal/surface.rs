use crate::foundation::core::{Point, RasterSize};
use crate::foundation::error::{ScratchError, ScratchResult};
use crate::input::event::{InputEvent, PointerEvent};
use crate::input::mapping::{DisplayGeometry, map_to_raster};
use crate::raster::coverage::{CoverageStrategy, CoverageThreshold};
use crate::raster::paint::paint_surface;
use crate::raster::surface::{Raster, erase_disc};
use crate::reveal::latch::RevealLatch;
use crate::reveal::pointer::PointerState;
use crate::style::surface_style::{SurfacePreset, SurfaceStyle};
use serde::{Deserialize, Serialize};

/// Mount-time options for a [`ScratchSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScratchOpts {
    /// Raster dimensions, fixed for the surface lifetime.
    pub size: RasterSize,
    /// Erase disc radius in raster units.
    pub erase_radius: f64,
    /// Coverage fraction that must be exceeded to reveal.
    #[serde(default)]
    pub threshold: CoverageThreshold,
    /// How coverage is measured after each stroke.
    #[serde(default)]
    pub strategy: CoverageStrategy,
}

impl Default for ScratchOpts {
    fn default() -> Self {
        Self::for_preset(SurfacePreset::MultiStage)
    }
}

impl ScratchOpts {
    /// Size and radius of a preset with the default threshold and strategy.
    pub fn for_preset(preset: SurfacePreset) -> Self {
        let (w, h) = preset.raster_dims();
        Self {
            size: RasterSize::from_preset_dims(w, h),
            erase_radius: preset.erase_radius(),
            threshold: CoverageThreshold::default(),
            strategy: CoverageStrategy::default(),
        }
    }

    /// Return options with a different coverage strategy.
    pub fn with_strategy(mut self, strategy: CoverageStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Return options with a different threshold.
    pub fn with_threshold(mut self, threshold: CoverageThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check the radius; size and threshold validate on construction.
    pub fn validate(&self) -> ScratchResult<()> {
        if !self.erase_radius.is_finite() || self.erase_radius <= 0.0 {
            return Err(ScratchError::validation(format!(
                "erase radius must be finite and > 0, got {}",
                self.erase_radius
            )));
        }
        Ok(())
    }
}

/// Per-surface counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScratchStats {
    /// Moves that erased (one erase + one evaluation each).
    pub strokes: u64,
    /// Moves ignored because no press was active or the surface was already revealed.
    pub ignored_moves: u64,
    /// Moves skipped because they carried no usable position.
    pub skipped_moves: u64,
    /// Pixels that became transparent across all strokes.
    pub pixels_cleared: u64,
    /// Coverage evaluations performed.
    pub evaluations: u64,
    /// 1-based stroke that completed the reveal.
    pub revealed_at_stroke: Option<u64>,
}

/// What a single pointer event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// Pressing started.
    Pressed,
    /// Pressing ended (release or leave).
    Released,
    /// Move ignored: idle, or already revealed.
    Ignored,
    /// Move had no usable position; nothing changed.
    Skipped,
    /// Move erased, threshold not crossed.
    Erased,
    /// Move erased and crossed the threshold; the completion callback has run.
    Revealed,
}

/// A mounted scratch-to-reveal surface.
///
/// Owns the raster, the pointer state machine, the one-way reveal latch and the host content that
/// sits underneath. All work happens synchronously inside [`ScratchSurface::handle`].
pub struct ScratchSurface<T> {
    raster: Raster,
    opts: ScratchOpts,
    style: SurfaceStyle,
    pointer: PointerState,
    latch: RevealLatch,
    on_complete: Option<Box<dyn FnOnce()>>,
    content: T,
    stats: ScratchStats,
}

impl<T> std::fmt::Debug for ScratchSurface<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScratchSurface")
            .field("size", &self.opts.size)
            .field("pointer", &self.pointer)
            .field("revealed", &self.latch.is_revealed())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<T> ScratchSurface<T> {
    /// Validate options, allocate the raster and paint the overlay.
    ///
    /// `on_complete` runs at most once, synchronously, from the move that crosses the threshold.
    #[tracing::instrument(skip(style, content, on_complete))]
    pub fn mount(
        opts: ScratchOpts,
        style: SurfaceStyle,
        content: T,
        on_complete: impl FnOnce() + 'static,
    ) -> ScratchResult<Self> {
        opts.validate()?;
        let mut raster = Raster::new(opts.size);
        paint_surface(&mut raster, &style)?;
        Ok(Self {
            raster,
            opts,
            style,
            pointer: PointerState::default(),
            latch: RevealLatch::new(),
            on_complete: Some(Box::new(on_complete)),
            content,
            stats: ScratchStats::default(),
        })
    }

    /// Mount a preset with its own size, radius and style.
    pub fn mount_preset(
        preset: SurfacePreset,
        content: T,
        on_complete: impl FnOnce() + 'static,
    ) -> ScratchResult<Self> {
        Self::mount(
            ScratchOpts::for_preset(preset),
            preset.style(),
            content,
            on_complete,
        )
    }

    /// Normalize a native event and handle it.
    pub fn handle_input(&mut self, event: &InputEvent, geometry: DisplayGeometry) -> StrokeOutcome {
        self.handle(event.normalize(), geometry)
    }

    /// Drive the pointer state machine with one logical event.
    ///
    /// While pressing, a move maps the pointer into raster space, erases a disc there and then
    /// evaluates coverage. `geometry` is the surface's current on-screen rect.
    pub fn handle(&mut self, event: PointerEvent, geometry: DisplayGeometry) -> StrokeOutcome {
        match event {
            PointerEvent::PressStart => {
                self.pointer.press();
                StrokeOutcome::Pressed
            }
            PointerEvent::PressEnd | PointerEvent::Leave => {
                self.pointer.release();
                StrokeOutcome::Released
            }
            PointerEvent::Move(client) => self.stroke(client, geometry),
        }
    }

    fn stroke(
        &mut self,
        client: Option<Point>,
        geometry: DisplayGeometry,
    ) -> StrokeOutcome {
        if !self.pointer.is_pressing() || self.latch.is_revealed() {
            self.stats.ignored_moves += 1;
            return StrokeOutcome::Ignored;
        }
        let Some(pos) = client.and_then(|c| map_to_raster(c, geometry, self.opts.size)) else {
            tracing::debug!(?client, ?geometry, "skipping move without usable position");
            self.stats.skipped_moves += 1;
            return StrokeOutcome::Skipped;
        };
        self.pointer.track(pos);

        let cleared = erase_disc(&mut self.raster, pos, self.opts.erase_radius);
        self.stats.strokes += 1;
        self.stats.pixels_cleared += cleared;

        let fraction = self.opts.strategy.measure(&self.raster);
        self.stats.evaluations += 1;

        if !self.latch.observe(fraction, self.opts.threshold) {
            return StrokeOutcome::Erased;
        }
        self.stats.revealed_at_stroke = Some(self.stats.strokes);
        tracing::debug!(
            stroke = self.stats.strokes,
            fraction,
            "coverage threshold crossed"
        );
        if let Some(cb) = self.on_complete.take() {
            cb();
        }
        StrokeOutcome::Revealed
    }

    /// Whether the threshold has been crossed.
    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    /// Whether the host should keep drawing the overlay.
    pub fn overlay_visible(&self) -> bool {
        !self.is_revealed()
    }

    /// Current coverage fraction. Diagnostic only; completion is signalled by the callback.
    pub fn coverage(&self) -> f64 {
        self.opts.strategy.measure(&self.raster)
    }

    /// Read-only view of the overlay raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Content shown underneath the overlay.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Mount options.
    pub fn opts(&self) -> &ScratchOpts {
        &self.opts
    }

    /// Decorative style the overlay was painted with.
    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    /// Pointer state machine.
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Counters since mount.
    pub fn stats(&self) -> ScratchStats {
        self.stats
    }

    /// Unmount, handing the content back.
    pub fn into_content(self) -> T {
        self.content
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/surface.rs"]
mod tests;
