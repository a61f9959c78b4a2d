//! Surface layout orchestration.
//!
//! [`SurfaceLayoutController`] owns the mutable state — accumulated
//! [`VideoGeometry`], the active [`ScalePolicy`], and the debounce
//! [`UpdateCoalescer`] — and drives the pure solver against a
//! [`SurfaceHost`] collaborator. All entry points run on the host's single
//! event-loop thread; `&mut self` enforces exclusive mutation.
//!
//! Debounced entry points (`on_geometry_changed`, `on_viewport_changed`)
//! return a [`LayoutTicket`] for the host to post to its next idle slot and
//! pass back through [`redeem`](SurfaceLayoutController::redeem). Policy
//! changes recompute synchronously.

use core::fmt;

use log::{debug, error};

use crate::coalescer::{LayoutTicket, UpdateCoalescer};
use crate::geometry::{Bounds, DisplayFrame, GeometryUpdate, Size, VideoGeometry, VideoTrackInfo};
use crate::solver::{
    self, LayoutError, Ratio, ScalePolicy, SurfaceLayout, SurfaceSizing,
};

/// Snapshot of the viewport currently owning rendering — the primary
/// display's surface container or a secondary presentation window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Current container bounds.
    pub bounds: Bounds,
    /// Orientation from the host UI configuration.
    pub is_portrait: bool,
    /// False when rendering on a secondary/presentation display, which is
    /// never treated as portrait.
    pub is_primary: bool,
    /// A native-size presentation mode (e.g. picture-in-picture) is active
    /// and the surface must fill its container regardless of policy.
    pub native_size: bool,
}

/// Platform collaborator: the rendering surface, its container, and the
/// renderer command API.
///
/// The controller exclusively owns the implementor between
/// [`attach`](SurfaceLayoutController::attach) and
/// [`detach`](SurfaceLayoutController::detach); ownership transfers back to
/// the caller on detach.
pub trait SurfaceHost {
    /// The viewport currently owning rendering, or `None` when no window
    /// is available (layout is skipped).
    fn viewport(&self) -> Option<Viewport>;

    /// Metadata of the selected video track, when known.
    fn video_track(&self) -> Option<VideoTrackInfo>;

    /// Apply sizing to the rendering surface view.
    fn set_surface_size(&mut self, sizing: SurfaceSizing);

    /// Apply sizing to the surface's container.
    fn set_container_size(&mut self, sizing: SurfaceSizing);

    /// Ask the view system to redraw the surface.
    fn request_redraw(&mut self);

    /// Report the viewport size to the renderer.
    fn set_window_size(&mut self, size: Size);

    /// Send (or clear, with `None`) the renderer aspect-ratio hint.
    fn set_aspect_ratio_hint(&mut self, ratio: Option<Ratio>);

    /// Send the renderer scale hint; `0.0` means automatic.
    fn set_scale_hint(&mut self, scale: f32);

    /// Enable or disable the video track on the renderer.
    fn set_video_track_enabled(&mut self, enabled: bool);
}

/// Orchestrates geometry updates, debounced recomputation, and applying
/// solver results to the host.
pub struct SurfaceLayoutController<H> {
    host: Option<H>,
    geometry: VideoGeometry,
    policy: ScalePolicy,
    coalescer: UpdateCoalescer,
    /// Sizing currently applied to the surface view. Platform layouts
    /// start as match-parent, so the first sized pass clears renderer
    /// hints.
    applied: SurfaceSizing,
    orientation_from_bounds: bool,
}

impl<H: SurfaceHost> SurfaceLayoutController<H> {
    /// Create a detached controller with the default policy.
    pub fn new() -> Self {
        Self {
            host: None,
            geometry: VideoGeometry::default(),
            policy: ScalePolicy::default(),
            coalescer: UpdateCoalescer::new(),
            applied: SurfaceSizing::MatchParent,
            orientation_from_bounds: false,
        }
    }

    /// Infer orientation from viewport bounds (`height > width`) instead of
    /// the host UI configuration.
    pub fn orientation_from_bounds(mut self, enabled: bool) -> Self {
        self.orientation_from_bounds = enabled;
        self
    }

    /// Attach a host and enable its video track. Returns the previously
    /// attached host, if any.
    pub fn attach(&mut self, mut host: H) -> Option<H> {
        host.set_video_track_enabled(true);
        let previous = self.host.replace(host);
        self.coalescer.reset();
        previous
    }

    /// Detach the current host, cancelling any pending recomputation and
    /// disabling the video track. Ownership of the host returns to the
    /// caller.
    pub fn detach(&mut self) -> Option<H> {
        self.coalescer.reset();
        let mut host = self.host.take()?;
        host.set_video_track_enabled(false);
        self.applied = SurfaceSizing::MatchParent;
        Some(host)
    }

    /// Detach and reset all geometry state to defaults.
    pub fn release(&mut self) {
        self.detach();
        self.geometry.reset();
        self.policy = ScalePolicy::default();
    }

    /// Whether a host is currently attached.
    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// The accumulated video geometry.
    pub fn geometry(&self) -> &VideoGeometry {
        &self.geometry
    }

    /// The active scale policy.
    pub fn scale_policy(&self) -> ScalePolicy {
        self.policy
    }

    /// Set the scale policy and recompute synchronously, superseding any
    /// pending debounced recomputation.
    pub fn set_scale_policy(&mut self, policy: ScalePolicy) -> Result<(), LayoutError> {
        self.policy = policy;
        self.coalescer.cancel();
        self.recompute()
    }

    /// Merge a geometry notification.
    ///
    /// Returns a ticket to post to the event loop's next idle slot when the
    /// notification actually changed state, `None` otherwise.
    #[must_use]
    pub fn on_geometry_changed(&mut self, update: GeometryUpdate) -> Option<LayoutTicket> {
        if !self.geometry.merge(update) {
            return None;
        }
        Some(self.coalescer.geometry_changed())
    }

    /// React to a viewport layout change.
    ///
    /// Reads the current bounds from the host; returns a ticket only when
    /// an edge actually moved since the last notification.
    #[must_use]
    pub fn on_viewport_changed(&mut self) -> Option<LayoutTicket> {
        let viewport = self.host.as_ref()?.viewport()?;
        self.coalescer.bounds_changed(viewport.bounds)
    }

    /// Redeem a ticket issued by a debounced entry point.
    ///
    /// Stale tickets (superseded, cancelled, or fired after detach) are
    /// dropped silently — they must never act on torn-down state.
    pub fn redeem(&mut self, ticket: LayoutTicket) -> Result<(), LayoutError> {
        if !self.coalescer.redeem(ticket) {
            debug!("dropping stale layout ticket");
            return Ok(());
        }
        if self.host.is_none() {
            debug!("layout ticket fired after detach");
            return Ok(());
        }
        self.recompute()
    }

    /// Run a layout pass against the current state and apply the result.
    fn recompute(&mut self) -> Result<(), LayoutError> {
        let host = self.host.as_mut().ok_or(LayoutError::Detached)?;
        let Some(viewport) = host.viewport() else {
            debug!("no active viewport, skipping layout");
            return Ok(());
        };

        let size = viewport.bounds.size();
        if size.is_empty() {
            error!("invalid surface size {}x{}", size.width, size.height);
            return Err(LayoutError::EmptyViewport);
        }
        host.set_window_size(size);

        let considered_portrait = if self.orientation_from_bounds {
            size.height > size.width
        } else {
            viewport.is_portrait
        };
        let display = DisplayFrame::new(
            size.width,
            size.height,
            viewport.is_primary && considered_portrait,
        );

        let track = host.video_track();
        let layout = solver::solve(
            &self.geometry,
            display,
            self.policy,
            viewport.native_size,
            track.as_ref(),
            self.applied,
        )?;

        match layout {
            SurfaceLayout::FillViewport { placement } => {
                if let Some(p) = placement {
                    host.set_aspect_ratio_hint(p.aspect_ratio);
                    host.set_scale_hint(p.scale);
                }
                host.set_surface_size(SurfaceSizing::MatchParent);
                host.set_container_size(SurfaceSizing::MatchParent);
                self.applied = SurfaceSizing::MatchParent;
            }
            SurfaceLayout::Sized { size, placement } => {
                if let Some(p) = placement {
                    host.set_aspect_ratio_hint(p.aspect_ratio);
                    host.set_scale_hint(p.scale);
                }
                host.set_surface_size(SurfaceSizing::Exact(size));
                host.request_redraw();
                self.applied = SurfaceSizing::Exact(size);
            }
        }
        Ok(())
    }
}

impl<H: SurfaceHost> Default for SurfaceLayoutController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for SurfaceLayoutController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceLayoutController")
            .field("attached", &self.host.is_some())
            .field("geometry", &self.geometry)
            .field("policy", &self.policy)
            .field("applied", &self.applied)
            .finish()
    }
}
