//! Scale policies and the pure surface layout solver.
//!
//! [`solve`] maps current video geometry, a viewport, and the active
//! [`ScalePolicy`] to a target surface sizing plus an optional renderer
//! placement hint. No side effects — the controller applies the result.
//!
//! Two sizing paths exist, and the renderer's output path decides which is
//! authoritative at a given moment:
//!
//! - **View-system path** — [`SurfaceLayout::Sized`] carries explicit pixel
//!   dimensions; the surface's own size dictates scaling.
//! - **Renderer path** — [`SurfaceLayout::FillViewport`] stretches the
//!   surface over the whole viewport and a [`RendererPlacement`] (aspect
//!   ratio string or numeric scale) drives the renderer's own scaler. Used
//!   when frame dimensions are unknown or a native-size presentation mode
//!   (e.g. picture-in-picture) is active.

use core::fmt;

use thiserror::Error;

use crate::geometry::{DisplayFrame, Size, VideoGeometry, VideoTrackInfo};

/// `f64::ceil` is not available in `core`; route through num-traits (libm).
fn ceil(v: f64) -> f64 {
    num_traits::Float::ceil(v)
}

/// An aspect ratio as a numerator/denominator pair.
///
/// `Display` renders the renderer hint form, e.g. `"16:9"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub num: u32,
    pub den: u32,
}

impl Ratio {
    /// Create a ratio.
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// The ratio as a float.
    pub fn value(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

/// The closed set of named aspect ratios selectable as a fixed target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedRatio {
    /// 16:9 widescreen.
    R16x9,
    /// 16:10.
    R16x10,
    /// 2.21:1 (70mm).
    R221x100,
    /// 2.35:1 (CinemaScope).
    R235x100,
    /// 2.39:1 (modern anamorphic).
    R239x100,
    /// 5:4.
    R5x4,
    /// 4:3.
    R4x3,
}

impl NamedRatio {
    /// The underlying numerator/denominator pair.
    pub const fn ratio(self) -> Ratio {
        match self {
            Self::R16x9 => Ratio::new(16, 9),
            Self::R16x10 => Ratio::new(16, 10),
            Self::R221x100 => Ratio::new(221, 100),
            Self::R235x100 => Ratio::new(235, 100),
            Self::R239x100 => Ratio::new(239, 100),
            Self::R5x4 => Ratio::new(5, 4),
            Self::R4x3 => Ratio::new(4, 3),
        }
    }

    /// The ratio as a float.
    pub fn value(self) -> f64 {
        self.ratio().value()
    }
}

/// How to map the video aspect ratio onto the viewport.
///
/// Exactly one policy is active at a time; switching always triggers
/// recomputation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ScalePolicy {
    /// Preserve aspect ratio, shrink to fit inside the viewport.
    /// May letterbox, never crops.
    #[default]
    BestFit,
    /// Preserve aspect ratio, grow to fill the viewport on the dominant
    /// axis. May crop the other axis.
    FitScreen,
    /// Stretch to exactly fill the viewport, ignoring aspect ratio.
    Fill,
    /// Render at native visible pixel size, ignoring the viewport.
    Original,
    /// Apply one of the named ratios as a constant target.
    FixedRatio(NamedRatio),
    /// Best-fit geometry scaled by a custom factor; the renderer receives
    /// the factor directly when it owns placement. Overrides ratio logic.
    Custom(f32),
}

/// Scale/aspect hint for a renderer that does its own placement.
///
/// `scale == 0.0` means "auto": the renderer derives scaling from the
/// surface's pixel dimensions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RendererPlacement {
    /// Target aspect ratio, sent as its `"num:den"` string form.
    /// `None` clears any previously set ratio.
    pub aspect_ratio: Option<Ratio>,
    /// Multiplicative scale factor, `0.0` for auto.
    pub scale: f32,
}

impl RendererPlacement {
    /// No ratio, automatic scale. Clears prior renderer-side placement so
    /// surface dimensions take precedence.
    pub const AUTO: Self = Self {
        aspect_ratio: None,
        scale: 0.0,
    };
}

/// Sizing applied to a platform view: explicit pixels or match-parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceSizing {
    /// Fill the parent container.
    MatchParent,
    /// Explicit pixel dimensions.
    Exact(Size),
}

/// Result of a layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceLayout {
    /// Stretch surface and container over the whole viewport; `placement`
    /// (when present) drives the renderer's own scaler. `None` leaves the
    /// current renderer placement untouched.
    FillViewport {
        placement: Option<RendererPlacement>,
    },
    /// Size the surface to explicit pixel dimensions. `placement` is
    /// [`RendererPlacement::AUTO`] when leaving a fill-viewport state, so
    /// stale renderer hints do not double-scale the video.
    Sized {
        size: Size,
        placement: Option<RendererPlacement>,
    },
}

/// Layout computation error. Every variant is recoverable; the prior
/// layout stays in effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The viewport has zero area.
    #[error("viewport has zero area")]
    EmptyViewport,
    /// No surface host is attached.
    #[error("no surface host attached")]
    Detached,
}

/// Compute the surface layout for the current state.
///
/// `native_size_presentation` forces full-viewport sizing regardless of
/// policy. `track` supplies the metadata renderer-side placement needs for
/// [`FitScreen`](ScalePolicy::FitScreen) and [`Fill`](ScalePolicy::Fill);
/// when it is absent the placement is left unchanged rather than failing.
/// `previous` is the sizing currently applied to the surface view, used to
/// decide whether stale renderer hints must be cleared.
pub fn solve(
    geometry: &VideoGeometry,
    display: DisplayFrame,
    policy: ScalePolicy,
    native_size_presentation: bool,
    track: Option<&VideoTrackInfo>,
    previous: SurfaceSizing,
) -> Result<SurfaceLayout, LayoutError> {
    if !display.is_valid() {
        return Err(LayoutError::EmptyViewport);
    }

    // Unknown frame or visible dimensions, or a native-size presentation:
    // the renderer owns placement and the surface just fills the viewport.
    if geometry.frame().is_empty() || geometry.visible().is_empty() || native_size_presentation {
        return Ok(SurfaceLayout::FillViewport {
            placement: renderer_placement(policy, display, track),
        });
    }

    let (mut dw, mut dh) = (f64::from(display.width), f64::from(display.height));

    // Rotate the display box when its physical orientation disagrees with
    // the effective orientation flag.
    if (display.width > display.height && display.is_portrait)
        || (display.width < display.height && !display.is_portrait)
    {
        (dw, dh) = (dh, dw);
    }

    let vw = geometry.sar_corrected_visible_width();
    let ar = vw / f64::from(geometry.visible_height);

    let (dw, dh) = match policy {
        ScalePolicy::BestFit => shrink_to_ratio(dw, dh, ar),
        ScalePolicy::Custom(factor) => {
            shrink_to_ratio(dw * f64::from(factor), dh * f64::from(factor), ar)
        }
        ScalePolicy::FitScreen => grow_to_ratio(dw, dh, ar),
        ScalePolicy::Fill => (dw, dh),
        ScalePolicy::Original => (vw, f64::from(geometry.visible_height)),
        ScalePolicy::FixedRatio(named) => shrink_to_ratio(dw, dh, named.value()),
    };

    // Rescale the fitted visible-region box back up to full-frame pixels so
    // the surface spans the whole decoded frame even when only a sub-region
    // is visible.
    let size = Size::new(
        ceil(dw * f64::from(geometry.frame_width) / f64::from(geometry.visible_width)) as u32,
        ceil(dh * f64::from(geometry.frame_height) / f64::from(geometry.visible_height)) as u32,
    );

    // Leaving a fill-viewport state: clear renderer-side placement so the
    // explicit surface dimensions take precedence.
    let placement =
        (previous == SurfaceSizing::MatchParent).then_some(RendererPlacement::AUTO);

    Ok(SurfaceLayout::Sized { size, placement })
}

/// Renderer-side placement for the fill-viewport path.
///
/// Returns `None` when the current placement must be left unchanged
/// (missing track metadata for a policy that needs it).
pub fn renderer_placement(
    policy: ScalePolicy,
    display: DisplayFrame,
    track: Option<&VideoTrackInfo>,
) -> Option<RendererPlacement> {
    match policy {
        // Custom overrides all ratio logic.
        ScalePolicy::Custom(factor) => Some(RendererPlacement {
            aspect_ratio: None,
            scale: factor,
        }),
        ScalePolicy::BestFit => Some(RendererPlacement::AUTO),
        ScalePolicy::Original => Some(RendererPlacement {
            aspect_ratio: None,
            scale: 1.0,
        }),
        ScalePolicy::FixedRatio(named) => Some(RendererPlacement {
            aspect_ratio: Some(named.ratio()),
            scale: 0.0,
        }),
        ScalePolicy::FitScreen => {
            let track = track?;
            let (w, h) = track.oriented_dimensions();
            // Integer SAR correction, matching the renderer's own math.
            let w = if track.sar_num != track.sar_den && track.sar_den != 0 {
                (u64::from(w) * u64::from(track.sar_num) / u64::from(track.sar_den)) as u32
            } else {
                w
            };
            if w == 0 || h == 0 {
                return None;
            }
            let ar = w as f32 / h as f32;
            let dar = display.width as f32 / display.height as f32;
            let scale = if dar >= ar {
                display.width as f32 / w as f32
            } else {
                display.height as f32 / h as f32
            };
            Some(RendererPlacement {
                aspect_ratio: None,
                scale,
            })
        }
        ScalePolicy::Fill => {
            let track = track?;
            let ratio = if track.orientation.swaps_dimensions() {
                Ratio::new(display.height, display.width)
            } else {
                Ratio::new(display.width, display.height)
            };
            Some(RendererPlacement {
                aspect_ratio: Some(ratio),
                scale: 0.0,
            })
        }
    }
}

/// Hold one axis, shrink the other so the box matches `ar` (letterbox fit).
fn shrink_to_ratio(dw: f64, dh: f64, ar: f64) -> (f64, f64) {
    if dw / dh < ar {
        (dw, dw / ar)
    } else {
        (dh * ar, dh)
    }
}

/// Hold one axis, grow the other so the box covers `ar` (crop fit).
fn grow_to_ratio(dw: f64, dh: f64, ar: f64) -> (f64, f64) {
    if dw / dh >= ar {
        (dw, dw / ar)
    } else {
        (dh * ar, dh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryUpdate, TrackOrientation};

    fn geometry(fw: u32, fh: u32, vw: u32, vh: u32, sn: u32, sd: u32) -> VideoGeometry {
        let mut g = VideoGeometry::default();
        g.merge(GeometryUpdate::new(fw, fh, vw, vh, sn, sd));
        g
    }

    fn full_hd() -> VideoGeometry {
        geometry(1920, 1080, 1920, 1080, 1, 1)
    }

    fn sized(layout: SurfaceLayout) -> Size {
        match layout {
            SurfaceLayout::Sized { size, .. } => size,
            other => panic!("expected Sized, got {other:?}"),
        }
    }

    fn solve_sized(g: &VideoGeometry, display: DisplayFrame, policy: ScalePolicy) -> Size {
        sized(
            solve(g, display, policy, false, None, SurfaceSizing::Exact(Size::new(1, 1))).unwrap(),
        )
    }

    // ── box fitting ─────────────────────────────────────────────────────

    #[test]
    fn best_fit_wide_viewport_shrinks_width() {
        // 16:9 content in a 2:1 viewport: dar >= ar → width shrinks to
        // 500 * 1.778 = 888.9 → ceil 889.
        let display = DisplayFrame::new(1000, 500, false);
        let size = solve_sized(&full_hd(), display, ScalePolicy::BestFit);
        assert_eq!(size, Size::new(889, 500));
    }

    #[test]
    fn best_fit_tall_viewport_shrinks_height() {
        // 16:9 content in a 1:1 viewport: dar < ar → height shrinks to
        // 1000 / (16/9) = 562.5 → ceil 563.
        let display = DisplayFrame::new(1000, 1000, false);
        let size = solve_sized(&full_hd(), display, ScalePolicy::BestFit);
        assert_eq!(size, Size::new(1000, 563));
    }

    #[test]
    fn best_fit_never_exceeds_viewport() {
        let display = DisplayFrame::new(1000, 500, false);
        for g in [
            full_hd(),
            geometry(1280, 720, 1280, 720, 1, 1),
            geometry(640, 480, 640, 480, 1, 1),
            geometry(1080, 1920, 1080, 1920, 1, 1),
        ] {
            let size = solve_sized(&g, display, ScalePolicy::BestFit);
            assert!(size.width <= 1000 && size.height <= 500, "{size:?}");
            assert!(size.width == 1000 || size.height == 500, "{size:?}");
        }
    }

    #[test]
    fn fit_screen_covers_viewport() {
        let display = DisplayFrame::new(1000, 500, false);
        // 16:9 content, 2:1 viewport: dar >= ar → width held, height grows
        // to 1000 / 1.778 = 562.5 → ceil 563 ≥ 500.
        let size = solve_sized(&full_hd(), display, ScalePolicy::FitScreen);
        assert_eq!(size, Size::new(1000, 563));

        // Portrait content: width held, height grows past the viewport.
        let portrait = geometry(1080, 1920, 1080, 1920, 1, 1);
        let size = solve_sized(&portrait, display, ScalePolicy::FitScreen);
        assert_eq!(size.width, 1000);
        assert!(size.height >= 500);
    }

    #[test]
    fn fill_matches_viewport_exactly() {
        let display = DisplayFrame::new(1000, 500, false);
        let size = solve_sized(&full_hd(), display, ScalePolicy::Fill);
        assert_eq!(size, Size::new(1000, 500));

        let odd = geometry(123, 457, 123, 457, 1, 1);
        let size = solve_sized(&odd, display, ScalePolicy::Fill);
        assert_eq!(size, Size::new(1000, 500));
    }

    #[test]
    fn original_ignores_viewport() {
        let g = geometry(1280, 720, 1280, 720, 1, 1);
        for display in [
            DisplayFrame::new(100, 100, false),
            DisplayFrame::new(4000, 2000, false),
        ] {
            let size = solve_sized(&g, display, ScalePolicy::Original);
            assert_eq!(size, Size::new(1280, 720));
        }
    }

    #[test]
    fn original_uses_sar_corrected_width() {
        // 720×576 at SAR 64:45 → 1024×576.
        let g = geometry(720, 576, 720, 576, 64, 45);
        let display = DisplayFrame::new(1920, 1080, false);
        let size = solve_sized(&g, display, ScalePolicy::Original);
        assert_eq!(size, Size::new(1024, 576));
    }

    #[test]
    fn fixed_ratio_overrides_content_ratio() {
        // 4:3 target in a 2:1 viewport: dar >= ar → width shrinks to
        // 500 * 4/3 = 666.7 → ceil 667.
        let display = DisplayFrame::new(1000, 500, false);
        let size = solve_sized(&full_hd(), display, ScalePolicy::FixedRatio(NamedRatio::R4x3));
        assert_eq!(size, Size::new(667, 500));
    }

    #[test]
    fn custom_scales_best_fit_box() {
        // Half-scale custom: the 889×500 best-fit box halves to 445×250.
        let display = DisplayFrame::new(1000, 500, false);
        let size = solve_sized(&full_hd(), display, ScalePolicy::Custom(0.5));
        assert_eq!(size, Size::new(445, 250));
    }

    // ── orientation swap ────────────────────────────────────────────────

    #[test]
    fn landscape_bounds_with_portrait_flag_rotate_the_box() {
        // Physical 1000×500 treated as portrait: the box becomes 500×1000,
        // then best-fit against 16:9 → 500 × ceil(500/1.778) = 500×282.
        let display = DisplayFrame::new(1000, 500, true);
        let size = solve_sized(&full_hd(), display, ScalePolicy::BestFit);
        assert_eq!(size, Size::new(500, 282));
    }

    #[test]
    fn portrait_bounds_without_portrait_flag_rotate_the_box() {
        // The box rotates to 1000×500, then best-fit shrinks width to 889.
        let display = DisplayFrame::new(500, 1000, false);
        let size = solve_sized(&full_hd(), display, ScalePolicy::BestFit);
        assert_eq!(size, Size::new(889, 500));
    }

    #[test]
    fn matching_orientation_keeps_the_box() {
        let display = DisplayFrame::new(500, 1000, true);
        let size = solve_sized(&full_hd(), display, ScalePolicy::BestFit);
        assert_eq!(size, Size::new(500, 282));
    }

    // ── crop rescale ────────────────────────────────────────────────────

    #[test]
    fn surface_spans_full_frame_for_cropped_sources() {
        // 1920×1088 coded frame with a 1920×1080 visible region. The fitted
        // box rescales by 1088/1080 vertically so the full frame is covered.
        let g = geometry(1920, 1088, 1920, 1080, 1, 1);
        let display = DisplayFrame::new(1920, 1080, false);
        let size = solve_sized(&g, display, ScalePolicy::BestFit);
        assert_eq!(size.width, 1920);
        // 1080 * 1088 / 1080 = 1088.
        assert_eq!(size.height, 1088);
    }

    // ── hint clearing ───────────────────────────────────────────────────

    #[test]
    fn leaving_fill_viewport_clears_renderer_placement() {
        let display = DisplayFrame::new(1000, 500, false);
        let layout = solve(
            &full_hd(),
            display,
            ScalePolicy::BestFit,
            false,
            None,
            SurfaceSizing::MatchParent,
        )
        .unwrap();
        match layout {
            SurfaceLayout::Sized { placement, .. } => {
                assert_eq!(placement, Some(RendererPlacement::AUTO));
            }
            other => panic!("expected Sized, got {other:?}"),
        }
    }

    #[test]
    fn steady_sized_state_leaves_placement_alone() {
        let display = DisplayFrame::new(1000, 500, false);
        let layout = solve(
            &full_hd(),
            display,
            ScalePolicy::BestFit,
            false,
            None,
            SurfaceSizing::Exact(Size::new(889, 500)),
        )
        .unwrap();
        match layout {
            SurfaceLayout::Sized { placement, .. } => assert_eq!(placement, None),
            other => panic!("expected Sized, got {other:?}"),
        }
    }

    // ── fill-viewport path ──────────────────────────────────────────────

    #[test]
    fn unknown_geometry_falls_back_to_fill_viewport() {
        let display = DisplayFrame::new(1000, 500, false);
        let layout = solve(
            &VideoGeometry::default(),
            display,
            ScalePolicy::BestFit,
            false,
            None,
            SurfaceSizing::MatchParent,
        )
        .unwrap();
        assert_eq!(
            layout,
            SurfaceLayout::FillViewport {
                placement: Some(RendererPlacement::AUTO)
            }
        );
    }

    #[test]
    fn native_size_presentation_forces_fill_viewport() {
        let display = DisplayFrame::new(1000, 500, false);
        let layout =
            solve(&full_hd(), display, ScalePolicy::BestFit, true, None, SurfaceSizing::MatchParent)
                .unwrap();
        assert!(matches!(layout, SurfaceLayout::FillViewport { .. }));
    }

    #[test]
    fn empty_viewport_is_an_error() {
        let display = DisplayFrame::new(0, 500, false);
        let err = solve(
            &full_hd(),
            display,
            ScalePolicy::BestFit,
            false,
            None,
            SurfaceSizing::MatchParent,
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::EmptyViewport);
    }

    // ── renderer placement ──────────────────────────────────────────────

    fn track(w: u32, h: u32, orientation: TrackOrientation) -> VideoTrackInfo {
        VideoTrackInfo {
            width: w,
            height: h,
            sar_num: 1,
            sar_den: 1,
            orientation,
        }
    }

    #[test]
    fn placement_best_fit_is_auto() {
        let display = DisplayFrame::new(1000, 500, false);
        assert_eq!(
            renderer_placement(ScalePolicy::BestFit, display, None),
            Some(RendererPlacement::AUTO)
        );
    }

    #[test]
    fn placement_original_is_unit_scale() {
        let display = DisplayFrame::new(1000, 500, false);
        let p = renderer_placement(ScalePolicy::Original, display, None).unwrap();
        assert_eq!(p.aspect_ratio, None);
        assert_eq!(p.scale, 1.0);
    }

    #[test]
    fn placement_custom_passes_factor_through() {
        let display = DisplayFrame::new(1000, 500, false);
        let p = renderer_placement(ScalePolicy::Custom(1.5), display, None).unwrap();
        assert_eq!(p.aspect_ratio, None);
        assert_eq!(p.scale, 1.5);
    }

    #[test]
    fn placement_fixed_ratio_sends_literal_ratio() {
        let display = DisplayFrame::new(1000, 500, false);
        let p =
            renderer_placement(ScalePolicy::FixedRatio(NamedRatio::R235x100), display, None)
                .unwrap();
        assert_eq!(p.aspect_ratio, Some(Ratio::new(235, 100)));
        assert_eq!(p.scale, 0.0);
    }

    #[test]
    fn placement_fit_screen_picks_dominant_axis() {
        let display = DisplayFrame::new(2000, 500, false);
        // dar 4.0 ≥ ar 2.0 → horizontal: 2000 / 1000 = 2.
        let t = track(1000, 500, TrackOrientation::TopLeft);
        let p = renderer_placement(ScalePolicy::FitScreen, display, Some(&t)).unwrap();
        assert_eq!(p.scale, 2.0);
        assert_eq!(p.aspect_ratio, None);

        // dar 0.5 < ar 2.0 → vertical: 500 / 500 = 1 on a 1000×500 track
        // in a 500×1000 display.
        let display = DisplayFrame::new(500, 1000, true);
        let p = renderer_placement(ScalePolicy::FitScreen, display, Some(&t)).unwrap();
        assert_eq!(p.scale, 2.0); // 1000 / 500
    }

    #[test]
    fn placement_fit_screen_swaps_rotated_track() {
        // 1920×1080 track rotated a quarter turn behaves as 1080×1920:
        // dar 2.0 ≥ ar 0.5625 → scale = 1000 / 1080.
        let display = DisplayFrame::new(1000, 500, false);
        let t = track(1920, 1080, TrackOrientation::LeftBottom);
        let p = renderer_placement(ScalePolicy::FitScreen, display, Some(&t)).unwrap();
        assert!((p.scale - 1000.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn placement_fit_screen_applies_integer_sar() {
        // 720×576 at SAR 64:45 → 720*64/45 = 1024 wide.
        let display = DisplayFrame::new(1024, 576, false);
        let t = VideoTrackInfo {
            width: 720,
            height: 576,
            sar_num: 64,
            sar_den: 45,
            orientation: TrackOrientation::TopLeft,
        };
        let p = renderer_placement(ScalePolicy::FitScreen, display, Some(&t)).unwrap();
        assert_eq!(p.scale, 1.0);
    }

    #[test]
    fn placement_fill_sends_display_ratio() {
        let display = DisplayFrame::new(1000, 500, false);
        let t = track(1920, 1080, TrackOrientation::TopLeft);
        let p = renderer_placement(ScalePolicy::Fill, display, Some(&t)).unwrap();
        assert_eq!(p.aspect_ratio, Some(Ratio::new(1000, 500)));
        assert_eq!(p.scale, 0.0);
    }

    #[test]
    fn placement_fill_swaps_ratio_for_rotated_track() {
        let display = DisplayFrame::new(1000, 500, false);
        let t = track(1920, 1080, TrackOrientation::RightTop);
        let p = renderer_placement(ScalePolicy::Fill, display, Some(&t)).unwrap();
        assert_eq!(p.aspect_ratio, Some(Ratio::new(500, 1000)));
    }

    #[test]
    fn placement_missing_track_is_a_no_op() {
        let display = DisplayFrame::new(1000, 500, false);
        assert_eq!(renderer_placement(ScalePolicy::FitScreen, display, None), None);
        assert_eq!(renderer_placement(ScalePolicy::Fill, display, None), None);
    }

    // ── ratio formatting ────────────────────────────────────────────────

    #[test]
    fn ratio_display_is_the_hint_string() {
        assert_eq!(NamedRatio::R16x9.ratio().to_string(), "16:9");
        assert_eq!(NamedRatio::R221x100.ratio().to_string(), "221:100");
        assert_eq!(Ratio::new(1000, 500).to_string(), "1000:500");
    }
}
