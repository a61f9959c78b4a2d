//! Video geometry state, viewport frames, and track metadata.
//!
//! [`VideoGeometry`] accumulates geometry notifications from the decoder
//! using paired-field merge semantics: width/height, visible-width/height,
//! and SAR num/den each replace as a pair, and a zero pair is ignored rather
//! than applied. Only the all-zero tuple resets everything.

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Viewport edges as delivered by layout-change notifications.
///
/// Kept as edges rather than a size: a pure translation (same size,
/// different position) still counts as a change and must reschedule layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Create bounds from edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds of a `width`×`height` viewport anchored at the origin.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        }
    }

    /// Viewport size. Inverted edges clamp to zero.
    pub fn size(self) -> Size {
        let w = (self.right - self.left).max(0) as u32;
        let h = (self.bottom - self.top).max(0) as u32;
        Size::new(w, h)
    }
}

/// One geometry notification from the decoder/renderer.
///
/// The all-zero tuple means "reset to unknown". In any other tuple, a zero
/// pair means "no update for this pair".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GeometryUpdate {
    pub frame_width: u32,
    pub frame_height: u32,
    pub visible_width: u32,
    pub visible_height: u32,
    pub sar_num: u32,
    pub sar_den: u32,
}

impl GeometryUpdate {
    /// Create an update from the raw six-field tuple.
    pub const fn new(
        frame_width: u32,
        frame_height: u32,
        visible_width: u32,
        visible_height: u32,
        sar_num: u32,
        sar_den: u32,
    ) -> Self {
        Self {
            frame_width,
            frame_height,
            visible_width,
            visible_height,
            sar_num,
            sar_den,
        }
    }

    /// The reset tuple: all six fields zero.
    pub const fn is_reset(self) -> bool {
        self.frame_width == 0
            && self.frame_height == 0
            && self.visible_width == 0
            && self.visible_height == 0
            && self.sar_num == 0
            && self.sar_den == 0
    }
}

/// Current video geometry: decoded frame size, visible crop, sample aspect
/// ratio.
///
/// All-zero until the first geometry notification arrives. Fields update
/// only through [`merge`](Self::merge), which enforces the paired-field
/// rule, so a zero on one field never coexists with a nonzero pair partner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoGeometry {
    pub frame_width: u32,
    pub frame_height: u32,
    pub visible_width: u32,
    pub visible_height: u32,
    pub sar_num: u32,
    pub sar_den: u32,
}

impl VideoGeometry {
    /// Merge a geometry notification. Returns `true` when any field changed.
    ///
    /// The reset tuple zeroes everything. Otherwise each nonzero pair
    /// overwrites its pair and each zero pair is ignored.
    pub fn merge(&mut self, update: GeometryUpdate) -> bool {
        let before = *self;
        if update.is_reset() {
            *self = Self::default();
        } else {
            if update.frame_width != 0 && update.frame_height != 0 {
                self.frame_width = update.frame_width;
                self.frame_height = update.frame_height;
            }
            if update.visible_width != 0 && update.visible_height != 0 {
                self.visible_width = update.visible_width;
                self.visible_height = update.visible_height;
            }
            if update.sar_num != 0 && update.sar_den != 0 {
                self.sar_num = update.sar_num;
                self.sar_den = update.sar_den;
            }
        }
        *self != before
    }

    /// Reset all fields to the unknown state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Decoded frame dimensions. Zero-area when unknown.
    pub const fn frame(&self) -> Size {
        Size::new(self.frame_width, self.frame_height)
    }

    /// Visible (cropped) region dimensions.
    pub const fn visible(&self) -> Size {
        Size::new(self.visible_width, self.visible_height)
    }

    /// Visible width corrected for non-square pixel sampling.
    ///
    /// Equal num/den (including the unset 0/0) means square pixels and the
    /// width passes through unchanged.
    pub fn sar_corrected_visible_width(&self) -> f64 {
        if self.sar_num == self.sar_den {
            f64::from(self.visible_width)
        } else {
            f64::from(self.visible_width) * f64::from(self.sar_num) / f64::from(self.sar_den)
        }
    }
}

/// The viewport rectangle a layout pass works against, with its effective
/// orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayFrame {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Effective orientation, from the host UI configuration or inferred
    /// from bounds.
    pub is_portrait: bool,
}

impl DisplayFrame {
    /// Create a display frame with an explicit orientation.
    pub const fn new(width: u32, height: u32, is_portrait: bool) -> Self {
        Self {
            width,
            height,
            is_portrait,
        }
    }

    /// Create a display frame inferring orientation from the bounds
    /// (`height > width` ⇒ portrait).
    pub const fn with_inferred_orientation(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            is_portrait: height > width,
        }
    }

    /// Whether the viewport has nonzero area. Layout is skipped otherwise.
    pub const fn is_valid(self) -> bool {
        self.width != 0 && self.height != 0
    }
}

/// Orientation tag reported by the video track metadata.
///
/// Names follow the convention "row-order, column-order": `TopLeft` is the
/// normal scan, `LeftBottom` and `RightTop` are the quarter-turn rotations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrackOrientation {
    /// Normal orientation.
    #[default]
    TopLeft,
    /// Flipped horizontally.
    TopRight,
    /// Flipped vertically.
    BottomLeft,
    /// Rotated 180 degrees.
    BottomRight,
    /// Transposed.
    LeftTop,
    /// Rotated 90 degrees clockwise.
    LeftBottom,
    /// Rotated 90 degrees counter-clockwise.
    RightTop,
    /// Anti-transposed.
    RightBottom,
}

impl TrackOrientation {
    /// Whether placement math must swap width and height.
    ///
    /// Only the pure quarter-turn rotations swap. The transposed variants
    /// (`LeftTop`, `RightBottom`) do not, matching renderer behavior.
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, Self::LeftBottom | Self::RightTop)
    }
}

/// Metadata for the selected video track, as needed by renderer-side
/// placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VideoTrackInfo {
    /// Track pixel width.
    pub width: u32,
    /// Track pixel height.
    pub height: u32,
    /// Sample aspect ratio numerator.
    pub sar_num: u32,
    /// Sample aspect ratio denominator.
    pub sar_den: u32,
    /// Orientation tag from the container/codec.
    pub orientation: TrackOrientation,
}

impl VideoTrackInfo {
    /// Track dimensions with quarter-turn orientation applied.
    pub const fn oriented_dimensions(&self) -> (u32, u32) {
        if self.orientation.swaps_dimensions() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}
