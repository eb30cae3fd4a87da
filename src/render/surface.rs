//! Drawing surface abstraction.
//!
//! The renderer never touches pixels itself; it issues filled and stroked
//! paths to a [`Surface`], which a host backs with whatever 2D canvas it
//! has (an HTML canvas context, Cairo, a raster buffer, ...). The contract
//! mirrors the familiar immediate-mode canvas model:
//!
//! - Coordinates are pixels with the origin at the top left.
//! - A path is accumulated between [`begin_path`](Surface::begin_path) and
//!   a [`fill`](Surface::fill) or [`stroke`](Surface::stroke), which paint
//!   with the most recently set fill or stroke state.
//! - The renderer clobbers fill color, stroke color, line width, and the
//!   current path on every frame; callers must not rely on pen state
//!   surviving a render call. Line caps, joins, and miter limits are left
//!   to the host and set once.
//!
//! Implementations are free to ignore calls (see the recording surface for
//! a test-friendly one that keeps them all).

use crate::color::Rgb;

/// An abstract 2D sink for the renderer's draw calls.
pub trait Surface {
    /// Sets the color used by subsequent `fill` and `fill_rect` calls.
    fn set_fill_color(&mut self, color: Rgb);

    /// Sets the color used by subsequent `stroke` calls.
    fn set_stroke_color(&mut self, color: Rgb);

    /// Sets the width used by subsequent `stroke` calls, in pixels.
    fn set_line_width(&mut self, width: f64);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extends the current subpath with a straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Closes the current subpath back to its starting point.
    fn close_path(&mut self);

    /// Appends a circular arc centered at `(cx, cy)`; `start` and `end` are
    /// angles in radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    /// Appends an axis-aligned rectangle subpath.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fills the current path with the current fill color.
    fn fill(&mut self);

    /// Strokes the current path with the current stroke color and width.
    fn stroke(&mut self);

    /// Fills an axis-aligned rectangle directly, without touching the
    /// current path.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}
