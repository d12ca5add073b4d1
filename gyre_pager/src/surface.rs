// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The abstract paged scroll surface the pager drives.

use kurbo::Rect;

/// The scroll axis of a paged surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Pages are laid out left to right; the offset is an x coordinate.
    #[default]
    Horizontal,
    /// Pages are laid out top to bottom; the offset is a y coordinate.
    Vertical,
}

/// Capability contract for the host toolkit's paged scroll container.
///
/// The surface owns the authoritative scroll offset and the slot geometry;
/// the pager reads and rewrites the offset and issues slot-level scroll
/// commands. Implementations lay physical slots out as a dense strip of
/// uniform `page_extent()`-sized cells along [`axis`](Self::axis), starting
/// at offset zero.
///
/// Notifications flow the other way: the host forwards its toolkit's scroll
/// callbacks to [`CircularPager::scrolled`](crate::CircularPager::scrolled)
/// and friends. [`set_offset`](Self::set_offset) is used for the silent
/// re-anchor correction and must behave as a plain state write: no animation,
/// and no re-entrant scroll notification, so the correction stays part of the
/// update that triggered it.
pub trait ScrollSurface {
    /// The axis pages are laid out along.
    fn axis(&self) -> Axis;

    /// Current scroll offset along the axis.
    fn offset(&self) -> f64;

    /// Rewrites the scroll offset. Plain write: no animation, no
    /// notification.
    fn set_offset(&mut self, offset: f64);

    /// Extent of one page (and of the viewport) along the axis.
    fn page_extent(&self) -> f64;

    /// Extent of the viewport perpendicular to the axis.
    fn cross_extent(&self) -> f64;

    /// Scrolls so the given physical slot is at the viewport origin,
    /// optionally animated.
    fn scroll_to_slot(&mut self, slot: usize, animated: bool);

    /// Re-renders the surface for a new physical slot count, after the page
    /// data changed.
    fn rebuild(&mut self, slot_count: usize);

    /// The viewport rectangle in content coordinates.
    ///
    /// Derived from the axis, offset, and extents; override only if the
    /// surface's layout differs from a plain uniform strip.
    fn viewport_rect(&self) -> Rect {
        let start = self.offset();
        match self.axis() {
            Axis::Horizontal => {
                Rect::new(start, 0.0, start + self.page_extent(), self.cross_extent())
            }
            Axis::Vertical => {
                Rect::new(0.0, start, self.cross_extent(), start + self.page_extent())
            }
        }
    }

    /// The rendered rectangle of a physical slot in content coordinates.
    fn slot_rect(&self, slot: usize) -> Rect {
        let start = slot as f64 * self.page_extent();
        match self.axis() {
            Axis::Horizontal => {
                Rect::new(start, 0.0, start + self.page_extent(), self.cross_extent())
            }
            Axis::Vertical => {
                Rect::new(0.0, start, self.cross_extent(), start + self.page_extent())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{Axis, ScrollSurface};
    use crate::FixedSurface;

    #[test]
    fn horizontal_rects_follow_the_offset() {
        let mut surface = FixedSurface::new(Axis::Horizontal, 100.0, 50.0);
        surface.rebuild(4);
        surface.set_offset(130.0);

        assert_eq!(surface.viewport_rect(), Rect::new(130.0, 0.0, 230.0, 50.0));
        assert_eq!(surface.slot_rect(2), Rect::new(200.0, 0.0, 300.0, 50.0));
    }

    #[test]
    fn vertical_rects_swap_the_axes() {
        let mut surface = FixedSurface::new(Axis::Vertical, 100.0, 50.0);
        surface.rebuild(4);
        surface.set_offset(130.0);

        assert_eq!(surface.viewport_rect(), Rect::new(0.0, 130.0, 50.0, 230.0));
        assert_eq!(surface.slot_rect(2), Rect::new(0.0, 200.0, 50.0, 300.0));
    }
}
