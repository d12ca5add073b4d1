// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A concrete [`ScrollSurface`] with uniform, in-memory geometry.

use crate::{Axis, ScrollSurface};

/// A [`ScrollSurface`] over a plain uniform strip, held entirely in memory.
///
/// Useful as-is for hosts whose layout really is a dense strip of equal
/// pages, and as a stand-in surface in tests and examples. Scroll commands
/// take effect immediately; the `animated` flag is recorded but a jump is
/// performed either way (a toolkit-backed surface would tween instead).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSurface {
    axis: Axis,
    page_extent: f64,
    cross_extent: f64,
    slot_count: usize,
    offset: f64,
    last_command: Option<(usize, bool)>,
}

impl FixedSurface {
    /// Creates a surface with the given axis and per-page geometry, no slots,
    /// and a zero offset.
    #[must_use]
    pub const fn new(axis: Axis, page_extent: f64, cross_extent: f64) -> Self {
        Self {
            axis,
            page_extent,
            cross_extent,
            slot_count: 0,
            offset: 0.0,
            last_command: None,
        }
    }

    /// Number of physical slots laid out by the last [`rebuild`](ScrollSurface::rebuild).
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// The last `scroll_to_slot` command received, as `(slot, animated)`.
    #[must_use]
    pub const fn last_command(&self) -> Option<(usize, bool)> {
        self.last_command
    }
}

impl ScrollSurface for FixedSurface {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn page_extent(&self) -> f64 {
        self.page_extent
    }

    fn cross_extent(&self) -> f64 {
        self.cross_extent
    }

    fn scroll_to_slot(&mut self, slot: usize, animated: bool) {
        self.offset = slot as f64 * self.page_extent;
        self.last_command = Some((slot, animated));
    }

    fn rebuild(&mut self, slot_count: usize) {
        self.slot_count = slot_count;
    }
}

#[cfg(test)]
mod tests {
    use super::FixedSurface;
    use crate::{Axis, ScrollSurface};

    #[test]
    fn scroll_commands_jump_and_are_recorded() {
        let mut surface = FixedSurface::new(Axis::Horizontal, 100.0, 50.0);
        surface.rebuild(8);
        assert_eq!(surface.slot_count(), 8);

        surface.scroll_to_slot(3, true);
        assert_eq!(surface.offset(), 300.0);
        assert_eq!(surface.last_command(), Some((3, true)));
    }
}
