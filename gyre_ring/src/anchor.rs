// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Silent offset correction when the scroll position enters a sentinel.

use crate::SlotRing;

impl SlotRing {
    /// Computes the re-anchored offset for a raw scroll position, if any.
    ///
    /// `offset` is the scroll position along the paging axis and
    /// `page_extent` the uniform size of one slot along that axis. Both live
    /// in the same coordinate space.
    ///
    /// Returns `Some(corrected)` when the offset has entered (or passed) a
    /// sentinel region and must be rewritten to the equivalent real region:
    ///
    /// - at or beyond the trailing sentinel (`offset >= page_extent *
    ///   (page_count + 1)`), the corrected offset is the start of the first
    ///   real slot — the strip wraps to the front;
    /// - at or before the leading sentinel (`offset <= 0`), the corrected
    ///   offset is the start of the last real slot — the strip wraps to the
    ///   back.
    ///
    /// Returns `None` for in-range offsets, for non-wrapping rings (zero or
    /// one pages), and for degenerate extents. Corrected offsets are always
    /// strictly inside the sentinel bounds, so applying `reanchor` to its own
    /// output yields `None`: corrections never oscillate.
    ///
    /// Callers must apply the correction as a plain, non-animated offset
    /// write within the same scroll notification, before any observer sees
    /// the raw value.
    #[must_use]
    pub fn reanchor(&self, offset: f64, page_extent: f64) -> Option<f64> {
        if !self.wraps() || page_extent <= 0.0 {
            return None;
        }
        let pages = self.page_count() as f64;
        if offset >= page_extent * (pages + 1.0) {
            // Into the trailing sentinel: wrap to the first real slot.
            Some(page_extent)
        } else if offset <= 0.0 {
            // Into the leading sentinel: wrap to the last real slot.
            Some(page_extent * pages)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::SlotRing;

    #[test]
    fn trailing_sentinel_wraps_to_front() {
        // Six 100-unit pages: the trailing sentinel starts at 700.
        let ring = SlotRing::new(6);
        assert_eq!(ring.reanchor(800.0, 100.0), Some(100.0));
        assert_eq!(ring.reanchor(700.0, 100.0), Some(100.0));
    }

    #[test]
    fn leading_sentinel_wraps_to_back() {
        let ring = SlotRing::new(6);
        assert_eq!(ring.reanchor(-5.0, 100.0), Some(600.0));
        assert_eq!(ring.reanchor(0.0, 100.0), Some(600.0));
    }

    #[test]
    fn in_range_offsets_are_untouched() {
        let ring = SlotRing::new(6);
        assert_eq!(ring.reanchor(0.5, 100.0), None);
        assert_eq!(ring.reanchor(350.0, 100.0), None);
        assert_eq!(ring.reanchor(699.9, 100.0), None);
    }

    #[test]
    fn corrections_are_idempotent() {
        let ring = SlotRing::new(6);
        for raw in [-250.0, -5.0, 0.0, 700.0, 800.0, 12_345.0] {
            let corrected = ring.reanchor(raw, 100.0).expect("sentinel offset");
            assert_eq!(
                ring.reanchor(corrected, 100.0),
                None,
                "corrected offset {corrected} must not be corrected again"
            );
        }
    }

    #[test]
    fn non_wrapping_rings_never_reanchor() {
        assert_eq!(SlotRing::new(0).reanchor(-10.0, 100.0), None);
        assert_eq!(SlotRing::new(1).reanchor(500.0, 100.0), None);
    }

    #[test]
    fn degenerate_extent_never_reanchors() {
        let ring = SlotRing::new(6);
        assert_eq!(ring.reanchor(100.0, 0.0), None);
        assert_eq!(ring.reanchor(100.0, -1.0), None);
    }
}
