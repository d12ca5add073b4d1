// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving which logical pages are visible, dominant page first.

use gyre_ring::SlotRing;
use smallvec::SmallVec;

use crate::ScrollSurface;

/// The set of visible logical pages; at most two entries in steady use.
pub type VisiblePages = SmallVec<[usize; 2]>;

/// Computes the logical pages visible on `surface`, dominant page first.
///
/// Every physical slot whose rectangle has a positive intersection area with
/// the viewport contributes its logical page. The entry with the largest
/// intersection area — the *dominant* page — is moved to the front; the
/// relative order of the others is preserved. Under equal areas the
/// first-encountered slot wins (slots are scanned from 0 upward), so the
/// result is deterministic.
///
/// A single-page strip has no sentinels and reports `[0]` unconditionally; an
/// empty strip reports nothing.
#[must_use]
pub fn resolve_visible<S: ScrollSurface + ?Sized>(ring: &SlotRing, surface: &S) -> VisiblePages {
    let mut pages = VisiblePages::new();
    match ring.page_count() {
        0 => return pages,
        1 => {
            pages.push(0);
            return pages;
        }
        _ => {}
    }

    let viewport = surface.viewport_rect();
    let mut max_area = 0.0_f64;
    let mut dominant = None;
    for slot in 0..ring.slot_count() {
        let overlap = surface.slot_rect(slot).intersect(viewport);
        let area = overlap.width().max(0.0) * overlap.height().max(0.0);
        if area > 0.0 {
            pages.push(ring.page_of_slot(slot));
            // Strict comparison: the first slot keeps dominance on ties.
            if area > max_area {
                max_area = area;
                dominant = Some(pages.len() - 1);
            }
        }
    }

    if let Some(index) = dominant {
        if index > 0 {
            let page = pages.remove(index);
            pages.insert(0, page);
        }
    }
    pages
}

#[cfg(test)]
mod tests {
    use gyre_ring::SlotRing;

    use super::resolve_visible;
    use crate::{Axis, FixedSurface, ScrollSurface};

    fn surface_for(ring: &SlotRing, offset: f64) -> FixedSurface {
        let mut surface = FixedSurface::new(Axis::Horizontal, 100.0, 50.0);
        surface.rebuild(ring.slot_count());
        surface.set_offset(offset);
        surface
    }

    #[test]
    fn empty_and_single_page_strips() {
        let empty = SlotRing::new(0);
        assert!(resolve_visible(&empty, &surface_for(&empty, 0.0)).is_empty());

        // One page: no sentinels, page 0 regardless of geometry.
        let single = SlotRing::new(1);
        let visible = resolve_visible(&single, &surface_for(&single, 0.0));
        assert_eq!(visible.as_slice(), [0]);
    }

    #[test]
    fn aligned_offset_sees_one_page() {
        let ring = SlotRing::new(6);
        // Exactly on slot 1, the first real slot: only page 0 has area.
        let visible = resolve_visible(&ring, &surface_for(&ring, 100.0));
        assert_eq!(visible.as_slice(), [0]);
    }

    #[test]
    fn dominant_page_comes_first() {
        let ring = SlotRing::new(6);
        // Viewport [130, 230): slot 1 (page 0) overlaps 70 units of 50-high
        // content, slot 2 (page 1) overlaps 30. Page 0 dominates.
        let visible = resolve_visible(&ring, &surface_for(&ring, 130.0));
        assert_eq!(visible.as_slice(), [0, 1]);

        // Viewport [170, 270): the areas flip, page 1 dominates, and the
        // non-dominant page keeps its scan position behind it.
        let visible = resolve_visible(&ring, &surface_for(&ring, 170.0));
        assert_eq!(visible.as_slice(), [1, 0]);
    }

    #[test]
    fn equal_areas_favor_the_earlier_slot() {
        let ring = SlotRing::new(6);
        // Split exactly in half between slots 1 and 2.
        let visible = resolve_visible(&ring, &surface_for(&ring, 150.0));
        assert_eq!(visible.as_slice(), [0, 1]);
    }

    #[test]
    fn sentinel_slots_resolve_to_their_real_pages() {
        let ring = SlotRing::new(6);
        // Straddling slot 0 (the leading sentinel) and slot 1: the sentinel
        // shows the last page, dominant here.
        let visible = resolve_visible(&ring, &surface_for(&ring, 40.0));
        assert_eq!(visible.as_slice(), [5, 0]);

        // Straddling slot 6 and slot 7 (the trailing sentinel, page 0):
        // the sentinel holds more area, so page 0 is reordered to the front.
        let visible = resolve_visible(&ring, &surface_for(&ring, 660.0));
        assert_eq!(visible.as_slice(), [0, 5]);
    }
}
