// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between logical page indices and padded physical slot indices.

/// A finite strip of logical pages padded with sentinel slots for wrapping.
///
/// The ring only stores the page count; all mappings are derived. With more
/// than one page the physical strip gains a sentinel slot on each end, so
/// `slot_count() == page_count() + 2`. With zero or one pages there is
/// nothing to wrap and the mapping is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotRing {
    pages: usize,
}

impl SlotRing {
    /// Creates a ring over `pages` logical pages.
    #[must_use]
    pub const fn new(pages: usize) -> Self {
        Self { pages }
    }

    /// Number of logical pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.pages
    }

    /// Sets the number of logical pages (typically after a data reload).
    pub fn set_page_count(&mut self, pages: usize) {
        self.pages = pages;
    }

    /// Returns `true` if the strip wraps, i.e. sentinel slots exist.
    #[must_use]
    pub const fn wraps(&self) -> bool {
        self.pages > 1
    }

    /// Number of physical slots, including sentinels.
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        match self.pages {
            0 | 1 => self.pages,
            n => n + 2,
        }
    }

    /// Maps a physical slot to the logical page it displays.
    ///
    /// Total over `0..slot_count()`: slot `0` shows the last page, the
    /// trailing slot shows page `0`, and every slot in between is shifted by
    /// one. Out-of-range slots are debug-asserted and treated as the trailing
    /// sentinel.
    #[must_use]
    pub fn page_of_slot(&self, slot: usize) -> usize {
        debug_assert!(
            slot < self.slot_count(),
            "slot {slot} out of range for {} slots",
            self.slot_count()
        );
        if !self.wraps() {
            return slot;
        }
        if slot == 0 {
            self.pages - 1
        } else if slot >= self.slot_count() - 1 {
            0
        } else {
            slot - 1
        }
    }

    /// Maps a logical page to the physical slot that displays it.
    ///
    /// Inverse of [`page_of_slot`](Self::page_of_slot) over the real (non
    /// sentinel) slots. Callers are expected to reject out-of-range pages
    /// before mapping; see the navigation handler in `gyre_pager`.
    #[must_use]
    pub const fn slot_of_page(&self, page: usize) -> usize {
        if self.wraps() { page + 1 } else { page }
    }
}
