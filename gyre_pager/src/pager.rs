// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circular pager controller and its scroll-phase machine.

use gyre_ring::SlotRing;

use crate::{PageSource, PagerHooks, ScrollSurface, VisiblePages, resolve_visible};

/// Interaction phase of the scroll gesture currently in flight.
///
/// A gesture is the only in-flight operation a pager has; it is abandoned
/// implicitly when a new drag begins before the previous one settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// No gesture in flight.
    #[default]
    Idle,
    /// The user is actively dragging.
    Dragging,
    /// The drag was released and the surface is coasting to rest.
    Decelerating,
}

/// Controller for a paged, infinitely wrapping scroll strip.
///
/// The pager owns only the page/slot mapping and the scroll phase. The
/// surface, content source, and event sink stay with the host and are
/// borrowed per call, so the pager imposes no lifetime on any of them.
///
/// The host wires its toolkit's scroll callbacks to the notification entry
/// points ([`scrolled`](Self::scrolled), [`drag_began`](Self::drag_began),
/// [`deceleration_began`](Self::deceleration_began),
/// [`deceleration_ended`](Self::deceleration_ended)) and uses the public
/// operations ([`reload`](Self::reload), [`move_to_page`](Self::move_to_page),
/// [`visible_pages`](Self::visible_pages), [`current_page`](Self::current_page))
/// from its own code. Everything runs on the host's event thread; ordering is
/// call order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularPager {
    ring: SlotRing,
    phase: ScrollPhase,
}

impl CircularPager {
    /// Creates a pager with no pages; call [`reload`](Self::reload) to load
    /// content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The page/slot mapping in effect since the last reload.
    #[must_use]
    pub const fn ring(&self) -> &SlotRing {
        &self.ring
    }

    /// Number of logical pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.ring.page_count()
    }

    /// Current phase of the gesture state machine.
    #[must_use]
    pub const fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Refreshes the page count from `source` and rebuilds `surface`.
    ///
    /// When `move_to` names a valid page the surface is re-anchored there
    /// without animation; an invalid request is ignored (no forced move).
    /// Without a request the pager re-anchors to the page that was current
    /// before the reload, best-effort.
    pub fn reload<P, S>(&mut self, source: &P, surface: &mut S, move_to: Option<usize>)
    where
        P: PageSource + ?Sized,
        S: ScrollSurface + ?Sized,
    {
        self.ring.set_page_count(source.page_count());
        surface.rebuild(self.ring.slot_count());

        if let Some(page) = move_to {
            let _ = self.move_to_page(surface, page, false);
        } else if let Some(current) = self.current_page(surface) {
            let _ = self.move_to_page(surface, current, false);
        }
    }

    /// Scrolls to the logical page at `page`.
    ///
    /// Returns `false` without touching any state when `page` is out of
    /// range. Otherwise issues the slot-level scroll command and returns
    /// `true`; page-change events arrive later through the scroll
    /// notifications, not from this call.
    pub fn move_to_page<S>(&self, surface: &mut S, page: usize, animated: bool) -> bool
    where
        S: ScrollSurface + ?Sized,
    {
        if page >= self.ring.page_count() {
            return false;
        }
        surface.scroll_to_slot(self.ring.slot_of_page(page), animated);
        true
    }

    /// The visible logical pages, dominant page first. See
    /// [`resolve_visible`].
    #[must_use]
    pub fn visible_pages<S>(&self, surface: &S) -> VisiblePages
    where
        S: ScrollSurface + ?Sized,
    {
        resolve_visible(&self.ring, surface)
    }

    /// The dominant visible page, or `None` when there are no pages.
    #[must_use]
    pub fn current_page<S>(&self, surface: &S) -> Option<usize>
    where
        S: ScrollSurface + ?Sized,
    {
        self.visible_pages(surface).first().copied()
    }

    /// Content for the physical slot at `slot`, resolved through the sentinel
    /// mapping.
    ///
    /// Hosts call this when realizing a slot, so sentinel slots render the
    /// opposite end's real page. Returns `None` when there are no pages.
    pub fn content_for_slot<P>(&self, source: &P, slot: usize) -> Option<P::Handle>
    where
        P: PageSource + ?Sized,
    {
        if self.ring.slot_count() == 0 {
            return None;
        }
        Some(source.page(self.ring.page_of_slot(slot)))
    }

    /// Notification: the surface's offset changed.
    ///
    /// Re-anchors the offset first if it entered a sentinel region, so no
    /// observer ever sees an out-of-range position, then reports the
    /// (corrected) offset. While the surface is not decelerating and exactly
    /// two pages are visible, also reports the scroll direction — a plain
    /// comparison of logical indices, so the wrap seam reads as backward (see
    /// the crate docs).
    pub fn scrolled<S, H>(&mut self, surface: &mut S, hooks: &mut H)
    where
        S: ScrollSurface + ?Sized,
        H: PagerHooks + ?Sized,
    {
        if let Some(corrected) = self.ring.reanchor(surface.offset(), surface.page_extent()) {
            // Part of the same logical update; `set_offset` must not notify.
            surface.set_offset(corrected);
        }
        hooks.did_scroll(surface.offset());

        if self.phase != ScrollPhase::Decelerating {
            if let [from, to] = self.visible_pages(surface)[..] {
                hooks.will_move(to > from, from);
            }
        }
    }

    /// Notification: a user drag began.
    pub fn drag_began<S, H>(&mut self, surface: &S, hooks: &mut H)
    where
        S: ScrollSurface + ?Sized,
        H: PagerHooks + ?Sized,
    {
        self.phase = ScrollPhase::Dragging;
        if let Some(page) = self.current_page(surface) {
            hooks.will_scroll_from(page);
        }
    }

    /// Notification: the drag was released and deceleration began.
    pub fn deceleration_began(&mut self) {
        self.phase = ScrollPhase::Decelerating;
    }

    /// Notification: the scroll came to rest.
    pub fn deceleration_ended<S, H>(&mut self, surface: &S, hooks: &mut H)
    where
        S: ScrollSurface + ?Sized,
        H: PagerHooks + ?Sized,
    {
        self.phase = ScrollPhase::Idle;
        if let Some(page) = self.current_page(surface) {
            hooks.did_settle_on(page);
        }
    }
}
