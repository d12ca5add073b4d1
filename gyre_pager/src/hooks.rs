// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-supplied event sink.

/// Receives scroll and page-change notifications from a pager.
///
/// Every method has an empty default body, so a sink implements only the
/// notifications it cares about. Like [`PageSource`](crate::PageSource), the
/// sink is borrowed per call and never stored; `()` implements the trait for
/// hosts that want no notifications at all.
///
/// All indices are logical page indices.
pub trait PagerHooks {
    /// A user-initiated scroll is starting from `page`.
    fn will_scroll_from(&mut self, page: usize) {
        let _ = page;
    }

    /// The scroll is moving between two visible pages, away from `from_page`.
    ///
    /// `forward` is a plain comparison of the two visible logical indices, so
    /// motion across the wrap seam (last page into first) reads as backward
    /// even though the visual motion is forward. See the crate docs.
    fn will_move(&mut self, forward: bool, from_page: usize) {
        let _ = (forward, from_page);
    }

    /// A scroll settled with `page` current.
    fn did_settle_on(&mut self, page: usize) {
        let _ = page;
    }

    /// The scroll offset changed; `offset` is the re-anchored value.
    ///
    /// Fires on every raw offset update, including while dragging or
    /// decelerating and on the update that triggered a re-anchor correction.
    fn did_scroll(&mut self, offset: f64) {
        let _ = offset;
    }
}

/// A sink that ignores every notification.
impl PagerHooks for () {}
