// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gyre Ring: circular slot arithmetic for infinitely wrapping pagers.
//!
//! A circular pager shows a finite strip of *logical pages* (`0..page_count`)
//! as an endless loop: scrolling past the last page lands on the first and
//! vice versa. This crate provides the index math that creates the illusion.
//!
//! The strip of logical pages is padded into a strip of *physical slots* with
//! one sentinel slot on each end:
//!
//! ```text
//! slot:  0   1   2   ...   N   N+1
//! page: N-1  0   1   ...  N-1   0
//! ```
//!
//! The leading sentinel duplicates the last page and the trailing sentinel
//! duplicates the first, so either edge of the physical strip always has more
//! content to scroll into. When the scroll offset enters a sentinel region,
//! [`SlotRing::reanchor`] rewrites it to the equivalent real region; applied
//! before anything observes the offset, the rewrite is invisible and the
//! strip appears endless.
//!
//! Strips with zero or one pages have nothing to wrap, so they get no
//! sentinels and never re-anchor.
//!
//! ## Example
//!
//! ```rust
//! use gyre_ring::SlotRing;
//!
//! let ring = SlotRing::new(6);
//! assert_eq!(ring.slot_count(), 8);
//!
//! // Sentinels mirror the opposite end of the strip.
//! assert_eq!(ring.page_of_slot(0), 5);
//! assert_eq!(ring.page_of_slot(7), 0);
//! // Real slots are shifted by one.
//! assert_eq!(ring.page_of_slot(1), 0);
//! assert_eq!(ring.slot_of_page(0), 1);
//!
//! // Scrolling past the trailing sentinel (pages are 100 units wide)
//! // re-anchors back to the first real slot.
//! assert_eq!(ring.reanchor(800.0, 100.0), Some(100.0));
//! // Scrolling before the leading sentinel re-anchors to the last.
//! assert_eq!(ring.reanchor(-5.0, 100.0), Some(600.0));
//! // In-range offsets are left alone.
//! assert_eq!(ring.reanchor(350.0, 100.0), None);
//! ```
//!
//! All functions are total; out-of-range slots are caller-contract violations
//! caught by `debug_assert!` and clamped in release builds.
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

mod anchor;
mod ring;

pub use ring::SlotRing;
