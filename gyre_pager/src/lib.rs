// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gyre Pager: a renderer-agnostic controller for paged, infinitely wrapping
//! ("circular") scroll strips.
//!
//! The pager presents a finite set of logical pages as an endless loop: the
//! last page scrolls seamlessly into the first and vice versa. It does so by
//! padding the strip with two sentinel slots (see [`gyre_ring`]) and silently
//! re-anchoring the scroll offset whenever it enters one.
//!
//! This crate deliberately does **not** know about widgets, cells, or any
//! particular UI toolkit. The host supplies three collaborators, all borrowed
//! per call and never stored:
//!
//! - a [`ScrollSurface`]: the toolkit's paged scroll container, reduced to an
//!   offset, uniform slot geometry, and a scroll-to-slot command;
//! - a [`PageSource`]: page count plus an opaque content handle per page;
//! - a [`PagerHooks`] sink: scroll and page-change notifications, every
//!   method optional.
//!
//! [`CircularPager`] itself owns only the page/slot mapping and a
//! [`ScrollPhase`] state machine. The host forwards its toolkit's scroll
//! callbacks (offset changed, drag began, deceleration began/ended) to the
//! pager's notification entry points; the pager corrects the offset, resolves
//! the visible pages ([`resolve_visible`]), and emits events.
//!
//! ## Example
//!
//! ```rust
//! use gyre_pager::{Axis, CircularPager, FixedSurface, PageSource, ScrollSurface};
//!
//! struct Colors(Vec<&'static str>);
//!
//! impl PageSource for Colors {
//!     type Handle = &'static str;
//!
//!     fn page_count(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn page(&self, index: usize) -> &'static str {
//!         self.0[index]
//!     }
//! }
//!
//! let colors = Colors(vec!["red", "green", "blue"]);
//! let mut pager = CircularPager::new();
//! let mut surface = FixedSurface::new(Axis::Horizontal, 320.0, 480.0);
//!
//! pager.reload(&colors, &mut surface, Some(0));
//! assert_eq!(pager.current_page(&surface), Some(0));
//!
//! // Sentinel slots render the opposite end of the strip.
//! assert_eq!(pager.content_for_slot(&colors, 0), Some("blue"));
//!
//! // Scrolling past the leading edge wraps to the back, invisibly.
//! surface.set_offset(-10.0);
//! pager.scrolled(&mut surface, &mut ());
//! assert_eq!(pager.current_page(&surface), Some(2));
//! ```
//!
//! ## Direction at the wrap seam
//!
//! [`PagerHooks::will_move`] computes its `forward` flag by comparing the two
//! visible logical indices numerically, not by wrap-aware distance. Exactly
//! at the seam — the last page scrolling into the first — the comparison
//! reports backward motion even though the visual motion is forward. This
//! matches the long-standing behavior hosts calibrate against and is kept
//! deliberately; see `DESIGN.md` in the repository.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fixed;
mod hooks;
mod pager;
mod source;
mod surface;
mod visible;

pub use fixed::FixedSurface;
pub use hooks::PagerHooks;
pub use pager::{CircularPager, ScrollPhase};
pub use source::PageSource;
pub use surface::{Axis, ScrollSurface};
pub use visible::{VisiblePages, resolve_visible};
