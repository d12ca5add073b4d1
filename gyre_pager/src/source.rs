// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-supplied content contract.

/// Supplies page content to a pager.
///
/// The pager never looks inside a page; `Handle` is whatever the host's
/// rendering layer needs to realize one (a view id, a widget builder, a data
/// record). Results must be deterministic for a given index between reloads.
///
/// The source is borrowed per call and never stored, so the host keeps full
/// ownership of its data.
pub trait PageSource {
    /// Opaque per-page content handle.
    type Handle;

    /// Total number of logical pages.
    fn page_count(&self) -> usize;

    /// Content for the logical page at `index` (`0..page_count()`).
    fn page(&self, index: usize) -> Self::Handle;
}
