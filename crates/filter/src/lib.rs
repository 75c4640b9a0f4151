// SPDX-License-Identifier: MIT

//!
//! *Part of the wider MonthSlicer project*
//!
//! This library crate turns month selections into the JSON advanced-filter
//! descriptors the embedding host accepts.  It does the following:
//!
//! - Defines the descriptor wire format (`$schema`, target, conditions,
//! logical operator, filter type) exactly as the host's advanced-filter
//! schema requires
//! - Builds the two-condition date-range descriptor for a selected month, or
//! the zero-condition descriptor when the selection is cleared
//! - Suppresses redundant emissions when the selection hasn't changed
//! - Provides the [`FilterSink`] seam behind which the actual host API lives,
//! and a [`MonthSlicer`] session that drives it from selection and metadata
//! events
//!
//! This crate makes use of the basic MonthSlicer `core` crate for primitive
//! types, and is itself used by the host adapter and the `bins` crate.
//!

mod builder;
mod descriptor;
mod sink;
mod slicer;

pub use builder::*;
pub use descriptor::*;
pub use sink::*;
pub use slicer::*;
