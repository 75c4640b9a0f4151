// SPDX-License-Identifier: MIT

//!
//! *Part of the wider MonthSlicer project*
//!
//! This crate defines the basic datatypes used across the MonthSlicer project
//! (filter construction, host adapters, CLI tooling).
//!
//! MonthSlicer is a month-picker filter control for business-intelligence
//! hosts: the user picks a `YYYY-MM` month and the control restricts a
//! date-typed column of the host dataset to that month.  This crate holds the
//! validated primitives that make up that flow: the [`MonthToken`] the picker
//! produces, the [`DateRange`] it resolves to, and the [`FilterTarget`]
//! naming the dataset field to restrict.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod month;
mod range;
mod target;

pub use month::*;
pub use range::*;
pub use target::*;
