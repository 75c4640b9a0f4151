// SPDX-License-Identifier: MIT

//!
//! The seam between filter construction and the embedding host
//!

use crate::FilterDescriptor;

/// Where in the host's object model an applied filter lands.  The slicer
/// always writes to [`FilterScope::GENERAL`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FilterScope {
    object: &'static str,
    property: &'static str,
}

impl FilterScope {
    /// The host's general filter slot
    pub const GENERAL: FilterScope = FilterScope {
        object: "general",
        property: "filter",
    };

    /// Get the scope's object name
    pub fn object(&self) -> &'static str {
        self.object
    }

    /// Get the scope's property name
    pub fn property(&self) -> &'static str {
        self.property
    }
}

/// How an applied filter combines with the host's other active filters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterAction {
    /// Combine with other active filters (the slicer always merges)
    Merge,
    /// Remove the filter from the scope
    Remove,
}

/// Anything that can carry a [`FilterDescriptor`] to the host's
/// filter-application API.  Keeping the host behind this trait keeps the rest
/// of the crate free of host/DOM dependencies and testable with a recording
/// implementation
pub trait FilterSink {
    fn apply_json_filter(
        &mut self,
        descriptor: &FilterDescriptor,
        scope: FilterScope,
        action: FilterAction,
    );
}
