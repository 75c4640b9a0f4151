// SPDX-License-Identifier: MIT

//!
//! The month-slicer session: wires selections and host metadata to a sink
//!

use crate::{FilterAction, FilterBuilder, FilterScope, FilterSink};
use log::warn;
use month_slicer_core::{FilterTarget, MonthToken, MonthTokenError};

/// One slicer control session.  Holds the current selection, the target the
/// host's dataset metadata named, and the sink emitted descriptors go to.
///
/// Events arrive one at a time (the host delivers user input and view updates
/// serially), so the session is plain single-threaded mutable state
#[derive(Debug)]
pub struct MonthSlicer<S: FilterSink> {
    builder: FilterBuilder,
    target: Option<FilterTarget>,
    selection: Option<String>,
    sink: S,
}

impl<S: FilterSink> MonthSlicer<S> {
    /// Create a session starting on the default selection (the month
    /// containing yesterday).  Nothing is emitted until the host delivers
    /// target metadata
    pub fn new(sink: S) -> Self {
        let selection = match MonthToken::default_selection() {
            Ok(token) => Some(token.to_string()),
            // Only reachable with a clock outside the token's year range
            Err(error) => {
                warn!("no default month selection: {error}");
                None
            }
        };
        MonthSlicer {
            builder: FilterBuilder::new(),
            target: None,
            selection,
            sink,
        }
    }

    /// The host delivered (possibly changed) dataset metadata.  Re-applies
    /// the current selection against the new target, which emits unless the
    /// selection was already applied
    pub fn update_target<Q: ToString, D: ToString>(
        &mut self,
        query_name: Q,
        display_name: D,
    ) -> Result<(), MonthTokenError> {
        match FilterTarget::from_query_name(query_name, display_name) {
            Ok(target) => self.target = Some(target),
            // Metadata without usable names: stay unready, keep any previous
            // target
            Err(error) => warn!("ignoring unusable dataset metadata: {error}"),
        }
        self.apply()
    }

    /// The user picked a month.  Emits unless the selection is unchanged or
    /// the host hasn't named a target yet
    pub fn select<T: ToString>(&mut self, selection: T) -> Result<(), MonthTokenError> {
        self.selection = Some(selection.to_string());
        self.apply()
    }

    /// The user cleared the picker.  Emits the zero-condition descriptor
    /// (once) to lift the range restriction
    pub fn clear(&mut self) -> Result<(), MonthTokenError> {
        self.selection = None;
        self.apply()
    }

    /// Get the current raw selection
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Get the current target
    pub fn target(&self) -> Option<&FilterTarget> {
        self.target.as_ref()
    }

    /// Run the current selection through the builder and hand any built
    /// descriptor to the sink, always merging with the host's other filters
    fn apply(&mut self) -> Result<(), MonthTokenError> {
        let descriptor = self
            .builder
            .build_if_changed(self.selection.as_deref(), self.target.as_ref())?;
        if let Some(descriptor) = descriptor {
            self.sink
                .apply_json_filter(&descriptor, FilterScope::GENERAL, FilterAction::Merge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::FilterDescriptor;

    /// Records every descriptor the slicer pushes
    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<(FilterDescriptor, FilterScope, FilterAction)>,
    }

    impl FilterSink for RecordingSink {
        fn apply_json_filter(
            &mut self,
            descriptor: &FilterDescriptor,
            scope: FilterScope,
            action: FilterAction,
        ) {
            self.applied.push((descriptor.clone(), scope, action));
        }
    }

    #[test]
    fn nothing_emitted_before_metadata() {
        let mut slicer = MonthSlicer::new(RecordingSink::default());
        slicer.select("2024-06").unwrap();
        assert!(slicer.sink.applied.is_empty());
    }

    #[test]
    fn metadata_update_applies_current_selection() {
        let mut slicer = MonthSlicer::new(RecordingSink::default());
        slicer.select("2024-06").unwrap();

        slicer.update_target("Sales.OrderDate", "Order Date").unwrap();
        assert_eq!(slicer.sink.applied.len(), 1);

        let (descriptor, scope, action) = &slicer.sink.applied[0];
        assert_eq!(descriptor.target().table(), "Sales");
        assert_eq!(descriptor.target().column(), "Order Date");
        assert_eq!(*scope, FilterScope::GENERAL);
        assert_eq!(*action, FilterAction::Merge);

        // The host re-notifies on every view update; unchanged selection
        // must not re-emit
        slicer.update_target("Sales.OrderDate", "Order Date").unwrap();
        assert_eq!(slicer.sink.applied.len(), 1);
    }

    #[test]
    fn selection_changes_emit_and_duplicates_do_not() {
        let mut slicer = MonthSlicer::new(RecordingSink::default());
        slicer.update_target("Sales.OrderDate", "Order Date").unwrap();
        let after_default = slicer.sink.applied.len();

        slicer.select("2024-06").unwrap();
        slicer.select("2024-06").unwrap();
        slicer.select("2024-07").unwrap();
        assert_eq!(slicer.sink.applied.len(), after_default + 2);
    }

    #[test]
    fn clear_emits_the_empty_descriptor() {
        let mut slicer = MonthSlicer::new(RecordingSink::default());
        slicer.update_target("Sales.OrderDate", "Order Date").unwrap();
        slicer.select("2024-06").unwrap();

        slicer.clear().unwrap();
        let (descriptor, _, _) = slicer.sink.applied.last().unwrap();
        assert!(descriptor.conditions().is_empty());
    }

    #[test]
    fn invalid_selection_propagates_and_emits_nothing() {
        let mut slicer = MonthSlicer::new(RecordingSink::default());
        slicer.update_target("Sales.OrderDate", "Order Date").unwrap();
        let before = slicer.sink.applied.len();

        assert!(slicer.select("junk").is_err());
        assert_eq!(slicer.sink.applied.len(), before);
    }

    #[test]
    fn starts_on_the_default_selection() {
        let mut slicer = MonthSlicer::new(RecordingSink::default());
        let expected = slicer.selection().map(str::to_string);
        assert!(expected.is_some());

        // The first metadata delivery pushes the default month
        slicer.update_target("Sales.OrderDate", "Order Date").unwrap();
        assert_eq!(slicer.sink.applied.len(), 1);
        let (descriptor, _, _) = &slicer.sink.applied[0];
        assert_eq!(descriptor.conditions().len(), 2);
    }
}
