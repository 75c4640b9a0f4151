// SPDX-License-Identifier: MIT

//!
//! Build filter descriptors, suppressing duplicates
//!

use crate::FilterDescriptor;
use log::debug;
use month_slicer_core::{DateRange, FilterTarget, MonthToken, MonthTokenError};

/// Builds [`FilterDescriptor`]s for month selections and remembers the last
/// selection it built one for, so that repeated events carrying an unchanged
/// selection don't push redundant queries at the host.
///
/// One builder per control session.  The memo compares raw selection strings,
/// so two differently written tokens always trigger a rebuild
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterBuilder {
    memo: Option<String>,
}

impl FilterBuilder {
    /// Create a builder with no selection applied yet
    pub fn new() -> Self {
        FilterBuilder { memo: None }
    }

    /// Build a descriptor for a selection, or `None` when there is nothing to
    /// emit:
    ///
    /// - `target` is `None` while the host hasn't delivered dataset metadata
    ///   yet, in which case nothing is built and the memo is untouched
    /// - a selection equal to the last applied one builds nothing
    /// - a new month selection builds the two-condition range descriptor
    /// - a new empty selection (`None` or `""`) builds the zero-condition
    ///   descriptor that clears the range restriction
    ///
    /// A selection that fails to parse returns the error, builds nothing, and
    /// leaves the memo unchanged - the next selection event supersedes it
    pub fn build_if_changed(
        &mut self,
        selection: Option<&str>,
        target: Option<&FilterTarget>,
    ) -> Result<Option<FilterDescriptor>, MonthTokenError> {
        // Not ready to filter until the host has said what to filter
        let Some(target) = target else {
            return Ok(None);
        };

        // An absent selection and a cleared selection share the empty key
        let key = selection.unwrap_or("");
        if self.memo.as_deref() == Some(key) {
            return Ok(None);
        }

        let descriptor = if key.is_empty() {
            FilterDescriptor::cleared(target.clone())
        } else {
            let token = MonthToken::from(key)?;
            let range = DateRange::for_month(&token);
            debug!(
                "month {token} resolves to [{}, {})",
                range.iso_from(),
                range.iso_to()
            );
            FilterDescriptor::month_range(target.clone(), &range)
        };

        self.memo = Some(key.to_string());
        Ok(Some(descriptor))
    }

    /// The last selection a descriptor was built for, `None` before the first
    /// one
    pub fn last_applied(&self) -> Option<&str> {
        self.memo.as_deref()
    }
}
