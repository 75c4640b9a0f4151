// SPDX-License-Identifier: MIT

//!
//! The advanced-filter descriptor sent to the host
//!

use month_slicer_core::{DateRange, FilterTarget};
use serde::{Deserialize, Serialize};

/// The schema URI the host expects on every advanced filter
pub const ADVANCED_FILTER_SCHEMA: &str = "https://powerbi.com/product/schema#advanced";

/// The host's integer tag for the advanced filter type
pub const ADVANCED_FILTER_TYPE: u8 = 0;

/// A comparison operator the host's advanced-filter schema understands.
/// Serialized by variant name, so the spelling here is the wire spelling
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionOperator {
    GreaterThanOrEqual,
    LessThan,
}

/// How multiple [`FilterCondition`]s combine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
}

/// A single comparison against the target column
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilterCondition {
    operator: ConditionOperator,
    value: String,
}

impl FilterCondition {
    /// Get the condition's operator
    pub fn operator(&self) -> ConditionOperator {
        self.operator
    }

    /// Get the condition's comparison value (an ISO-8601 instant string)
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The filter descriptor handed to the host's filter-application API.  Its
/// serialized form must match the host's advanced-filter JSON schema exactly:
/// fixed `$schema`, `logicalOperator` and `filterType` values, a
/// [`FilterTarget`], and either no conditions (selection cleared) or exactly
/// two bracketing the selected month
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FilterDescriptor {
    #[serde(rename = "$schema")]
    schema: String,
    target: FilterTarget,
    conditions: Vec<FilterCondition>,
    logical_operator: LogicalOperator,
    filter_type: u8,
}

impl FilterDescriptor {
    /// Build the two-condition descriptor restricting the target column to a
    /// month's range: `>= from` and `< to`
    pub fn month_range(target: FilterTarget, range: &DateRange) -> Self {
        FilterDescriptor {
            schema: ADVANCED_FILTER_SCHEMA.to_string(),
            target,
            conditions: vec![
                FilterCondition {
                    operator: ConditionOperator::GreaterThanOrEqual,
                    value: range.iso_from(),
                },
                FilterCondition {
                    operator: ConditionOperator::LessThan,
                    value: range.iso_to(),
                },
            ],
            logical_operator: LogicalOperator::And,
            filter_type: ADVANCED_FILTER_TYPE,
        }
    }

    /// Build the zero-condition descriptor that lifts any range restriction
    /// on the target column
    pub fn cleared(target: FilterTarget) -> Self {
        FilterDescriptor {
            schema: ADVANCED_FILTER_SCHEMA.to_string(),
            target,
            conditions: Vec::new(),
            logical_operator: LogicalOperator::And,
            filter_type: ADVANCED_FILTER_TYPE,
        }
    }

    /// Get the descriptor's target
    pub fn target(&self) -> &FilterTarget {
        &self.target
    }

    /// Borrow the descriptor's conditions (empty, or exactly two)
    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use month_slicer_core::MonthToken;
    use serde_json::json;

    fn target() -> FilterTarget {
        FilterTarget::from("Sales", "Order Date").unwrap()
    }

    #[test]
    fn month_range_wire_format() {
        let token = MonthToken::from("2024-12").unwrap();
        let range = DateRange::for_month(&token);
        let descriptor = FilterDescriptor::month_range(target(), &range);

        // The exact shape the host accepts, nothing more and nothing less
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "$schema": "https://powerbi.com/product/schema#advanced",
                "target": { "table": "Sales", "column": "Order Date" },
                "conditions": [
                    { "operator": "GreaterThanOrEqual", "value": "2024-12-01T00:00:00.000Z" },
                    { "operator": "LessThan", "value": "2025-01-01T00:00:00.000Z" }
                ],
                "logicalOperator": "And",
                "filterType": 0
            })
        );
    }

    #[test]
    fn condition_order_brackets_the_month() {
        let token = MonthToken::from("2024-02").unwrap();
        let range = DateRange::for_month(&token);
        let descriptor = FilterDescriptor::month_range(target(), &range);

        let conditions = descriptor.conditions();
        assert_eq!(conditions.len(), 2);
        assert_eq!(
            conditions[0].operator(),
            ConditionOperator::GreaterThanOrEqual
        );
        assert_eq!(conditions[0].value(), "2024-02-01T00:00:00.000Z");
        assert_eq!(conditions[1].operator(), ConditionOperator::LessThan);
        assert_eq!(conditions[1].value(), "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn cleared_wire_format() {
        let descriptor = FilterDescriptor::cleared(target());
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "$schema": "https://powerbi.com/product/schema#advanced",
                "target": { "table": "Sales", "column": "Order Date" },
                "conditions": [],
                "logicalOperator": "And",
                "filterType": 0
            })
        );
    }

    #[test]
    fn round_trip() {
        let token = MonthToken::from("2030-01").unwrap();
        let range = DateRange::for_month(&token);
        let descriptor = FilterDescriptor::month_range(target(), &range);
        let json = serde_json::to_string(&descriptor).unwrap();
        let back: FilterDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(descriptor, back);
    }
}
