//! Query model: equality filters combined with AND/OR, a column set and a
//! result cap.

use pdguard_schemas::AttributeValue;

/// Comparison applied by a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOperator {
    /// Stored value equals the condition value
    Equal,
    /// Stored value is present and differs from the condition value
    NotEqual,
}

/// One attribute comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Attribute name
    pub attribute: String,
    /// Comparison
    pub operator: ConditionOperator,
    /// Right-hand value
    pub value: AttributeValue,
}

/// How the members of a [`FilterExpression`] are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Every member must match
    And,
    /// At least one member must match
    Or,
}

/// A tree of conditions.
///
/// An expression with no conditions and no nested filters places no
/// restriction on the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression {
    /// Combinator for `conditions` and `filters`
    pub operator: LogicalOperator,
    /// Leaf conditions
    pub conditions: Vec<Condition>,
    /// Nested filters
    pub filters: Vec<FilterExpression>,
}

impl FilterExpression {
    /// Create an empty filter.
    pub fn new(operator: LogicalOperator) -> Self {
        Self {
            operator,
            conditions: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Append a condition.
    pub fn add_condition(
        &mut self,
        attribute: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<AttributeValue>,
    ) {
        self.conditions.push(Condition {
            attribute: attribute.into(),
            operator,
            value: value.into(),
        });
    }

    /// Append a nested filter.
    pub fn add_filter(&mut self, filter: FilterExpression) {
        self.filters.push(filter);
    }

    /// Whether the filter has no members at all.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.filters.is_empty()
    }
}

impl Default for FilterExpression {
    fn default() -> Self {
        Self::new(LogicalOperator::And)
    }
}

/// A query against one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryExpression {
    /// Logical name of the queried record type
    pub entity_name: String,
    /// Attributes to return; empty means all
    pub columns: Vec<String>,
    /// Top-level filter, combined with AND
    pub criteria: FilterExpression,
    /// Maximum number of records to return
    pub top_count: Option<usize>,
}

impl QueryExpression {
    /// Create an unrestricted query for a record type.
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            columns: Vec::new(),
            criteria: FilterExpression::default(),
            top_count: None,
        }
    }

    /// Restrict the returned attributes.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Cap the number of returned records.
    pub fn with_top_count(mut self, top: usize) -> Self {
        self.top_count = Some(top);
        self
    }

    /// Equality conditions of the first OR group, in order.
    ///
    /// Handy for asserting on the shape of duplicate-detection queries.
    pub fn or_values(&self) -> Vec<&AttributeValue> {
        self.criteria
            .filters
            .iter()
            .find(|f| f.operator == LogicalOperator::Or)
            .map(|f| f.conditions.iter().map(|c| &c.value).collect())
            .unwrap_or_default()
    }

    /// Values excluded through top-level `NotEqual` conditions on
    /// `attribute`.
    pub fn excluded_values(&self, attribute: &str) -> Vec<&AttributeValue> {
        self.criteria
            .conditions
            .iter()
            .filter(|c| c.operator == ConditionOperator::NotEqual && c.attribute == attribute)
            .map(|c| &c.value)
            .collect()
    }
}
