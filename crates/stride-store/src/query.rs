// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;

use serde_json::Value;

use crate::{CollectionPath, Document};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    NotEq,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Eq,
            value: value.into(),
        }
    }

    pub fn not_eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::NotEq,
            value: value.into(),
        }
    }

    fn matches(&self, document: &Document) -> bool {
        let value = document.get(&self.field);
        match self.op {
            FilterOp::Eq => value == Some(&self.value),
            FilterOp::NotEq => value.is_some() && value != Some(&self.value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: CollectionPath,
    pub filters: Vec<Filter>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new(collection: CollectionPath) -> Self {
        Self {
            collection,
            filters: vec![],
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn where_eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(Filter::eq(field, value))
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true if `document` lives in the queried collection and passes all filters.
    /// Documents lacking the ordering field never match.
    pub fn matches(&self, document: &Document) -> bool {
        if document.path.parent() != self.collection {
            return false;
        }
        if let Some(order_by) = &self.order_by {
            if document.get(&order_by.field).is_none() {
                return false;
            }
        }
        self.filters.iter().all(|f| f.matches(document))
    }

    /// Filters, orders and limits `documents`.
    pub fn execute<'a>(&self, documents: impl IntoIterator<Item = &'a Document>) -> Vec<Document> {
        let mut results = documents
            .into_iter()
            .filter(|doc| self.matches(doc))
            .cloned()
            .collect::<Vec<_>>();

        results.sort_by(|lhs, rhs| {
            let ordering = match &self.order_by {
                Some(order_by) => {
                    let ordering = compare_values(
                        lhs.get(&order_by.field).unwrap_or(&Value::Null),
                        rhs.get(&order_by.field).unwrap_or(&Value::Null),
                    );
                    match order_by.direction {
                        Direction::Ascending => ordering,
                        Direction::Descending => ordering.reverse(),
                    }
                }
                None => Ordering::Equal,
            };
            ordering.then_with(|| lhs.path.cmp(&rhs.path))
        });

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        results
    }
}

/// Orders values of different types by type first (null < bool < number < string < array <
/// object), values of the same type by their natural order.
pub(crate) fn compare_values(lhs: &Value, rhs: &Value) -> Ordering {
    fn rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (lhs, rhs) {
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        (Value::Number(l), Value::Number(r)) => match (l.as_i64(), r.as_i64()) {
            (Some(l), Some(r)) => l.cmp(&r),
            _ => l
                .as_f64()
                .partial_cmp(&r.as_f64())
                .unwrap_or(Ordering::Equal),
        },
        (Value::String(l), Value::String(r)) => l.cmp(r),
        _ => rank(lhs).cmp(&rank(rhs)),
    }
}
