//! Composite metric output records.

use serde::Serialize;
use std::fmt;

use crate::enums::{MetricCategory, MetricKind};

/// One evaluated composite index, ready for a card or table row.
///
/// `value` carries the unrounded number; it is `None` only for placeholder
/// cards that explain why a metric could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeMetric {
    pub kind: MetricKind,
    pub category: MetricCategory,
    pub label: String,
    pub display_value: String,
    pub unit: String,
    pub grade: String,
    /// Gauge position, 0 to 100.
    pub percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl CompositeMetric {
    /// Start a card for `kind`; the category follows from the kind.
    pub fn new(kind: MetricKind, label: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            kind,
            category: kind.category(),
            label: label.into(),
            display_value: display_value.into(),
            unit: String::new(),
            grade: String::new(),
            percent: 0,
            value: None,
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    #[must_use]
    pub fn with_percent(mut self, percent: u8) -> Self {
        self.percent = percent.min(100);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Display for CompositeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.category, self.label, self.display_value
        )?;
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        write!(f, " | {} | {}%", self.grade, self.percent)
    }
}
