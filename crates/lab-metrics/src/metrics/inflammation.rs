//! Neutrophil-to-lymphocyte ratio.

use lab_map::{Analyte, VariantPreference};
use lab_model::{CompositeMetric, MetricKind};

use crate::context::{MetricContext, finite};
use crate::gauge::Gauge;

const GAUGE: Gauge = Gauge::Ceiling(5.0);

pub fn grade(nlr: f64) -> &'static str {
    if nlr > 3.0 {
        "↑ possible systemic inflammation/infection"
    } else if nlr < 1.0 {
        "↓ lymphocytosis or normal variant"
    } else {
        "normal"
    }
}

/// NLR from absolute counts when the report has them.
pub fn nlr(ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    let neutrophils = ctx.value_preferring(Analyte::Neutrophils, VariantPreference::Absolute)?;
    let lymphocytes = ctx.value_preferring(Analyte::Lymphocytes, VariantPreference::Absolute)?;
    if lymphocytes == 0.0 {
        return None;
    }

    let ratio = finite(neutrophils / lymphocytes)?;
    Some(
        CompositeMetric::new(MetricKind::Nlr, "NLR", format!("{ratio:.2}"))
            .with_grade(grade(ratio))
            .with_percent(GAUGE.percent(ratio))
            .with_value(ratio),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(grade(3.1), "↑ possible systemic inflammation/infection");
        assert_eq!(grade(3.0), "normal");
        assert_eq!(grade(1.0), "normal");
        assert_eq!(grade(0.9), "↓ lymphocytosis or normal variant");
    }
}
