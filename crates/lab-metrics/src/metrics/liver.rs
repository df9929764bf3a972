//! Liver indices: FIB-4 and the De Ritis ratio.

use lab_map::Analyte;
use lab_model::{CompositeMetric, MetricKind};
use lab_normalization::Conversion;

use crate::context::{MetricContext, finite};
use crate::gauge::Gauge;

const FIB4_GAUGE: Gauge = Gauge::Ceiling(3.0);
const DE_RITIS_GAUGE: Gauge = Gauge::Ceiling(2.0);

/// FIB-4 risk band. The lower cut-off is relaxed from 1.3 to 2.0 at 65+.
pub fn fib4_grade(fib4: f64, age: u32) -> &'static str {
    let low_cutoff = if age >= 65 { 2.0 } else { 1.3 };
    if fib4 < low_cutoff {
        "low fibrosis risk"
    } else if fib4 <= 2.67 {
        "average risk"
    } else {
        "high fibrosis risk"
    }
}

/// `age × AST / (platelets × √ALT)`, platelets in 10^9/L.
pub fn fib4(ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    let age = ctx.demographics.known_age()?;
    let ast = ctx.value(Analyte::Ast)?;
    let alt = ctx.value(Analyte::Alt)?;
    let platelets = ctx.converted(Analyte::Platelets, Conversion::PlateletsTo10e9L)?;
    if platelets <= 0.0 || alt <= 0.0 {
        return None;
    }

    let value = finite(f64::from(age) * ast / (platelets * alt.sqrt()))?;
    Some(
        CompositeMetric::new(MetricKind::Fib4, "FIB-4", format!("{value:.2}"))
            .with_grade(fib4_grade(value, age))
            .with_percent(FIB4_GAUGE.percent(value))
            .with_value(value),
    )
}

pub fn de_ritis_grade(ratio: f64) -> &'static str {
    if ratio > 1.5 {
        "↑ possible fibrosis/alcohol pattern"
    } else if ratio < 0.8 {
        "↓ ALT-predominant cytolysis pattern"
    } else {
        "normal/nonspecific"
    }
}

/// AST/ALT.
pub fn de_ritis(ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    let ast = ctx.value(Analyte::Ast)?;
    let alt = ctx.value(Analyte::Alt)?;
    if alt == 0.0 {
        return None;
    }

    let ratio = finite(ast / alt)?;
    Some(
        CompositeMetric::new(MetricKind::DeRitis, "De Ritis (AST/ALT)", format!("{ratio:.2}"))
            .with_grade(de_ritis_grade(ratio))
            .with_percent(DE_RITIS_GAUGE.percent(ratio))
            .with_value(ratio),
    )
}
