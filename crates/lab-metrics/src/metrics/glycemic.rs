//! Glycemic control: HbA1c with estimated average glucose.

use lab_map::Analyte;
use lab_model::{CompositeMetric, MetricKind};

use crate::context::{MetricContext, finite};
use crate::gauge::Gauge;

const GAUGE: Gauge = Gauge::Band {
    low: 4.0,
    high: 9.0,
};

/// mg/dL of glucose per mmol/L.
const GLUCOSE_MG_DL_PER_MMOL: f64 = 18.0;

/// Estimated average glucose in mg/dL (ADAG regression).
pub fn estimated_average_glucose(a1c_percent: f64) -> f64 {
    28.7 * a1c_percent - 46.7
}

pub fn grade(a1c_percent: f64) -> &'static str {
    if a1c_percent >= 6.5 {
        "diabetic risk"
    } else if a1c_percent >= 5.7 {
        "prediabetes risk"
    } else {
        "optimal"
    }
}

/// HbA1c card. The label carries eAG; the value is the HbA1c percentage.
pub fn hba1c(ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    let a1c = ctx.value(Analyte::HbA1c)?;
    let eag_mg_dl = finite(estimated_average_glucose(a1c))?;
    let eag_mmol_l = eag_mg_dl / GLUCOSE_MG_DL_PER_MMOL;

    Some(
        CompositeMetric::new(
            MetricKind::HbA1c,
            format!("eAG ≈ {eag_mg_dl:.0} mg/dL ({eag_mmol_l:.1} mmol/L)"),
            format!("{a1c:.1} %"),
        )
        .with_grade(grade(a1c))
        .with_percent(GAUGE.percent(a1c))
        .with_value(a1c),
    )
}
