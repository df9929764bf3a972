//! Lipid risk: AIP, TG/HDL and TC/HDL.
//!
//! AIP is defined on molar concentrations while the two ratios use the
//! mg/dL cut-offs, so each converts into its own unit.

use lab_map::Analyte;
use lab_model::{CompositeMetric, MetricKind};
use lab_normalization::Conversion;

use crate::context::{MetricContext, finite};
use crate::gauge::Gauge;

const AIP_GAUGE: Gauge = Gauge::Ceiling(0.5);
const TG_HDL_GAUGE: Gauge = Gauge::Ceiling(5.0);
const TC_HDL_GAUGE: Gauge = Gauge::Ceiling(6.0);

pub fn aip_grade(aip: f64) -> &'static str {
    if aip < 0.11 {
        "low risk"
    } else if aip <= 0.21 {
        "average risk"
    } else {
        "high risk"
    }
}

/// Atherogenic Index of Plasma, `log10(TG / HDL)` in mmol/L.
pub fn aip(ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    let triglycerides = ctx.converted(Analyte::Triglycerides, Conversion::TriglyceridesToMmolL)?;
    let hdl = ctx.converted(Analyte::Hdl, Conversion::CholesterolToMmolL)?;
    if hdl <= 0.0 {
        return None;
    }

    let value = finite((triglycerides / hdl).log10())?;
    Some(
        CompositeMetric::new(MetricKind::Aip, "AIP = log10(TG/HDL)", format!("{value:.2}"))
            .with_grade(aip_grade(value))
            .with_percent(AIP_GAUGE.percent(value))
            .with_value(value),
    )
}

pub fn tg_hdl_grade(ratio: f64) -> &'static str {
    if ratio < 2.0 {
        "excellent"
    } else if ratio <= 3.0 {
        "acceptable"
    } else {
        "unfavorable"
    }
}

pub fn tg_hdl(ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    let triglycerides = ctx.converted(Analyte::Triglycerides, Conversion::TriglyceridesToMgDl)?;
    let hdl = ctx.converted(Analyte::Hdl, Conversion::CholesterolToMgDl)?;
    if hdl <= 0.0 {
        return None;
    }

    let ratio = finite(triglycerides / hdl)?;
    Some(
        CompositeMetric::new(MetricKind::TgHdl, "TG/HDL (mg/dL)", format!("{ratio:.2}"))
            .with_grade(tg_hdl_grade(ratio))
            .with_percent(TG_HDL_GAUGE.percent(ratio))
            .with_value(ratio),
    )
}

pub fn tc_hdl_grade(ratio: f64) -> &'static str {
    if ratio < 3.5 {
        "target"
    } else if ratio <= 5.0 {
        "border"
    } else {
        "high"
    }
}

pub fn tc_hdl(ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    let total = ctx.converted(Analyte::TotalCholesterol, Conversion::CholesterolToMgDl)?;
    let hdl = ctx.converted(Analyte::Hdl, Conversion::CholesterolToMgDl)?;
    if hdl <= 0.0 {
        return None;
    }

    let ratio = finite(total / hdl)?;
    Some(
        CompositeMetric::new(MetricKind::TcHdl, "TC/HDL (mg/dL)", format!("{ratio:.2}"))
            .with_grade(tc_hdl_grade(ratio))
            .with_percent(TC_HDL_GAUGE.percent(ratio))
            .with_value(ratio),
    )
}
