//! Kidney function: eGFR by the CKD-EPI 2021 creatinine equation.
//!
//! The 2021 refit drops the race coefficient, so only serum creatinine, sex
//! and age are needed.

use lab_map::Analyte;
use lab_model::{CompositeMetric, MetricKind, Sex};
use lab_normalization::Conversion;

use crate::context::{MetricContext, finite};
use crate::gauge::Gauge;

pub const EGFR_LABEL: &str = "eGFR (CKD-EPI 2021)";
pub const EGFR_UNIT: &str = "mL/min/1.73m²";
pub const DEMOGRAPHICS_REQUIRED: &str = "Age and sex required";

const GAUGE: Gauge = Gauge::Linear(120.0);

/// eGFR in mL/min/1.73m² from creatinine in mg/dL.
pub fn ckd_epi_2021(creatinine_mg_dl: f64, sex: Sex, age: u32) -> f64 {
    let (kappa, alpha) = match sex {
        Sex::Female => (0.7, -0.241),
        Sex::Male | Sex::Unknown => (0.9, -0.302),
    };
    let scr_k = creatinine_mg_dl / kappa;
    142.0
        * scr_k.min(1.0).powf(alpha)
        * scr_k.max(1.0).powf(-1.2)
        * 0.9938_f64.powf(f64::from(age))
}

/// KDIGO G-stage for an eGFR value.
pub fn grade(egfr: f64) -> &'static str {
    if egfr >= 90.0 {
        "G1 (normal)"
    } else if egfr >= 60.0 {
        "G2 (mild ↓)"
    } else if egfr >= 45.0 {
        "G3a (mild–mod ↓)"
    } else if egfr >= 30.0 {
        "G3b (mod–severe ↓)"
    } else if egfr >= 15.0 {
        "G4 (severe ↓)"
    } else {
        "G5 (failure)"
    }
}

/// eGFR card. Without sex and age a placeholder card explains what is
/// missing instead.
pub fn egfr(ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    let creatinine = ctx.converted(Analyte::Creatinine, Conversion::CreatinineToMgDl)?;

    let (Some(sex), Some(age)) = (ctx.demographics.known_sex(), ctx.demographics.known_age())
    else {
        return Some(placeholder());
    };

    let egfr = finite(ckd_epi_2021(creatinine, sex, age))?;
    Some(
        CompositeMetric::new(MetricKind::Egfr, EGFR_LABEL, format!("{egfr:.0}"))
            .with_unit(EGFR_UNIT)
            .with_grade(grade(egfr))
            .with_percent(GAUGE.percent(egfr))
            .with_value(egfr),
    )
}

fn placeholder() -> CompositeMetric {
    CompositeMetric::new(MetricKind::Egfr, EGFR_LABEL, "—")
        .with_unit(EGFR_UNIT)
        .with_grade(DEMOGRAPHICS_REQUIRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_female_reference_value() {
        let egfr = ckd_epi_2021(1.0, Sex::Female, 40);
        assert!((egfr - 72.171).abs() < 0.01, "got {egfr}");
        assert_eq!(grade(egfr), "G2 (mild ↓)");
    }

    #[test]
    fn test_male_low_creatinine_branch() {
        // Below kappa the alpha exponent applies.
        let egfr = ckd_epi_2021(0.6, Sex::Male, 30);
        let expected = 142.0 * (0.6_f64 / 0.9).powf(-0.302) * 0.9938_f64.powi(30);
        assert!((egfr - expected).abs() < 1e-9);
        assert_eq!(grade(egfr), "G1 (normal)");
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade(90.0), "G1 (normal)");
        assert_eq!(grade(59.9), "G3a (mild–mod ↓)");
        assert_eq!(grade(45.0), "G3a (mild–mod ↓)");
        assert_eq!(grade(30.0), "G3b (mod–severe ↓)");
        assert_eq!(grade(15.0), "G4 (severe ↓)");
        assert_eq!(grade(14.9), "G5 (failure)");
    }

    #[test]
    fn test_zero_creatinine_is_not_finite() {
        assert!(!ckd_epi_2021(0.0, Sex::Female, 40).is_finite());
    }
}
