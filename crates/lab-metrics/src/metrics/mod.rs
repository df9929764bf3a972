//! Metric calculators.
//!
//! Each calculator reads its analytes through a [`MetricContext`] and returns
//! `None` when an analyte is missing, a denominator is not positive, or the
//! result is not a finite number.

pub mod glycemic;
pub mod inflammation;
pub mod kidney;
pub mod lipids;
pub mod liver;

use lab_model::{CompositeMetric, MetricKind};

use crate::context::MetricContext;

/// Run the calculator for `kind`.
pub fn compute(kind: MetricKind, ctx: &MetricContext<'_, '_>) -> Option<CompositeMetric> {
    match kind {
        MetricKind::Egfr => kidney::egfr(ctx),
        MetricKind::Fib4 => liver::fib4(ctx),
        MetricKind::DeRitis => liver::de_ritis(ctx),
        MetricKind::Aip => lipids::aip(ctx),
        MetricKind::TgHdl => lipids::tg_hdl(ctx),
        MetricKind::TcHdl => lipids::tc_hdl(ctx),
        MetricKind::Nlr => inflammation::nlr(ctx),
        MetricKind::HbA1c => glycemic::hba1c(ctx),
    }
}
