//! Gauge position for metric cards.

/// How a metric value maps onto a 0-100 gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gauge {
    /// `min(value, cap) / cap`. Values at or above `cap` fill the gauge.
    Ceiling(f64),
    /// Position of the value inside `low..=high`, clamped at both ends.
    Band { low: f64, high: f64 },
    /// `value / full`, clamped.
    Linear(f64),
}

impl Gauge {
    /// Gauge percentage for `value`. Non-finite input gives 0.
    pub fn percent(&self, value: f64) -> u8 {
        let fraction = match *self {
            Gauge::Ceiling(cap) => value.min(cap) / cap,
            Gauge::Band { low, high } => (value.clamp(low, high) - low) / (high - low),
            Gauge::Linear(full) => value / full,
        };
        to_percent(fraction)
    }
}

fn to_percent(fraction: f64) -> u8 {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling() {
        let gauge = Gauge::Ceiling(3.0);
        assert_eq!(gauge.percent(2.556), 85);
        assert_eq!(gauge.percent(12.0), 100);
        assert_eq!(gauge.percent(-1.0), 0);
    }

    #[test]
    fn test_band() {
        let gauge = Gauge::Band {
            low: 4.0,
            high: 9.0,
        };
        assert_eq!(gauge.percent(7.0), 60);
        assert_eq!(gauge.percent(3.2), 0);
        assert_eq!(gauge.percent(11.0), 100);
    }

    #[test]
    fn test_linear() {
        let gauge = Gauge::Linear(120.0);
        assert_eq!(gauge.percent(72.17), 60);
        assert_eq!(gauge.percent(150.0), 100);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(Gauge::Ceiling(5.0).percent(f64::NAN), 0);
        assert_eq!(Gauge::Linear(120.0).percent(f64::INFINITY), 0);
        assert_eq!(Gauge::Ceiling(0.0).percent(0.0), 0);
    }
}
