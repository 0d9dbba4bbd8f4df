//! Temperature-window selection and fallback ordering.

use tc_core::{TcError, TcResult, Temperature};

use crate::polynomial::{PolynomialType, RangeTag, TemperatureWindow};

/// Break temperatures [K] separating the low, mid and high windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBreaks {
    pub min: f64,
    pub max: f64,
}

impl Default for RangeBreaks {
    fn default() -> Self {
        Self {
            min: 1000.0,
            max: 6000.0,
        }
    }
}

impl RangeBreaks {
    /// Breaks are the same for both polynomial families.
    pub fn for_type(_poly: PolynomialType) -> Self {
        Self::default()
    }
}

/// Nominal window for `t_k`:
/// `T <= min` is low, `min < T <= max` is mid, `T > max` is high.
pub fn select_window(t_k: f64, breaks: RangeBreaks) -> TcResult<TemperatureWindow> {
    if t_k <= breaks.min {
        Ok(TemperatureWindow::Low)
    } else if t_k <= breaks.max {
        Ok(TemperatureWindow::Mid)
    } else if t_k > breaks.max {
        Ok(TemperatureWindow::High)
    } else {
        // only NaN falls through the three comparisons
        Err(TcError::NonFinite {
            what: "temperature for range selection",
            value: t_k,
        })
    }
}

/// Windows to try, in order: the nominal one, then high, mid, low.
pub fn fallback_order(nominal: TemperatureWindow) -> Vec<TemperatureWindow> {
    let mut order = vec![nominal];
    order.extend(
        [
            TemperatureWindow::High,
            TemperatureWindow::Mid,
            TemperatureWindow::Low,
        ]
        .into_iter()
        .filter(|w| *w != nominal),
    );
    order
}

/// Nominal range tag for a temperature under the given polynomial family.
pub fn select_range(t: &Temperature, poly: PolynomialType) -> TcResult<RangeTag> {
    let window = select_window(t.kelvin(), RangeBreaks::for_type(poly))?;
    Ok(RangeTag::new(poly, window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::TempUnit;

    #[test]
    fn break_points_are_inclusive_on_the_left_window() {
        let b = RangeBreaks::default();
        assert_eq!(select_window(1000.0, b).unwrap(), TemperatureWindow::Low);
        assert_eq!(select_window(1000.0001, b).unwrap(), TemperatureWindow::Mid);
        assert_eq!(select_window(6000.0, b).unwrap(), TemperatureWindow::Mid);
        assert_eq!(select_window(6000.5, b).unwrap(), TemperatureWindow::High);
    }

    #[test]
    fn extremes_and_nan() {
        let b = RangeBreaks::default();
        assert_eq!(select_window(-5.0, b).unwrap(), TemperatureWindow::Low);
        assert_eq!(
            select_window(f64::INFINITY, b).unwrap(),
            TemperatureWindow::High
        );
        assert!(select_window(f64::NAN, b).is_err());
    }

    #[test]
    fn fallback_skips_nominal() {
        use TemperatureWindow::*;
        assert_eq!(fallback_order(Low), vec![Low, High, Mid]);
        assert_eq!(fallback_order(Mid), vec![Mid, High, Low]);
        assert_eq!(fallback_order(High), vec![High, Mid, Low]);
    }

    #[test]
    fn select_range_converts_units() {
        // 800 C is 1073.15 K
        let t = Temperature::new(800.0, TempUnit::C);
        let tag = select_range(&t, PolynomialType::Nasa7).unwrap();
        assert_eq!(tag, RangeTag::new(PolynomialType::Nasa7, TemperatureWindow::Mid));
    }
}
