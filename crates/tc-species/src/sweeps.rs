//! Temperature sweep generation.
//!
//! Produces the temperature series fed to
//! [`SpeciesThermo::property_series`](crate::SpeciesThermo::property_series).

use std::fmt;

use tc_core::{TcError, TcResult, Temperature};

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// A temperature sweep between two bounds, in kelvin.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSweep {
    pub start_k: f64,
    pub end_k: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl TemperatureSweep {
    pub fn new(start: Temperature, end: Temperature, num_points: usize, sweep_type: SweepType) -> TcResult<Self> {
        let start_k = start.kelvin();
        let end_k = end.kelvin();

        if num_points < 2 {
            return Err(TcError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        if !(start_k > 0.0 && end_k > 0.0 && start_k.is_finite() && end_k.is_finite()) {
            return Err(TcError::InvalidArg {
                what: "sweep bounds must be positive absolute temperatures",
            });
        }
        if (start_k - end_k).abs() < 1e-12 {
            return Err(TcError::InvalidArg {
                what: "start and end temperatures must differ",
            });
        }

        Ok(Self {
            start_k,
            end_k,
            num_points,
            sweep_type,
        })
    }

    /// Create a sweep from text such as `"300 K"` and `"25 C"`.
    pub fn from_text(start: &str, end: &str, num_points: usize, sweep_type: SweepType) -> TcResult<Self> {
        Self::new(start.parse()?, end.parse()?, num_points, sweep_type)
    }

    /// Generate all points in the sweep.
    pub fn points(&self) -> Vec<Temperature> {
        let (a, b) = match self.sweep_type {
            SweepType::Linear => (self.start_k, self.end_k),
            SweepType::Logarithmic => (self.start_k.ln(), self.end_k.ln()),
        };
        let delta = (b - a) / (self.num_points - 1) as f64;

        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| a + i as f64 * delta)
            .map(|x| match self.sweep_type {
                SweepType::Linear => x,
                SweepType::Logarithmic => x.exp(),
            })
            .collect();

        // Ensure exact endpoint
        if let Some(last) = points.last_mut() {
            *last = self.end_k;
        }
        points.into_iter().map(Temperature::kelvin_value).collect()
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for TemperatureSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} K to {} K ({} points, {})",
            self.start_k, self.end_k, self.num_points, self.sweep_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep = TemperatureSweep::from_text("300K", "400K", 5, SweepType::Linear).unwrap();
        let points = sweep.points();
        assert_eq!(points.len(), 5);
        assert!((points[0].value - 300.0).abs() < 1e-9);
        assert!((points[2].value - 350.0).abs() < 1e-9);
        assert!((points[4].value - 400.0).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = TemperatureSweep::from_text("300 K", "3000 K", 3, SweepType::Logarithmic).unwrap();
        let points = sweep.points();
        assert_eq!(points.len(), 3);
        let expected_mid = (300.0_f64 * 3000.0).sqrt();
        assert!((points[1].value - expected_mid).abs() / expected_mid < 1e-9);
        assert_eq!(points[2].value, 3000.0);
    }

    #[test]
    fn celsius_bounds_are_converted() {
        let sweep = TemperatureSweep::from_text("25 C", "125 C", 2, SweepType::Linear).unwrap();
        assert!((sweep.start_k - 298.15).abs() < 1e-9);
        assert!((sweep.end_k - 398.15).abs() < 1e-9);
    }

    #[test]
    fn reject_invalid_sweeps() {
        assert!(TemperatureSweep::from_text("300K", "400K", 1, SweepType::Linear).is_err());
        assert!(TemperatureSweep::from_text("300K", "300K", 5, SweepType::Linear).is_err());
        assert!(TemperatureSweep::from_text("-300 C", "300K", 5, SweepType::Linear).is_err());
    }
}
