// tc-core/src/units.rs

use std::fmt;
use std::str::FromStr;

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomTemperature};
use uom::si::pressure::pascal;
use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit, degree_rankine, kelvin};

use crate::error::{TcError, TcResult};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type AbsTemperature = UomTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    Pressure::new::<pascal>(v)
}

/// Temperature scale tag carried alongside a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TempUnit {
    K,
    C,
    F,
    R,
}

impl TempUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::K => "K",
            TempUnit::C => "C",
            TempUnit::F => "F",
            TempUnit::R => "R",
        }
    }
}

impl FromStr for TempUnit {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "k" | "kelvin" => Ok(TempUnit::K),
            "c" | "°c" | "celsius" => Ok(TempUnit::C),
            "f" | "°f" | "fahrenheit" => Ok(TempUnit::F),
            "r" | "°r" | "rankine" => Ok(TempUnit::R),
            _ => Err(TcError::UnsupportedUnit {
                unit: s.to_string(),
                reason: "temperature unit must be K, C, F or R",
            }),
        }
    }
}

/// A temperature as supplied by a caller: raw value plus its scale.
///
/// Every numeric use goes through [`Temperature::kelvin`]; the conversion is
/// total for the four supported scales.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    pub value: f64,
    pub unit: TempUnit,
}

impl Temperature {
    pub fn new(value: f64, unit: TempUnit) -> Self {
        Self { value, unit }
    }

    pub fn kelvin_value(value: f64) -> Self {
        Self::new(value, TempUnit::K)
    }

    /// Absolute temperature as a uom quantity.
    pub fn absolute(&self) -> AbsTemperature {
        match self.unit {
            TempUnit::K => AbsTemperature::new::<kelvin>(self.value),
            TempUnit::C => AbsTemperature::new::<degree_celsius>(self.value),
            TempUnit::F => AbsTemperature::new::<degree_fahrenheit>(self.value),
            TempUnit::R => AbsTemperature::new::<degree_rankine>(self.value),
        }
    }

    /// Value in kelvin.
    pub fn kelvin(&self) -> f64 {
        self.absolute().get::<kelvin>()
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl FromStr for Temperature {
    type Err = TcError;

    /// Parse `"1000 K"`, `"25C"`, `"77 °F"`, `"540R"`; a bare number is kelvin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_value_and_unit(s)?;
        Ok(Self::new(value, unit.parse()?))
    }
}

/// Parse an absolute pressure, returning pascal. A bare number is pascal.
pub fn parse_pressure(input: &str) -> TcResult<Pressure> {
    let (value, unit) = split_value_and_unit(input)?;

    let p = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5,
        "mbar" | "millibar" => value * 100.0,
        "atm" => value * 101_325.0,
        "torr" => value * 133.322,
        "psia" => value * 6_894.76,
        _ => {
            return Err(TcError::UnsupportedUnit {
                unit,
                reason: "pressure unit must be Pa, kPa, MPa, bar, mbar, atm, torr or psia",
            });
        }
    };

    if !(p.is_finite() && p > 0.0) {
        return Err(TcError::InvalidArg {
            what: "absolute pressure must be positive",
        });
    }

    Ok(pa(p))
}

fn split_value_and_unit(input: &str) -> TcResult<(f64, String)> {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| TcError::Parse {
        input: input.to_string(),
        reason: "expected a number followed by an optional unit",
    })?;

    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn kelvin_conversions() {
        assert!(close(Temperature::new(300.0, TempUnit::K).kelvin(), 300.0));
        assert!(close(Temperature::new(0.0, TempUnit::C).kelvin(), 273.15));
        assert!(close(Temperature::new(32.0, TempUnit::F).kelvin(), 273.15));
        assert!(close(Temperature::new(540.0, TempUnit::R).kelvin(), 300.0));
    }

    #[test]
    fn parse_temperature_text() {
        let t: Temperature = "1000 K".parse().unwrap();
        assert_eq!(t, Temperature::kelvin_value(1000.0));

        let t: Temperature = "25C".parse().unwrap();
        assert_eq!(t.unit, TempUnit::C);
        assert!(close(t.kelvin(), 298.15));

        let t: Temperature = "300".parse().unwrap();
        assert_eq!(t.unit, TempUnit::K);
    }

    #[test]
    fn reject_unknown_temperature_unit() {
        assert!(matches!(
            "300 X".parse::<Temperature>(),
            Err(TcError::UnsupportedUnit { .. })
        ));
        assert!(matches!(
            "hot".parse::<Temperature>(),
            Err(TcError::Parse { .. })
        ));
    }

    #[test]
    fn parse_pressure_units() {
        assert!(close(parse_pressure("101325 Pa").unwrap().value, 101_325.0));
        assert!(close(parse_pressure("1 bar").unwrap().value, 1e5));
        assert!(close(parse_pressure("2atm").unwrap().value, 202_650.0));
        assert!(parse_pressure("-1 bar").is_err());
        assert!(parse_pressure("3 furlongs").is_err());
    }
}
