//! Physical constants used by every property and reaction calculation.
//!
//! Constants travel as a value so that test fixtures and callers working with
//! other reference states can substitute their own set.

/// Universal gas constant [J/(mol·K)].
pub const R_J_PER_MOL_K: f64 = 8.314_462_618;

/// Reference pressure for ideal-gas standard states [Pa].
pub const P_REF_PA: f64 = 101_325.0;

/// Reference temperature for standard reaction properties [K].
pub const T_REF_K: f64 = 298.15;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicalConstants {
    /// Gas constant [J/(mol·K)]
    pub r: f64,
    /// Reference pressure [Pa]
    pub p_ref: f64,
    /// Reference temperature [K]
    pub t_ref: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            r: R_J_PER_MOL_K,
            p_ref: P_REF_PA,
            t_ref: T_REF_K,
        }
    }
}

impl PhysicalConstants {
    /// `ln(P / P_ref)`, the ideal-gas pressure correction.
    pub fn ln_pressure_ratio(&self, p_pa: f64) -> f64 {
        (p_pa / self.p_ref).ln()
    }
}
