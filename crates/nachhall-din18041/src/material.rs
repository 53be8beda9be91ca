//! Acoustic materials, surfaces, and absorber products.
//!
//! Absorption coefficients are keyed by the six standard octave bands and
//! clamped into `[0, 1]` at construction; an out-of-range coefficient is
//! never stored or retrievable.

use serde::{Deserialize, Serialize};

use nachhall_core::OCTAVE_BANDS;

/// A surface material with frequency-dependent absorption coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticMaterial {
    name: String,
    /// One coefficient per entry of [`OCTAVE_BANDS`], clamped to `[0, 1]`.
    coefficients: [f64; 6],
}

impl AcousticMaterial {
    /// Create a material, clamping each coefficient into `[0, 1]`.
    ///
    /// Coefficients are given in [`OCTAVE_BANDS`] order
    /// (125, 250, 500, 1000, 2000, 4000 Hz).
    pub fn new(name: impl Into<String>, coefficients: [f64; 6]) -> Self {
        Self {
            name: name.into(),
            coefficients: coefficients.map(|c| c.clamp(0.0, 1.0)),
        }
    }

    /// Material name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absorption coefficient at an octave-band frequency.
    ///
    /// Frequencies outside the six standard bands absorb nothing.
    pub fn absorption_at(&self, frequency: u32) -> f64 {
        band_index(frequency).map_or(0.0, |i| self.coefficients[i])
    }
}

/// A room surface with an area and an optional material assignment.
///
/// A surface without a material contributes zero absorption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticSurface {
    /// Surface name (e.g. "ceiling", "north wall").
    pub name: String,
    /// Surface area in m², clamped non-negative.
    pub area: f64,
    /// Assigned material, if any.
    pub material: Option<AcousticMaterial>,
}

impl AcousticSurface {
    /// Create a surface; negative areas are clamped to zero.
    pub fn new(name: impl Into<String>, area: f64, material: Option<AcousticMaterial>) -> Self {
        Self {
            name: name.into(),
            area: area.max(0.0),
            material,
        }
    }

    /// Equivalent absorption area (m² Sabine) at a frequency.
    pub fn absorption_area(&self, frequency: u32) -> f64 {
        self.material
            .as_ref()
            .map_or(0.0, |m| self.area * m.absorption_at(frequency))
    }
}

/// A commercial absorber product for treatment recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsorberProduct {
    /// Product name.
    pub name: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Panel thickness in mm.
    pub thickness_mm: f64,
    /// Noise Reduction Coefficient.
    pub nrc: f64,
    coefficients: [f64; 6],
}

impl AbsorberProduct {
    /// Create a product, clamping coefficients into `[0, 1]`.
    pub fn new(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        thickness_mm: f64,
        nrc: f64,
        coefficients: [f64; 6],
    ) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
            thickness_mm,
            nrc,
            coefficients: coefficients.map(|c| c.clamp(0.0, 1.0)),
        }
    }

    /// Absorption coefficient at an octave-band frequency.
    pub fn absorption_at(&self, frequency: u32) -> f64 {
        band_index(frequency).map_or(0.0, |i| self.coefficients[i])
    }

    /// Panel area needed to supply the given absorption at a frequency.
    ///
    /// `None` when the product is ineffective (zero coefficient) at that
    /// band.
    pub fn required_area(&self, frequency: u32, required_absorption: f64) -> Option<f64> {
        let coefficient = self.absorption_at(frequency);
        if coefficient > 0.0 {
            Some(required_absorption / coefficient)
        } else {
            None
        }
    }
}

fn band_index(frequency: u32) -> Option<usize> {
    OCTAVE_BANDS.iter().position(|&f| f == frequency)
}
