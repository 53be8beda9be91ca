//! Built-in material and absorber product data.
//!
//! Coefficients are published laboratory values for common construction
//! materials and commercial absorber panels, given in octave-band order
//! (125 to 4000 Hz).

use crate::material::{AbsorberProduct, AcousticMaterial};

/// Common room surface materials with published absorption coefficients.
pub fn builtin_materials() -> Vec<AcousticMaterial> {
    vec![
        AcousticMaterial::new("Concrete wall", [0.01, 0.01, 0.02, 0.02, 0.02, 0.02]),
        AcousticMaterial::new("Gypsum board", [0.29, 0.10, 0.05, 0.04, 0.07, 0.09]),
        AcousticMaterial::new("Wood paneling", [0.15, 0.11, 0.10, 0.09, 0.10, 0.11]),
        AcousticMaterial::new("Carpet, deep pile", [0.08, 0.24, 0.57, 0.69, 0.71, 0.73]),
        AcousticMaterial::new("Curtain, heavy", [0.05, 0.12, 0.35, 0.55, 0.72, 0.70]),
        AcousticMaterial::new("Acoustic ceiling, mineral", [0.45, 0.80, 0.90, 0.95, 0.90, 0.85]),
        AcousticMaterial::new("Melamine foam", [0.20, 0.35, 0.80, 1.00, 1.00, 1.00]),
        AcousticMaterial::new("Glass wool, 50 mm", [0.10, 0.50, 0.90, 1.00, 1.00, 1.00]),
        AcousticMaterial::new("Painted woodchip wallpaper", [0.02, 0.03, 0.04, 0.05, 0.06, 0.07]),
        AcousticMaterial::new("Parquet floor", [0.02, 0.02, 0.03, 0.04, 0.05, 0.06]),
        AcousticMaterial::new("Laminate floor", [0.02, 0.02, 0.03, 0.04, 0.05, 0.06]),
        AcousticMaterial::new("Ceiling panels, PVC", [0.03, 0.04, 0.05, 0.06, 0.07, 0.07]),
    ]
}

/// Commercial absorber products for treatment recommendations.
pub fn absorber_products() -> Vec<AbsorberProduct> {
    vec![
        AbsorberProduct::new(
            "Acoustic mineral wool 50mm",
            "ISOVER",
            50.0,
            0.85,
            [0.20, 0.65, 0.90, 0.95, 0.95, 0.90],
        ),
        AbsorberProduct::new(
            "Acoustic mineral wool 100mm",
            "ISOVER",
            100.0,
            0.95,
            [0.45, 0.85, 0.95, 1.00, 1.00, 0.95],
        ),
        AbsorberProduct::new(
            "Basotect melamine foam 50mm",
            "BASF",
            50.0,
            0.80,
            [0.15, 0.55, 0.85, 0.95, 0.95, 0.90],
        ),
        AbsorberProduct::new(
            "Membrane bass absorber",
            "Vicoustic",
            100.0,
            0.40,
            [0.85, 0.70, 0.35, 0.20, 0.15, 0.10],
        ),
        AbsorberProduct::new(
            "Super Bass Extreme",
            "GIK Acoustics",
            150.0,
            0.45,
            [0.95, 0.80, 0.45, 0.25, 0.15, 0.10],
        ),
        AbsorberProduct::new(
            "Helmholtz resonator 125Hz",
            "Knauf AMF",
            200.0,
            0.30,
            [0.90, 0.40, 0.15, 0.10, 0.05, 0.05],
        ),
        AbsorberProduct::new(
            "Wood wool acoustic panel",
            "Heradesign",
            25.0,
            0.70,
            [0.30, 0.70, 0.85, 0.75, 0.60, 0.55],
        ),
        AbsorberProduct::new(
            "Mineral acoustic ceiling",
            "Armstrong",
            15.0,
            0.75,
            [0.25, 0.50, 0.80, 0.90, 0.85, 0.80],
        ),
        AbsorberProduct::new(
            "Broadband absorber premium",
            "Primacoustic",
            60.0,
            0.90,
            [0.35, 0.75, 0.95, 1.00, 0.95, 0.90],
        ),
        AbsorberProduct::new(
            "Heavy acoustic curtain",
            "Gerriets",
            5.0,
            0.55,
            [0.14, 0.35, 0.55, 0.72, 0.70, 0.65],
        ),
    ]
}

/// Products worth considering at a band, best absorbers first.
///
/// Only products with a coefficient above 0.3 at the target band are
/// considered, and at most five are returned. No absorption shortfall
/// means no recommendation.
pub fn recommend_products(frequency: u32, required_absorption: f64) -> Vec<AbsorberProduct> {
    if required_absorption <= 0.0 {
        return Vec::new();
    }

    let mut candidates: Vec<AbsorberProduct> = absorber_products()
        .into_iter()
        .filter(|p| p.absorption_at(frequency) > 0.3)
        .collect();
    candidates.sort_by(|a, b| {
        b.absorption_at(frequency)
            .total_cmp(&a.absorption_at(frequency))
    });
    candidates.truncate(5);
    candidates
}
