//! Sabine's formula and absorption planning queries.
//!
//! `RT60 = 0.161 · V / A` relates room volume to total equivalent
//! absorption area. Zero volume or zero absorption makes the prediction
//! undefined; that is a normal absence, not an error.

use nachhall_core::OCTAVE_BANDS;

use crate::material::AcousticSurface;

/// Sabine constant for air at 20 °C and 50 % relative humidity.
pub const SABINE_CONSTANT: f64 = 0.161;

/// Theoretical RT60 from room volume (m³) and total absorption (m² Sabine).
///
/// `None` when either quantity is not positive.
pub fn rt60_sabine(volume: f64, absorption: f64) -> Option<f64> {
    if volume <= 0.0 || absorption <= 0.0 {
        return None;
    }
    Some(SABINE_CONSTANT * volume / absorption)
}

/// Total equivalent absorption area of a set of surfaces at one frequency.
pub fn total_absorption(surfaces: &[AcousticSurface], frequency: u32) -> f64 {
    surfaces.iter().map(|s| s.absorption_area(frequency)).sum()
}

/// Predicted RT60 per standard octave band for a furnished room.
///
/// Bands where the surfaces absorb nothing yield `None` entries.
pub fn rt60_spectrum(volume: f64, surfaces: &[AcousticSurface]) -> Vec<(u32, Option<f64>)> {
    OCTAVE_BANDS
        .iter()
        .map(|&frequency| {
            (
                frequency,
                rt60_sabine(volume, total_absorption(surfaces, frequency)),
            )
        })
        .collect()
}

/// Additional absorption (m² Sabine) needed to reach a target RT60.
///
/// Zero when the target is not positive or the room already meets it;
/// otherwise `max(0, 0.161·V/target − current_absorption)`.
pub fn required_absorption(
    current_rt60: f64,
    target_rt60: f64,
    volume: f64,
    current_absorption: f64,
) -> f64 {
    if target_rt60 <= 0.0 || current_rt60 <= target_rt60 {
        return 0.0;
    }

    let target_absorption = SABINE_CONSTANT * volume / target_rt60;
    (target_absorption - current_absorption).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::AcousticMaterial;

    #[test]
    fn sabine_formula_basic() {
        // 100 m³ with 16.1 m² Sabine -> exactly 1 s
        let rt60 = rt60_sabine(100.0, 16.1).unwrap();
        assert!((rt60 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_absorption_or_volume_is_undefined() {
        assert_eq!(rt60_sabine(100.0, 0.0), None);
        assert_eq!(rt60_sabine(0.0, 16.1), None);
        assert_eq!(rt60_sabine(-10.0, 16.1), None);
    }

    #[test]
    fn required_absorption_round_trip() {
        // Target absorption = 0.161*100/1.0 = 16.1; deficit = 16.1 - 8.05
        let needed = required_absorption(2.0, 1.0, 100.0, 8.05);
        assert!((needed - 8.05).abs() < 1e-9);
    }

    #[test]
    fn no_deficit_when_already_compliant() {
        assert_eq!(required_absorption(0.8, 1.0, 100.0, 5.0), 0.0);
        assert_eq!(required_absorption(1.0, 1.0, 100.0, 5.0), 0.0);
    }

    #[test]
    fn no_deficit_for_nonpositive_target() {
        assert_eq!(required_absorption(2.0, 0.0, 100.0, 5.0), 0.0);
        assert_eq!(required_absorption(2.0, -1.0, 100.0, 5.0), 0.0);
    }

    #[test]
    fn required_absorption_never_negative() {
        // Current absorption already exceeds the target requirement
        assert_eq!(required_absorption(2.0, 1.0, 100.0, 50.0), 0.0);
    }

    #[test]
    fn total_absorption_sums_surfaces() {
        let absorber = AcousticMaterial::new("panel", [0.2, 0.65, 0.9, 0.95, 0.95, 0.9]);
        let concrete = AcousticMaterial::new("concrete", [0.01, 0.01, 0.02, 0.02, 0.02, 0.03]);
        let surfaces = vec![
            AcousticSurface::new("ceiling", 20.0, Some(absorber)),
            AcousticSurface::new("floor", 20.0, Some(concrete)),
            AcousticSurface::new("window", 4.0, None),
        ];

        let a = total_absorption(&surfaces, 500);
        assert!((a - (20.0 * 0.9 + 20.0 * 0.02)).abs() < 1e-12);
    }

    #[test]
    fn spectrum_covers_standard_bands() {
        let material = AcousticMaterial::new("panel", [0.2, 0.65, 0.9, 0.95, 0.95, 0.9]);
        let surfaces = vec![AcousticSurface::new("ceiling", 25.0, Some(material))];

        let spectrum = rt60_spectrum(200.0, &surfaces);
        assert_eq!(spectrum.len(), 6);
        assert!(spectrum.iter().all(|(_, rt60)| rt60.is_some()));

        // More absorption at high frequencies -> shorter RT60
        let low = spectrum[0].1.unwrap();
        let high = spectrum[4].1.unwrap();
        assert!(high < low);
    }

    #[test]
    fn spectrum_with_bare_surfaces_is_undefined() {
        let surfaces = vec![AcousticSurface::new("bare", 100.0, None)];
        let spectrum = rt60_spectrum(200.0, &surfaces);
        assert!(spectrum.iter().all(|(_, rt60)| rt60.is_none()));
    }
}
