//! Standard octave-band center frequencies for room-acoustics reporting.

/// The six standard octave bands used by DIN 18041 material data.
pub const OCTAVE_BANDS: [u32; 6] = [125, 250, 500, 1000, 2000, 4000];

/// Octave bands including the optional 8 kHz band.
pub const EXTENDED_OCTAVE_BANDS: [u32; 7] = [125, 250, 500, 1000, 2000, 4000, 8000];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_double_per_octave() {
        for pair in OCTAVE_BANDS.windows(2) {
            assert_eq!(pair[1], pair[0] * 2);
        }
        for pair in EXTENDED_OCTAVE_BANDS.windows(2) {
            assert_eq!(pair[1], pair[0] * 2);
        }
    }

    #[test]
    fn extended_adds_eight_khz() {
        assert_eq!(EXTENDED_OCTAVE_BANDS[..6], OCTAVE_BANDS);
        assert_eq!(EXTENDED_OCTAVE_BANDS[6], 8000);
    }
}
