//! Chip to BPSK phase-state mapping.

use libm::{cosf, sinf};

use crate::constants::{IQ_AMPLITUDE, PHASE_DEVIATION_RAD};

use super::IqSample;

/// I/Q state for one chip value: phase (2c - 1) * 1.1 rad at the reduced
/// carrier amplitude, saturated to the 16-bit sample range.
pub fn chip_sample(chip: u8) -> IqSample {
    let phase = (2.0 * f32::from(chip) - 1.0) * PHASE_DEVIATION_RAD;
    let amplitude = f32::from(IQ_AMPLITUDE);
    IqSample {
        i: (amplitude * cosf(phase)) as i16,
        q: (amplitude * sinf(phase)) as i16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_states_mirror_in_q() {
        let mark = chip_sample(1);
        let space = chip_sample(0);
        assert_eq!(mark.i, space.i);
        assert_eq!(mark.q, -space.q);
    }

    #[test]
    fn mark_matches_1600_at_plus_1p1_rad() {
        // 1600 cos 1.1 = 725.75, 1600 sin 1.1 = 1425.93
        let mark = chip_sample(1);
        assert_eq!(mark.i, 725);
        assert_eq!(mark.q, 1425);
    }
}
