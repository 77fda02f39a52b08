//! Second-order Bessel low-pass smoothing of the chip stream.
//!
//! The coefficients are fixed (Fc = 800 kHz at Fs = 2.5 MHz) and carried
//! verbatim from the deployed filter design rather than derived from a
//! cutoff, so the shaped spectrum stays identical across builds. Bessel's
//! near-linear phase keeps the Biphase-L transitions where the decoder
//! expects them.

use biquad::{Biquad, Coefficients, DirectForm1};

use super::IqSample;

/// y[n] = b0 x[n] + b1 x[n-1] + b2 x[n-2] - a1 y[n-1] - a2 y[n-2]
const BESSEL_COEFFICIENTS: Coefficients<f32> = Coefficients {
    a1: 0.0056757937,
    a2: 0.0718037444,
    b0: 0.2693698845,
    b1: 0.5387397691,
    b2: 0.2693698845,
};

/// Independent I and Q biquads, zeroed at construction. One instance per
/// data window.
pub struct BesselFilter {
    i: DirectForm1<f32>,
    q: DirectForm1<f32>,
}

impl BesselFilter {
    pub fn new() -> Self {
        Self {
            i: DirectForm1::<f32>::new(BESSEL_COEFFICIENTS),
            q: DirectForm1::<f32>::new(BESSEL_COEFFICIENTS),
        }
    }

    pub fn run(&mut self, sample: IqSample) -> IqSample {
        IqSample {
            i: self.i.run(f32::from(sample.i)) as i16,
            q: self.q.run(f32::from(sample.q)) as i16,
        }
    }
}

impl Default for BesselFilter {
    fn default() -> Self {
        Self::new()
    }
}
