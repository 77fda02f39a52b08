//! Frame to complex-baseband waveform synthesis.
//!
//! A transmission is 160 ms of unmodulated carrier followed by 360 ms of
//! Biphase-L BPSK at 400 baud: each frame bit becomes 16 chips, each chip
//! a +/-1.1 rad phase state held for 390 samples at 2.5 MSPS, smoothed by
//! a second-order Bessel low-pass. The carrier portion bypasses the filter
//! so the data window always starts from zeroed filter state.

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::constants::*;
use crate::frame::Frame;

use bessel::BesselFilter;

pub mod bessel;
pub mod biphase;
pub mod bpsk;

/// One complex baseband sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IqSample {
    pub i: i16,
    pub q: i16,
}

impl IqSample {
    /// The unmodulated carrier state.
    pub const fn carrier() -> Self {
        Self { i: IQ_AMPLITUDE, q: 0 }
    }
}

/// An owned I/Q sample buffer carrying its own length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    samples: Vec<IqSample>,
}

impl Waveform {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[IqSample] {
        &self.samples
    }

    /// Interleaved i, q, i, q... as the radio drivers expect it.
    pub fn interleaved(&self) -> Vec<i16> {
        self.samples.iter().flat_map(|s| [s.i, s.q]).collect()
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / SAMPLE_RATE as f32
    }
}

#[derive(Debug, Snafu)]
pub enum ModulationError {
    /// The waveform buffer is about 5 MiB; treat a failed allocation as
    /// fatal for this transmission rather than emitting a partial buffer.
    #[snafu(display("could not allocate the {samples}-sample waveform buffer"))]
    Allocation {
        samples: usize,
        source: std::collections::TryReserveError,
    },
}

pub struct Modulator {
    mark: IqSample,
    space: IqSample,
}

impl Modulator {
    pub fn new() -> Self {
        Self {
            mark: bpsk::chip_sample(1),
            space: bpsk::chip_sample(0),
        }
    }

    /// Render a frame as the full 520 ms transmission.
    pub fn synthesize(&self, frame: &Frame) -> Result<Waveform, ModulationError> {
        let mut samples: Vec<IqSample> = Vec::new();
        samples
            .try_reserve_exact(WAVEFORM_SAMPLES)
            .context(AllocationSnafu { samples: WAVEFORM_SAMPLES })?;

        samples.resize(CARRIER_SAMPLES, IqSample::carrier());

        for chip in biphase::chips(frame) {
            let state = if chip == 1 { self.mark } else { self.space };
            samples.extend(std::iter::repeat(state).take(SAMPLES_PER_CHIP));
        }

        let mut filter = BesselFilter::new();
        for sample in &mut samples[CARRIER_SAMPLES..] {
            *sample = filter.run(*sample);
        }

        debug!(samples = samples.len(), "waveform synthesized");
        Ok(Waveform { samples })
    }
}

impl Default for Modulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `frame` as a freshly allocated waveform.
pub fn generate_waveform(frame: &Frame) -> Result<Waveform, ModulationError> {
    Modulator::new().synthesize(frame)
}
