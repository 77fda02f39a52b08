//! The radio driver seam.
//!
//! The core hands a finished waveform to a driver and expects a single
//! blocking transmission: the driver owns tuning, attenuation, and buffer
//! draining. The SDR backend (ADALM-Pluto over libiio) lives outside this
//! crate; [`iq_file::IqFileWriter`] is the in-tree implementation used for
//! bench captures and tests.

use snafu::Snafu;

use crate::modulation::Waveform;

pub mod iq_file;

/// Per-transmission radio settings.
#[derive(Debug, Clone, Copy)]
pub struct TxParams {
    pub sample_rate_hz: u32,
    pub center_freq_hz: u64,
    pub attenuation_db: f64,
}

#[derive(Debug, Snafu)]
pub enum RadioError {
    #[snafu(display("could not write I/Q capture {path}: {source}"))]
    Capture { path: String, source: hound::Error },
}

/// Pushes one waveform to the air (or to a capture file) and blocks until
/// the buffer has drained.
pub trait RadioDriver {
    fn transmit(&mut self, waveform: &Waveform, params: &TxParams) -> Result<(), RadioError>;
}
