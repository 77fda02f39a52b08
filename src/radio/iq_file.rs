//! File-backed radio driver: interleaved int16 I/Q as a two-channel WAV.
//!
//! The format opens anywhere (GNU Radio, inspectrum, plain `hound`
//! readers): channel 0 is I, channel 1 is Q, at the true 2.5 MHz sample
//! rate.

use std::path::PathBuf;

use hound::{SampleFormat, WavSpec, WavWriter};
use snafu::ResultExt;
use tracing::info;

use crate::modulation::Waveform;

use super::{CaptureSnafu, RadioDriver, RadioError, TxParams};

pub struct IqFileWriter {
    path: PathBuf,
}

impl IqFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RadioDriver for IqFileWriter {
    fn transmit(&mut self, waveform: &Waveform, params: &TxParams) -> Result<(), RadioError> {
        let spec = WavSpec {
            channels: 2,
            sample_rate: params.sample_rate_hz,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let path = self.path.display().to_string();
        let mut writer = WavWriter::create(&self.path, spec).context(CaptureSnafu { path: path.clone() })?;
        for sample in waveform.samples() {
            writer.write_sample(sample.i).context(CaptureSnafu { path: path.clone() })?;
            writer.write_sample(sample.q).context(CaptureSnafu { path: path.clone() })?;
        }
        writer.finalize().context(CaptureSnafu { path: path.clone() })?;

        info!(
            path = %path,
            samples = waveform.len(),
            center_freq_hz = params.center_freq_hz,
            attenuation_db = params.attenuation_db,
            "waveform captured"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BeaconConfig, BeaconMode};
    use crate::constants::{FREQ_TRAINING_HZ, SAMPLE_RATE};
    use crate::frame::build_frame;
    use crate::modulation::generate_waveform;

    #[test]
    fn capture_round_trips_through_hound() {
        crate::tracing_init::init_test_tracing();

        let frame = build_frame(&BeaconConfig::new(0.0, 0.0, 0.0, 0, BeaconMode::Exercise));
        let waveform = generate_waveform(&frame).unwrap();

        let path = std::env::temp_dir().join("rustysarsat_capture_test.wav");
        let params = TxParams {
            sample_rate_hz: SAMPLE_RATE,
            center_freq_hz: FREQ_TRAINING_HZ,
            attenuation_db: 10.0,
        };
        IqFileWriter::new(&path).transmit(&waveform, &params).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 2);
        assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
        assert_eq!(reader.len() as usize, waveform.len() * 2);

        let head: Vec<i16> = reader.samples::<i16>().take(4).map(|s| s.unwrap()).collect();
        assert_eq!(head, vec![1600, 0, 1600, 0]);

        std::fs::remove_file(&path).unwrap();
    }
}
