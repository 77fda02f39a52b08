use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use rustysarsat::config::{BeaconConfig, BeaconMode, TxConfig};
use rustysarsat::constants::{COUNTRY_CODE_FRANCE, FREQ_DISTRESS_HZ, FREQ_TRAINING_HZ, SAMPLE_RATE};
use rustysarsat::frame::{build_frame, validate_frame};
use rustysarsat::gpio::RfPath;
use rustysarsat::modulation::generate_waveform;
use rustysarsat::radio::iq_file::IqFileWriter;
use rustysarsat::radio::{RadioDriver, TxParams};
use rustysarsat::tracing_init::init_tracing;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Normal frame sync, training channel
    Exercise,
    /// Self-test frame sync, ignored by the satellites
    Test,
}

impl From<Mode> for BeaconMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Exercise => BeaconMode::Exercise,
            Mode::Test => BeaconMode::Test,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rustysarsat", version, about = "COSPAS-SARSAT T.001 distress beacon transmitter")]
struct Cli {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Altitude in metres
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    alt: f64,

    /// 26-bit beacon identifier, hex
    #[arg(long, value_parser = parse_beacon_id, default_value = "0")]
    id: u32,

    /// Country code for frame bits 27..36
    #[arg(long, default_value_t = COUNTRY_CODE_FRANCE)]
    country: u16,

    #[arg(long, value_enum, default_value_t = Mode::Exercise)]
    mode: Mode,

    /// Transmit on the 406 MHz distress channel instead of 403 MHz training
    #[arg(long)]
    distress: bool,

    /// TX attenuation in dB
    #[arg(long, default_value_t = 10.0)]
    attenuation: f64,

    /// Seconds between repeated transmissions
    #[arg(long, default_value_t = 50)]
    interval: u64,

    /// Number of transmissions
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Stereo WAV file receiving the I/Q waveform
    #[arg(long, default_value = "t001_iq.wav")]
    output: PathBuf,

    /// Drive the PA and T/R relay over sysfs GPIO
    #[arg(long)]
    rf_path: bool,
}

fn parse_beacon_id(raw: &str) -> Result<u32, String> {
    let digits = raw.trim_start_matches("0x").trim_start_matches("0X");
    let id = u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex id: {e}"))?;
    if id >= 1 << 26 {
        return Err(format!("{id:#x} does not fit in 26 bits"));
    }
    Ok(id)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let beacon = BeaconConfig {
        latitude_deg: cli.lat,
        longitude_deg: cli.lon,
        altitude_m: cli.alt,
        beacon_id: cli.id,
        country_code: cli.country,
        mode: cli.mode.into(),
    };
    let tx = TxConfig {
        center_freq_hz: if cli.distress { FREQ_DISTRESS_HZ } else { FREQ_TRAINING_HZ },
        attenuation_db: cli.attenuation,
        interval_secs: cli.interval,
        repeat_count: cli.count,
    };

    if cli.distress {
        warn!("406 MHz selected: this is the live distress channel");
    }

    let mut rf_path = if cli.rf_path { Some(RfPath::new()?) } else { None };
    let mut driver = IqFileWriter::new(&cli.output);
    let params = TxParams {
        sample_rate_hz: SAMPLE_RATE,
        center_freq_hz: tx.center_freq_hz,
        attenuation_db: tx.attenuation_db,
    };

    for n in 0..tx.repeat_count {
        if n > 0 {
            thread::sleep(Duration::from_secs(tx.interval_secs));
        }

        let frame = build_frame(&beacon);
        if !validate_frame(&frame) {
            return Err("frame failed BCH self-check after build".into());
        }
        println!("{frame}");

        let waveform = generate_waveform(&frame)?;
        info!(
            transmission = n + 1,
            of = tx.repeat_count,
            samples = waveform.len(),
            duration_secs = f64::from(waveform.duration_secs()),
            "transmitting"
        );

        if let Some(rf) = rf_path.as_mut() {
            rf.prepare_tx()?;
        }
        let pushed = driver.transmit(&waveform, &params);
        if let Some(rf) = rf_path.as_mut() {
            rf.end_tx()?;
        }
        pushed?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("transmission failed: {e}");
            eprintln!("Transmission failed: {e}");
            ExitCode::FAILURE
        }
    }
}
