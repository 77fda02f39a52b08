pub mod bch;
pub mod config;
pub mod constants;
pub mod frame;
pub mod gpio;
pub mod modulation;
pub mod position;
pub mod radio;
pub mod tracing_init;
pub mod util;

pub use config::{BeaconConfig, BeaconMode, TxConfig};
pub use frame::{build_frame, validate_frame, Frame};
pub use modulation::{generate_waveform, IqSample, Modulator, Waveform};
