// C/S T.001 "Specification for Cospas-Sarsat 406 MHz Distress Beacons",
// Annex A (message format) and Annex B (modulation).
// https://www.cospas-sarsat.int/en/documents-pro/system-documents

/// Total message length, long format. Bit 1 is transmitted first.
pub const FRAME_BITS: usize = 144;

// Bit positions below are T.001 bit numbers (1-based).

pub const PREAMBLE_START: usize = 1;
pub const PREAMBLE_LEN: usize = 15;

pub const SYNC_START: usize = 16;
pub const SYNC_LEN: usize = 9;
/// Frame sync for a normal (exercise) message.
pub const SYNC_NORMAL: u16 = 0b000101111;
/// Frame sync for a self-test message.
pub const SYNC_SELF_TEST: u16 = 0b011010000;

/// Format flag, 1 = long message.
pub const FORMAT_FLAG_BIT: usize = 25;
/// Protocol flag, 0 = location protocol.
pub const PROTOCOL_FLAG_BIT: usize = 26;

pub const COUNTRY_START: usize = 27;
pub const COUNTRY_LEN: usize = 10;
/// ITU maritime identification digits for France.
pub const COUNTRY_CODE_FRANCE: u16 = 227;

pub const PROTOCOL_CODE_START: usize = 37;
pub const PROTOCOL_CODE_LEN: usize = 4;
/// Location protocol code for an ELT(DT).
pub const PROTOCOL_CODE_ELT_DT: u8 = 0b1001;

pub const BEACON_ID_START: usize = 41;
pub const BEACON_ID_LEN: usize = 26;

pub const COARSE_POSITION_START: usize = 67;
pub const COARSE_POSITION_LEN: usize = 19;

// Protected data field 1: bits 25..85 inclusive, covered by BCH1.
pub const PDF1_START: usize = 25;
pub const PDF1_LEN: usize = 61;
pub const BCH1_START: usize = 86;
pub const BCH1_LEN: usize = 21;
// x^21 + x^18 + x^17 + x^14 + x^13 + x^12 + x^11 + x^8 + x^7 + x^6 + x^5 + x + 1
pub const BCH1_GENERATOR: u32 = 0x26D9E3;

pub const ACTIVATION_START: usize = 107;
pub const ACTIVATION_LEN: usize = 2;
/// Manual activation.
pub const ACTIVATION_MANUAL: u8 = 0b00;

pub const ALTITUDE_START: usize = 109;
pub const ALTITUDE_LEN: usize = 4;

pub const FRESHNESS_START: usize = 113;
pub const FRESHNESS_LEN: usize = 2;
/// Encoded position is less than 4 hours old.
pub const FRESHNESS_RECENT: u8 = 0b10;

pub const FINE_OFFSET_START: usize = 115;
pub const FINE_OFFSET_LEN: usize = 18;

// Protected data field 2: bits 107..132 inclusive, covered by BCH2.
pub const PDF2_START: usize = 107;
pub const PDF2_LEN: usize = 26;
pub const BCH2_START: usize = 133;
pub const BCH2_LEN: usize = 12;
// x^12 + x^10 + x^8 + x^5 + x^4 + x^3 + 1
pub const BCH2_GENERATOR: u32 = 0x1539;

// Modulation (T.001 Annex B): 160 ms unmodulated carrier, then the 144 bits
// at 400 baud as Biphase-L BPSK with +/-1.1 rad phase deviation.

pub const SAMPLE_RATE: u32 = 2_500_000;
pub const BIT_RATE: u32 = 400;
pub const CHIPS_PER_BIT: usize = 16;
pub const CHIP_RATE: u32 = 6_400;
/// Zero-order-hold factor. 2_500_000 / 6_400 = 390.625; the fractional
/// part is dropped, a 0.16 % chip-rate bias within decoder tolerance.
pub const SAMPLES_PER_CHIP: usize = 390;

/// 160 ms of pure carrier before the first data bit.
pub const CARRIER_SAMPLES: usize = 400_000;
pub const DATA_CHIPS: usize = FRAME_BITS * CHIPS_PER_BIT;
pub const DATA_SAMPLES: usize = DATA_CHIPS * SAMPLES_PER_CHIP;
pub const WAVEFORM_SAMPLES: usize = CARRIER_SAMPLES + DATA_SAMPLES;

/// Peak sample amplitude (about -20 dBFS), leaving headroom for the
/// shaping filter's impulse response.
pub const IQ_AMPLITUDE: i16 = 1600;
pub const PHASE_DEVIATION_RAD: f32 = 1.1;

/// Training and exercise transmissions stay off the distress channel.
pub const FREQ_TRAINING_HZ: u64 = 403_000_000;
/// 406 MHz distress channel. Real emergencies only.
pub const FREQ_DISTRESS_HZ: u64 = 406_000_000;
