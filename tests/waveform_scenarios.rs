//! Waveform synthesis scenarios: length identity, carrier purity, chip
//! balance, and the shape of the first data chip.

use rustysarsat::constants::*;
use rustysarsat::frame::build_frame;
use rustysarsat::modulation::{biphase, generate_waveform};
use rustysarsat::{BeaconConfig, BeaconMode};

fn reference_waveform() -> rustysarsat::Waveform {
    let frame = build_frame(&BeaconConfig::new(
        42.95463,
        1.364479,
        1080.0,
        0x123456,
        BeaconMode::Exercise,
    ));
    generate_waveform(&frame).unwrap()
}

#[test]
fn length_is_the_same_for_every_frame() {
    for (lat, lon) in [(0.0, 0.0), (42.95463, 1.364479), (-45.0, 170.0)] {
        let frame = build_frame(&BeaconConfig::new(lat, lon, 0.0, 1, BeaconMode::Exercise));
        let waveform = generate_waveform(&frame).unwrap();
        assert_eq!(waveform.len(), 1_298_560);
    }
}

#[test]
fn carrier_preamble_is_pure() {
    let waveform = reference_waveform();
    for (n, sample) in waveform.samples()[..CARRIER_SAMPLES].iter().enumerate() {
        assert_eq!((sample.i, sample.q), (1600, 0), "carrier sample {n}");
    }
}

#[test]
fn data_window_is_chip_balanced() {
    let frame = build_frame(&BeaconConfig::new(7.25, -12.5, 2500.0, 0x2ABCDE, BeaconMode::Test));
    let ones: usize = biphase::chips(&frame).iter().map(|&c| c as usize).sum();
    assert_eq!(ones, 144 * 8);
}

#[test]
fn first_data_chip_rises_toward_plus_deviation() {
    let waveform = reference_waveform();
    let data = &waveform.samples()[CARRIER_SAMPLES..];

    // Bit 1 is a preamble 1, so the first chip sits at +1.1 rad:
    // (725, 1425) before shaping. The filter's first output is b0 times
    // that, then it settles to unity gain within the 390-sample hold.
    assert_eq!((data[0].i, data[0].q), (195, 383));

    let settled = data[SAMPLES_PER_CHIP - 1];
    assert!((720..=730).contains(&settled.i), "settled I = {}", settled.i);
    assert!((1420..=1430).contains(&settled.q), "settled Q = {}", settled.q);
}

#[test]
fn mid_bit_transition_flips_the_q_sign() {
    let waveform = reference_waveform();
    let data = &waveform.samples()[CARRIER_SAMPLES..];

    // Bit 1 is a 1: chips 0..7 high, chips 8..15 low. Probe the last
    // sample of each half, clear of the filter transient.
    let first_half = data[8 * SAMPLES_PER_CHIP - 1];
    let second_half = data[16 * SAMPLES_PER_CHIP - 1];
    assert!(first_half.q > 1400);
    assert!(second_half.q < -1400);
    assert!(first_half.i > 700 && second_half.i > 700);
}

#[test]
fn interleaved_buffer_doubles_the_length() {
    let waveform = reference_waveform();
    let interleaved = waveform.interleaved();
    assert_eq!(interleaved.len(), 2 * waveform.len());
    assert_eq!(interleaved[0], 1600);
    assert_eq!(interleaved[1], 0);
}
