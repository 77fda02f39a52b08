use bitvec::prelude::*;

pub fn write_field(bits: &mut BitSlice<u8, Msb0>, offset: usize, width: usize, value: u64) {
    assert!(width >= 1 && width <= 64, "width must be 1..=64");
    assert!(offset + width <= bits.len(), "field must fit in the slice");

    for i in 0..width {
        let bit = (value >> (width - 1 - i)) & 1;
        bits.set(offset + i, bit != 0);
    }
}

pub fn read_field(bits: &BitSlice<u8, Msb0>, offset: usize, width: usize) -> u64 {
    assert!(width >= 1 && width <= 64, "width must be 1..=64");
    assert!(offset + width <= bits.len(), "field must fit in the slice");

    let mut value = 0u64;
    for bit in &bits[offset..offset + width] {
        value = (value << 1) | (*bit as u64);
    }
    value
}
