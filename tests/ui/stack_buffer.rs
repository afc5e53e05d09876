use light_minibuf::{MiniBuffer, byte_count};

const HEADER_BITS: usize = 12;

fn main() {
    let mut buf = MiniBuffer::<[u8; byte_count(HEADER_BITS) + 4]>::zeroed();
    buf.set_bits(0, 0xABC, HEADER_BITS);
    buf.write_u32_le(2, &[0xDEAD_BEEF]);

    let mut out = [0u32; 1];
    buf.read_u32_le(&mut out, 2, 1);
    assert_eq!(out[0], 0xDEAD_BEEF);
    assert_eq!(buf.read_bits(0, HEADER_BITS), 0xABC);
}
