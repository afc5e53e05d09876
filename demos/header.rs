use light_minibuf::{MiniBuffer, byte_count};

// version: 3 bits, kind: 5 bits, flags: 8 bits, then two big-endian words
const VERSION_BITS: usize = 3;
const KIND_BITS: usize = 5;
const FLAG_BITS: usize = 8;
const PREFIX_LEN: usize = byte_count(VERSION_BITS + KIND_BITS + FLAG_BITS);

fn main() {
    let mut buf = MiniBuffer::<[u8; PREFIX_LEN + 8]>::zeroed();

    buf.set_bits(0, 2, VERSION_BITS);
    buf.set_bits(VERSION_BITS, 0b10110, KIND_BITS);
    buf.set_bit_range(8..8 + FLAG_BITS);
    buf.clear_bit(15);
    buf.write_u32_be(PREFIX_LEN, &[0xCAFE_BABE, 42]);

    println!("{buf:?}");

    let version = buf.read_bits(0, VERSION_BITS);
    let kind = buf.read_bits(VERSION_BITS, KIND_BITS);
    let flags = buf.read_bits(8, FLAG_BITS);
    let mut words = [0u32; 2];
    let word_count = words.len();
    buf.read_u32_be(&mut words, PREFIX_LEN, word_count);

    println!("version={version} kind={kind:#07b} flags={flags:#010b} words={words:x?}");
    assert!(buf.try_write_u32_be(PREFIX_LEN + 4, &[0, 0]).is_err());
}
