use light_minibuf::{Error, MiniBuffer};

fn fill_header(storage: &mut [u8]) -> Result<(), Error> {
    let mut buf = MiniBuffer::new(storage);
    buf.try_write_u16_be(0, &[0x0102, 0x0304])?;
    buf.try_write_bytes(4, b"ok")?;
    Ok(())
}

fn main() {
    let mut raw = [0u8; 6];
    fill_header(&mut raw).unwrap();
    assert_eq!(&raw, b"\x01\x02\x03\x04ok");

    let mut short = [0u8; 5];
    assert!(fill_header(&mut short).is_err());
}
