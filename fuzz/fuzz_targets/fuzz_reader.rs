#![no_main]
use libfuzzer_sys::fuzz_target;

// Decoding from a reader must agree with decoding from a slice.
fuzz_target!(|data: &[u8]| {
    let limits = zenrix::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let from_slice = zenrix::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
    let from_reader = zenrix::DecodeRequest::from_reader(std::io::Cursor::new(data))
        .with_limits(&limits)
        .decode(enough::Unstoppable);

    match (from_slice, from_reader) {
        (Ok(a), Ok(b)) => assert_eq!(a.pixels(), b.pixels()),
        (Err(a), Err(b)) => assert_eq!(a.tag(), b.tag()),
        (a, b) => panic!("slice {:?} vs reader {:?}", a.is_ok(), b.is_ok()),
    }
});
