#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probe, detect and decode must never panic
    let _ = zenrix::detect(data);
    let _ = zenrix::probe(data);

    let limits = zenrix::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let mut sink: Vec<zenrix::Diagnostic> = Vec::new();
    if let Ok(decoded) = zenrix::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode_with_sink(enough::Unstoppable, &mut sink)
    {
        let bpp = decoded.layout.bytes_per_pixel();
        assert_eq!(
            decoded.pixels().len(),
            decoded.width as usize * decoded.height as usize * bpp
        );
        let warnings =
            usize::from(decoded.out_of_range_pixels > 0) + usize::from(data[9] != 0);
        assert_eq!(sink.len(), warnings);
    } else {
        assert_eq!(sink.len(), 1);
    }
});
