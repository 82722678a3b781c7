//! Palette table, signatures, probing and the format registry.

use enough::Unstoppable;
use zenrix::*;

fn rix_bytes(magic: &[u8; 4], width: u16, height: u16, palette_type: u8) -> Vec<u8> {
    let mut out = magic.to_vec();
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.push(palette_type);
    out.push(0);
    if let Ok(ty) = PaletteType::from_code(palette_type) {
        out.resize(out.len() + ty.profile().byte_len(), 0);
    }
    out.resize(out.len() + width as usize * height as usize, 0);
    out
}

// ── Palette profiles ─────────────────────────────────────────────────

#[test]
fn palette_table_is_closed() {
    let mut recognized = Vec::new();
    for code in 0..=255u8 {
        match PaletteType::from_code(code) {
            Ok(ty) => {
                assert_eq!(ty.code(), code);
                recognized.push(ty);
            }
            Err(RixError::UnsupportedPaletteType(c)) => assert_eq!(c, code),
            Err(other) => panic!("code {code:#04x}: unexpected {other:?}"),
        }
    }
    assert_eq!(recognized, PaletteType::ALL);
}

#[test]
fn palette_profiles() {
    let ega = PaletteType::Ega16.profile();
    assert_eq!(ega.entry_count, 16);
    assert_eq!(ega.max_channel_value, 3);
    assert_eq!(ega.byte_len(), 48);

    let vga = PaletteType::Vga256.profile();
    assert_eq!(vga.entry_count, 256);
    assert_eq!(vga.max_channel_value, 63);
    assert_eq!(vga.byte_len(), 768);
}

#[test]
fn every_profile_maps_full_scale_to_full_scale() {
    for ty in PaletteType::ALL {
        let max = ty.profile().max_channel_value;
        for depth in [OutputDepth::Eight, OutputDepth::Sixteen] {
            let out_max = depth.max_value();
            assert_eq!(rix::scale_channel(0, max, out_max), 0);
            assert_eq!(rix::scale_channel(max, max, out_max), out_max);
            assert!(rix::scale_channel(1, max, out_max) > 0);
        }
    }
}

// ── Signatures ───────────────────────────────────────────────────────

#[test]
fn detect_matches_rix_prefix() {
    assert!(detect(b"RIX3"));
    assert!(detect(b"RIX3\x10\x00\x10\x00\xaf\x00"));
    assert!(detect(b"RIX"));
    assert!(detect(b"RIX2"));
    assert!(detect(b"RIXx"));
    assert!(!detect(b""));
    assert!(!detect(b"RI"));
    assert!(!detect(b"RIY3"));
    assert!(!detect(b"rix3"));
    assert!(!detect(b"BM\x00\x00"));
}

#[test]
fn strict_signature_requires_revision_byte() {
    let sig = Signature::RIX3;
    assert!(sig.matches(b"RIX3"));
    assert!(sig.matches(b"RIX3\x01\x00"));
    assert!(!sig.matches(b"RIX"));
    assert!(!sig.matches(b"RIX2"));
}

#[test]
fn custom_signatures_fit_magic_region() {
    assert_eq!(Signature::new(b"RIX3"), Some(Signature::RIX3));
    assert!(Signature::new(b"").is_none());
    assert!(Signature::new(b"RIX33").is_none());
    let sig = Signature::new(b"SCI").unwrap();
    assert_eq!(sig.bytes(), b"SCI");
    assert!(sig.matches(b"SCI\x00"));
    assert_eq!(Signature::default(), Signature::RIX);
    assert_eq!(Signature::new(b"RIX"), Some(Signature::RIX));
}

#[test]
fn custom_signature_used_for_decode() {
    let data = rix_bytes(b"SCI3", 2, 2, 0xAB);
    assert!(matches!(
        decode(&data, Unstoppable),
        Err(RixError::UnrecognizedFormat)
    ));
    let decoded = DecodeRequest::new(&data)
        .with_signature(Signature::new(b"SCI3").unwrap())
        .decode(Unstoppable)
        .unwrap();
    assert_eq!((decoded.width, decoded.height), (2, 2));
}

// ── Probe ────────────────────────────────────────────────────────────

#[test]
fn probe_reads_header_only() {
    // Header alone, no palette or pixels.
    let data = &rix_bytes(b"RIX3", 320, 200, 0xAF)[..10];
    let info = probe(data).unwrap();
    assert_eq!(info.width, 320);
    assert_eq!(info.height, 200);
    assert_eq!(info.palette_type, PaletteType::Vga256);
    assert_eq!(info.palette, PaletteType::Vga256.profile());
    assert_eq!(info.storage_type, 0);
    assert_eq!(ImageInfo::from_bytes(data).unwrap(), info);
}

#[test]
fn probe_rejects_bad_headers() {
    assert!(matches!(
        probe(b"RIX3\x01"),
        Err(RixError::TruncatedHeader { actual: 5 })
    ));
    assert!(matches!(
        probe(&rix_bytes(b"RIX3", 1, 1, 0x00)),
        Err(RixError::UnsupportedPaletteType(0x00))
    ));
    assert!(matches!(
        probe(&rix_bytes(b"RIX3", 0, 1, 0xAB)),
        Err(RixError::InvalidDimensions { width: 0, height: 1 })
    ));
    let revision_1 = rix_bytes(b"RIX1", 4, 4, 0xAB);
    assert_eq!(probe(&revision_1).unwrap().width, 4);
    assert!(matches!(
        ImageInfo::from_bytes_with_signature(&revision_1, Signature::RIX3),
        Err(RixError::UnrecognizedFormat)
    ));
}

// ── Registry ─────────────────────────────────────────────────────────

#[test]
fn rix_entry_metadata() {
    let entry = FormatEntry::rix();
    assert_eq!(entry.name, "RIX");
    assert_eq!(entry.description, "ColoRIX VGA Paint Image");
    assert!(entry.flags.seekable_stream);
    assert!(!entry.flags.adjoin);
    assert!(entry.decoder.is_some());
    assert!((entry.magic)(b"RIX3"));
    assert!((entry.magic)(b"RIX"));
    assert!(!(entry.magic)(b"RI"));
}

#[test]
fn builtin_registry_detects_and_decodes() {
    let registry = Registry::with_builtin();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("rix").map(|e| e.name), Some("RIX"));

    let data = rix_bytes(b"RIX3", 3, 2, 0xAB);
    assert_eq!(registry.detect(&data).map(|e| e.name), Some("RIX"));
    assert!(registry.detect(b"GIF89a").is_none());
    assert!(registry.detect(&rix_bytes(b"RIX2", 1, 1, 0xAB)).is_some());

    let mut sink: Vec<Diagnostic> = Vec::new();
    let decoded = registry.decode(&data, &mut sink, &Unstoppable).unwrap();
    assert_eq!((decoded.width, decoded.height), (3, 2));
    assert!(sink.is_empty());
}

#[test]
fn registry_reports_decode_failures() {
    let registry = Registry::with_builtin();
    let data = &rix_bytes(b"RIX3", 3, 2, 0xAB)[..20];
    let mut sink: Vec<Diagnostic> = Vec::new();
    let err = registry.decode(data, &mut sink, &Unstoppable).unwrap_err();
    assert!(matches!(err, RixError::TruncatedPalette { .. }));
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].tag, "UnexpectedEndOfFile");
}

#[test]
fn unknown_data_is_unrecognized() {
    let registry = Registry::with_builtin();
    let err = registry
        .decode(b"not an image", &mut IgnoreDiagnostics, &Unstoppable)
        .unwrap_err();
    assert!(matches!(err, RixError::UnrecognizedFormat));
    assert!(
        Registry::new()
            .decode(&rix_bytes(b"RIX3", 1, 1, 0xAB), &mut IgnoreDiagnostics, &Unstoppable)
            .is_err()
    );
}

fn never(_: &[u8]) -> bool {
    false
}

#[test]
fn register_replaces_and_unregister_removes() {
    let mut registry = Registry::with_builtin();
    let replacement = FormatEntry {
        magic: never,
        decoder: None,
        ..FormatEntry::rix()
    };
    let old = registry.register(replacement).unwrap();
    assert!(old.decoder.is_some());
    assert_eq!(registry.len(), 1);
    assert!(registry.detect(b"RIX3").is_none());

    let removed = registry.unregister("Rix").unwrap();
    assert!(removed.decoder.is_none());
    assert!(registry.is_empty());
    assert!(registry.unregister("RIX").is_none());
}

#[test]
fn log_sink_accepts_records() {
    let mut sink = LogDiagnostics;
    sink.report(Diagnostic::warning(INVALID_COLORMAP_INDEX, "test"));
    sink.report(Diagnostic::from_error(&RixError::UnrecognizedFormat));
}
