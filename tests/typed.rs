//! Typed pixel views (`rgb` / `imgref` features).
#![cfg(feature = "imgref")]

use enough::Unstoppable;
use rgb::RGB8;
use zenrix::*;

fn ega_2x2() -> Vec<u8> {
    let mut data = b"RIX3\x02\x00\x02\x00\xab\x00".to_vec();
    let mut pal = vec![0u8; 48];
    pal[..6].copy_from_slice(&[3, 0, 0, 0, 0, 3]);
    data.extend_from_slice(&pal);
    data.extend_from_slice(&[0, 1, 1, 0]);
    data
}

#[test]
fn rgb8_view() {
    let decoded = decode(&ega_2x2(), Unstoppable).unwrap();
    let px: &[RGB8] = decoded.as_pixels().unwrap();
    assert_eq!(px[0], RGB8::new(255, 0, 0));
    assert_eq!(px[1], RGB8::new(0, 0, 255));

    let img = decoded.as_imgref::<RGB8>().unwrap();
    assert_eq!((img.width(), img.height()), (2, 2));
    assert_eq!(decoded.to_imgvec::<RGB8>().unwrap().into_buf(), px.to_vec());
}

#[test]
fn rgb16_output_is_not_rgb8() {
    let decoded = DecodeRequest::new(&ega_2x2())
        .with_output_depth(OutputDepth::Sixteen)
        .decode(Unstoppable)
        .unwrap();
    let err = decoded.as_pixels::<RGB8>().unwrap_err();
    assert!(matches!(
        err,
        RixError::LayoutMismatch {
            expected: PixelLayout::Rgb8,
            actual: PixelLayout::Rgb16,
        }
    ));
}
