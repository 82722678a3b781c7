#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn rix(width: u16, height: u16, palette_type: u8, entries: usize) -> Vec<u8> {
    let mut out = b"RIX3".to_vec();
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.push(palette_type);
    out.push(0);
    for i in 0..entries {
        let v = (i % 64) as u8;
        out.extend_from_slice(&[v, v / 2, 63 - v]);
    }
    for i in 0..width as usize * height as usize {
        out.push(i as u8);
    }
    out
}

fn main() {
    use std::fs;
    let dirs = ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_reader"];
    for dir in dirs {
        fs::create_dir_all(dir).unwrap();

        // VGA 256-color 16x16, every index once
        fs::write(format!("{dir}/vga_16x16.rix"), rix(16, 16, 0xAF, 256)).unwrap();

        // EGA 16-color 4x4; indices past 15 are out of range
        fs::write(format!("{dir}/ega_4x4.rix"), rix(4, 4, 0xAB, 16)).unwrap();

        // EGA 32x2: half the indices are out of range
        fs::write(format!("{dir}/ega_oob_32x2.rix"), rix(32, 2, 0xAB, 16)).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/magic_only.bin"), b"RIX3").unwrap();
        fs::write(format!("{dir}/zero_width.bin"), rix(0, 4, 0xAF, 256)).unwrap();
        fs::write(format!("{dir}/bad_palette_type.bin"), rix(2, 2, 0x00, 0)).unwrap();
        let mut short = rix(8, 8, 0xAF, 256);
        short.truncate(10 + 768 + 20);
        fs::write(format!("{dir}/short_pixels.bin"), short).unwrap();
    }

    println!("Generated seed corpora in {dirs:?}");
}
