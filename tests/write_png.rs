use lut_noise::{LutNoise, COLUMN_SHIFT, FILE_NAME, ROW_SHIFT, SIDE};

use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::fs::{self, File};
use std::path::PathBuf;

/// Temp directory removed on drop, even when an assert fails.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{}-{}", name, std::process::id()));
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn writes_decodable_rgb_png() {
    let dir = ScratchDir::new("lut-noise");
    let path = dir.0.join(FILE_NAME);

    let mut lut_noise = LutNoise::new(SIDE, Xoshiro256Plus::seed_from_u64(42));
    lut_noise.init();
    lut_noise.write_noise_png(&path).unwrap();

    let decoder = png::Decoder::new(File::open(&path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut image = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut image).unwrap();

    assert_eq!((info.width, info.height), (SIDE as u32, SIDE as u32));
    assert_eq!(info.color_type, png::ColorType::Rgb);

    let at = |r: usize, c: usize, channel: usize| image[(r * SIDE + c) * 3 + channel];

    for row in 0..SIDE {
        for column in 0..SIDE {
            let src_row = (row + SIDE - ROW_SHIFT) % SIDE;
            let src_column = (column + SIDE - COLUMN_SHIFT) % SIDE;

            assert_eq!(at(row, column, 2), 0);
            assert_eq!(at(row, column, 1), at(src_row, src_column, 0));
        }
    }
}
