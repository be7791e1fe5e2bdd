use rand_core::RngCore;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

pub const SIDE: usize = 512;
pub const CHANNELS: usize = 3;
pub const ROW_SHIFT: usize = 17;
pub const COLUMN_SHIFT: usize = 37;
pub const FILE_NAME: &str = "lut_noise.png";

const RED: usize = 0;
const GREEN: usize = 1;

#[derive(Debug, Error)]
pub enum LutNoiseError {
    #[error("failed to write noise texture: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode noise texture: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// Square RGB lookup texture: red is white noise, green is red rolled by
/// (`row_shift`, `column_shift`) with wrap-around, blue is left at zero.
pub struct LutNoise<R: RngCore> {
    side: usize,
    row_shift: usize,
    column_shift: usize,
    rng: R,
    pixels: Vec<u8>,
}

impl<R: RngCore> LutNoise<R> {
    pub fn new(side: usize, rng: R) -> Self {
        Self {
            side,
            row_shift: ROW_SHIFT,
            column_shift: COLUMN_SHIFT,
            rng,
            pixels: vec![0; side * side * CHANNELS],
        }
    }

    pub fn with_shift(mut self, row_shift: usize, column_shift: usize) -> Self {
        self.row_shift = row_shift;
        self.column_shift = column_shift;
        self
    }

    pub fn init(&mut self) {
        self.fill_red();
        self.roll_green();
    }

    fn fill_red(&mut self) {
        log::debug!("filling {0}x{0} red channel", self.side);

        for i in 0..self.side * self.side {
            // top byte, the low bits of xoshiro+ are weak
            self.pixels[i * CHANNELS + RED] = (self.rng.next_u32() >> 24) as u8;
        }
    }

    fn roll_green(&mut self) {
        log::debug!(
            "rolling red into green by ({}, {})",
            self.row_shift,
            self.column_shift
        );

        let side = self.side;

        for row in 0..side {
            let src_row = (row + side - self.row_shift % side) % side;

            for column in 0..side {
                let src_column = (column + side - self.column_shift % side) % side;
                let src = (src_row * side + src_column) * CHANNELS + RED;
                let dst = (row * side + column) * CHANNELS + GREEN;
                self.pixels[dst] = self.pixels[src];
            }
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, row: usize, column: usize) -> [u8; CHANNELS] {
        let i = (row * self.side + column) * CHANNELS;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// One plane of the texture, row-major. Panics if `channel >= CHANNELS`.
    pub fn channel(&self, channel: usize) -> Vec<u8> {
        assert!(channel < CHANNELS, "channel {} out of range", channel);

        self.pixels
            .chunks_exact(CHANNELS)
            .map(|px| px[channel])
            .collect()
    }

    pub fn write_noise_png_to<W: Write>(&self, writer: W) -> Result<(), LutNoiseError> {
        let width = self.side as u32;
        let mut encoder = png::Encoder::new(writer, width, width);

        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header()?;

        png_writer.write_image_data(&self.pixels)?;
        png_writer.finish()?;

        Ok(())
    }

    pub fn write_noise_png<P: AsRef<Path>>(&self, file_name: P) -> Result<(), LutNoiseError> {
        let file = File::create(file_name)?;
        let mut file_writer = BufWriter::new(file);

        self.write_noise_png_to(&mut file_writer)?;
        file_writer.flush()?;

        Ok(())
    }
}
