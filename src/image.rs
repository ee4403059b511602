use crate::*;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

pub const PPM_MAX_COLOR: u32 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PpmFormat {
    /// `P3`, whitespace separated decimal samples.
    Ascii,
    /// `P6`, raw bytes.
    Binary,
}

impl Default for PpmFormat {
    fn default() -> Self {
        PpmFormat::Binary
    }
}

impl PpmFormat {
    fn magic(self) -> &'static str {
        match self {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6",
        }
    }
}

impl FromStr for PpmFormat {
    type Err = ImageError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p3" | "3" | "ascii" => Ok(PpmFormat::Ascii),
            "p6" | "6" | "binary" => Ok(PpmFormat::Binary),
            _ => Err(ImageError::UnsupportedFormat(s.to_owned())),
        }
    }
}

/// Row-major framebuffer, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        Self::filled(w, h, RGB::black())
    }

    pub fn filled(w: u32, h: u32, color: RGB) -> Self {
        let mut buf = Vec::new();
        buf.resize((w as usize) * (h as usize), color);
        Image { w, h, buf }
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[self.index(x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        let i = self.index(x, y);
        &mut self.buf[i]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.w && y < self.h, "pixel ({}, {}) outside {}x{}", x, y, self.w, self.h);
        y as usize * self.w as usize + x as usize
    }

    pub fn pixels(&self) -> &[RGB] {
        &self.buf
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RGB]> {
        self.buf.chunks(self.w.max(1) as usize)
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Packed 8-bit R, G, B per pixel in framebuffer order.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.buf.iter().flat_map(|p| p.to_rgb8().to_vec()).collect()
    }

    pub fn write_ppm<W: Write>(&self, out: &mut W, format: PpmFormat) -> Result<(), ImageError> {
        write!(out, "{}\n{} {}\n{}\n", format.magic(), self.w, self.h, PPM_MAX_COLOR)?;
        match format {
            PpmFormat::Binary => out.write_all(&self.to_rgb8())?,
            PpmFormat::Ascii => {
                for row in self.rows() {
                    let line = row
                        .iter()
                        .flat_map(|p| p.to_rgb8().to_vec())
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(out, "{}", line)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn save_ppm<P: AsRef<Path>>(&self, path: P, format: PpmFormat) -> Result<(), ImageError> {
        let mut file = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut file, format)
    }
}
