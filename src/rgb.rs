use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGB {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGB {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        RGB { r, g, b }
    }
    pub fn all(x: f64) -> Self {
        Self::new(x, x, x)
    }
    pub fn black() -> Self {
        Self::all(0.0)
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_finite(&self) -> bool {
        self.channels().iter().all(|c| c.is_finite())
    }

    /// First channel outside [0, 1], if any.
    pub fn out_of_range(&self) -> Option<f64> {
        self.channels()
            .iter()
            .copied()
            .find(|c| !(0.0..=1.0).contains(c))
    }

    /// 8-bit encoding. Only the output boundary clamps; the framebuffer keeps
    /// whatever the scene supplied.
    pub fn to_rgb8(&self) -> [u8; 3] {
        fn byte(c: f64) -> u8 {
            (c * 255.0).round().max(0.0).min(255.0) as u8
        }
        [byte(self.r), byte(self.g), byte(self.b)]
    }
}

impl From<[f64; 3]> for RGB {
    fn from([r, g, b]: [f64; 3]) -> Self {
        RGB::new(r, g, b)
    }
}

impl fmt::Display for RGB {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseRgbError(String);

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected R,G,B with channels in [0, 1], got '{}'", self.0)
    }
}

impl std::error::Error for ParseRgbError {}

/// Parses `"r,g,b"`, e.g. `"0.2, 0.2, 0.3"`.
impl FromStr for RGB {
    type Err = ParseRgbError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError(s.to_owned());
        let cs = s
            .split(',')
            .map(|c| c.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| err())?;
        match cs[..] {
            [r, g, b] => {
                let rgb = RGB::new(r, g, b);
                if rgb.is_finite() && rgb.out_of_range().is_none() {
                    Ok(rgb)
                } else {
                    Err(err())
                }
            }
            _ => Err(err()),
        }
    }
}
