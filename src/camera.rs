use crate::*;

/// Distance from the eye to the viewplane along +Z.
pub const VIEWPLANE_DEPTH: f64 = 1.0;

/// The eye sits at the world origin looking down +Z. `width` and `height`
/// give the extent of the viewplane in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Self {
        Camera { width, height }
    }

    pub fn origin(&self) -> P3 {
        P3::origin()
    }

    /// Maps an `img_w` x `img_h` pixel grid onto the viewplane.
    pub fn viewplane(&self, img_w: u32, img_h: u32) -> Viewplane {
        Viewplane {
            camera: *self,
            px_w: self.width / img_w as f64,
            px_h: self.height / img_h as f64,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Viewplane {
    camera: Camera,
    px_w: f64,
    px_h: f64,
}

impl Viewplane {
    /// Center of the pixel at `row`, `col`. Row 0 is the top of the image, so
    /// the vertical axis is flipped.
    pub fn point(&self, row: u32, col: u32) -> P3 {
        let x = -self.camera.width / 2.0 + self.px_w * (col as f64 + 0.5);
        let y = -(-self.camera.height / 2.0 + self.px_h * (row as f64 + 0.5));
        P3::new(x, y, VIEWPLANE_DEPTH)
    }

    pub fn ray(&self, row: u32, col: u32) -> Ray {
        let target = self.point(row, col);
        // the viewplane never passes through the eye
        Ray::towards(self.camera.origin(), &target)
            .unwrap_or_else(|e| panic!("no ray through viewplane point {}: {}", target, e))
    }
}
