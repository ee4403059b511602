use crate::image::Image;
use crate::scene::Scene;
use crate::*;

use log::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Color of pixels whose ray hits nothing.
    pub background: RGB,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            background: RGB::black(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub hits: u64,
    pub background: u64,
}

/// Casts one ray per pixel and writes the flat color of the nearest surface.
/// Holds no state between renders.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Renderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, scene: &Scene, w: u32, h: u32) -> Result<Image, RenderError> {
        self.render_with_stats(scene, w, h).map(|(image, _)| image)
    }

    pub fn render_with_stats(
        &self,
        scene: &Scene,
        w: u32,
        h: u32,
    ) -> Result<(Image, RenderStats), RenderError> {
        if w == 0 || h == 0 {
            return Err(RenderError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        let camera = scene.camera().ok_or(RenderError::NoCameraFound)?;
        info!(
            "rendering {}x{} through a {}x{} viewplane, {} objects",
            w,
            h,
            camera.width,
            camera.height,
            scene.len()
        );

        let viewplane = camera.viewplane(w, h);
        let mut image = Image::filled(w, h, self.config.background);
        let mut stats = RenderStats::default();
        for yi in 0..h {
            for xi in 0..w {
                let ray = viewplane.ray(yi, xi);
                match scene.test_hit(&ray) {
                    Some(hit) => {
                        *image.at_mut(xi, yi) = hit.color;
                        stats.hits += 1;
                    }
                    None => stats.background += 1,
                }
            }
            trace!("row {}/{} done", yi + 1, h);
        }

        info!(
            "render finished: {} pixels hit, {} background",
            stats.hits, stats.background
        );
        Ok((image, stats))
    }
}

/// Renders with the default configuration (black background).
pub fn render(scene: &Scene, w: u32, h: u32) -> Result<Image, RenderError> {
    Renderer::default().render(scene, w, h)
}
