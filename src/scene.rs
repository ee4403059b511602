use crate::camera::Camera;
use crate::object::{ObjectHit, SceneObject};
use crate::shape::Shape;
use crate::*;

use log::*;

/// Resource limits checked once when a scene is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLimits {
    /// `None` means unbounded.
    pub max_objects: Option<usize>,
}

impl SceneLimits {
    pub const DEFAULT_MAX_OBJECTS: usize = 128;

    pub fn unlimited() -> Self {
        SceneLimits { max_objects: None }
    }
}

impl Default for SceneLimits {
    fn default() -> Self {
        SceneLimits {
            max_objects: Some(Self::DEFAULT_MAX_OBJECTS),
        }
    }
}

/// Objects in declaration order. Immutable once built.
#[derive(Clone, Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Checks every object's geometry so the intersection routines never see
    /// a degenerate plane or sphere. Colors are passed through untouched.
    pub fn new(objects: Vec<SceneObject>, limits: &SceneLimits) -> Result<Self, SceneError> {
        if let Some(max) = limits.max_objects {
            if objects.len() > max {
                return Err(SceneError::TooManyObjects {
                    count: objects.len(),
                    max,
                });
            }
        }
        for (index, o) in objects.iter().enumerate() {
            validate(index, o)?;
        }
        Ok(Scene { objects })
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The first camera in declaration order; any others are ignored.
    pub fn camera(&self) -> Option<&Camera> {
        let mut cameras = self.objects.iter().filter_map(|o| match o {
            SceneObject::Camera(c) => Some(c),
            _ => None,
        });
        let first = cameras.next();
        let ignored = cameras.count();
        if ignored > 0 {
            warn!("scene declares {} extra camera(s), using the first", ignored);
        }
        first
    }

    pub fn test_hit(&self, ray: &Ray) -> Option<ObjectHit> {
        object::test_hit(&self.objects, ray)
    }
}

fn finite(index: usize, field: &'static str, values: &[f64]) -> Result<(), SceneError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SceneError::NonFinite { index, field })
    }
}

fn validate(index: usize, o: &SceneObject) -> Result<(), SceneError> {
    let surface = match o {
        SceneObject::Camera(c) => {
            finite(index, "width", &[c.width])?;
            finite(index, "height", &[c.height])?;
            if c.width <= 0.0 || c.height <= 0.0 {
                return Err(SceneError::InvalidCamera {
                    index,
                    width: c.width,
                    height: c.height,
                });
            }
            return Ok(());
        }
        SceneObject::Surface(s) => s,
    };
    finite(index, "color", &surface.color.channels())?;
    match &surface.shape {
        Shape::Sphere(s) => {
            finite(index, "position", s.center.coords.as_slice())?;
            finite(index, "radius", &[s.radius])?;
            if s.radius <= 0.0 {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: s.radius,
                });
            }
        }
        Shape::Plane(p) => {
            finite(index, "position", p.position.coords.as_slice())?;
            finite(index, "normal", p.normal.as_slice())?;
            math::normalize(&p.normal)
                .map_err(|source| SceneError::DegenerateNormal { index, source })?;
        }
    }
    Ok(())
}
