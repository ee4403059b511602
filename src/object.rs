use crate::camera::Camera;
use crate::shape::{shapes, Shape};
use crate::*;

fn merge_options<T, F: Fn(T, T) -> T>(x: Option<T>, y: Option<T>, merge: F) -> Option<T> {
    if let Some(x) = x {
        if let Some(y) = y {
            Some(merge(x, y))
        } else {
            Some(x)
        }
    } else {
        y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectHit {
    pub dist: f64,
    /// Position of the object in declaration order.
    pub obj_ix: usize,
    pub color: RGB,
}

impl ObjectHit {
    /// Keeps `x` unless `y` is strictly nearer, so ties go to the object
    /// declared first.
    fn nearer_option(x: Option<Self>, y: Option<Self>) -> Option<Self> {
        merge_options(x, y, |x, y| if y.dist < x.dist { y } else { x })
    }
}

/// A flat-colored surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleObject {
    pub shape: Shape,
    pub color: RGB,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneObject {
    Camera(Camera),
    Surface(SimpleObject),
}

impl SceneObject {
    pub fn camera(width: f64, height: f64) -> Self {
        SceneObject::Camera(Camera::new(width, height))
    }

    pub fn sphere(center: P3, radius: f64, color: RGB) -> Self {
        SceneObject::Surface(SimpleObject {
            shape: shapes::Sphere { center, radius }.into(),
            color,
        })
    }

    pub fn plane(position: P3, normal: V3, color: RGB) -> Self {
        SceneObject::Surface(SimpleObject {
            shape: shapes::Plane { position, normal }.into(),
            color,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SceneObject::Camera(_) => "camera",
            SceneObject::Surface(o) => o.shape.kind(),
        }
    }

    pub fn color(&self) -> Option<RGB> {
        match self {
            SceneObject::Camera(_) => None,
            SceneObject::Surface(o) => Some(o.color),
        }
    }
}

/// Nearest surface in front of the ray origin, testing every object.
/// Cameras carry no geometry and are skipped.
pub fn test_hit(objects: &[SceneObject], ray: &Ray) -> Option<ObjectHit> {
    let mut hit = None::<ObjectHit>;
    for (obj_ix, o) in objects.iter().enumerate() {
        let o = match o {
            SceneObject::Camera(_) => continue,
            SceneObject::Surface(o) => o,
        };
        let new_hit = o.shape.test_hit(ray).map(|dist| ObjectHit {
            dist,
            obj_ix,
            color: o.color,
        });
        hit = ObjectHit::nearer_option(hit, new_hit);
    }
    hit
}
