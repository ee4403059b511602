use crate::*;
#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: P3,
    pub dir: V3,
}

impl Ray {
    pub fn new(origin: P3, dir: V3) -> Self {
        Ray { origin, dir }
    }

    /// Ray from `origin` towards `target` with a unit direction.
    pub fn towards(origin: P3, target: &P3) -> Result<Self, DegenerateVector> {
        let dir = math::normalize(&(*target - origin))?;
        Ok(Ray { origin, dir })
    }

    pub fn at(&self, t: f64) -> P3 {
        self.origin + self.dir * t
    }
}
