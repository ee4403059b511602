use crate::*;

trait ShapeImpl {
    /// Distance along `ray` to the nearest surface point strictly in front of
    /// its origin. `ray.dir` must be unit length.
    fn test_hit(&self, ray: &Ray) -> Option<f64>;
}

pub mod shapes {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub struct Sphere {
        pub center: P3,
        pub radius: f64,
    }

    impl ShapeImpl for Sphere {
        fn test_hit(&self, ray: &Ray) -> Option<f64> {
            let oc = ray.origin - self.center;
            let a = math::dot(&ray.dir, &ray.dir);
            assert!(
                (a - 1.0).abs() < math::EPSILON,
                "ray direction must be unit length, got |dir|^2 = {}",
                a
            );
            let b = 2.0 * math::dot(&ray.dir, &oc);
            let c = math::dot(&oc, &oc) - self.radius * self.radius;

            let disc = b * b - 4.0 * a * c;
            if disc < 0.0 {
                return None;
            }
            if disc == 0.0 {
                let t = -b / (2.0 * a);
                return if t > 0.0 { Some(t) } else { None };
            }

            let sqrt_disc = disc.sqrt();
            let t0 = (-b - sqrt_disc) / (2.0 * a);
            let t1 = (-b + sqrt_disc) / (2.0 * a);
            // t0 < t1, so the first forward root is the nearest one
            if t0 > 0.0 {
                Some(t0)
            } else if t1 > 0.0 {
                Some(t1)
            } else {
                None
            }
        }
    }

    /// Infinite plane through `position`. `normal` need not be unit length.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Plane {
        pub position: P3,
        pub normal: V3,
    }

    impl ShapeImpl for Plane {
        fn test_hit(&self, ray: &Ray) -> Option<f64> {
            let normal = math::normalize(&self.normal)
                .unwrap_or_else(|e| panic!("plane through {} has no normal: {}", self.position, e));
            let denom = math::dot(&normal, &ray.dir);
            if denom.abs() < math::EPSILON {
                return None;
            }
            let t = math::dot(&(self.position - ray.origin), &normal) / denom;
            if t > 0.0 {
                Some(t)
            } else {
                None
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(shapes::Sphere),
    Plane(shapes::Plane),
}

impl_wrap_from_many! {Shape, shapes, [Sphere => "sphere", Plane => "plane"]}

use Shape::*;
impl Shape {
    pub fn test_hit(&self, ray: &Ray) -> Option<f64> {
        match self {
            Sphere(s) => s.test_hit(ray),
            Plane(s) => s.test_hit(ray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_sphere_at(center: P3) -> Shape {
        shapes::Sphere {
            center,
            radius: 1.0,
        }
        .into()
    }

    fn ray(origin: [f64; 3], dir: [f64; 3]) -> Ray {
        let dir = math::normalize(&V3::from(dir)).unwrap();
        Ray::new(P3::from(origin), dir)
    }

    #[test]
    fn sphere_through_center() {
        let s = shapes::Sphere {
            center: P3::origin(),
            radius: 5.0,
        };
        let t = s.test_hit(&ray([-10.0, 0.0, 0.0], [1.0, 0.0, 0.0])).unwrap();
        assert_relative_eq!(t, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn sphere_along_view_axis() {
        let s = unit_sphere_at(P3::new(0.0, 0.0, 20.0));
        let t = s.test_hit(&ray([0.0; 3], [0.0, 0.0, 1.0])).unwrap();
        assert_relative_eq!(t, 19.0, max_relative = 1e-9);
    }

    #[test]
    fn sphere_oblique_hit() {
        // the ray passes through the center 5 units out, so it enters 3 units earlier
        let s = shapes::Sphere {
            center: P3::new(0.0, 3.0, 4.0),
            radius: 3.0,
        };
        let r = ray([0.0; 3], [0.0, 3.0, 4.0]);
        let t = s.test_hit(&r).unwrap();
        assert_relative_eq!(t, 2.0, max_relative = 1e-9);
        assert_relative_eq!((r.at(t) - s.center).norm(), s.radius, max_relative = 1e-9);
    }

    #[test]
    fn sphere_tangent() {
        let s = shapes::Sphere {
            center: P3::origin(),
            radius: 5.0,
        };
        let t = s.test_hit(&ray([5.0, -10.0, 0.0], [0.0, 1.0, 0.0])).unwrap();
        assert_relative_eq!(t, 10.0, max_relative = 1e-9);
    }

    #[test]
    fn sphere_miss() {
        let s = unit_sphere_at(P3::new(0.0, 0.0, 20.0));
        assert_eq!(s.test_hit(&ray([0.0; 3], [0.0, 1.0, 1.0])), None);
        assert_eq!(s.test_hit(&ray([0.0, 1.5, 0.0], [0.0, 0.0, 1.0])), None);
    }

    #[test]
    fn sphere_from_inside_returns_exit() {
        let s = shapes::Sphere {
            center: P3::origin(),
            radius: 5.0,
        };
        let t = s.test_hit(&ray([0.0; 3], [1.0, 0.0, 0.0])).unwrap();
        assert_relative_eq!(t, 5.0, max_relative = 1e-9);

        let t = s.test_hit(&ray([2.0, 0.0, 0.0], [-1.0, 0.0, 0.0])).unwrap();
        assert_relative_eq!(t, 7.0, max_relative = 1e-9);
    }

    #[test]
    fn sphere_behind() {
        let s = unit_sphere_at(P3::new(0.0, 0.0, -20.0));
        assert_eq!(s.test_hit(&ray([0.0; 3], [0.0, 0.0, 1.0])), None);
    }

    #[test]
    #[should_panic(expected = "unit length")]
    fn sphere_rejects_unnormalized_direction() {
        let s = unit_sphere_at(P3::new(0.0, 0.0, 20.0));
        s.test_hit(&Ray::new(P3::origin(), V3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn sphere_accepts_direction_within_tolerance() {
        let s = unit_sphere_at(P3::new(0.0, 0.0, 20.0));
        let dir = V3::new(0.0, 0.0, (1.0 + 5e-5_f64).sqrt());
        assert!(s.test_hit(&Ray::new(P3::origin(), dir)).is_some());
    }

    #[test]
    #[should_panic(expected = "unit length")]
    fn sphere_rejects_direction_just_outside_tolerance() {
        let s = unit_sphere_at(P3::new(0.0, 0.0, 20.0));
        let dir = V3::new(0.0, 0.0, (1.0 + 2e-4_f64).sqrt());
        s.test_hit(&Ray::new(P3::origin(), dir));
    }

    #[test]
    fn plane_perpendicular() {
        let p = shapes::Plane {
            position: P3::new(0.0, 0.0, 5.0),
            normal: V3::new(0.0, 0.0, -1.0),
        };
        let t = p.test_hit(&ray([0.0; 3], [0.0, 0.0, 1.0])).unwrap();
        assert_relative_eq!(t, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn plane_normal_orientation_and_length_do_not_matter() {
        for n in &[[0.0, 0.0, -1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 7.5]] {
            let p = shapes::Plane {
                position: P3::new(3.0, -2.0, 5.0),
                normal: V3::from(*n),
            };
            let t = p.test_hit(&ray([0.0; 3], [0.0, 0.0, 1.0])).unwrap();
            assert_relative_eq!(t, 5.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn plane_angled() {
        let p = shapes::Plane {
            position: P3::origin(),
            normal: V3::new(0.0, 1.0, 0.0),
        };
        let t = p.test_hit(&ray([0.0, 10.0, 0.0], [1.0, -1.0, 0.0])).unwrap();
        assert_relative_eq!(t, 10.0 * 2.0_f64.sqrt(), max_relative = 1e-9);
    }

    #[test]
    fn plane_parallel_never_hits() {
        let p = shapes::Plane {
            position: P3::new(0.0, -1.0, 0.0),
            normal: V3::new(0.0, 1.0, 0.0),
        };
        for origin in &[[0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [4.0, -7.0, 2.0]] {
            for dir in &[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, -1.0]] {
                assert_eq!(p.test_hit(&ray(*origin, *dir)), None);
            }
        }
    }

    #[test]
    fn plane_grazing_rays_at_the_parallel_threshold() {
        let p = shapes::Plane {
            position: P3::new(0.0, 1.0, 0.0),
            normal: V3::new(0.0, 1.0, 0.0),
        };
        // with a unit normal, denom is the y component of the unit direction
        assert_eq!(p.test_hit(&ray([0.0; 3], [1.0, 0.9e-4, 0.0])), None);
        let t = p.test_hit(&ray([0.0; 3], [1.0, 1.1e-4, 0.0])).unwrap();
        let expected = (1.0 + 1.1e-4 * 1.1e-4_f64).sqrt() / 1.1e-4;
        assert_relative_eq!(t, expected, max_relative = 1e-9);
    }

    #[test]
    fn plane_behind_or_at_origin() {
        let p = shapes::Plane {
            position: P3::new(0.0, 0.0, -5.0),
            normal: V3::new(0.0, 0.0, 1.0),
        };
        assert_eq!(p.test_hit(&ray([0.0; 3], [0.0, 0.0, 1.0])), None);

        let p = shapes::Plane {
            position: P3::origin(),
            normal: V3::new(0.0, 0.0, 1.0),
        };
        assert_eq!(p.test_hit(&ray([0.0; 3], [0.0, 1.0, 1.0])), None);
    }

    #[test]
    #[should_panic(expected = "has no normal")]
    fn plane_with_zero_normal_is_a_bug() {
        let p = shapes::Plane {
            position: P3::origin(),
            normal: V3::zeros(),
        };
        p.test_hit(&ray([0.0; 3], [0.0, 0.0, 1.0]));
    }

    #[test]
    fn kind_names() {
        let p: Shape = shapes::Plane {
            position: P3::origin(),
            normal: V3::z(),
        }
        .into();
        assert_eq!(p.kind(), "plane");
        assert_eq!(unit_sphere_at(P3::origin()).kind(), "sphere");
    }
}
