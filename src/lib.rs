use nalgebra::{Point3, Vector3};

pub type P3 = Point3<f64>;
pub type V3 = Vector3<f64>;

#[macro_use]
pub mod util;

pub mod camera;
pub mod error;
pub mod image;
pub mod loader;
pub mod math;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shape;

pub use error::*;
pub use ray::Ray;
pub use renderer::{render, RenderConfig, RenderStats, Renderer};
pub use rgb::RGB;
pub use scene::{Scene, SceneLimits};
