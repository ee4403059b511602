//! JSON scene files.
//!
//! A scene is a top-level array of objects tagged by `"type"`:
//!
//! ```json
//! [
//!   { "type": "camera", "width": 0.5, "height": 0.5 },
//!   { "type": "sphere", "color": [1, 0, 0], "position": [0, 1, 5], "radius": 2 },
//!   { "type": "plane", "color": [0, 0, 1], "position": [0, 0, 0], "normal": [0, 1, 0] }
//! ]
//! ```

use crate::object::SceneObject;
use crate::*;

use log::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
enum Record {
    Camera {
        width: f64,
        height: f64,
    },
    Sphere {
        color: [f64; 3],
        #[serde(alias = "center")]
        position: [f64; 3],
        radius: f64,
    },
    Plane {
        color: [f64; 3],
        position: [f64; 3],
        normal: [f64; 3],
    },
}

impl Record {
    fn into_object(self, index: usize) -> Result<SceneObject, SceneError> {
        let object = match self {
            Record::Camera { width, height } => SceneObject::camera(width, height),
            Record::Sphere {
                color,
                position,
                radius,
            } => SceneObject::sphere(P3::from(position), radius, checked_color(index, color)?),
            Record::Plane {
                color,
                position,
                normal,
            } => SceneObject::plane(
                P3::from(position),
                V3::from(normal),
                checked_color(index, color)?,
            ),
        };
        debug!("object {}: {:?}", index, object);
        Ok(object)
    }
}

fn checked_color(index: usize, color: [f64; 3]) -> Result<RGB, SceneError> {
    let color = RGB::from(color);
    if !color.is_finite() {
        return Err(SceneError::NonFinite {
            index,
            field: "color",
        });
    }
    match color.out_of_range() {
        Some(value) => Err(SceneError::ColorOutOfRange { index, value }),
        None => Ok(color),
    }
}

fn build(records: Vec<Record>, limits: &SceneLimits) -> Result<Scene, SceneError> {
    if records.is_empty() {
        return Err(SceneError::Empty);
    }
    let objects = records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_object(i))
        .collect::<Result<Vec<_>, _>>()?;
    let scene = Scene::new(objects, limits)?;
    info!("loaded scene with {} objects", scene.len());
    Ok(scene)
}

pub fn from_str(s: &str, limits: &SceneLimits) -> Result<Scene, SceneError> {
    build(serde_json::from_str(s)?, limits)
}

pub fn from_reader<R: Read>(reader: R, limits: &SceneLimits) -> Result<Scene, SceneError> {
    build(serde_json::from_reader(reader)?, limits)
}

pub fn from_path<P: AsRef<Path>>(path: P, limits: &SceneLimits) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    debug!("reading scene from {}", path.display());
    from_reader(BufReader::new(File::open(path)?), limits)
}
