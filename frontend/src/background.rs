//! Geometry for the hero background: a slowly turning cloud of nodes, a
//! sparser mesh of linked nodes, and a ring of orbiting spheres, projected
//! onto a 2D canvas.

use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Vec3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2)).sqrt()
    }

    /// Rotate about Y, then about X.
    pub fn rotated(&self, rx: f64, ry: f64) -> Vec3 {
        let (sy, cy) = ry.sin_cos();
        let x1 = self.x * cy + self.z * sy;
        let z1 = -self.x * sy + self.z * cy;

        let (sx, cx) = rx.sin_cos();
        Vec3 {
            x: x1,
            y: self.y * cx - z1 * sx,
            z: self.y * sx + z1 * cx,
        }
    }
}

pub const CLOUD_EXTENT: Vec3 = Vec3::new(14.0, 10.0, 8.0);
pub const LINK_DISTANCE: f64 = 3.5;
pub const ORBIT_RADIUS: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub cloud_nodes: usize,
    pub mesh_nodes: usize,
    pub spheres: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { cloud_nodes: 160, mesh_nodes: 70, spheres: 5 }
    }
}

/// `count` points uniformly spread over a box of `extent` centred on the
/// origin. `random` must yield values in [0, 1).
pub fn scatter(count: usize, extent: Vec3, mut random: impl FnMut() -> f64) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (random() - 0.5) * extent.x,
                (random() - 0.5) * extent.y,
                (random() - 0.5) * extent.z,
            )
        })
        .collect()
}

/// Index pairs of nodes closer than `max_distance`.
pub fn links(nodes: &[Vec3], max_distance: f64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if nodes[i].distance(&nodes[j]) < max_distance {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

pub fn orbit(count: usize, radius: f64) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * PI * 2.0;
            Vec3::new(angle.cos() * radius, (angle * 0.5).sin() * 2.0, angle.sin() * radius)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub fov_degrees: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { distance: 8.0, fov_degrees: 60.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
}

impl Camera {
    const NEAR: f64 = 0.1;

    /// Screen position of `point` on a `width`×`height` canvas, or `None`
    /// when it is behind the near plane.
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Projected> {
        let depth = self.distance - point.z;
        if depth <= Self::NEAR {
            return None;
        }
        let focal = (height / 2.0) / (self.fov_degrees.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some(Projected {
            x: width / 2.0 + point.x * scale,
            y: height / 2.0 - point.y * scale,
            scale,
        })
    }
}

pub struct NeuralScene {
    pub cloud: Vec<Vec3>,
    pub mesh: Vec<Vec3>,
    pub links: Vec<(usize, usize)>,
    pub spheres: Vec<Vec3>,
}

impl NeuralScene {
    pub fn generate(config: SceneConfig, mut random: impl FnMut() -> f64) -> Self {
        let cloud = scatter(config.cloud_nodes, CLOUD_EXTENT, &mut random);
        let mesh = scatter(config.mesh_nodes, CLOUD_EXTENT, &mut random);
        let links = links(&mesh, LINK_DISTANCE);
        Self {
            cloud,
            mesh,
            links,
            spheres: orbit(config.spheres, ORBIT_RADIUS),
        }
    }
}

/// Rotation of each layer `elapsed` seconds in, with the pointer given in
/// normalised device coordinates (-1..1).
pub struct SceneAngles {
    pub cloud: (f64, f64),
    pub mesh: (f64, f64),
    pub spheres: (f64, f64),
}

pub fn scene_angles(elapsed: f64, pointer_x: f64, pointer_y: f64) -> SceneAngles {
    SceneAngles {
        cloud: (elapsed * 0.02 + pointer_y * 0.05, elapsed * 0.04 + pointer_x * 0.1),
        mesh: (elapsed * 0.02, elapsed * 0.04),
        spheres: (0.0, elapsed * 0.08),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn scatter_stays_inside_extent() {
        let nodes = scatter(50, CLOUD_EXTENT, sequence(&[0.0, 0.25, 0.5, 0.999]));
        assert_eq!(nodes.len(), 50);
        for n in nodes {
            assert!(n.x.abs() <= 7.0 && n.y.abs() <= 5.0 && n.z.abs() <= 4.0);
        }
    }

    #[test]
    fn links_respect_distance_threshold() {
        let nodes = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 3.6, 0.0),
            Vec3::new(3.0, 1.0, 0.0),
        ];
        assert_eq!(links(&nodes, LINK_DISTANCE), vec![(0, 1), (0, 3), (1, 3)]);
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let r = p.rotated(0.7, -1.3);
        assert!((p.distance(&Vec3::default()) - r.distance(&Vec3::default())).abs() < 1e-12);
    }

    #[test]
    fn quarter_turn_about_y_moves_x_to_minus_z() {
        let r = Vec3::new(1.0, 0.0, 0.0).rotated(0.0, PI / 2.0);
        assert!(r.x.abs() < 1e-12);
        assert!((r.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn origin_projects_to_canvas_centre() {
        let p = Camera::default().project(Vec3::default(), 800.0, 600.0).unwrap();
        assert_eq!((p.x, p.y), (400.0, 300.0));
    }

    #[test]
    fn up_is_up_on_screen() {
        let p = Camera::default().project(Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(p.y < 300.0);
    }

    #[test]
    fn points_behind_camera_are_dropped() {
        assert!(Camera::default().project(Vec3::new(0.0, 0.0, 9.0), 800.0, 600.0).is_none());
    }

    #[test]
    fn orbit_has_requested_radius_in_xz() {
        for s in orbit(5, ORBIT_RADIUS) {
            assert!(((s.x * s.x + s.z * s.z).sqrt() - ORBIT_RADIUS).abs() < 1e-12);
        }
    }

    #[test]
    fn generated_scene_links_index_mesh() {
        let scene = NeuralScene::generate(SceneConfig::default(), sequence(&[0.1, 0.4, 0.7, 0.9, 0.3]));
        assert_eq!(scene.cloud.len(), 160);
        assert_eq!(scene.mesh.len(), 70);
        assert!(scene.links.iter().all(|&(a, b)| a < b && b < scene.mesh.len()));
    }
}
