use galaxy_common::Rgb;
use galaxy_generator::PointField;
use glam::Vec3;

/// Point-field inspector for developer tooling.
///
/// Read-only queries against a generated field for debugging and tuning.
pub struct FieldInspector;

impl FieldInspector {
    /// Produce aggregate statistics for a field in a single pass.
    pub fn summary(field: &PointField) -> FieldSummary {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut max_planar_radius = 0.0f32;
        let mut max_abs_y = 0.0f32;
        let mut color_sum = Vec3::ZERO;

        for (p, c) in field.iter() {
            min = min.min(p);
            max = max.max(p);
            max_planar_radius = max_planar_radius.max((p.x * p.x + p.z * p.z).sqrt());
            max_abs_y = max_abs_y.max(p.y.abs());
            color_sum += Vec3::from(c);
        }

        if field.is_empty() {
            min = Vec3::ZERO;
            max = Vec3::ZERO;
        }
        let mean_color = if field.is_empty() {
            Rgb::BLACK
        } else {
            Rgb::from(color_sum / field.len() as f32)
        };

        FieldSummary {
            point_count: field.len(),
            min: min.to_array(),
            max: max.to_array(),
            max_planar_radius,
            max_abs_y,
            mean_color,
        }
    }

    /// Position and color of a single point.
    pub fn inspect_point(field: &PointField, index: usize) -> Option<PointInfo> {
        let p = field.position(index)?;
        let color = field.color(index)?;
        Some(PointInfo {
            index,
            position: p.to_array(),
            planar_radius: (p.x * p.x + p.z * p.z).sqrt(),
            color,
        })
    }
}

/// Summary of a field for the inspector.
#[derive(Debug, Clone)]
pub struct FieldSummary {
    pub point_count: usize,
    /// Axis-aligned bounds. Both are zero for an empty field.
    pub min: [f32; 3],
    pub max: [f32; 3],
    /// Largest distance from the vertical axis.
    pub max_planar_radius: f32,
    pub max_abs_y: f32,
    pub mean_color: Rgb,
}

impl std::fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Field: points={} bounds=({:.2}, {:.2}, {:.2})..({:.2}, {:.2}, {:.2}) max_r={:.2} max_|y|={:.2} mean_color={}",
            self.point_count,
            self.min[0],
            self.min[1],
            self.min[2],
            self.max[0],
            self.max[1],
            self.max[2],
            self.max_planar_radius,
            self.max_abs_y,
            self.mean_color.to_hex()
        )
    }
}

/// Detailed info about a single point.
#[derive(Debug, Clone)]
pub struct PointInfo {
    pub index: usize,
    pub position: [f32; 3],
    pub planar_radius: f32,
    pub color: Rgb,
}

impl std::fmt::Display for PointInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Point [{}] pos=({:.2}, {:.2}, {:.2}) r={:.2} color={}",
            self.index,
            self.position[0],
            self.position[1],
            self.position[2],
            self.planar_radius,
            self.color.to_hex()
        )
    }
}
