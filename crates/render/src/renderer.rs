use galaxy_controller::LiveField;

use crate::material::PointMaterial;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the live field and its material hints, then produces
/// output. It never mutates the field; the controller owns it.
pub trait PointsRenderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given field.
    fn render(&self, live: &LiveField, material: &PointMaterial) -> Self::Output;
}

/// Debug text renderer, standing in for a GPU backend.
///
/// Produces a human-readable description of the field. Useful for CLI
/// output, logging, and testing the render interface.
#[derive(Debug)]
pub struct DebugTextRenderer {
    /// How many leading points to list individually.
    pub sample_points: usize,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self { sample_points: 4 }
    }

    pub fn with_samples(sample_points: usize) -> Self {
        Self { sample_points }
    }
}

impl Default for DebugTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PointsRenderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, live: &LiveField, material: &PointMaterial) -> String {
        let field = live.field();
        let params = live.parameters();
        let mut out = String::new();
        out.push_str(&format!(
            "=== Point Field (generation={}) ===\n",
            live.generation()
        ));
        out.push_str(&format!(
            "Points: {} branches={} radius={:.2} spin={:.2}\n",
            field.len(),
            params.branches,
            params.radius,
            params.spin
        ));
        out.push_str(&format!(
            "Material: size={:.3} attenuation={} depth_write={} blending={:?}\n",
            material.size, material.size_attenuation, material.depth_write, material.blending
        ));
        out.push_str(&format!(
            "Buffers: positions={}B colors={}B\n",
            field.position_bytes().len(),
            field.color_bytes().len()
        ));

        for (i, (p, c)) in field.iter().take(self.sample_points).enumerate() {
            out.push_str(&format!(
                "  [{i}] pos=({:.2}, {:.2}, {:.2}) color={}\n",
                p.x,
                p.y,
                p.z,
                c.to_hex()
            ));
        }

        out
    }
}
