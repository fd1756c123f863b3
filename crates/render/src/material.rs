use galaxy_generator::Parameters;
use serde::{Deserialize, Serialize};

/// How overlapping points combine in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Blending {
    Normal,
    Additive,
}

/// Render hints for drawing a point field as sprites.
///
/// Pure data: the core never acts on these, it only hands them to the
/// renderer alongside the buffers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMaterial {
    /// Sprite size in world units.
    pub size: f32,
    /// Shrink sprites with distance from the camera.
    pub size_attenuation: bool,
    pub depth_write: bool,
    pub blending: Blending,
    /// Read per-point colors from the color buffer.
    pub vertex_colors: bool,
}

impl Default for PointMaterial {
    fn default() -> Self {
        Self::from_parameters(&Parameters::default())
    }
}

impl PointMaterial {
    /// Glowing-dust defaults: additive blending with depth writes off so
    /// dense regions brighten instead of occluding each other.
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            size: params.point_size,
            size_attenuation: true,
            depth_write: false,
            blending: Blending::Additive,
            vertex_colors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_takes_point_size_from_parameters() {
        let params = Parameters {
            point_size: 0.05,
            ..Parameters::default()
        };
        let m = PointMaterial::from_parameters(&params);
        assert_eq!(m.size, 0.05);
        assert_eq!(m.blending, Blending::Additive);
        assert!(!m.depth_write);
        assert!(m.vertex_colors);
    }

    #[test]
    fn material_reads_back_from_json() {
        let json = serde_json::to_string(&PointMaterial::default()).unwrap();
        assert!(json.contains(r#""blending":"Additive""#));
        let back: PointMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PointMaterial::default());
    }

    #[test]
    fn default_material_matches_default_parameters() {
        assert_eq!(PointMaterial::default().size, Parameters::default().point_size);
    }
}
