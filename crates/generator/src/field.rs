use galaxy_common::Rgb;
use glam::Vec3;

/// A generated point cloud: flat position and color buffers indexed identically.
///
/// Point `i` occupies `[3i, 3i + 1, 3i + 2]` in both buffers. Fields are
/// write-once: there is no way to mutate the buffers after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PointField {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl PointField {
    pub(crate) fn from_buffers(positions: Vec<f32>, colors: Vec<f32>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        debug_assert_eq!(positions.len() % 3, 0);
        Self { positions, colors }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `x, y, z` buffer of length `3 * len()`.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `r, g, b` buffer of length `3 * len()`.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, i: usize) -> Option<Vec3> {
        self.positions
            .get(3 * i..3 * i + 3)
            .map(Vec3::from_slice)
    }

    pub fn color(&self, i: usize) -> Option<Rgb> {
        self.colors
            .get(3 * i..3 * i + 3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }

    /// Iterate `(position, color)` pairs in point order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Rgb)> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| (Vec3::from_slice(p), Rgb::new(c[0], c[1], c[2])))
    }

    /// Position buffer as raw bytes, ready for a vertex-buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions.as_slice())
    }

    /// Color buffer as raw bytes, ready for a vertex-buffer upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.colors.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_points() -> PointField {
        PointField::from_buffers(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        )
    }

    #[test]
    fn accessors_index_by_point() {
        let f = two_points();
        assert_eq!(f.len(), 2);
        assert_eq!(f.position(1), Some(Vec3::new(4.0, 5.0, 6.0)));
        assert_eq!(f.color(0), Some(Rgb::new(1.0, 0.0, 0.0)));
        assert_eq!(f.position(2), None);
        assert_eq!(f.color(2), None);
    }

    #[test]
    fn iter_pairs_positions_with_colors() {
        let f = two_points();
        let pairs: Vec<_> = f.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], (Vec3::new(4.0, 5.0, 6.0), Rgb::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn byte_views_cover_whole_buffers() {
        let f = two_points();
        assert_eq!(f.position_bytes().len(), 6 * std::mem::size_of::<f32>());
        assert_eq!(f.color_bytes().len(), f.position_bytes().len());
    }
}
