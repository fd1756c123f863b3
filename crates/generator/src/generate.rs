use std::f32::consts::TAU;
use std::time::Instant;

use galaxy_common::Rgb;
use glam::Vec3;

use crate::error::GenerateError;
use crate::field::PointField;
use crate::params::Parameters;
use crate::random::{RngSource, UniformSource};

/// Uniform draws consumed per point: one for the radius, then a magnitude
/// and a sign for each of the three axes.
pub const DRAWS_PER_POINT: usize = 7;

/// Generate a field using a fresh thread-local random stream.
pub fn generate(params: &Parameters) -> Result<PointField, GenerateError> {
    generate_with(params, &mut RngSource::thread())
}

/// Generate a field drawing from `source`.
///
/// Validation runs first; nothing is allocated for invalid parameters.
pub fn generate_with(
    params: &Parameters,
    source: &mut impl UniformSource,
) -> Result<PointField, GenerateError> {
    params.validate()?;

    let _span = tracing::debug_span!("generate_field", count = params.count).entered();
    let start = Instant::now();

    // `validate` bounds count by `Parameters::MAX_BUFFER_POINTS`.
    let mut positions = Vec::with_capacity(params.count * 3);
    let mut colors = Vec::with_capacity(params.count * 3);

    for i in 0..params.count {
        let (position, color) = sample_point(i, params, source);
        positions.extend_from_slice(&position.to_array());
        colors.extend_from_slice(&color.to_array());
    }

    tracing::debug!(
        count = params.count,
        branches = params.branches,
        elapsed = ?start.elapsed(),
        "field generated"
    );

    Ok(PointField::from_buffers(positions, colors))
}

/// Base angle of the arm that point `i` belongs to.
///
/// Points are dealt round-robin across `branches` equally spaced arms.
pub fn branch_angle(i: usize, branches: u32) -> f32 {
    let branches = branches.max(1) as usize;
    (i % branches) as f32 / branches as f32 * TAU
}

fn sample_point(i: usize, params: &Parameters, source: &mut impl UniformSource) -> (Vec3, Rgb) {
    // Linear in the draw, so density is higher near the center than an
    // area-uniform disk would give.
    let r = source.next_unit() * params.radius;

    let angle = branch_angle(i, params.branches) + r * params.spin;

    let jitter_x = jitter(source, params, r);
    let jitter_y = jitter(source, params, r);
    let jitter_z = jitter(source, params, r);

    let position = Vec3::new(
        angle.cos() * r + jitter_x,
        jitter_y,
        angle.sin() * r + jitter_z,
    );
    let color = params
        .inside_color
        .lerp(params.outside_color, r / params.radius);

    (position, color)
}

fn jitter(source: &mut impl UniformSource, params: &Parameters, r: f32) -> f32 {
    let magnitude = source.next_unit().powf(params.concentration_power);
    let sign = if source.next_unit() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * params.randomness * r
}
