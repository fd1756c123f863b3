use galaxy_common::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Immutable parameter snapshot for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Number of points.
    pub count: usize,
    /// Rendering hint for point sprites. The generator never reads it.
    pub point_size: f32,
    /// Maximum radial extent of the unjittered points.
    pub radius: f32,
    /// Number of angular arms.
    pub branches: u32,
    /// Radians of angular offset per unit radius.
    pub spin: f32,
    /// Jitter magnitude scale, relative to each point's radius.
    pub randomness: f32,
    /// Exponent applied to jitter draws; higher values pull points towards the arm centerline.
    pub concentration_power: f32,
    /// Color at radius 0.
    pub inside_color: Rgb,
    /// Color at the full radius.
    pub outside_color: Rgb,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            count: 100_000,
            point_size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.2,
            concentration_power: 3.0,
            // #ff6030
            inside_color: Rgb::new(1.0, 96.0 / 255.0, 48.0 / 255.0),
            // #1b3984
            outside_color: Rgb::new(27.0 / 255.0, 57.0 / 255.0, 132.0 / 255.0),
        }
    }
}

impl Parameters {
    /// Lower bounds of the interactive tuning controls.
    pub const MIN: Self = Self {
        count: 100,
        point_size: 0.001,
        radius: 0.01,
        branches: 2,
        spin: -5.0,
        randomness: 0.0,
        concentration_power: 1.0,
        inside_color: Rgb::BLACK,
        outside_color: Rgb::BLACK,
    };

    /// Upper bounds of the interactive tuning controls.
    pub const MAX: Self = Self {
        count: 1_000_000,
        point_size: 0.1,
        radius: 20.0,
        branches: 20,
        spin: 5.0,
        randomness: 2.0,
        concentration_power: 10.0,
        inside_color: Rgb::WHITE,
        outside_color: Rgb::WHITE,
    };

    /// Largest count whose `3 * count` float buffers can be addressed.
    pub const MAX_BUFFER_POINTS: usize = usize::MAX / 3;

    /// Check every field against the generator's validity rules.
    ///
    /// Narrower than [`ParameterLimits`]: this only rejects values the
    /// algorithm cannot work with, not values outside the tuning ranges.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.count == 0 {
            return Err(GenerateError::invalid("count", "must be at least 1"));
        }
        if self.count > Self::MAX_BUFFER_POINTS {
            return Err(GenerateError::invalid(
                "count",
                format!(
                    "{} points do not fit in an addressable buffer (max {})",
                    self.count,
                    Self::MAX_BUFFER_POINTS
                ),
            ));
        }
        if self.branches == 0 {
            return Err(GenerateError::invalid("branches", "must be at least 1"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GenerateError::invalid(
                "radius",
                format!("must be a positive finite number, got {}", self.radius),
            ));
        }
        if !(self.concentration_power.is_finite() && self.concentration_power >= 1.0) {
            return Err(GenerateError::invalid(
                "concentration_power",
                format!("must be >= 1, got {}", self.concentration_power),
            ));
        }
        if !(self.randomness.is_finite() && self.randomness >= 0.0) {
            return Err(GenerateError::invalid(
                "randomness",
                format!("must be non-negative, got {}", self.randomness),
            ));
        }
        if !self.spin.is_finite() {
            return Err(GenerateError::invalid(
                "spin",
                format!("must be finite, got {}", self.spin),
            ));
        }
        if !(self.point_size.is_finite() && self.point_size > 0.0) {
            return Err(GenerateError::invalid(
                "point_size",
                format!("must be positive, got {}", self.point_size),
            ));
        }
        if !self.inside_color.is_normalized() {
            return Err(GenerateError::invalid(
                "inside_color",
                format!("channels must lie in [0, 1], got {:?}", self.inside_color.to_array()),
            ));
        }
        if !self.outside_color.is_normalized() {
            return Err(GenerateError::invalid(
                "outside_color",
                format!("channels must lie in [0, 1], got {:?}", self.outside_color.to_array()),
            ));
        }
        Ok(())
    }

    /// Clamp every field into the interactive tuning ranges.
    pub fn clamped(&self) -> Self {
        ParameterLimits::default().clamp(self)
    }
}

/// Inclusive per-field ranges, as exposed by an interactive tuning UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterLimits {
    pub min: Parameters,
    pub max: Parameters,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            min: Parameters::MIN,
            max: Parameters::MAX,
        }
    }
}

impl ParameterLimits {
    /// Return a copy of `params` with every field clamped into these limits.
    ///
    /// Each bound pair is ordered first, so inverted limits clamp to the same
    /// range as their swapped form. NaN floats (in the value or a bound)
    /// resolve to the lower bound.
    pub fn clamp(&self, params: &Parameters) -> Parameters {
        let f = |v: f32, a: f32, b: f32| {
            let (lo, hi) = (a.min(b), a.max(b));
            if v.is_nan() { lo } else { v.max(lo).min(hi) }
        };
        let int = |v: usize, a: usize, b: usize| v.clamp(a.min(b), a.max(b));
        let color = |c: Rgb, lo: Rgb, hi: Rgb| {
            Rgb::new(f(c.r, lo.r, hi.r), f(c.g, lo.g, hi.g), f(c.b, lo.b, hi.b))
        };
        let (lo, hi) = (&self.min, &self.max);
        Parameters {
            count: int(params.count, lo.count, hi.count),
            point_size: f(params.point_size, lo.point_size, hi.point_size),
            radius: f(params.radius, lo.radius, hi.radius),
            branches: params
                .branches
                .clamp(lo.branches.min(hi.branches), lo.branches.max(hi.branches)),
            spin: f(params.spin, lo.spin, hi.spin),
            randomness: f(params.randomness, lo.randomness, hi.randomness),
            concentration_power: f(
                params.concentration_power,
                lo.concentration_power,
                hi.concentration_power,
            ),
            inside_color: color(params.inside_color, lo.inside_color, hi.inside_color),
            outside_color: color(params.outside_color, lo.outside_color, hi.outside_color),
        }
    }

    /// Whether every field of `params` already lies inside these limits.
    pub fn contains(&self, params: &Parameters) -> bool {
        self.clamp(params) == *params
    }
}
