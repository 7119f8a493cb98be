use crate::foundation::core::Vec3;
use crate::foundation::error::{TailfinError, TailfinResult};

/// Sub-sample count used for the discrete arc-length approximation.
const LENGTH_SAMPLES: usize = 256;

/// Minimum approximate arc length accepted at construction.
const MIN_LENGTH: f32 = 1e-3;

/// Open Catmull-Rom spline over 3D control points.
///
/// The highway path and everything derived from it (road surface, lane
/// strips, vehicle poses, clearance tests) sample this one type. The curve is
/// read-only after construction and a pure function of its inputs: two
/// splines built from identical control points return bit-identical values
/// for the same `t`.
///
/// `t` is the normalized curve parameter in `[0, 1]` and is not
/// arc-length-uniform; callers clamp before sampling.
#[derive(Clone, Debug)]
pub struct Spline {
    points: Vec<Vec3>,
    tension: f32,
    length: f32,
}

impl Spline {
    /// Build a spline from `points` (at least 4) and a tangent `tension` in
    /// `(0, 1]`.
    ///
    /// Fails fast on too few control points, a non-finite or out-of-range
    /// tension, or a degenerate (near zero length) path.
    pub fn new(points: Vec<Vec3>, tension: f32) -> TailfinResult<Self> {
        if points.len() < 4 {
            return Err(TailfinError::validation(format!(
                "spline needs at least 4 control points, got {}",
                points.len()
            )));
        }
        if !tension.is_finite() || tension <= 0.0 || tension > 1.0 {
            return Err(TailfinError::validation(
                "spline tension must be in (0, 1]",
            ));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(TailfinError::validation(
                "spline control points must be finite",
            ));
        }

        let mut spline = Self {
            points,
            tension,
            length: 0.0,
        };
        spline.length = spline.measure();
        if spline.length < MIN_LENGTH {
            return Err(TailfinError::validation(
                "spline control points span a near-zero length path",
            ));
        }
        Ok(spline)
    }

    /// Control points this spline was built from.
    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Tangent tension parameter.
    pub fn tension(&self) -> f32 {
        self.tension
    }

    /// Approximate arc length from discrete sampling.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// World position at curve parameter `t` (clamped to `[0, 1]`).
    pub fn point_at(&self, t: f32) -> Vec3 {
        let (i, s) = self.locate(t);
        let (p0, p1, p2, p3) = self.segment(i);
        let m1 = (p2 - p0) * self.tension;
        let m2 = (p3 - p1) * self.tension;

        let s2 = s * s;
        let s3 = s2 * s;
        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        p1 * h00 + m1 * h10 + p2 * h01 + m2 * h11
    }

    /// Unit tangent at curve parameter `t` (clamped to `[0, 1]`).
    ///
    /// Falls back to the chord direction of the local segment when the
    /// analytic derivative degenerates.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let (i, s) = self.locate(t);
        let (p0, p1, p2, p3) = self.segment(i);
        let m1 = (p2 - p0) * self.tension;
        let m2 = (p3 - p1) * self.tension;

        let s2 = s * s;
        let d00 = 6.0 * s2 - 6.0 * s;
        let d10 = 3.0 * s2 - 4.0 * s + 1.0;
        let d01 = -6.0 * s2 + 6.0 * s;
        let d11 = 3.0 * s2 - 2.0 * s;

        let d = p1 * d00 + m1 * d10 + p2 * d01 + m2 * d11;
        let len = d.length();
        if len > 1e-6 {
            d / len
        } else {
            (p2 - p1).normalize_or(Vec3::Z)
        }
    }

    /// Evenly spaced (in `t`) curve samples, `count >= 2`, endpoints included.
    pub fn sample_points(&self, count: usize) -> Vec<Vec3> {
        let count = count.max(2);
        (0..count)
            .map(|i| self.point_at(i as f32 / (count - 1) as f32))
            .collect()
    }

    fn measure(&self) -> f32 {
        let mut total = 0.0;
        let mut prev = self.point_at(0.0);
        for i in 1..=LENGTH_SAMPLES {
            let p = self.point_at(i as f32 / LENGTH_SAMPLES as f32);
            total += p.distance(prev);
            prev = p;
        }
        total
    }

    /// Map `t` to a segment index and local parameter.
    fn locate(&self, t: f32) -> (usize, f32) {
        let segments = self.points.len() - 1;
        let u = t.clamp(0.0, 1.0) * segments as f32;
        let i = (u.floor() as usize).min(segments - 1);
        (i, u - i as f32)
    }

    /// Four control points for segment `i`, with reflected virtual end
    /// points so the open ends keep a well-defined tangent.
    fn segment(&self, i: usize) -> (Vec3, Vec3, Vec3, Vec3) {
        let n = self.points.len();
        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        let p0 = if i == 0 {
            self.points[0] * 2.0 - self.points[1]
        } else {
            self.points[i - 1]
        };
        let p3 = if i + 2 >= n {
            self.points[n - 1] * 2.0 - self.points[n - 2]
        } else {
            self.points[i + 2]
        };
        (p0, p1, p2, p3)
    }
}

/// Horizontal perpendicular to `tangent`, pointing to the path's right side.
///
/// Lane offsets, road edges, and prop clearance all measure along this
/// direction.
pub fn binormal(tangent: Vec3) -> Vec3 {
    Vec3::new(-tangent.z, 0.0, tangent.x).normalize_or(Vec3::X)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/spline.rs"]
mod tests;
