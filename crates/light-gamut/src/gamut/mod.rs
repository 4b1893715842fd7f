//! Gamut triangles and conversion between display colors and device
//! chromaticity.
//!
//! A [`Gamut`] is the triangle in the CIE xy plane spanned by a lamp's three
//! emitters. Every coordinate that leaves this module is inside (or on) that
//! triangle.

pub mod models;

use crate::color::{Color, LinearRgb, Srgb, XyPoint, Xyz};

/// The chromaticity triangle a lamp can reproduce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamut {
    vertices: [XyPoint; 3],
}

impl Gamut {
    /// LivingColors Iris, Bloom, Aura, LightStrips.
    pub const A: Gamut = Gamut::new(
        XyPoint::new(0.704, 0.296),
        XyPoint::new(0.2151, 0.7106),
        XyPoint::new(0.138, 0.08),
    );

    /// First generation A19 bulbs.
    pub const B: Gamut = Gamut::new(
        XyPoint::new(0.675, 0.322),
        XyPoint::new(0.4091, 0.518),
        XyPoint::new(0.167, 0.04),
    );

    /// BR30, third generation A19, Go, LightStrips Plus.
    pub const C: Gamut = Gamut::new(
        XyPoint::new(0.692, 0.308),
        XyPoint::new(0.17, 0.7),
        XyPoint::new(0.153, 0.048),
    );

    /// The whole chromaticity simplex. Used for unrecognized models.
    pub const FULL: Gamut = Gamut::new(
        XyPoint::new(1.0, 0.0),
        XyPoint::new(0.0, 1.0),
        XyPoint::new(0.0, 0.0),
    );

    pub const fn new(red: XyPoint, green: XyPoint, blue: XyPoint) -> Self {
        Self {
            vertices: [red, green, blue],
        }
    }

    /// Gamut for a reported model number. See [`models::lookup`].
    pub fn for_model(model: &str) -> Self {
        models::lookup(model)
    }

    pub const fn vertices(&self) -> [XyPoint; 3] {
        self.vertices
    }

    /// Whether `p` lies inside the triangle or on its boundary.
    ///
    /// Expresses `p - v0` in the basis of the two edges leaving `v0` and
    /// checks the coefficients form a convex combination.
    pub fn contains(&self, p: XyPoint) -> bool {
        let [v0, v1, v2] = self.vertices;
        let e1 = v1.sub(v0);
        let e2 = v2.sub(v0);
        let q = p.sub(v0);

        let denom = e1.cross(e2);
        let s = q.cross(e2) / denom;
        let t = e1.cross(q) / denom;

        s >= 0.0 && t >= 0.0 && s + t <= 1.0
    }

    /// Nearest point to `p` on the triangle's boundary.
    ///
    /// Ties between edges resolve in the order (v0, v1), (v2, v0), (v1, v2).
    pub fn closest_boundary_point(&self, p: XyPoint) -> XyPoint {
        let [v0, v1, v2] = self.vertices;
        let candidates = [
            closest_point_on_segment(v0, v1, p),
            closest_point_on_segment(v2, v0, p),
            closest_point_on_segment(v1, v2, p),
        ];

        let mut best = candidates[0];
        let mut best_distance = p.distance(best);
        for candidate in &candidates[1..] {
            let distance = p.distance(*candidate);
            if distance < best_distance {
                best = *candidate;
                best_distance = distance;
            }
        }
        best
    }

    /// `p` itself if it is in gamut, otherwise the nearest boundary point.
    pub fn clamp(&self, p: XyPoint) -> XyPoint {
        if self.contains(p) {
            p
        } else {
            self.closest_boundary_point(p)
        }
    }

    /// Map a display color to the chromaticity the lamp should show.
    ///
    /// Black has no chromaticity and maps to [`Xyz::reference_white`]
    /// (clamped into the gamut).
    pub fn color_to_xy(&self, color: Color) -> XyPoint {
        let linear = LinearRgb::from(Srgb::from(color));
        let xy = Xyz::from(linear)
            .chromaticity()
            .unwrap_or_else(Xyz::reference_white);
        self.clamp(xy)
    }

    /// Map a lamp's chromaticity and brightness (0.0..=1.0) back to a
    /// display color.
    ///
    /// The result is normalized so its brightest channel is at most full
    /// scale. A coordinate on the `y = 0` line carries no luminance and
    /// yields black.
    pub fn xy_to_color(&self, xy: XyPoint, brightness: f64) -> Color {
        let xy = self.clamp(xy);
        let brightness = brightness.clamp(0.0, 1.0);

        let Some(xyz) = Xyz::from_chromaticity(xy, brightness) else {
            return Color::BLACK;
        };

        Srgb::from(LinearRgb::from(xyz)).normalized().to_color()
    }
}

/// Closest point to `p` on the segment from `a` to `b`.
///
/// The projection parameter is clamped to 0.0..=1.0 so the result never
/// leaves the segment: 0 maps to `a`, 1 maps to `b`.
fn closest_point_on_segment(a: XyPoint, b: XyPoint, p: XyPoint) -> XyPoint {
    let ab = b.sub(a);
    let ab2 = ab.dot(ab);
    if ab2 == 0.0 {
        return a;
    }

    let t = (p.sub(a).dot(ab) / ab2).max(0.0).min(1.0);
    XyPoint::new(a.x + ab.x * t, a.y + ab.y * t)
}
