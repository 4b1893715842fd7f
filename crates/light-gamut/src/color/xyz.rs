//! CIE XYZ tristimulus values and xy chromaticity.

use super::linear_rgb::LinearRgb;

/// Wide-gamut linear RGB to XYZ, rows X, Y, Z.
pub const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.664511, 0.154324, 0.162028],
    [0.283881, 0.668433, 0.047685],
    [0.000088, 0.072310, 0.986039],
];

/// XYZ to wide-gamut linear RGB, rows R, G, B.
pub const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [1.656492, -0.354851, -0.255038],
    [-0.707196, 1.655397, 0.036152],
    [0.051713, -0.121364, 1.011530],
];

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// A CIE 1931 chromaticity coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
}

impl XyPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn sub(self, other: XyPoint) -> XyPoint {
        XyPoint::new(self.x - other.x, self.y - other.y)
    }

    /// 2D cross product (z component of the 3D cross product).
    #[inline]
    pub fn cross(self, other: XyPoint) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn dot(self, other: XyPoint) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn distance(self, other: XyPoint) -> f64 {
        let d = self.sub(other);
        d.dot(d).sqrt()
    }
}

/// CIE XYZ tristimulus values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rebuild tristimulus values from chromaticity and luminance `Y`.
    ///
    /// Returns `None` when `y` is not positive; such a chromaticity carries
    /// no luminance.
    pub fn from_chromaticity(xy: XyPoint, luminance: f64) -> Option<Self> {
        if !(xy.y > 0.0) {
            return None;
        }
        let scale = luminance / xy.y;
        Some(Self {
            x: scale * xy.x,
            y: luminance,
            z: scale * (1.0 - xy.x - xy.y),
        })
    }

    /// Project onto the chromaticity plane.
    ///
    /// Returns `None` for black (`X + Y + Z == 0`), which has no chromaticity.
    pub fn chromaticity(&self) -> Option<XyPoint> {
        let sum = self.x + self.y + self.z;
        if !(sum > 0.0) {
            return None;
        }
        Some(XyPoint::new(self.x / sum, self.y / sum))
    }

    /// Chromaticity of equal-energy linear white under [`RGB_TO_XYZ`].
    pub fn reference_white() -> XyPoint {
        let white = Xyz::from(LinearRgb::new(1.0, 1.0, 1.0));
        let sum = white.x + white.y + white.z;
        XyPoint::new(white.x / sum, white.y / sum)
    }
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = mul(&RGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
        Self { x, y, z }
    }
}

impl From<Xyz> for LinearRgb {
    fn from(xyz: Xyz) -> Self {
        let [r, g, b] = mul(&XYZ_TO_RGB, [xyz.x, xyz.y, xyz.z]);
        LinearRgb::new(r, g, b)
    }
}
