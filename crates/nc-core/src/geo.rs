//! Geographic and Mercator coordinate types.
//!
//! Map geometry is stored in a spherical Mercator plane measured in
//! *degrees*: `x` is longitude in `[-180, 180]`, `y` is the Mercator
//! ordinate of the latitude, also clamped to `[-180, 180]`.  Planar work
//! (segment projection, orientation tests) happens in that plane; anything
//! that needs a real-world length converts back to latitude/longitude and
//! uses great-circle distance, since the plane stretches lengths away from
//! the equator.

/// Mean Earth radius used for all distance calculations, metres.
pub const EARTH_RADIUS_M: f64 = 6_378_000.0;

pub const MIN_X: f64 = -180.0;
pub const MAX_X: f64 = 180.0;
pub const MIN_Y: f64 = -180.0;
pub const MAX_Y: f64 = 180.0;

/// Latitudes are clamped to this range before projecting; beyond it the
/// Mercator ordinate diverges.
const MAX_PROJECTABLE_LAT: f64 = 86.0;

// ── LatLon ────────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: LatLon) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Project onto the Mercator plane.
    pub fn to_mercator(self) -> MercatorPoint {
        MercatorPoint::new(lon_to_x(self.lon), lat_to_y(self.lat))
    }
}

impl std::fmt::Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── MercatorPoint ─────────────────────────────────────────────────────────────

/// A point in the Mercator plane (see module docs for units).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

impl MercatorPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_lat_lon(self) -> LatLon {
        LatLon::new(y_to_lat(self.y), x_to_lon(self.x))
    }

    #[inline]
    pub fn dot(self, other: MercatorPoint) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Planar Euclidean distance, in Mercator degrees.  Not a real-world
    /// length; see [`distance_on_earth`].
    pub fn planar_distance(self, other: MercatorPoint) -> f64 {
        (other - self).length_squared().sqrt()
    }

    /// Component-wise comparison within `eps`.
    pub fn almost_equal(self, other: MercatorPoint, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl std::ops::Add for MercatorPoint {
    type Output = MercatorPoint;
    #[inline]
    fn add(self, rhs: MercatorPoint) -> MercatorPoint {
        MercatorPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for MercatorPoint {
    type Output = MercatorPoint;
    #[inline]
    fn sub(self, rhs: MercatorPoint) -> MercatorPoint {
        MercatorPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for MercatorPoint {
    type Output = MercatorPoint;
    #[inline]
    fn mul(self, k: f64) -> MercatorPoint {
        MercatorPoint::new(self.x * k, self.y * k)
    }
}

impl std::fmt::Display for MercatorPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.7}, {:.7}]", self.x, self.y)
    }
}

impl From<MercatorPoint> for ::geo::Coord<f64> {
    #[inline]
    fn from(p: MercatorPoint) -> Self {
        ::geo::Coord { x: p.x, y: p.y }
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

#[inline]
pub fn lon_to_x(lon: f64) -> f64 {
    lon
}

#[inline]
pub fn x_to_lon(x: f64) -> f64 {
    x
}

pub fn lat_to_y(lat: f64) -> f64 {
    let sin_lat = lat
        .clamp(-MAX_PROJECTABLE_LAT, MAX_PROJECTABLE_LAT)
        .to_radians()
        .sin();
    let y = (0.5 * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln()).to_degrees();
    y.clamp(MIN_Y, MAX_Y)
}

pub fn y_to_lat(y: f64) -> f64 {
    (2.0 * (0.5 * y.to_radians()).tanh().atan()).to_degrees()
}

/// Great-circle distance in metres between two Mercator points.
pub fn distance_on_earth(a: MercatorPoint, b: MercatorPoint) -> f64 {
    a.to_lat_lon().distance_m(b.to_lat_lon())
}
