//! Travel modes a profile can be built for.

use std::str::FromStr;

/// The means of travel a [`VehicleModelFactory`](crate::VehicleModelFactory)
/// builds profiles for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleType {
    /// On foot.
    Pedestrian,
    /// Bicycle.
    Bicycle,
    /// Private motor vehicle.
    #[default]
    Car,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] =
        [VehicleType::Pedestrian, VehicleType::Bicycle, VehicleType::Car];

    /// Lower-case label, used in logs and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Pedestrian => "pedestrian",
            VehicleType::Bicycle    => "bicycle",
            VehicleType::Car        => "car",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pedestrian" | "foot" | "walk" => Ok(VehicleType::Pedestrian),
            "bicycle" | "bike"             => Ok(VehicleType::Bicycle),
            "car"                          => Ok(VehicleType::Car),
            other => Err(format!(
                "unknown vehicle type {other:?}: expected \"pedestrian\", \"bicycle\" or \"car\""
            )),
        }
    }
}
