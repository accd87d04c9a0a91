//! Synthetic street data: a few blocks of downtown Mobile, Alabama.

use nc_core::LatLon;

pub struct Street {
    pub name:   &'static str,
    /// `|`-separated taxonomy paths.
    pub tags:   &'static [&'static str],
    pub points: &'static [(f64, f64)],
}

impl Street {
    pub fn geometry(&self) -> impl Iterator<Item = LatLon> + '_ {
        self.points.iter().map(|&(lat, lon)| LatLon::new(lat, lon))
    }
}

pub struct House {
    pub label: &'static str,
    pub at:    LatLon,
}

pub const STREETS: &[Street] = &[
    Street {
        name:   "Government St",
        tags:   &["highway|primary"],
        points: &[(30.6880, -88.0520), (30.6885, -88.0450), (30.6890, -88.0400)],
    },
    Street {
        name:   "Dauphin St",
        tags:   &["highway|secondary", "hwtag|oneway"],
        points: &[(30.6920, -88.0400), (30.6915, -88.0460), (30.6910, -88.0520)],
    },
    Street {
        name:   "Bienville Sq footpath",
        tags:   &["highway|footway"],
        points: &[(30.6905, -88.0440), (30.6905, -88.0425)],
    },
    Street {
        name:   "I-10 ramp",
        tags:   &["highway|motorway_link", "hwtag|nofoot", "hwtag|nobicycle"],
        points: &[(30.6850, -88.0450), (30.6860, -88.0410)],
    },
    Street {
        name:   "Water St bridge",
        tags:   &["highway|trunk|bridge"],
        points: &[(30.6870, -88.0395), (30.6930, -88.0390)],
    },
    Street {
        name:   "Mobile Bay ferry",
        tags:   &["route|ferry|motorcar"],
        points: &[(30.6900, -88.0380), (30.6900, -88.0300)],
    },
];

pub const HOUSES: &[House] = &[
    House { label: "101 Government St", at: LatLon { lat: 30.6878, lon: -88.0480 } },
    House { label: "150 Government St", at: LatLon { lat: 30.6892, lon: -88.0430 } },
    House { label: "12 Dauphin St",     at: LatLon { lat: 30.6925, lon: -88.0430 } },
    House { label: "Bienville kiosk",   at: LatLon { lat: 30.6903, lon: -88.0432 } },
];
