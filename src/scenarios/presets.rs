//! Preset near-Earth objects.
//!
//! Well-known asteroids with published size and approach data, used as
//! starting points when no live catalogue is available.

use super::NeoPreset;

/// All available presets, in catalogue order.
pub static PRESETS: &[NeoPreset] = &[
    APOPHIS, BENNU, EROS, RYUGU, CERES, VESTA, PALLAS, JUNO, ASTRAEA, HEBE,
];

/// 99942 Apophis, famous for its 2029 close approach.
pub static APOPHIS: NeoPreset = NeoPreset {
    id: "2099942",
    name: "Apophis",
    diameter_min_m: 310.0,
    diameter_max_m: 700.0,
    velocity_km_s: 7.4,
    miss_distance_km: 31_600.0,
    close_approach_date: "2029-04-13",
    potentially_hazardous: true,
};

/// 101955 Bennu, OSIRIS-REx sample-return target.
pub static BENNU: NeoPreset = NeoPreset {
    id: "2101955",
    name: "Bennu",
    diameter_min_m: 480.0,
    diameter_max_m: 510.0,
    velocity_km_s: 28.0,
    miss_distance_km: 480_000.0,
    close_approach_date: "2026-09-25",
    potentially_hazardous: true,
};

pub static EROS: NeoPreset = NeoPreset {
    id: "2000433",
    name: "Eros",
    diameter_min_m: 13_000.0,
    diameter_max_m: 29_000.0,
    velocity_km_s: 12.5,
    miss_distance_km: 26_000_000.0,
    close_approach_date: "2025-10-15",
    potentially_hazardous: false,
};

/// 162173 Ryugu, Hayabusa2 target.
pub static RYUGU: NeoPreset = NeoPreset {
    id: "2162173",
    name: "Ryugu",
    diameter_min_m: 850.0,
    diameter_max_m: 950.0,
    velocity_km_s: 31.5,
    miss_distance_km: 850_000.0,
    close_approach_date: "2027-03-10",
    potentially_hazardous: false,
};

pub static CERES: NeoPreset = NeoPreset {
    id: "2000001",
    name: "Ceres",
    diameter_min_m: 950_000.0,
    diameter_max_m: 950_000.0,
    velocity_km_s: 17.9,
    miss_distance_km: 400_000_000.0,
    close_approach_date: "2025-12-01",
    potentially_hazardous: false,
};

pub static VESTA: NeoPreset = NeoPreset {
    id: "2000004",
    name: "Vesta",
    diameter_min_m: 525_000.0,
    diameter_max_m: 525_000.0,
    velocity_km_s: 19.3,
    miss_distance_km: 350_000_000.0,
    close_approach_date: "2025-11-15",
    potentially_hazardous: false,
};

pub static PALLAS: NeoPreset = NeoPreset {
    id: "2000002",
    name: "Pallas",
    diameter_min_m: 512_000.0,
    diameter_max_m: 512_000.0,
    velocity_km_s: 20.0,
    miss_distance_km: 380_000_000.0,
    close_approach_date: "2025-10-20",
    potentially_hazardous: false,
};

pub static JUNO: NeoPreset = NeoPreset {
    id: "2000003",
    name: "Juno",
    diameter_min_m: 320_000.0,
    diameter_max_m: 320_000.0,
    velocity_km_s: 18.2,
    miss_distance_km: 320_000_000.0,
    close_approach_date: "2025-09-30",
    potentially_hazardous: false,
};

pub static ASTRAEA: NeoPreset = NeoPreset {
    id: "2000005",
    name: "Astraea",
    diameter_min_m: 120_000.0,
    diameter_max_m: 120_000.0,
    velocity_km_s: 16.8,
    miss_distance_km: 280_000_000.0,
    close_approach_date: "2025-08-25",
    potentially_hazardous: false,
};

pub static HEBE: NeoPreset = NeoPreset {
    id: "2000006",
    name: "Hebe",
    diameter_min_m: 185_000.0,
    diameter_max_m: 185_000.0,
    velocity_km_s: 17.5,
    miss_distance_km: 300_000_000.0,
    close_approach_date: "2025-07-10",
    potentially_hazardous: false,
};
