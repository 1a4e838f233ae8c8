//! Human-readable analogies for impact magnitudes.
//!
//! Each lookup is an ascending bracket table: the first bracket whose upper
//! bound exceeds the value wins, and anything beyond the last bound falls
//! through to the top class.

/// Rough yield class of an impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnergyClass {
    TacticalNuke,
    Hiroshima,
    CastleBravo,
    TsarBomba,
    GlobalArsenal,
    ExtinctionLevel,
}

const ENERGY_BRACKETS: [(f64, EnergyClass); 5] = [
    (0.02, EnergyClass::TacticalNuke),
    (1.0, EnergyClass::Hiroshima),
    (50.0, EnergyClass::CastleBravo),
    (1000.0, EnergyClass::TsarBomba),
    (100_000.0, EnergyClass::GlobalArsenal),
];

impl EnergyClass {
    /// Bracket for an energy in megatons of TNT.
    pub fn from_megatons(megatons: f64) -> Self {
        ENERGY_BRACKETS
            .iter()
            .find(|(upper, _)| megatons < *upper)
            .map_or(EnergyClass::ExtinctionLevel, |(_, class)| *class)
    }

    /// Describe `megatons` relative to this class's reference event.
    pub fn describe(self, megatons: f64) -> String {
        match self {
            EnergyClass::TacticalNuke => {
                format!("{:.0} kilotons (small tactical nuke)", megatons * 1000.0)
            }
            EnergyClass::Hiroshima => format!("{:.0}x Hiroshima bomb", megatons * 50.0),
            EnergyClass::CastleBravo => format!("{:.1}x Castle Bravo test", megatons / 15.0),
            EnergyClass::TsarBomba => format!("{:.1}x Tsar Bomba", megatons / 50.0),
            EnergyClass::GlobalArsenal => {
                format!("{:.0}x all nuclear weapons on Earth", megatons / 1000.0)
            }
            EnergyClass::ExtinctionLevel => "Extinction-level event".to_string(),
        }
    }
}

/// Bomb-yield analogy for an energy in megatons.
pub fn energy_comparison(megatons: f64) -> String {
    EnergyClass::from_megatons(megatons).describe(megatons)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WindClass {
    Category1,
    Category3,
    Category5,
    Katrina,
    Ef5,
    BeyondRecord,
}

const WIND_BRACKETS: [(f64, WindClass); 5] = [
    (120.0, WindClass::Category1),
    (180.0, WindClass::Category3),
    (250.0, WindClass::Category5),
    (400.0, WindClass::Katrina),
    (600.0, WindClass::Ef5),
];

/// Storm analogy for a peak wind speed in km/h.
pub fn wind_comparison(km_h: f64) -> String {
    let class = WIND_BRACKETS
        .iter()
        .find(|(upper, _)| km_h < *upper)
        .map_or(WindClass::BeyondRecord, |(_, class)| *class);

    match class {
        WindClass::Category1 => "Hurricane Category 1".to_string(),
        WindClass::Category3 => "Hurricane Category 3".to_string(),
        WindClass::Category5 => "Hurricane Category 5".to_string(),
        WindClass::Katrina => format!("{:.1}x Hurricane Katrina", km_h / 75.0),
        WindClass::Ef5 => "EF5 Tornado winds".to_string(),
        WindClass::BeyondRecord => {
            format!("{:.0}x strongest tornado ever recorded", km_h / 150.0)
        }
    }
}

const EARTHQUAKE_BRACKETS: [(f64, &str); 6] = [
    (4.0, "Minor tremor"),
    (5.0, "Moderate earthquake"),
    (6.0, "Strong earthquake (like 1994 Northridge)"),
    (7.0, "Major earthquake (like 2010 Haiti)"),
    (8.0, "Great earthquake (like 1906 San Francisco)"),
    (9.0, "Massive earthquake (like 2011 Tōhoku)"),
];

/// Historical-quake analogy for a moment magnitude.
pub fn earthquake_comparison(magnitude: f64) -> &'static str {
    EARTHQUAKE_BRACKETS
        .iter()
        .find(|(upper, _)| magnitude < *upper)
        .map_or("Mega-earthquake (unprecedented in modern times)", |(_, label)| *label)
}
