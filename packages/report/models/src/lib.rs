#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! UCR crime category taxonomy for SF police reports.
//!
//! Every report is classified into exactly one of these 11 labels. The set
//! is closed: unrecognized source categories map to [`UcrCategory::Other`].

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A UCR-style crime category.
///
/// `Display` and `Serialize` render the human-readable label (with spaces)
/// exactly as shown in the UI and filter dropdowns. `FromStr` accepts the
/// label case-insensitively, since filter input arrives as free text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum UcrCategory {
    /// Larceny and general theft offenses
    #[serde(rename = "Larceny Theft")]
    #[strum(serialize = "Larceny Theft")]
    LarcenyTheft,
    /// Assault and battery
    #[serde(rename = "Assault")]
    #[strum(serialize = "Assault")]
    Assault,
    /// Burglary and breaking-and-entering
    #[serde(rename = "Burglary")]
    #[strum(serialize = "Burglary")]
    Burglary,
    /// Motor vehicle theft
    #[serde(rename = "Vehicle Theft")]
    #[strum(serialize = "Vehicle Theft")]
    VehicleTheft,
    /// Robbery
    #[serde(rename = "Robbery")]
    #[strum(serialize = "Robbery")]
    Robbery,
    /// Drug and narcotics offenses
    #[serde(rename = "Drug Offense")]
    #[strum(serialize = "Drug Offense")]
    DrugOffense,
    /// Vandalism and malicious mischief
    #[serde(rename = "Vandalism")]
    #[strum(serialize = "Vandalism")]
    Vandalism,
    /// Fraud and deceptive practices
    #[serde(rename = "Fraud")]
    #[strum(serialize = "Fraud")]
    Fraud,
    /// Weapons offenses
    #[serde(rename = "Weapons Offense")]
    #[strum(serialize = "Weapons Offense")]
    WeaponsOffense,
    /// Suspicious activity and suspicious occurrences
    #[serde(rename = "Suspicious Activity")]
    #[strum(serialize = "Suspicious Activity")]
    SuspiciousActivity,
    /// Anything that does not fit the categories above
    #[serde(rename = "Other")]
    #[strum(serialize = "Other")]
    Other,
}

impl UcrCategory {
    /// All categories in display order.
    pub const ALL: &[Self] = &[
        Self::LarcenyTheft,
        Self::Assault,
        Self::Burglary,
        Self::VehicleTheft,
        Self::Robbery,
        Self::DrugOffense,
        Self::Vandalism,
        Self::Fraud,
        Self::WeaponsOffense,
        Self::SuspiciousActivity,
        Self::Other,
    ];
}
