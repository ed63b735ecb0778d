// ABOUTME: Prediction request model with division, sex, and weight-class types
// ABOUTME: Encodes the sex-specific class tables and the open-ended class truncation rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::weight_classes::OPEN_ENDED_SUFFIX;
use crate::errors::FormError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Competition age/experience category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    /// Open division
    Open,
    /// Junior division
    Junior,
    /// Teen division
    Teen,
    /// Youth division
    Youth,
    /// Master division
    Master,
}

impl Division {
    /// Every division, in display order
    pub const ALL: [Self; 5] = [
        Self::Open,
        Self::Junior,
        Self::Teen,
        Self::Youth,
        Self::Master,
    ];

    /// Wire and display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Junior => "Junior",
            Self::Teen => "Teen",
            Self::Youth => "Youth",
            Self::Master => "Master",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|division| division.as_str() == s)
            .ok_or_else(|| FormError::UnknownDivision(s.to_owned()))
    }
}

/// Competitor sex, encoded on the wire as `0` (female) or `1` (male)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Encoded as 0
    Female,
    /// Encoded as 1
    Male,
}

impl Sex {
    /// Both options, in display order
    pub const ALL: [Self; 2] = [Self::Female, Self::Male];

    /// Numeric wire code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }

    /// Option label shown in the sex select
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "Female (0)",
            Self::Male => "Male (1)",
        }
    }

    /// Decode a wire code
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidSex`] for anything other than 0 or 1
    pub fn from_code(code: u8) -> Result<Self, FormError> {
        match code {
            0 => Ok(Self::Female),
            1 => Ok(Self::Male),
            other => Err(FormError::InvalidSex(other.to_string())),
        }
    }

    /// Weight classes available to this sex, lightest first
    #[must_use]
    pub const fn weight_classes(self) -> &'static [WeightClass] {
        match self {
            Self::Female => &FEMALE_CLASSES,
            Self::Male => &MALE_CLASSES,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => f.write_str("female"),
            Self::Male => f.write_str("male"),
        }
    }
}

impl FromStr for Sex {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| FormError::InvalidSex(s.to_owned()))
            .and_then(Self::from_code)
    }
}

impl Serialize for Sex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code).map_err(de::Error::custom)
    }
}

/// A sex-specific bodyweight bracket.
///
/// The heaviest bracket of each sex is open-ended: `84+` means "at least 84 kg"
/// and is sent to the backend as its numeric floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightClass {
    limit_kg: u16,
    open_ended: bool,
}

const FEMALE_CLASSES: [WeightClass; 9] = [
    WeightClass::capped(43),
    WeightClass::capped(47),
    WeightClass::capped(52),
    WeightClass::capped(57),
    WeightClass::capped(63),
    WeightClass::capped(69),
    WeightClass::capped(76),
    WeightClass::capped(84),
    WeightClass::open(84),
];

const MALE_CLASSES: [WeightClass; 9] = [
    WeightClass::capped(53),
    WeightClass::capped(59),
    WeightClass::capped(66),
    WeightClass::capped(74),
    WeightClass::capped(83),
    WeightClass::capped(93),
    WeightClass::capped(105),
    WeightClass::capped(120),
    WeightClass::open(120),
];

impl WeightClass {
    const fn capped(limit_kg: u16) -> Self {
        Self {
            limit_kg,
            open_ended: false,
        }
    }

    const fn open(limit_kg: u16) -> Self {
        Self {
            limit_kg,
            open_ended: true,
        }
    }

    /// Resolve a class label such as `"93"` or `"120+"` against a sex's list
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownWeightClass`] when the label is not one of
    /// that sex's classes
    pub fn parse_for(sex: Sex, label: &str) -> Result<Self, FormError> {
        let label = label.trim();
        sex.weight_classes()
            .iter()
            .copied()
            .find(|class| class.label() == label)
            .ok_or_else(|| FormError::UnknownWeightClass {
                label: label.to_owned(),
                sex,
            })
    }

    /// Whether this class belongs to the given sex's list
    #[must_use]
    pub fn belongs_to(self, sex: Sex) -> bool {
        sex.weight_classes().contains(&self)
    }

    /// Label as shown in the select, e.g. `84+`
    #[must_use]
    pub fn label(self) -> String {
        if self.open_ended {
            format!("{}{OPEN_ENDED_SUFFIX}", self.limit_kg)
        } else {
            self.limit_kg.to_string()
        }
    }

    /// Whether this is the open-ended top class
    #[must_use]
    pub const fn is_open_ended(self) -> bool {
        self.open_ended
    }

    /// Bodyweight sent to the backend; open-ended classes use their floor
    #[must_use]
    pub fn bodyweight_kg(self) -> f64 {
        f64::from(self.limit_kg)
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.label())
    }
}

/// JSON body sent through the proxy to the prediction backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Competition division
    pub division: Division,
    /// Bodyweight in kilograms
    pub bodyweight: f64,
    /// Competitor sex as 0 or 1
    pub sex: Sex,
}

impl PredictionRequest {
    /// Build a request from fully resolved selections
    #[must_use]
    pub fn new(division: Division, sex: Sex, class: WeightClass) -> Self {
        Self {
            division,
            bodyweight: class.bodyweight_kg(),
            sex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ended_class_truncates_to_floor() {
        let class = WeightClass::parse_for(Sex::Male, "120+").unwrap();
        assert!(class.is_open_ended());
        assert!((class.bodyweight_kg() - 120.0).abs() < f64::EPSILON);
        assert_eq!(class.label(), "120+");

        let class = WeightClass::parse_for(Sex::Female, "84+").unwrap();
        assert!((class.bodyweight_kg() - 84.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_class_lists_are_sex_specific() {
        assert!(WeightClass::parse_for(Sex::Female, "43").is_ok());
        assert_eq!(
            WeightClass::parse_for(Sex::Male, "43"),
            Err(FormError::UnknownWeightClass {
                label: "43".to_owned(),
                sex: Sex::Male,
            })
        );
        assert!(WeightClass::parse_for(Sex::Female, "120+").is_err());
    }

    #[test]
    fn test_each_sex_has_one_open_ended_top_class() {
        for sex in Sex::ALL {
            let classes = sex.weight_classes();
            assert_eq!(classes.len(), 9);
            assert_eq!(classes.iter().filter(|c| c.is_open_ended()).count(), 1);
            assert!(classes[classes.len() - 1].is_open_ended());
        }
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("0".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!("1".parse::<Sex>(), Ok(Sex::Male));
        assert_eq!(
            "2".parse::<Sex>(),
            Err(FormError::InvalidSex("2".to_owned()))
        );
        assert!("M".parse::<Sex>().is_err());
    }

    #[test]
    fn test_request_wire_shape() {
        let class = WeightClass::parse_for(Sex::Female, "84+").unwrap();
        let request = PredictionRequest::new(Division::Junior, Sex::Female, class);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["division"], "Junior");
        assert_eq!(json["sex"], 0);
        assert_eq!(json["bodyweight"].as_f64(), Some(84.0));
    }

    #[test]
    fn test_request_rejects_out_of_range_sex() {
        let result = serde_json::from_value::<PredictionRequest>(serde_json::json!({
            "division": "Open",
            "bodyweight": 93.0,
            "sex": 3
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_division_names_round_trip_through_from_str() {
        for division in Division::ALL {
            assert_eq!(division.as_str().parse::<Division>(), Ok(division));
        }
        assert!("open".parse::<Division>().is_err());
    }
}
