// ABOUTME: Input collector for division, sex, and bodyweight selections
// ABOUTME: Keeps bodyweight consistent with sex and validates before any request is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Collector
//!
//! [`PredictionForm`] owns the three selections and the rule tying them
//! together: bodyweight options come from the selected sex, so selecting a
//! sex always clears the bodyweight. [`PredictionForm::validate`] is the only
//! way to obtain a [`PredictionRequest`], which makes "no request without all
//! three fields" a type-level guarantee.

use attempt_core::errors::FormError;
use attempt_core::models::{Division, PredictionRequest, Sex, WeightClass};
use serde::Deserialize;

/// Raw values posted by the browser form.
///
/// Absent and empty fields both mean "unset".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSelection {
    /// Division name
    #[serde(default)]
    pub division: Option<String>,
    /// `"0"` or `"1"`
    #[serde(default)]
    pub sex: Option<String>,
    /// Class label such as `"93"` or `"84+"`
    #[serde(default)]
    pub bodyweight: Option<String>,
}

/// Current selections of the prediction form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionForm {
    division: Option<Division>,
    sex: Option<Sex>,
    bodyweight: Option<WeightClass>,
}

impl PredictionForm {
    /// Selected division
    #[must_use]
    pub const fn division(&self) -> Option<Division> {
        self.division
    }

    /// Selected sex
    #[must_use]
    pub const fn sex(&self) -> Option<Sex> {
        self.sex
    }

    /// Selected bodyweight class
    #[must_use]
    pub const fn bodyweight(&self) -> Option<WeightClass> {
        self.bodyweight
    }

    /// Choose or clear the division
    pub fn select_division(&mut self, division: Option<Division>) {
        self.division = division;
    }

    /// Choose or clear the sex. Always resets the bodyweight.
    pub fn select_sex(&mut self, sex: Option<Sex>) {
        self.sex = sex;
        self.bodyweight = None;
    }

    /// Choose or clear the bodyweight class
    ///
    /// # Errors
    ///
    /// Fails when no sex is selected, or the class is not in that sex's list.
    /// The current selection is kept on failure.
    pub fn select_bodyweight(&mut self, class: Option<WeightClass>) -> Result<(), FormError> {
        if let Some(class) = class {
            let sex = self.sex.ok_or(FormError::BodyweightUnavailable)?;
            if !class.belongs_to(sex) {
                return Err(FormError::UnknownWeightClass {
                    label: class.label(),
                    sex,
                });
            }
        }
        self.bodyweight = class;
        Ok(())
    }

    /// Bodyweight can only be chosen once a sex is selected
    #[must_use]
    pub const fn bodyweight_enabled(&self) -> bool {
        self.sex.is_some()
    }

    /// Classes offered in the bodyweight select; empty until sex is chosen
    #[must_use]
    pub fn bodyweight_options(&self) -> &'static [WeightClass] {
        match self.sex {
            Some(sex) => sex.weight_classes(),
            None => &[],
        }
    }

    /// Apply a browser post.
    ///
    /// A changed sex wins over the posted bodyweight, since that bodyweight was
    /// picked from the previous sex's list. All fields are parsed before any is
    /// applied, so an invalid post leaves the form unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails to parse
    pub fn apply(&mut self, selection: &FormSelection) -> Result<(), FormError> {
        let division = non_empty(selection.division.as_deref())
            .map(str::parse::<Division>)
            .transpose()?;
        let sex = non_empty(selection.sex.as_deref())
            .map(str::parse::<Sex>)
            .transpose()?;

        if sex != self.sex {
            self.division = division;
            self.select_sex(sex);
            return Ok(());
        }

        let bodyweight = match (non_empty(selection.bodyweight.as_deref()), sex) {
            (None, _) => None,
            (Some(_), None) => return Err(FormError::BodyweightUnavailable),
            (Some(label), Some(sex)) => Some(WeightClass::parse_for(sex, label)?),
        };

        self.division = division;
        self.bodyweight = bodyweight;
        Ok(())
    }

    /// Resolve the selections into a request body
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first unset field
    pub fn validate(&self) -> Result<PredictionRequest, FormError> {
        let sex = self.sex.ok_or(FormError::MissingSex)?;
        let bodyweight = self.bodyweight.ok_or(FormError::MissingBodyweight)?;
        let division = self.division.ok_or(FormError::MissingDivision)?;
        Ok(PredictionRequest::new(division, sex, bodyweight))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
