//! ClinicalFeatureVector - the twelve named measurements a clinical
//! classifier consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::{round_to, ValidationError};

/// Feature slots in canonical order.
///
/// `column_name` is the contract with the classifier artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalField {
    Age,
    BodyMassIndex,
    FastingGlucose,
    FastingInsulin,
    LhFshRatio,
    Amh,
    Dheas,
    Prolactin,
    Tsh,
    FreeTestosterone,
    BloodSugar,
    SymptomScore,
}

/// Number of clinical features.
pub const CLINICAL_FIELD_COUNT: usize = 12;

impl ClinicalField {
    /// Returns all fields in canonical order.
    pub fn all() -> &'static [ClinicalField; CLINICAL_FIELD_COUNT] {
        &[
            ClinicalField::Age,
            ClinicalField::BodyMassIndex,
            ClinicalField::FastingGlucose,
            ClinicalField::FastingInsulin,
            ClinicalField::LhFshRatio,
            ClinicalField::Amh,
            ClinicalField::Dheas,
            ClinicalField::Prolactin,
            ClinicalField::Tsh,
            ClinicalField::FreeTestosterone,
            ClinicalField::BloodSugar,
            ClinicalField::SymptomScore,
        ]
    }

    /// Position of this field in canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Column name the classifier artifact expects.
    pub fn column_name(&self) -> &'static str {
        match self {
            ClinicalField::Age => "Age",
            ClinicalField::BodyMassIndex => "BMI",
            ClinicalField::FastingGlucose => "FastingGlucose",
            ClinicalField::FastingInsulin => "FastingInsulin",
            ClinicalField::LhFshRatio => "LH_FSH_Ratio",
            ClinicalField::Amh => "AMH",
            ClinicalField::Dheas => "DHEAS",
            ClinicalField::Prolactin => "Prolactin",
            ClinicalField::Tsh => "TSH",
            ClinicalField::FreeTestosterone => "FreeTestosterone",
            ClinicalField::BloodSugar => "BloodSugar",
            ClinicalField::SymptomScore => "Score",
        }
    }

    /// Looks a field up by its artifact column name.
    pub fn from_column_name(name: &str) -> Option<ClinicalField> {
        Self::all().iter().copied().find(|f| f.column_name() == name)
    }

    /// Whether the value may be undefined. Only the derived BMI may.
    pub fn is_optional(&self) -> bool {
        matches!(self, ClinicalField::BodyMassIndex)
    }
}

impl fmt::Display for ClinicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// Body-mass index from weight in kilograms and height in centimetres,
/// rounded to two decimals.
///
/// Undefined when either input is missing, non-finite or non-positive.
pub fn body_mass_index(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = weight_kg.filter(|w| w.is_finite() && *w > 0.0)?;
    let height_m = height_cm.filter(|h| h.is_finite() && *h > 0.0)? / 100.0;
    Some(round_to(weight / (height_m * height_m), 2))
}

/// Typed clinical form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalMeasurements {
    pub age: f64,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub fasting_glucose: f64,
    pub fasting_insulin: f64,
    pub lh_fsh_ratio: f64,
    pub amh: f64,
    pub dheas: f64,
    pub prolactin: f64,
    pub tsh: f64,
    pub free_testosterone: f64,
    pub blood_sugar: f64,
    pub symptom_score: f64,
}

/// Twelve numeric features, indexed by [`ClinicalField`].
///
/// Every slot except BMI holds a finite number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClinicalFeatureVector {
    values: [Option<f64>; CLINICAL_FIELD_COUNT],
}

impl ClinicalFeatureVector {
    /// Builds the vector from a typed form, deriving BMI.
    pub fn from_measurements(m: &ClinicalMeasurements) -> Result<Self, ValidationError> {
        let mut values = [None; CLINICAL_FIELD_COUNT];
        values[ClinicalField::Age.index()] = Some(m.age);
        values[ClinicalField::BodyMassIndex.index()] = body_mass_index(m.weight_kg, m.height_cm);
        values[ClinicalField::FastingGlucose.index()] = Some(m.fasting_glucose);
        values[ClinicalField::FastingInsulin.index()] = Some(m.fasting_insulin);
        values[ClinicalField::LhFshRatio.index()] = Some(m.lh_fsh_ratio);
        values[ClinicalField::Amh.index()] = Some(m.amh);
        values[ClinicalField::Dheas.index()] = Some(m.dheas);
        values[ClinicalField::Prolactin.index()] = Some(m.prolactin);
        values[ClinicalField::Tsh.index()] = Some(m.tsh);
        values[ClinicalField::FreeTestosterone.index()] = Some(m.free_testosterone);
        values[ClinicalField::BloodSugar.index()] = Some(m.blood_sugar);
        values[ClinicalField::SymptomScore.index()] = Some(m.symptom_score);
        Self::from_values(values)
    }

    /// Builds the vector from artifact column names to loosely-typed values.
    ///
    /// Unknown keys are ignored. A missing or `null` BMI is undefined; any
    /// other missing, `null` or non-numeric field is rejected.
    pub fn from_named(named: &HashMap<String, serde_json::Value>) -> Result<Self, ValidationError> {
        let mut values = [None; CLINICAL_FIELD_COUNT];
        for field in ClinicalField::all() {
            let value = match named.get(field.column_name()) {
                None | Some(serde_json::Value::Null) => None,
                Some(serde_json::Value::Number(n)) => n.as_f64(),
                Some(other) => {
                    return Err(ValidationError::invalid_format(
                        field.column_name(),
                        format!("expected a number, got {}", other),
                    ))
                }
            };
            values[field.index()] = value;
        }
        Self::from_values(values)
    }

    fn from_values(values: [Option<f64>; CLINICAL_FIELD_COUNT]) -> Result<Self, ValidationError> {
        for field in ClinicalField::all() {
            match values[field.index()] {
                None if field.is_optional() => {}
                None => return Err(ValidationError::missing_field(field.column_name())),
                Some(v) if !v.is_finite() => {
                    return Err(ValidationError::invalid_format(
                        field.column_name(),
                        "value must be a finite number",
                    ))
                }
                Some(_) => {}
            }
        }
        Ok(Self { values })
    }

    /// Returns the value of a field; `None` only for an undefined BMI.
    pub fn get(&self, field: ClinicalField) -> Option<f64> {
        self.values[field.index()]
    }

    /// Iterates `(field, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ClinicalField, Option<f64>)> + '_ {
        ClinicalField::all().iter().map(move |f| (*f, self.get(*f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn measurements() -> ClinicalMeasurements {
        ClinicalMeasurements {
            age: 25.0,
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            fasting_glucose: 90.0,
            fasting_insulin: 12.0,
            lh_fsh_ratio: 2.1,
            amh: 4.5,
            dheas: 250.0,
            prolactin: 15.0,
            tsh: 2.0,
            free_testosterone: 3.2,
            blood_sugar: 110.0,
            symptom_score: 6.0,
        }
    }

    #[test]
    fn bmi_is_rounded_to_two_decimals() {
        assert_eq!(body_mass_index(Some(70.0), Some(175.0)), Some(22.86));
    }

    #[test]
    fn bmi_is_undefined_without_weight_or_height() {
        assert_eq!(body_mass_index(None, Some(175.0)), None);
        assert_eq!(body_mass_index(Some(70.0), None), None);
        assert_eq!(body_mass_index(Some(70.0), Some(0.0)), None);
        assert_eq!(body_mass_index(Some(-1.0), Some(170.0)), None);
    }

    #[test]
    fn field_order_matches_artifact_columns() {
        let names: Vec<&str> = ClinicalField::all().iter().map(|f| f.column_name()).collect();
        assert_eq!(
            names,
            vec![
                "Age", "BMI", "FastingGlucose", "FastingInsulin", "LH_FSH_Ratio", "AMH",
                "DHEAS", "Prolactin", "TSH", "FreeTestosterone", "BloodSugar", "Score"
            ]
        );
        for (i, field) in ClinicalField::all().iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn column_names_round_trip() {
        assert_eq!(ClinicalField::from_column_name("LH_FSH_Ratio"), Some(ClinicalField::LhFshRatio));
        assert_eq!(ClinicalField::from_column_name("Weight"), None);
    }

    #[test]
    fn from_measurements_derives_bmi() {
        let features = ClinicalFeatureVector::from_measurements(&measurements()).unwrap();
        assert_eq!(features.get(ClinicalField::BodyMassIndex), Some(22.86));
        assert_eq!(features.get(ClinicalField::SymptomScore), Some(6.0));
    }

    #[test]
    fn from_measurements_passes_undefined_bmi_through() {
        let mut m = measurements();
        m.height_cm = None;
        let features = ClinicalFeatureVector::from_measurements(&m).unwrap();
        assert_eq!(features.get(ClinicalField::BodyMassIndex), None);
    }

    #[test]
    fn from_measurements_rejects_non_finite_values() {
        let mut m = measurements();
        m.tsh = f64::NAN;
        match ClinicalFeatureVector::from_measurements(&m) {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "TSH"),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn from_named_accepts_all_columns() {
        let named: HashMap<String, serde_json::Value> = ClinicalField::all()
            .iter()
            .map(|f| (f.column_name().to_string(), json!(1.5)))
            .collect();
        let features = ClinicalFeatureVector::from_named(&named).unwrap();
        assert!(features.iter().all(|(_, v)| v == Some(1.5)));
    }

    #[test]
    fn from_named_rejects_missing_required_field() {
        let mut named: HashMap<String, serde_json::Value> = ClinicalField::all()
            .iter()
            .map(|f| (f.column_name().to_string(), json!(1.0)))
            .collect();
        named.remove("AMH");
        match ClinicalFeatureVector::from_named(&named) {
            Err(ValidationError::MissingField { field }) => assert_eq!(field, "AMH"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn from_named_rejects_non_numeric_field() {
        let mut named: HashMap<String, serde_json::Value> = ClinicalField::all()
            .iter()
            .map(|f| (f.column_name().to_string(), json!(1.0)))
            .collect();
        named.insert("DHEAS".to_string(), json!("high"));
        assert!(matches!(
            ClinicalFeatureVector::from_named(&named),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn from_named_allows_null_bmi() {
        let mut named: HashMap<String, serde_json::Value> = ClinicalField::all()
            .iter()
            .map(|f| (f.column_name().to_string(), json!(1.0)))
            .collect();
        named.insert("BMI".to_string(), serde_json::Value::Null);
        let features = ClinicalFeatureVector::from_named(&named).unwrap();
        assert_eq!(features.get(ClinicalField::BodyMassIndex), None);
    }
}
