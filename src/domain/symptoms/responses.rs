//! SymptomResponseVector - the ordered yes/no answers of one submission.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AssessmentError;

use super::SYMPTOM_QUESTION_COUNT;

/// Exactly one answer per questionnaire entry, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<bool>", into = "Vec<bool>")]
pub struct SymptomResponseVector([bool; SYMPTOM_QUESTION_COUNT]);

impl SymptomResponseVector {
    /// Creates a vector from a fixed-size array.
    pub fn new(answers: [bool; SYMPTOM_QUESTION_COUNT]) -> Self {
        Self(answers)
    }

    /// Creates a vector from a slice, failing fast on the wrong length.
    pub fn from_slice(answers: &[bool]) -> Result<Self, AssessmentError> {
        let array: [bool; SYMPTOM_QUESTION_COUNT] =
            answers
                .try_into()
                .map_err(|_| AssessmentError::InvalidSymptomResponses {
                    expected: SYMPTOM_QUESTION_COUNT,
                    actual: answers.len(),
                })?;
        Ok(Self(array))
    }

    /// Creates a vector from 0/1 flags, as submitted by form collaborators.
    pub fn from_flags(flags: &[u8]) -> Result<Self, AssessmentError> {
        let answers: Vec<bool> = flags.iter().map(|f| *f != 0).collect();
        Self::from_slice(&answers)
    }

    /// Returns the answer at `index`. Out-of-range positions read as "no".
    pub fn answer(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Returns all answers in order.
    pub fn answers(&self) -> &[bool; SYMPTOM_QUESTION_COUNT] {
        &self.0
    }

    /// Number of "yes" answers, scored or not.
    pub fn positive_count(&self) -> usize {
        self.0.iter().filter(|a| **a).count()
    }
}

impl TryFrom<Vec<bool>> for SymptomResponseVector {
    type Error = AssessmentError;

    fn try_from(answers: Vec<bool>) -> Result<Self, Self::Error> {
        Self::from_slice(&answers)
    }
}

impl From<SymptomResponseVector> for Vec<bool> {
    fn from(responses: SymptomResponseVector) -> Self {
        responses.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_accepts_eleven_answers() {
        let responses = SymptomResponseVector::from_slice(&[false; 11]).unwrap();
        assert_eq!(responses.positive_count(), 0);
    }

    #[test]
    fn from_slice_rejects_empty_input() {
        match SymptomResponseVector::from_slice(&[]) {
            Err(AssessmentError::InvalidSymptomResponses { expected, actual }) => {
                assert_eq!(expected, 11);
                assert_eq!(actual, 0);
            }
            other => panic!("Expected InvalidSymptomResponses, got {:?}", other),
        }
    }

    #[test]
    fn from_slice_rejects_too_many_answers() {
        assert!(SymptomResponseVector::from_slice(&[true; 12]).is_err());
    }

    #[test]
    fn from_flags_treats_nonzero_as_yes() {
        let responses =
            SymptomResponseVector::from_flags(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]).unwrap();
        assert!(responses.answer(0));
        assert!(responses.answer(10));
        assert_eq!(responses.positive_count(), 2);
    }

    #[test]
    fn deserializes_from_json_array() {
        let json = "[true,false,false,false,false,false,false,false,false,false,false]";
        let responses: SymptomResponseVector = serde_json::from_str(json).unwrap();
        assert!(responses.answer(0));
    }

    #[test]
    fn deserialization_rejects_wrong_length() {
        let result: Result<SymptomResponseVector, _> = serde_json::from_str("[true,false]");
        assert!(result.is_err());
    }
}
