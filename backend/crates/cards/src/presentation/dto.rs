//! API DTOs (Data Transfer Objects)

use crate::domain::entities::{Distribution, HandAllocationError};
use crate::domain::value_objects::NumberOfPeopleError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request for POST /api/distribute-cards
///
/// The count is kept as raw JSON so a wrong type is reported as a field
/// validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeRequest {
    #[serde(default)]
    pub number_of_people: Option<Value>,
}

impl DistributeRequest {
    /// Read the count as an integer
    ///
    /// Accepts JSON integers, integral floats (`4.0`) and integer strings
    /// (`"4"`). Range checks happen in `NumberOfPeople`.
    pub fn number_of_people(&self) -> Result<i64, NumberOfPeopleError> {
        match &self.number_of_people {
            None | Some(Value::Null) => Err(NumberOfPeopleError::Missing),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral_f64))
                .ok_or(NumberOfPeopleError::NotInteger),
            Some(Value::String(s)) if s.trim().is_empty() => Err(NumberOfPeopleError::Missing),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| NumberOfPeopleError::NotInteger),
            Some(_) => Err(NumberOfPeopleError::NotInteger),
        }
    }
}

fn integral_f64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Response for POST /api/distribute-cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeResponse {
    /// Outer index = participant, inner = that participant's cards
    pub distributed_cards: Vec<Vec<String>>,
}

impl TryFrom<Distribution> for DistributeResponse {
    type Error = HandAllocationError;

    fn try_from(distribution: Distribution) -> Result<Self, Self::Error> {
        let mut distributed_cards = Vec::new();
        distributed_cards
            .try_reserve_exact(distribution.len())
            .map_err(|_| HandAllocationError {
                requested: distribution.len(),
            })?;
        distributed_cards.extend(
            distribution
                .hands()
                .iter()
                .map(|hand| hand.cards().iter().map(ToString::to_string).collect()),
        );
        Ok(Self { distributed_cards })
    }
}

/// Response for GET /api/health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
