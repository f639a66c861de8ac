//! Application Configuration
//!
//! Configuration for the card distribution application layer.

/// Card distribution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardsConfig {
    /// Optional upper bound on `numberOfPeople`. `None` accepts any
    /// positive count; participants past the 52nd get empty hands.
    pub max_number_of_people: Option<usize>,
}

impl CardsConfig {
    /// Config with a participant cap
    pub fn with_max_number_of_people(max: usize) -> Self {
        Self {
            max_number_of_people: Some(max),
        }
    }
}
