//! Domain Value Objects
//!
//! Immutable value types for the card domain.

use std::fmt;

// ============================================================================
// Suit
// ============================================================================

/// Card suit, stored and rendered as a single-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Canonical order: S, H, D, C
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn code(self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.code() == code)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Rank
// ============================================================================

/// Card rank. Ten is coded `X` so every code is one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Canonical order: A, 2..9, X, J, Q, K
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "X",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.code() == code)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Number of people
// ============================================================================

/// Error returned when the requested participant count is rejected
///
/// `Display` yields the message shown to the caller for the
/// `numberOfPeople` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberOfPeopleError {
    /// Field absent or null
    Missing,

    /// Not an integer (fractional number, non-numeric string, bool, ...)
    NotInteger,

    /// Zero or negative
    NotPositive { value: i64 },

    /// Above the configured cap
    TooLarge { value: i64, max: usize },
}

impl fmt::Display for NumberOfPeopleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "The number of people field is required."),
            Self::NotInteger => write!(f, "The number of people field must be an integer."),
            Self::NotPositive { .. } => {
                write!(f, "The number of people field must be at least 1.")
            }
            Self::TooLarge { max, .. } => {
                write!(
                    f,
                    "The number of people field must not be greater than {max}."
                )
            }
        }
    }
}

impl std::error::Error for NumberOfPeopleError {}

/// Validated participant count
///
/// # Invariants
/// - At least 1
/// - Not above `max` when a cap is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberOfPeople(usize);

impl NumberOfPeople {
    /// Request field name, used to key validation errors
    pub const FIELD: &'static str = "numberOfPeople";

    pub fn new(value: i64, max: Option<usize>) -> Result<Self, NumberOfPeopleError> {
        if value < 1 {
            return Err(NumberOfPeopleError::NotPositive { value });
        }

        let count = usize::try_from(value).map_err(|_| NumberOfPeopleError::TooLarge {
            value,
            max: max.unwrap_or(usize::MAX),
        })?;

        if let Some(max) = max {
            if count > max {
                return Err(NumberOfPeopleError::TooLarge { value, max });
            }
        }

        Ok(Self(count))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_codes_round_trip() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_code(suit.code()), Some(suit));
        }
        assert_eq!(Suit::from_code("s"), None);
        assert_eq!(Suit::from_code("X"), None);
    }

    #[test]
    fn test_rank_ten_is_x() {
        assert_eq!(Rank::Ten.code(), "X");
        assert_eq!(Rank::from_code("X"), Some(Rank::Ten));
        assert_eq!(Rank::from_code("10"), None);
        assert_eq!(Rank::from_code("1"), None);
    }

    #[test]
    fn test_number_of_people_accepts_positive() {
        assert_eq!(NumberOfPeople::new(1, None).unwrap().get(), 1);
        assert_eq!(NumberOfPeople::new(4, None).unwrap().get(), 4);
        assert_eq!(NumberOfPeople::new(53, None).unwrap().get(), 53);
    }

    #[test]
    fn test_number_of_people_rejects_non_positive() {
        assert_eq!(
            NumberOfPeople::new(0, None),
            Err(NumberOfPeopleError::NotPositive { value: 0 })
        );
        assert_eq!(
            NumberOfPeople::new(-1, None),
            Err(NumberOfPeopleError::NotPositive { value: -1 })
        );
    }

    #[test]
    fn test_number_of_people_cap() {
        assert!(NumberOfPeople::new(100, Some(100)).is_ok());
        assert_eq!(
            NumberOfPeople::new(101, Some(100)),
            Err(NumberOfPeopleError::TooLarge {
                value: 101,
                max: 100
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NumberOfPeopleError::NotPositive { value: 0 }.to_string(),
            "The number of people field must be at least 1."
        );
        assert_eq!(
            NumberOfPeopleError::Missing.to_string(),
            "The number of people field is required."
        );
        assert!(
            NumberOfPeopleError::TooLarge { value: 9, max: 8 }
                .to_string()
                .contains("greater than 8")
        );
    }
}
