use serde::{Serialize, Serializer};
use std::fmt;

/// Launch outcome flag, stored as the 0/1 `class` column in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Convert from the CSV `class` column. Anything non-zero counts as success.
    pub fn from_class(class: i64) -> Self {
        if class == 0 {
            Outcome::Failure
        } else {
            Outcome::Success
        }
    }

    /// The 0/1 encoding used by the dataset and the scatter chart y-axis.
    pub fn as_class(self) -> i64 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Human label used in pie chart slices.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

// Serialized as 0/1 so chart JSON matches the dataset encoding.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_class())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_round_trip() {
        assert_eq!(Outcome::from_class(0), Outcome::Failure);
        assert_eq!(Outcome::from_class(1), Outcome::Success);
        assert_eq!(Outcome::from_class(0).as_class(), 0);
        assert_eq!(Outcome::from_class(1).as_class(), 1);
    }

    #[test]
    fn nonzero_counts_as_success() {
        assert_eq!(Outcome::from_class(2), Outcome::Success);
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Outcome::Success).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Outcome::Failure).unwrap(), "0");
    }

    #[test]
    fn labels() {
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.label(), "Failure");
    }
}
