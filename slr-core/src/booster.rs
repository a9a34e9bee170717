use serde::{Serialize, Serializer};
use std::fmt;

/// Coarse Falcon 9 revision bucket from the `Booster Version Category` column.
///
/// Used to color scatter chart points. Unrecognized strings map to `Other`
/// rather than failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoosterCategory {
    V1_0,
    V1_1,
    Ft,
    B4,
    B5,
    Other,
}

impl BoosterCategory {
    /// Parse the dataset's category string ("v1.0", "v1.1", "FT", "B4", "B5").
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "v1.0" => BoosterCategory::V1_0,
            "v1.1" => BoosterCategory::V1_1,
            "FT" => BoosterCategory::Ft,
            "B4" => BoosterCategory::B4,
            "B5" => BoosterCategory::B5,
            _ => BoosterCategory::Other,
        }
    }

    /// The dataset's spelling, used verbatim as the chart legend label.
    pub fn as_str(self) -> &'static str {
        match self {
            BoosterCategory::V1_0 => "v1.0",
            BoosterCategory::V1_1 => "v1.1",
            BoosterCategory::Ft => "FT",
            BoosterCategory::B4 => "B4",
            BoosterCategory::B5 => "B5",
            BoosterCategory::Other => "Other",
        }
    }
}

impl Serialize for BoosterCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for BoosterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
