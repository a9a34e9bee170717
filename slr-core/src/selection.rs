//! Launch-site dropdown selection.

use std::fmt;

/// Sentinel dropdown value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Current launch-site selection: every site, or a single named site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse the dropdown's value attribute.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The dropdown value attribute for this selection.
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// The site name if a single site is selected.
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(site) => Some(site),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str("All Sites"),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}
