use serde::{Deserialize, Serialize};
use std::fmt;

/// The three independent regional ledgers.
///
/// Each region has its own accounts/records tables and its own commission
/// convention: USA populates the primary commission column, UK and ALE the
/// secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Region {
    Usa,
    Uk,
    Ale,
}

impl Region {
    /// All regions, in the order the consolidated view merges them.
    pub const ALL: [Region; 3] = [Region::Usa, Region::Uk, Region::Ale];

    /// Classify an account id by its prefix convention.
    ///
    /// `UK-###` belongs to UK, `ALE-###` to ALE, everything else (the
    /// `C-###` convention included) to USA. This is the single place the
    /// prefix convention is defined; older rows may lack a region tag, so
    /// callers fall back to this classification.
    pub fn from_account_id(account_id: &str) -> Region {
        if account_id.starts_with("UK-") {
            Region::Uk
        } else if account_id.starts_with("ALE-") {
            Region::Ale
        } else {
            Region::Usa
        }
    }

    /// The sentinel account id whose GMV is a cash bonus, not merchandise.
    ///
    /// Bonus GMV is excluded from the GMV/sales totals and reported
    /// separately.
    pub fn bonus_account_id(&self) -> &'static str {
        match self {
            Region::Uk => "UK-BONUSES",
            Region::Usa | Region::Ale => "C-BONUSES",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Usa => write!(f, "usa"),
            Region::Uk => write!(f, "uk"),
            Region::Ale => write!(f, "ale"),
        }
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usa" => Ok(Region::Usa),
            "uk" => Ok(Region::Uk),
            "ale" => Ok(Region::Ale),
            _ => Err(format!("Invalid region: {}", s)),
        }
    }
}
