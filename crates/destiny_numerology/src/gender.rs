//! Gender input for the Kua number.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// Gender as recorded on a user profile. Only the Kua formula reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Both genders, in wire order.
pub const ALL_GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

impl Gender {
    /// Lowercase wire name (`male` / `female`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_GENDERS
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| NumerologyError::UnknownGender(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" MALE ".parse::<Gender>(), Ok(Gender::Male));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "other".parse::<Gender>(),
            Err(NumerologyError::UnknownGender("other".into()))
        );
    }

    #[test]
    fn display_round_trips() {
        for g in ALL_GENDERS {
            assert_eq!(g.to_string().parse::<Gender>(), Ok(g));
        }
    }
}
