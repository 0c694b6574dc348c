use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse risk-tolerance category assigned from a survey score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = InvalidProfileError;

    // Labels match exactly; no case folding, no default category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conservative" => Ok(RiskProfile::Conservative),
            "Moderate" => Ok(RiskProfile::Moderate),
            "Aggressive" => Ok(RiskProfile::Aggressive),
            other => Err(InvalidProfileError {
                input: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidProfileError {
    pub input: String,
}

impl fmt::Display for InvalidProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid risk profile {:?} (expected Conservative, Moderate or Aggressive)",
            self.input
        )
    }
}

impl std::error::Error for InvalidProfileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_labels() {
        for profile in RiskProfile::ALL {
            assert_eq!(profile.as_str().parse::<RiskProfile>(), Ok(profile));
        }
    }

    #[test]
    fn rejects_unknown_label() {
        let err = "Unknown".parse::<RiskProfile>().unwrap_err();
        assert_eq!(err.input, "Unknown");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("moderate".parse::<RiskProfile>().is_err());
        assert!("AGGRESSIVE".parse::<RiskProfile>().is_err());
        assert!("".parse::<RiskProfile>().is_err());
    }

    #[test]
    fn serializes_as_canonical_label() {
        let v = serde_json::to_value(RiskProfile::Moderate).unwrap();
        assert_eq!(v, serde_json::json!("Moderate"));
    }

    #[test]
    fn deserializes_from_canonical_label() {
        let p: RiskProfile = serde_json::from_value(serde_json::json!("Aggressive")).unwrap();
        assert_eq!(p, RiskProfile::Aggressive);
        assert!(serde_json::from_value::<RiskProfile>(serde_json::json!("aggressive")).is_err());
    }
}
