use crate::domain::profile::RiskProfile;
use serde::Serialize;

// Survey score bands: 10..=15 is the balanced middle band, anything above is
// treated as risk-seeking, anything below as risk-averse.
const MODERATE_MIN_SCORE: i64 = 10;
const MODERATE_MAX_SCORE: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub profile: RiskProfile,
    pub score: i64,
}

/// Sums the survey answers and places the total in one of the three bands.
/// Total over any input: an empty slice scores 0 and lands in Conservative.
pub fn classify(answers: &[i64]) -> RiskAssessment {
    let score: i64 = answers.iter().sum();
    let profile = if (MODERATE_MIN_SCORE..=MODERATE_MAX_SCORE).contains(&score) {
        RiskProfile::Moderate
    } else if score > MODERATE_MAX_SCORE {
        RiskProfile::Aggressive
    } else {
        RiskProfile::Conservative
    };
    RiskAssessment { profile, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_the_sum_of_answers() {
        assert_eq!(classify(&[1, 2, 3]).score, 6);
        assert_eq!(classify(&[4, -7, 2]).score, -1);
        assert_eq!(classify(&[]).score, 0);
    }

    #[test]
    fn empty_answers_are_conservative() {
        let a = classify(&[]);
        assert_eq!(a.profile, RiskProfile::Conservative);
        assert_eq!(a.score, 0);
    }

    #[test]
    fn middle_band_is_moderate() {
        assert_eq!(classify(&[5, 5, 5]).profile, RiskProfile::Moderate);
        // Band boundaries are inclusive on both ends.
        assert_eq!(classify(&[10]).profile, RiskProfile::Moderate);
        assert_eq!(classify(&[15]).profile, RiskProfile::Moderate);
    }

    #[test]
    fn above_the_band_is_aggressive() {
        assert_eq!(classify(&[10, 10]).profile, RiskProfile::Aggressive);
        assert_eq!(classify(&[16]).profile, RiskProfile::Aggressive);
        assert_eq!(classify(&[1_000_000, 1]).profile, RiskProfile::Aggressive);
    }

    #[test]
    fn below_the_band_is_conservative() {
        assert_eq!(classify(&[9]).profile, RiskProfile::Conservative);
        assert_eq!(classify(&[1, 2, 3]).profile, RiskProfile::Conservative);
        assert_eq!(classify(&[-5, -20]).profile, RiskProfile::Conservative);
    }
}
