use crate::domain::profile::{InvalidProfileError, RiskProfile};
use crate::domain::recommendation::{PortfolioEntry, RecommendationSet};

// Model allocations for the Indian retail market. Allocations within one set
// are authored to sum to 100%, but nothing downstream depends on that.
static CONSERVATIVE: RecommendationSet = RecommendationSet {
    description: "Focuses on capital preservation with minimal risk.",
    portfolio: &[
        PortfolioEntry {
            instrument: "Fixed Deposit (FD)",
            allocation: "50%",
            details: "Safe, guaranteed returns from a bank.",
        },
        PortfolioEntry {
            instrument: "Public Provident Fund (PPF)",
            allocation: "30%",
            details: "Government-backed long-term savings scheme.",
        },
        PortfolioEntry {
            instrument: "Debt Mutual Funds (Liquid Funds)",
            allocation: "20%",
            details: "Low-risk funds investing in short-term government securities.",
        },
    ],
};

static MODERATE: RecommendationSet = RecommendationSet {
    description: "A balanced approach aiming for steady growth with manageable risk.",
    portfolio: &[
        PortfolioEntry {
            instrument: "NIFTY 50 Index Fund",
            allocation: "40%",
            details: "Diversified investment in India's top 50 companies.",
        },
        PortfolioEntry {
            instrument: "Hybrid Mutual Funds",
            allocation: "30%",
            details: "A mix of stocks and bonds for balanced growth.",
        },
        PortfolioEntry {
            instrument: "Gold ETFs / Sovereign Gold Bonds",
            allocation: "15%",
            details: "Hedge against inflation and market volatility.",
        },
        PortfolioEntry {
            instrument: "Fixed Deposit (FD)",
            allocation: "15%",
            details: "Provides stability to the portfolio.",
        },
    ],
};

static AGGRESSIVE: RecommendationSet = RecommendationSet {
    description: "Aims for high long-term growth by taking on higher market risk.",
    portfolio: &[
        PortfolioEntry {
            instrument: "Equity Mutual Funds (Mid & Small Cap)",
            allocation: "60%",
            details: "High growth potential from smaller, dynamic companies.",
        },
        PortfolioEntry {
            instrument: "NIFTY 50 Index Fund",
            allocation: "25%",
            details: "Core of the portfolio with exposure to large-cap stocks.",
        },
        PortfolioEntry {
            instrument: "International Stocks (e.g., via NASDAQ 100 ETF)",
            allocation: "15%",
            details: "Diversification across global markets.",
        },
    ],
};

/// Every profile maps to exactly one set; the enum key makes a partial or
/// malformed table unrepresentable.
pub fn recommendations_for(profile: RiskProfile) -> &'static RecommendationSet {
    match profile {
        RiskProfile::Conservative => &CONSERVATIVE,
        RiskProfile::Moderate => &MODERATE,
        RiskProfile::Aggressive => &AGGRESSIVE,
    }
}

/// String-keyed lookup for callers holding a raw label. Exact, case-sensitive
/// match; anything outside the three labels is an error.
pub fn lookup(label: &str) -> Result<&'static RecommendationSet, InvalidProfileError> {
    Ok(recommendations_for(label.parse::<RiskProfile>()?))
}
