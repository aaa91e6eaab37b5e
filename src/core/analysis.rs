//! Rating labels and recommendation text attached to every projection

use serde::{Deserialize, Serialize};

/// Payback below this many years is rated fast
pub const FAST_PAYBACK_YEARS: f64 = 1.5;
/// Payback below this many years (and not fast) is rated medium
pub const MEDIUM_PAYBACK_YEARS: f64 = 2.5;

/// How quickly a course pays back its cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaybackSpeed {
    /// Under 1.5 years
    Fast,
    /// Under 2.5 years
    Medium,
    /// 2.5 years or more
    Slow,
}

impl PaybackSpeed {
    /// Classify a payback period
    #[must_use]
    pub fn from_years(payback_years: f64) -> Self {
        if payback_years < FAST_PAYBACK_YEARS {
            Self::Fast
        } else if payback_years < MEDIUM_PAYBACK_YEARS {
            Self::Medium
        } else {
            Self::Slow
        }
    }

    /// Short label, e.g. "Fast payback"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fast => "Fast payback",
            Self::Medium => "Medium payback",
            Self::Slow => "Slow payback",
        }
    }

    /// One-sentence description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Fast => "You'll recover your investment quickly",
            Self::Medium => "Reasonable time to recover investment",
            Self::Slow => "Takes longer to recover investment",
        }
    }
}

/// Star rating of the 5-year ROI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiRating {
    /// Above 400%
    Excellent,
    /// Above 300%
    VeryGood,
    /// Above 200%
    Good,
    /// Everything else
    Fair,
}

impl RoiRating {
    /// Classify a 5-year ROI percentage; `None` (zero cost) rates excellent
    #[must_use]
    pub fn from_roi(roi_5_years: Option<f64>) -> Self {
        match roi_5_years {
            None => Self::Excellent,
            Some(roi) if roi > 400.0 => Self::Excellent,
            Some(roi) if roi > 300.0 => Self::VeryGood,
            Some(roi) if roi > 200.0 => Self::Good,
            Some(_) => Self::Fair,
        }
    }

    /// Label, e.g. "Very Good"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }

    /// Number of stars (2 to 5)
    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::VeryGood => 4,
            Self::Good => 3,
            Self::Fair => 2,
        }
    }
}

/// Career-long earnings compared with the cost of the course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifetimeSummary {
    /// Net earnings over the whole career, rounded to the euro
    pub total_earnings: f64,
    /// Earnings minus cost, rounded to the euro
    pub profit: f64,
    /// How many times the cost is earned back; `None` when the cost is zero
    pub times_earned_back: Option<f64>,
}

impl LifetimeSummary {
    /// Summarise `lifetime_earnings` against `total_cost`
    #[must_use]
    pub fn new(lifetime_earnings: f64, total_cost: f64) -> Self {
        let times_earned_back =
            (total_cost > 0.0).then(|| round_to(lifetime_earnings / total_cost, 1));
        Self {
            total_earnings: lifetime_earnings.round(),
            profit: (lifetime_earnings - total_cost).round(),
            times_earned_back,
        }
    }
}

/// Ratings and narrative for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Payback speed band
    pub payback_speed: PaybackSpeed,
    /// ROI star rating
    pub roi_rating: RoiRating,
    /// Recommendation sentence
    pub recommendation: String,
    /// Lifetime earnings summary
    pub lifetime: LifetimeSummary,
}

/// Rate a projection and pick a recommendation
///
/// The recommendation uses the first rule that matches:
/// excellent ROI with fast payback, then medicine, then very fast payback,
/// then outstanding ROI, then slow payback, then a generic sentence built
/// from the two ratings.
#[must_use]
pub fn analyze(
    payback_years: f64,
    roi_5_years: Option<f64>,
    field: &str,
    lifetime: LifetimeSummary,
) -> Analysis {
    let payback_speed = PaybackSpeed::from_years(payback_years);
    let roi_rating = RoiRating::from_roi(roi_5_years);
    let roi = roi_5_years.unwrap_or(f64::INFINITY);

    let recommendation = if roi > 400.0 && payback_years < FAST_PAYBACK_YEARS {
        "One of the best investments in Irish education. Fast payback and excellent returns."
            .to_string()
    } else if field == "Medicine" {
        "Longer course (6 years) but strong career prospects. High lifetime earnings potential."
            .to_string()
    } else if payback_years < 1.2 {
        "Fastest payback in our analysis. You'll recover your investment quickly.".to_string()
    } else if roi > 500.0 {
        "Outstanding ROI. High demand field with strong salary growth.".to_string()
    } else if payback_years > 2.0 {
        "Slower to recover investment, but still provides positive returns over time.".to_string()
    } else {
        format!(
            "Solid choice with {} and {} ROI.",
            payback_speed.label().to_lowercase(),
            roi_rating.label().to_lowercase()
        )
    };

    Analysis {
        payback_speed,
        roi_rating,
        recommendation,
        lifetime,
    }
}

/// Round `value` to `decimals` places, half away from zero
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
