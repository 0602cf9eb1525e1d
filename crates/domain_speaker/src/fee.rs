//! Registration fee schedule
//!
//! The fee falls as experience grows. Bands are inclusive upper bounds on
//! years of experience, checked in ascending order; a speaker beyond the last
//! band, or with no recorded experience, pays the default fee.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::CoreError;

/// Fee charged to speakers with at most `max_years` of experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBand {
    pub max_years: u32,
    pub fee: Decimal,
}

impl FeeBand {
    pub fn new(max_years: u32, fee: Decimal) -> Self {
        Self { max_years, fee }
    }
}

/// Ordered fee bands with a fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub bands: Vec<FeeBand>,
    pub default_fee: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            bands: vec![
                FeeBand::new(1, dec!(500)),
                FeeBand::new(3, dec!(250)),
                FeeBand::new(5, dec!(100)),
                FeeBand::new(9, dec!(50)),
            ],
            default_fee: dec!(0),
        }
    }
}

impl FeeSchedule {
    /// Returns the fee for the given years of experience
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_speaker::fee::FeeSchedule;
    /// use rust_decimal_macros::dec;
    ///
    /// let schedule = FeeSchedule::default();
    /// assert_eq!(schedule.fee_for(Some(1)), dec!(500));
    /// assert_eq!(schedule.fee_for(Some(10)), dec!(0));
    /// assert_eq!(schedule.fee_for(None), dec!(0));
    /// ```
    pub fn fee_for(&self, years_experience: Option<u32>) -> Decimal {
        years_experience
            .and_then(|years| self.bands.iter().find(|band| years <= band.max_years))
            .map(|band| band.fee)
            .unwrap_or(self.default_fee)
    }

    /// Checks that bands ascend strictly and no fee is negative
    pub fn validate(&self) -> Result<(), CoreError> {
        for pair in self.bands.windows(2) {
            if pair[1].max_years <= pair[0].max_years {
                return Err(CoreError::configuration(format!(
                    "fee bands must ascend: {} years listed after {} years",
                    pair[1].max_years, pair[0].max_years
                )));
            }
        }

        let negative = self
            .bands
            .iter()
            .map(|band| band.fee)
            .chain(std::iter::once(self.default_fee))
            .find(|fee| fee.is_sign_negative());
        if let Some(fee) = negative {
            return Err(CoreError::configuration(format!("negative fee {}", fee)));
        }

        Ok(())
    }
}
