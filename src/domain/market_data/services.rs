use crate::domain::errors::AppError;
use crate::domain::market_data::PriceBar;

/// Domain service deriving the percent price change of a single bar
///
/// percent change = (close - open) / open * 100. Pure function of one bar,
/// may be negative, zero or positive and is unbounded in magnitude.
pub struct PriceChangeCalculator;

impl PriceChangeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Percent change for one bar. An open price of zero cannot be used as
    /// a divisor and is reported as `DivisionByZero` instead of a NaN that
    /// would poison the chart scale.
    pub fn percent_change(&self, bar: &PriceBar) -> Result<f64, AppError> {
        let open = bar.ohlcv.open.value();
        if open == 0.0 {
            return Err(AppError::DivisionByZero(bar.date.value().to_string()));
        }
        Ok((bar.ohlcv.close.value() - open) / open * 100.0)
    }

    /// Per-bar percent changes with the local recovery the pipeline needs:
    /// a bar that fails the division keeps its slot as `None` so every other
    /// bar still computes and index alignment with the bar sequence holds.
    pub fn percent_changes(&self, bars: &[PriceBar]) -> Vec<Option<f64>> {
        bars.iter().map(|bar| self.percent_change(bar).ok()).collect()
    }
}

impl Default for PriceChangeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Domain service for validating incoming bars
#[derive(Clone)]
pub struct BarValidationService;

impl BarValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Validates one bar with a descriptive error
    pub fn validate_bar(&self, bar: &PriceBar) -> Result<(), AppError> {
        let message = if bar.ohlcv.high.value() < bar.ohlcv.low.value() {
            "High price cannot be lower than low price"
        } else if bar.ohlcv.high.value() < bar.ohlcv.open.value() {
            "High price cannot be lower than open price"
        } else if bar.ohlcv.high.value() < bar.ohlcv.close.value() {
            "High price cannot be lower than close price"
        } else if bar.ohlcv.low.value() > bar.ohlcv.open.value() {
            "Low price cannot be higher than open price"
        } else if bar.ohlcv.low.value() > bar.ohlcv.close.value() {
            "Low price cannot be higher than close price"
        } else if bar.ohlcv.open.value() < 0.0 || bar.ohlcv.close.value() < 0.0 {
            "Prices cannot be negative"
        } else if bar.date.value().is_empty() {
            "Bar is missing its date key"
        } else {
            return Ok(());
        };
        Err(AppError::ValidationError(message.to_string()))
    }

    /// Validates a delivered bar sequence. Bars arrive newest-first; only
    /// per-bar consistency is checked here, ordering is the source's contract.
    pub fn validate_bars(&self, bars: &[PriceBar]) -> Result<(), AppError> {
        for (i, bar) in bars.iter().enumerate() {
            self.validate_bar(bar).map_err(|e| match e {
                AppError::ValidationError(msg) => AppError::ValidationError(format!(
                    "Bar {} ({}): {}",
                    i,
                    bar.date.value(),
                    msg
                )),
                other => other,
            })?;
        }
        Ok(())
    }
}

impl Default for BarValidationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{DateKey, OHLCV, Price, Volume};

    fn bar(open: f64, close: f64) -> PriceBar {
        PriceBar::new(
            DateKey::from("2024-01-31"),
            OHLCV::new(
                Price::from(open),
                Price::from(open.max(close)),
                Price::from(open.min(close)),
                Price::from(close),
                Volume::from(1_000u64),
            ),
        )
    }

    #[test]
    fn percent_change_formula() {
        let calc = PriceChangeCalculator::new();
        assert_eq!(calc.percent_change(&bar(100.0, 110.0)).unwrap(), 10.0);
        assert_eq!(calc.percent_change(&bar(110.0, 99.0)).unwrap(), -10.0);
        assert_eq!(calc.percent_change(&bar(50.0, 50.0)).unwrap(), 0.0);
    }

    #[test]
    fn zero_open_is_reported_not_propagated() {
        let calc = PriceChangeCalculator::new();
        assert!(calc.percent_change(&bar(0.0, 10.0)).is_err());

        let changes = calc.percent_changes(&[bar(100.0, 110.0), bar(0.0, 10.0), bar(110.0, 99.0)]);
        assert_eq!(changes, vec![Some(10.0), None, Some(-10.0)]);
    }

    #[test]
    fn bar_validation_catches_inverted_range() {
        let validator = BarValidationService::new();
        assert!(validator.validate_bar(&bar(100.0, 110.0)).is_ok());

        let broken = PriceBar::new(
            DateKey::from("2024-02-29"),
            OHLCV::new(
                Price::from(100.0),
                Price::from(90.0),
                Price::from(95.0),
                Price::from(100.0),
                Volume::from(1u64),
            ),
        );
        match validator.validate_bars(&[broken]) {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains("Bar 0 (2024-02-29)"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}
