//! Quote results printed by the CLI.

use crossquote_common::AssetId;
use crossquote_oracle::{OracleError, TwoSidedAmount};
use serde::Serialize;
use std::fmt;

/// Outcome of one quoting request.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport {
    pub oracle: String,
    pub base: AssetId,
    pub quote: AssetId,
    pub in_amount: String,
    pub route: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Amounts are decimal strings in the quote asset's smallest unit.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Quote { out_amount: String },
    Quotes { bid: String, ask: String, spread: String },
    Description { text: String },
    Failed { code: &'static str, error: String },
}

impl Outcome {
    pub fn quote(out_amount: impl fmt::Display) -> Self {
        Outcome::Quote {
            out_amount: out_amount.to_string(),
        }
    }

    pub fn quotes(amounts: &TwoSidedAmount) -> Self {
        Outcome::Quotes {
            bid: amounts.bid.to_string(),
            ask: amounts.ask.to_string(),
            spread: amounts.spread().to_string(),
        }
    }

    pub fn failed(error: &OracleError) -> Self {
        Outcome::Failed {
            code: error.code(),
            error: error.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} {} -> {}", self.oracle, self.in_amount, self.base, self.quote)?;
        writeln!(f, "  route: {}", self.route)?;
        match &self.outcome {
            Outcome::Quote { out_amount } => write!(f, "  out:   {}", out_amount),
            Outcome::Quotes { bid, ask, spread } => {
                writeln!(f, "  bid:   {}", bid)?;
                writeln!(f, "  ask:   {}", ask)?;
                write!(f, "  spread: {}", spread)
            }
            Outcome::Description { text } => write!(f, "  {}", text),
            Outcome::Failed { code, error } => write!(f, "  error: {} ({})", error, code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn report(outcome: Outcome) -> QuoteReport {
        QuoteReport {
            oracle: "CrossQuoteOracle".to_string(),
            base: AssetId::eur(),
            quote: AssetId::usd(),
            in_amount: "1000".to_string(),
            route: "EUR/USD".to_string(),
            outcome,
        }
    }

    #[test]
    fn test_quotes_outcome() {
        let amounts = TwoSidedAmount::new(U256::from(1099u64), U256::from(1101u64));
        let report = report(Outcome::quotes(&amounts));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "quotes");
        assert_eq!(json["bid"], "1099");
        assert_eq!(json["ask"], "1101");
        assert_eq!(json["spread"], "2");
        assert_eq!(json["base"], "EUR");

        assert!(report.to_string().contains("bid:   1099"));
    }

    #[test]
    fn test_failed_outcome() {
        let error = OracleError::NoPath {
            base: AssetId::eur(),
            quote: AssetId::jpy(),
        };
        let outcome = Outcome::failed(&error);
        assert!(outcome.is_failure());

        let json = serde_json::to_value(report(outcome)).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["code"], error.code());
    }
}
