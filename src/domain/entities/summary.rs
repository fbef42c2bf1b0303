use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::decimal_number;

/// Income and expenditure for the current month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    #[serde(with = "decimal_number")]
    pub income: Decimal,
    #[serde(with = "decimal_number")]
    pub expenditure: Decimal,
}

impl MonthlySummary {
    #[must_use]
    pub const fn new(income: Decimal, expenditure: Decimal) -> Self {
        Self {
            income,
            expenditure,
        }
    }

    /// Income minus expenditure.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.income - self.expenditure
    }
}
