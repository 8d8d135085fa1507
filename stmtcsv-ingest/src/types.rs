use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

/// Bank layout a statement was produced with. Selects the grammar used to
/// recognise the account line and transaction rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatementFormat {
    #[default]
    ChaseUk,
}

impl StatementFormat {
    pub const ALL: &'static [StatementFormat] = &[StatementFormat::ChaseUk];

    pub fn as_str(self) -> &'static str {
        match self {
            StatementFormat::ChaseUk => "chase-uk",
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatementFormat::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<_> = StatementFormat::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown statement format '{}' (available: {})", s, known.join(", "))
            })
    }
}

/// One parsed statement row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Signed decimal text as printed, e.g. `-4.50` or `1,200.00`. Credits carry no sign.
    pub amount: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// Account name plus the transactions of one statement, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement {
    pub account_name: String,
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("chase-uk".parse::<StatementFormat>(), Ok(StatementFormat::ChaseUk));
        assert_eq!(" Chase-UK ".parse::<StatementFormat>(), Ok(StatementFormat::ChaseUk));

        let err = "barclays".parse::<StatementFormat>().unwrap_err();
        assert!(err.contains("barclays"));
        assert!(err.contains("chase-uk"));
    }
}
