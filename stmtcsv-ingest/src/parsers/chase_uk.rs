//! Chase UK current account statement grammar (text)
//!
//! Expected extracted-text rows:
//!   Joint account statement Account number: 12345678
//!   ...
//!   01 Jan 2024 Coffee Shop  -£4.50 £95.50
//!   02 Jan 2024 Transfer from Savings  +£1,200.00 £1,295.50
//!
//! Table layout is usually lost by the PDF text layer, so rows are matched
//! across the whole text rather than line by line.

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{DateError, StatementError};
use crate::parsers::StatementGrammar;
use crate::types::Transaction;

const ACCOUNT_PATTERN: &str = r"(?m)^(?P<name>.*) statement Account number: \d{8}";

// DATE DESCRIPTION (+|-)£AMOUNT [-]£BALANCE
const TRANSACTION_PATTERN: &str = concat!(
    r"(?P<date>\d{2} \w{3} \d{4})\s+",
    r"(?P<desc>.*?)\s+",
    r"(?P<sign>[+-])£(?P<amount>[0-9,]+\.\d{2})",
    r"\s-?£[0-9,]+\.\d{2}"
);

#[derive(Debug, Clone)]
pub struct ChaseUkGrammar {
    account_re: Regex,
    txn_re: Regex,
}

impl ChaseUkGrammar {
    pub fn new() -> Result<Self, StatementError> {
        Ok(Self {
            account_re: Regex::new(ACCOUNT_PATTERN)?,
            txn_re: Regex::new(TRANSACTION_PATTERN)?,
        })
    }
}

impl StatementGrammar for ChaseUkGrammar {
    fn account_name(&self, text: &str) -> Option<String> {
        self.account_re
            .captures(text)
            .map(|caps| caps["name"].to_string())
    }

    fn transactions(&self, text: &str) -> Result<Vec<Transaction>, DateError> {
        let mut out = Vec::new();

        for caps in self.txn_re.captures_iter(text) {
            let raw_date = &caps["date"];
            let date = NaiveDate::parse_from_str(raw_date, "%d %b %Y").map_err(|source| DateError {
                date: raw_date.to_string(),
                source,
            })?;

            // Credits keep the bare figure; only debits carry a sign.
            let amount = match &caps["sign"] {
                "-" => format!("-{}", &caps["amount"]),
                _ => caps["amount"].to_string(),
            };

            out.push(Transaction {
                date,
                description: caps["desc"].to_string(),
                amount,
            });
        }

        log::debug!("Chase UK grammar matched {} transactions", out.len());

        Ok(out)
    }
}
