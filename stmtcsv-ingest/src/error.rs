use std::path::{Path, PathBuf};

/// Failures while turning a statement PDF into transactions.
#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    /// The PDF could not be read or its text could not be extracted.
    #[error("Could not parse PDF File \"{}\": {reason}", .path.display())]
    Extraction { path: PathBuf, reason: String },

    /// No account line was found in the statement text.
    #[error("Could not find account details in PDF File \"{}\".", .path.display())]
    MissingAccount { path: PathBuf },

    /// The statement text contained no transaction rows.
    #[error("Could not find any transactions in PDF File \"{}\".", .path.display())]
    NoTransactions { path: PathBuf },

    /// A transaction row matched but its date is not a calendar date.
    #[error("Invalid transaction date \"{date}\" in PDF File \"{}\".", .path.display())]
    InvalidDate {
        path: PathBuf,
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A statement grammar pattern failed to compile.
    #[error("Invalid statement pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A matched row whose date text does not parse. Grammars return this;
/// [`crate::parse_statement`] attaches the statement path.
#[derive(Debug, thiserror::Error)]
#[error("Invalid transaction date \"{date}\".")]
pub struct DateError {
    pub date: String,
    #[source]
    pub source: chrono::ParseError,
}

impl DateError {
    pub fn in_statement(self, path: &Path) -> StatementError {
        StatementError::InvalidDate {
            path: path.to_path_buf(),
            date: self.date,
            source: self.source,
        }
    }
}
