use thiserror::Error;

/// Errors that can occur while pricing performances or producing a statement.
///
/// Every variant is fatal for the current statement: no partial output is
/// returned, and the offending value is carried so the caller can correct
/// the source data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StatementError {
    /// A performance references a play ID absent from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(String),

    /// A play's type is outside the supported genres.
    #[error("unknown type: {0}")]
    UnknownGenre(String),

    /// Pricing configuration cannot be used for calculation.
    #[error("invalid pricing config: {0}")]
    Config(String),

    /// An amount or total does not fit the cent range.
    #[error("arithmetic overflow: {0}")]
    Arithmetic(String),
}

impl StatementError {
    /// The play ID or genre string that caused the failure, if any.
    pub fn offending_value(&self) -> Option<&str> {
        match self {
            Self::UnknownPlay(id) => Some(id.as_str()),
            Self::UnknownGenre(genre) => Some(genre.as_str()),
            Self::Config(_) | Self::Arithmetic(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            StatementError::UnknownPlay("othello".into()).to_string(),
            "unknown play: othello"
        );
        assert_eq!(
            StatementError::UnknownGenre("pastoral".into()).to_string(),
            "unknown type: pastoral"
        );
    }

    #[test]
    fn offending_value() {
        let err = StatementError::UnknownGenre("history".into());
        assert_eq!(err.offending_value(), Some("history"));
        let err = StatementError::Config("zero divisor".into());
        assert_eq!(err.offending_value(), None);
        let err = StatementError::Arithmetic("statement total".into());
        assert_eq!(err.offending_value(), None);
        assert_eq!(err.to_string(), "arithmetic overflow: statement total");
    }
}
