#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("anchor token {0:?} not found")]
    MissingAnchor(&'static str),
    #[error("no fight id or date tokens before the anchor at {0}")]
    MissingPrefix(usize),
    #[error("required field `{field}` missing at token {index}")]
    MissingField { field: &'static str, index: usize },
    #[error("unknown result label {0:?}")]
    UnknownResult(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("schema mismatch: {0}")]
    Schema(#[from] SchemaError),
    #[error("could not resolve date/time from {span:?}")]
    DateParse { span: String },
    #[error("unknown month name {0:?}")]
    UnknownMonth(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    Schema,
    DateParse,
    UnknownMonth,
}

impl ParseError {
    pub fn date(span: &[&str]) -> Self {
        Self::DateParse {
            span: span.join(" "),
        }
    }

    pub fn reason(&self) -> DropReason {
        match self {
            Self::Schema(_) => DropReason::Schema,
            Self::DateParse { .. } => DropReason::DateParse,
            Self::UnknownMonth(_) => DropReason::UnknownMonth,
        }
    }
}
