use crate::SchemaError;

/// Game-type marker, everything after it sits at fixed offsets.
pub const ANCHOR: &str = "CS";

#[derive(Debug, Clone, PartialEq)]
pub struct Tokens<'l> {
    tokens: Vec<&'l str>,
    anchor: usize,
}

impl<'l> Tokens<'l> {
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn fight_id(&self) -> &'l str {
        self.tokens[0]
    }

    /// Everything between the fight id and the anchor.
    pub fn date_span(&self) -> &[&'l str] {
        &self.tokens[1..self.anchor]
    }

    /// Token at `anchor + offset`.
    pub fn at(&self, offset: usize) -> Option<&'l str> {
        self.tokens.get(self.anchor + offset).copied()
    }

    pub fn span(&self, offsets: core::ops::Range<usize>) -> Option<&[&'l str]> {
        self.tokens
            .get(self.anchor + offsets.start..self.anchor + offsets.end)
    }
}

pub fn tokenize(line: &str) -> Result<Tokens<'_>, SchemaError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let anchor = tokens
        .iter()
        .position(|t| *t == ANCHOR)
        .ok_or(SchemaError::MissingAnchor(ANCHOR))?;
    if anchor < 2 {
        return Err(SchemaError::MissingPrefix(anchor));
    }

    Ok(Tokens { tokens, anchor })
}
