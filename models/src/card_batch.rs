use serde::Serialize;

/// Card lines returned by the generator, in provider order.
///
/// Lines are kept exactly as the provider sent them; display code decides casing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardBatch {
    lines: Vec<String>,
}

impl CardBatch {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Build a batch from a raw plain-text body: trim the whole body, then split on line
    /// boundaries (`\n` or `\r\n`).
    ///
    /// An empty (or all-whitespace) body yields an empty batch.
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        Self {
            lines: trimmed.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
