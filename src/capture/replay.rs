use std::time::Duration;

use tracing::debug;

use super::{CaptureError, HistoryPager, LogView, RawHandBlock};

/// A recorded game log played back as if it were the live page.
///
/// Blocks are kept oldest first. The view starts on the newest hand, the
/// same place the site's log opens.
#[derive(Debug, Clone, Default)]
pub struct ReplayLog {
    blocks: Vec<RawHandBlock>,
    cursor: usize,
}

impl ReplayLog {
    pub fn new(blocks: Vec<RawHandBlock>) -> Self {
        let cursor = blocks.len().saturating_sub(1);
        Self { blocks, cursor }
    }

    /// Read a plain text dump where hands are separated by blank lines.
    pub fn parse_text_dump(text: &str) -> Self {
        let mut blocks = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    blocks.push(RawHandBlock::from_lines(std::mem::take(&mut current)));
                }
                continue;
            }
            current.push(line.trim_end().to_string());
        }
        if !current.is_empty() {
            blocks.push(RawHandBlock::from_lines(current));
        }

        debug!(hands = blocks.len(), "Parsed text dump");
        Self::new(blocks)
    }

    /// Read one JSON encoded [`RawHandBlock`] per line.
    ///
    /// A block without `raw_text` gets its lines joined by newlines.
    pub fn parse_jsonl(text: &str) -> Result<Self, CaptureError> {
        let mut blocks = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut block: RawHandBlock =
                serde_json::from_str(line).map_err(|source| CaptureError::Parse {
                    line: idx + 1,
                    source,
                })?;
            if block.raw_text.is_empty() {
                block.raw_text = block.lines.join("\n");
            }
            blocks.push(block);
        }

        debug!(hands = blocks.len(), "Parsed JSON lines dump");
        Ok(Self::new(blocks))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl LogView for ReplayLog {
    fn snapshot(&mut self) -> Option<RawHandBlock> {
        self.blocks.get(self.cursor).cloned()
    }
}

impl HistoryPager for ReplayLog {
    fn is_available(&self) -> bool {
        !self.blocks.is_empty()
    }

    fn position(&self) -> Option<String> {
        if self.blocks.is_empty() {
            return None;
        }
        Some((self.cursor + 1).to_string())
    }

    fn page_back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn jump_to_end(&mut self) {
        self.cursor = self.blocks.len().saturating_sub(1);
    }

    /// Recorded hands are already rendered.
    fn settle(&mut self, _delay: Duration) {}
}
