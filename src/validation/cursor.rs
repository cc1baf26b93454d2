/*!
 * Position-tracking reader over the corpus lines.
 */

/// Forward-only cursor over a borrowed line sequence
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, position: 0 }
    }

    /// Zero-based index of the next unread line
    pub fn position(&self) -> usize {
        self.position
    }

    /// One-based line number of the next unread line
    pub fn line_number(&self) -> usize {
        self.position + 1
    }

    pub fn remaining(&self) -> usize {
        self.lines.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Next line without consuming it
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// Consume the next line
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.position += 1;
        Some(line)
    }

    /// Consume exactly `count` lines, or nothing if fewer remain
    pub fn take_exact(&mut self, count: usize) -> Option<&'a [&'a str]> {
        if self.remaining() < count {
            return None;
        }
        Some(self.take_up_to(count))
    }

    /// Consume up to `count` lines, returning however many were available
    pub fn take_up_to(&mut self, count: usize) -> &'a [&'a str] {
        let end = (self.position + count).min(self.lines.len());
        let window = &self.lines[self.position..end];
        self.position = end;
        window
    }
}
