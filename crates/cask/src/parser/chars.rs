impl Parser {
    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
            prev_ws: self.prev_ws,
            last_token_end: self.last_token_end,
        }
    }

    fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.line = mark.line;
        self.column = mark.column;
        self.prev_ws = mark.prev_ws;
        self.last_token_end = mark.last_token_end;
    }

    fn position(&self) -> Position {
        Position { offset: self.pos, line: self.line, column: self.column }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn peek_is(&self, literal: &str) -> bool {
        let mut ahead = 0;
        for expected in literal.chars() {
            if self.peek_at(ahead) != Some(expected) {
                return false;
            }
            ahead += 1;
        }
        true
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Matches a literal atomically: either the whole text is consumed or
    /// the stream is restored to where the attempt started. Failed attempts
    /// record the literal as an expectation at the attempt position.
    fn literal_raw(&mut self, text: &str) -> bool {
        let mark = self.mark();
        for expected in text.chars() {
            if self.bump() != Some(expected) {
                self.reset(mark);
                self.note(&format!("`{text}`"));
                return false;
            }
        }
        true
    }

    /// Closes the token that just matched and skips its trailing
    /// whitespace. Every token-level rule ends with this, which is what
    /// lets the rest of the grammar never skip whitespace itself.
    fn end_token(&mut self) {
        self.prev_ws = false;
        self.last_token_end = self.position();
        self.skip_whitespace();
    }

    fn token(&mut self, text: &str) -> bool {
        if !self.literal_raw(text) {
            return false;
        }
        self.end_token();
        true
    }

    fn note(&mut self, what: &str) {
        if self.pos < self.furthest.offset {
            return;
        }
        if self.pos > self.furthest.offset {
            self.furthest = self.position();
            self.expected.clear();
        }
        if !self.expected.iter().any(|entry| entry == what) {
            self.expected.push(what.to_string());
        }
    }

    fn span_from(&self, start: Position) -> Span {
        Span { start, end: self.last_token_end }
    }
}
