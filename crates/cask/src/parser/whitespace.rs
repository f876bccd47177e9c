impl Parser {
    /// Consumes spaces, tabs, line endings (`\n` or `\r\n` only) and
    /// comments. Sets `prev_ws` when anything was consumed and leaves it
    /// untouched otherwise, so repeated calls are harmless.
    fn skip_whitespace(&mut self) {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\n') => {
                    self.bump();
                }
                Some('\r') if self.peek_at(1) == Some('\n') => {
                    self.bump();
                    self.bump();
                }
                Some('-') if self.peek_is("--") => self.skip_line_comment(),
                Some('{') if self.peek_is("{-") => {
                    if !self.skip_block_comment() {
                        break;
                    }
                }
                _ => break,
            }
        }
        if self.pos > start {
            self.prev_ws = true;
        }
    }

    fn skip_line_comment(&mut self) {
        // "--" runs to the end of the line; the line ending itself is left
        // for the main loop.
        self.bump();
        self.bump();
        while let Some(ch) = self.peek() {
            if ch == '\n' || (ch == '\r' && self.peek_at(1) == Some('\n')) {
                break;
            }
            self.bump();
        }
    }

    /// Block comments nest: a `{-` inside a comment opens a further level
    /// that must close before the outer `-}` counts.
    fn skip_block_comment(&mut self) -> bool {
        self.bump();
        self.bump();
        let mut depth = 1usize;
        loop {
            if self.peek_is("-}") {
                self.bump();
                self.bump();
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            } else if self.peek_is("{-") {
                self.bump();
                self.bump();
                depth += 1;
            } else if self.bump().is_none() {
                self.note("`-}`");
                return false;
            }
        }
    }
}
