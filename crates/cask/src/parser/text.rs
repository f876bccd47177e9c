impl Parser {
    fn parse_text_literal(&mut self) -> Option<Expr> {
        let start = self.position();
        if self.peek() == Some('"') {
            return self.parse_double_quote_literal(start);
        }
        if self.peek_is("''") {
            return self.parse_single_quote_literal(start);
        }
        self.note("a text literal");
        None
    }

    /// `${ … }` splices re-enter the full expression grammar. The closing
    /// brace is matched without a trailing whitespace skip because the
    /// surrounding literal continues immediately after it.
    fn parse_interpolation(&mut self) -> Option<TextPart> {
        let start = self.position();
        self.bump();
        self.bump();
        self.skip_whitespace();
        let expr = self.parse_expression()?;
        if !self.literal_raw("}") {
            return None;
        }
        Some(TextPart::Interp { expr: Box::new(expr), span: Span { start, end: self.position() } })
    }

    fn parse_double_quote_literal(&mut self, start: Position) -> Option<Expr> {
        let mark = self.mark();
        self.bump(); // opening quote
        let mut parts: Vec<TextPart> = Vec::new();
        let mut chunk = String::new();
        let mut chunk_start = self.position();
        loop {
            match self.peek() {
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('$') if self.peek_at(1) == Some('{') => {
                    Self::flush_chunk(&mut parts, &mut chunk, chunk_start, self.position());
                    let Some(part) = self.parse_interpolation() else {
                        self.reset(mark);
                        return None;
                    };
                    parts.push(part);
                    chunk_start = self.position();
                }
                Some('\\') => {
                    self.bump();
                    let Some(decoded) = self.parse_text_escape() else {
                        self.reset(mark);
                        return None;
                    };
                    chunk.push(decoded);
                }
                Some(ch) if ch == '\t' || !ch.is_control() => {
                    chunk.push(ch);
                    self.bump();
                }
                _ => {
                    self.note("`\"`");
                    self.reset(mark);
                    return None;
                }
            }
        }
        Self::flush_chunk(&mut parts, &mut chunk, chunk_start, self.position());
        self.end_token();
        Some(Expr::TextLit { parts, span: self.span_from(start) })
    }

    fn flush_chunk(parts: &mut Vec<TextPart>, chunk: &mut String, start: Position, end: Position) {
        if chunk.is_empty() {
            return;
        }
        let text = std::mem::take(chunk);
        parts.push(TextPart::Chunk { text, span: Span { start, end } });
    }

    /// JSON-style escape set, plus `\$` to suppress interpolation. Called
    /// with the backslash already consumed.
    fn parse_text_escape(&mut self) -> Option<char> {
        let Some(marker) = self.bump() else {
            self.note("a string escape");
            return None;
        };
        match marker {
            '"' => Some('"'),
            '$' => Some('$'),
            '\\' => Some('\\'),
            '/' => Some('/'),
            'b' => Some('\u{0008}'),
            'f' => Some('\u{000C}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'u' => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let Some(digit) = self.peek().and_then(|ch| ch.to_digit(16)) else {
                        self.note("a hex digit");
                        return None;
                    };
                    self.bump();
                    code = code * 16 + digit;
                }
                let Some(decoded) = char::from_u32(code) else {
                    self.note("a unicode scalar value");
                    return None;
                };
                Some(decoded)
            }
            _ => {
                self.note("a string escape");
                None
            }
        }
    }

    /// Multi-line literals. Alternative order is load-bearing: `'''` (an
    /// escaped quote pair) wins over the `''` terminator, and `''${` (a
    /// literal dollar-brace) wins over both the terminator and a live
    /// interpolation.
    fn parse_single_quote_literal(&mut self, start: Position) -> Option<Expr> {
        let mark = self.mark();
        self.bump();
        self.bump();
        let mut parts: Vec<TextPart> = Vec::new();
        let mut chunk = String::new();
        let mut chunk_start = self.position();
        loop {
            if self.peek_is("'''") {
                self.bump();
                self.bump();
                self.bump();
                chunk.push_str("''");
            } else if self.peek_is("''${") {
                for _ in 0..4 {
                    self.bump();
                }
                chunk.push_str("${");
            } else if self.peek_is("''") {
                self.bump();
                self.bump();
                break;
            } else if self.peek_is("${") {
                Self::flush_chunk(&mut parts, &mut chunk, chunk_start, self.position());
                let Some(part) = self.parse_interpolation() else {
                    self.reset(mark);
                    return None;
                };
                parts.push(part);
                chunk_start = self.position();
            } else {
                match self.peek() {
                    Some('\r') if self.peek_at(1) != Some('\n') => {
                        self.note("a line ending");
                        self.reset(mark);
                        return None;
                    }
                    Some(ch) if ch == '\n' || ch == '\t' || ch == '\r' || !ch.is_control() => {
                        chunk.push(ch);
                        self.bump();
                    }
                    _ => {
                        self.note("`''`");
                        self.reset(mark);
                        return None;
                    }
                }
            }
        }
        Self::flush_chunk(&mut parts, &mut chunk, chunk_start, self.position());
        self.end_token();
        Some(Expr::TextLit { parts, span: self.span_from(start) })
    }
}
