fn is_label_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// `/` is a label character, which is what makes `List/buildCustom` a
/// single identifier and namespaced builtins a classification problem
/// rather than a tokenization one.
fn is_label_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '/' | '_')
}

fn is_quoted_label_char(ch: char) -> bool {
    ch != '`' && (ch == ' ' || ch.is_ascii_graphic())
}

impl Parser {
    /// Maximal-munch scan of a simple label, without classification.
    fn scan_simple_label(&mut self) -> Option<String> {
        match self.peek() {
            Some(ch) if is_label_start(ch) => {}
            _ => {
                self.note("a label");
                return None;
            }
        }
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !is_label_continue(ch) {
                break;
            }
            text.push(ch);
            self.bump();
        }
        Some(text)
    }

    fn scan_quoted_label(&mut self) -> Option<String> {
        self.bump(); // opening backtick
        let mut text = String::new();
        loop {
            match self.peek() {
                Some('`') => {
                    self.bump();
                    break;
                }
                Some(ch) if is_quoted_label_char(ch) => {
                    text.push(ch);
                    self.bump();
                }
                _ => {
                    self.note("a closing backtick");
                    return None;
                }
            }
        }
        if text.is_empty() {
            self.note("a label");
            return None;
        }
        Some(text)
    }

    /// A label in binder, field or selector position: quoted, or simple and
    /// not reserved.
    fn parse_label(&mut self) -> Option<Label> {
        let start = self.position();
        let mark = self.mark();
        if self.peek() == Some('`') {
            let Some(text) = self.scan_quoted_label() else {
                self.reset(mark);
                return None;
            };
            self.end_token();
            return Some(Label { name: text, quoted: true, span: self.span_from(start) });
        }
        let text = self.scan_simple_label()?;
        if syntax::is_reserved(&text) {
            self.reset(mark);
            self.note("a label");
            return None;
        }
        self.end_token();
        Some(Label { name: text, quoted: false, span: self.span_from(start) })
    }

    /// Reserved-word match with an identifier-boundary check, so `ifs` or
    /// `Natural2` never match `if` / `Natural`.
    fn keyword(&mut self, word: &str) -> bool {
        let mark = self.mark();
        if !self.literal_raw(word) {
            return false;
        }
        if self.peek().map(is_label_continue).unwrap_or(false) {
            self.reset(mark);
            self.note(&format!("`{word}`"));
            return false;
        }
        self.end_token();
        true
    }

    /// Identifier-position expression. The scanned text is classified in
    /// priority order: namespaced builtin, builtin type, constant, boolean
    /// literal, reserved word (fails), free variable.
    fn parse_identifier_expression(&mut self) -> Option<Expr> {
        let start = self.position();
        let mark = self.mark();
        if self.peek() == Some('`') {
            let Some(text) = self.scan_quoted_label() else {
                self.reset(mark);
                return None;
            };
            let label_end = self.position();
            let index = self.parse_variable_index();
            self.end_token();
            let name = Label { name: text, quoted: true, span: Span { start, end: label_end } };
            return Some(Expr::Var { name, index, span: self.span_from(start) });
        }
        let text = self.scan_simple_label()?;
        let label_end = self.position();
        if let Some(builtin) = Builtin::from_name(&text) {
            self.end_token();
            return Some(Expr::Builtin { builtin, span: self.span_from(start) });
        }
        if let Some(constant) = Const::from_name(&text) {
            self.end_token();
            return Some(Expr::Const { constant, span: self.span_from(start) });
        }
        if text == "True" || text == "False" {
            self.end_token();
            return Some(Expr::BoolLit { value: text == "True", span: self.span_from(start) });
        }
        if syntax::is_reserved(&text) {
            self.reset(mark);
            self.note("an expression");
            return None;
        }
        let index = self.parse_variable_index();
        self.end_token();
        let name = Label { name: text, quoted: false, span: Span { start, end: label_end } };
        Some(Expr::Var { name, index, span: self.span_from(start) })
    }

    /// `@n` shadowing index; absence means 0. A bare `@` with no digits (or
    /// an index that overflows) is given back to the stream.
    fn parse_variable_index(&mut self) -> u64 {
        if self.peek() != Some('@') {
            return 0;
        }
        let mark = self.mark();
        self.bump();
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.bump();
        }
        match digits.parse::<u64>() {
            Ok(index) => index,
            Err(_) => {
                self.reset(mark);
                0
            }
        }
    }
}
