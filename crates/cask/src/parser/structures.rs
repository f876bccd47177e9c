impl Parser {
    /// Complete-expression recursion with the depth guard; every structural
    /// nesting level passes through here. The limit error is latched so
    /// backtracking cannot turn it into an ordinary alternative failure.
    fn parse_expression(&mut self) -> Option<Expr> {
        if self.fatal.is_some() {
            return None;
        }
        if self.depth >= self.depth_limit {
            self.fatal = Some(ParseError::RecursionLimitExceeded {
                position: self.position(),
                limit: self.depth_limit,
            });
            return None;
        }
        self.depth += 1;
        let expr = self.parse_expression_alternatives();
        self.depth -= 1;
        expr
    }

    /// Ordered alternatives; the first one to match wins. Keyword-led and
    /// bracket-led forms go first, then a single operator-expression parse
    /// serves the arrow, annotated and plain cases, so no alternative
    /// re-parses the operand.
    fn parse_expression_alternatives(&mut self) -> Option<Expr> {
        let start = self.position();

        let mark = self.mark();
        if self.token("\\") || self.token("λ") {
            if let Some(expr) = self.parse_lambda_tail(start) {
                return Some(expr);
            }
            self.reset(mark);
        }

        let mark = self.mark();
        if self.keyword("if") {
            if let Some(expr) = self.parse_if_tail(start) {
                return Some(expr);
            }
            self.reset(mark);
        }

        let mark = self.mark();
        if self.keyword("let") {
            if let Some(expr) = self.parse_let_tail(start) {
                return Some(expr);
            }
            self.reset(mark);
        }

        let mark = self.mark();
        if self.keyword("forall") || self.token("∀") {
            if let Some(expr) = self.parse_forall_tail(start) {
                return Some(expr);
            }
            self.reset(mark);
        }

        let mark = self.mark();
        if self.keyword("merge") {
            if let Some(expr) = self.parse_merge_tail(start) {
                return Some(expr);
            }
            self.reset(mark);
        }

        if self.peek() == Some('[') {
            let mark = self.mark();
            if let Some(expr) = self.parse_empty_collection(start) {
                return Some(expr);
            }
            self.reset(mark);
            let mark = self.mark();
            if let Some(expr) = self.parse_non_empty_optional(start) {
                return Some(expr);
            }
            self.reset(mark);
        }

        let expr = self.parse_operator_expression()?;
        let after = self.mark();
        let arrow_start = self.position();
        if self.arrow() {
            if let Some(body) = self.parse_expression() {
                let label = Label {
                    name: "_".to_string(),
                    quoted: false,
                    span: Span { start: arrow_start, end: arrow_start },
                };
                let span = Span { start, end: body.span().end };
                return Some(Expr::Pi {
                    label,
                    domain: Box::new(expr),
                    body: Box::new(body),
                    span,
                });
            }
            self.reset(after);
        }
        if self.annotation_colon() {
            if let Some(annot) = self.parse_expression() {
                let span = Span { start, end: annot.span().end };
                return Some(Expr::Annot { expr: Box::new(expr), annot: Box::new(annot), span });
            }
            self.reset(after);
        }
        Some(expr)
    }

    fn arrow(&mut self) -> bool {
        self.token("->") || self.token("→")
    }

    /// Annotation colons require a following whitespace chunk, mirroring
    /// the `+` quirk: `env:HOME` must never split into a variable and an
    /// annotation.
    fn annotation_colon(&mut self) -> bool {
        let mark = self.mark();
        if !self.literal_raw(":") {
            return false;
        }
        self.end_token();
        if !self.prev_ws {
            self.reset(mark);
            return false;
        }
        true
    }

    fn parse_lambda_tail(&mut self, start: Position) -> Option<Expr> {
        if !self.token("(") {
            return None;
        }
        let label = self.parse_label()?;
        if !self.token(":") {
            return None;
        }
        let domain = self.parse_expression()?;
        if !self.token(")") {
            return None;
        }
        if !self.arrow() {
            return None;
        }
        let body = self.parse_expression()?;
        let span = Span { start, end: body.span().end };
        Some(Expr::Lambda { label, domain: Box::new(domain), body: Box::new(body), span })
    }

    fn parse_forall_tail(&mut self, start: Position) -> Option<Expr> {
        if !self.token("(") {
            return None;
        }
        let label = self.parse_label()?;
        if !self.token(":") {
            return None;
        }
        let domain = self.parse_expression()?;
        if !self.token(")") {
            return None;
        }
        if !self.arrow() {
            return None;
        }
        let body = self.parse_expression()?;
        let span = Span { start, end: body.span().end };
        Some(Expr::Pi { label, domain: Box::new(domain), body: Box::new(body), span })
    }

    fn parse_if_tail(&mut self, start: Position) -> Option<Expr> {
        let cond = self.parse_expression()?;
        if !self.keyword("then") {
            return None;
        }
        let then = self.parse_expression()?;
        if !self.keyword("else") {
            return None;
        }
        let otherwise = self.parse_expression()?;
        let span = Span { start, end: otherwise.span().end };
        Some(Expr::If {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
            span,
        })
    }

    /// One binding, required `in`. Multi-binding chains are written as
    /// nested `let`s.
    fn parse_let_tail(&mut self, start: Position) -> Option<Expr> {
        let label = self.parse_label()?;
        let annot = if self.annotation_colon() {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        if !self.token("=") {
            return None;
        }
        let value = self.parse_expression()?;
        if !self.keyword("in") {
            return None;
        }
        let body = self.parse_expression()?;
        let span = Span { start, end: body.span().end };
        Some(Expr::Let { label, annot, value: Box::new(value), body: Box::new(body), span })
    }

    /// `merge handler subject [: type]`; the operands sit at import-
    /// expression tightness and the annotation at application tightness.
    fn parse_merge_tail(&mut self, start: Position) -> Option<Expr> {
        if !self.prev_ws {
            return None;
        }
        let handler = self.parse_import_expression()?;
        if !self.prev_ws {
            return None;
        }
        let subject = self.parse_import_expression()?;
        let annot = if self.annotation_colon() {
            Some(Box::new(self.parse_application_expression()?))
        } else {
            None
        };
        let span = self.span_from(start);
        Some(Expr::Merge {
            handler: Box::new(handler),
            subject: Box::new(subject),
            annot,
            span,
        })
    }

    /// `[] : List T` and `[] : Optional T` are the only places an empty
    /// collection is grammatical, and the annotation is part of the form.
    fn parse_empty_collection(&mut self, start: Position) -> Option<Expr> {
        if !self.token("[") {
            return None;
        }
        if !self.token("]") {
            return None;
        }
        if !self.annotation_colon() {
            return None;
        }
        if self.keyword("List") {
            let elem = self.parse_import_expression()?;
            return Some(Expr::ListLit {
                elems: Vec::new(),
                elem_type: Some(Box::new(elem)),
                span: self.span_from(start),
            });
        }
        if self.keyword("Optional") {
            let value_type = self.parse_import_expression()?;
            return Some(Expr::OptionalLit {
                value: None,
                value_type: Box::new(value_type),
                span: self.span_from(start),
            });
        }
        None
    }

    fn parse_non_empty_optional(&mut self, start: Position) -> Option<Expr> {
        if !self.token("[") {
            return None;
        }
        let value = self.parse_expression()?;
        if !self.token("]") {
            return None;
        }
        if !self.annotation_colon() {
            return None;
        }
        if !self.keyword("Optional") {
            return None;
        }
        let value_type = self.parse_import_expression()?;
        Some(Expr::OptionalLit {
            value: Some(Box::new(value)),
            value_type: Box::new(value_type),
            span: self.span_from(start),
        })
    }
}
