impl Parser {
    /// `{` opens either a record literal or a record type: `{=}` is the
    /// empty literal, `{}` the empty type, and otherwise the first member's
    /// `=` or `:` commits the interpretation for every later member.
    fn parse_record_or_type(&mut self) -> Option<Expr> {
        let start = self.position();
        let mark = self.mark();
        if !self.token("{") {
            return None;
        }
        if self.token("=") {
            if !self.token("}") {
                self.reset(mark);
                return None;
            }
            return Some(Expr::RecordLit { fields: Vec::new(), span: self.span_from(start) });
        }
        if self.token("}") {
            return Some(Expr::RecordType { fields: Vec::new(), span: self.span_from(start) });
        }
        let Some(first_label) = self.parse_label() else {
            self.reset(mark);
            return None;
        };
        if self.token("=") {
            let Some(first_value) = self.parse_expression() else {
                self.reset(mark);
                return None;
            };
            let mut fields = vec![(first_label, first_value)];
            while self.token(",") {
                let Some(entry) = self.parse_record_member("=") else {
                    self.reset(mark);
                    return None;
                };
                fields.push(entry);
            }
            if !self.token("}") {
                self.reset(mark);
                return None;
            }
            return Some(Expr::RecordLit { fields, span: self.span_from(start) });
        }
        if self.token(":") {
            let Some(first_type) = self.parse_expression() else {
                self.reset(mark);
                return None;
            };
            let mut fields = vec![(first_label, first_type)];
            while self.token(",") {
                let Some(entry) = self.parse_record_member(":") else {
                    self.reset(mark);
                    return None;
                };
                fields.push(entry);
            }
            if !self.token("}") {
                self.reset(mark);
                return None;
            }
            return Some(Expr::RecordType { fields, span: self.span_from(start) });
        }
        self.reset(mark);
        None
    }

    fn parse_record_member(&mut self, separator: &str) -> Option<(Label, Expr)> {
        let label = self.parse_label()?;
        if !self.token(separator) {
            return None;
        }
        let value = self.parse_expression()?;
        Some((label, value))
    }

    /// `<>` bodies: alternatives may carry a type, stand bare, or (at most
    /// once) bind a literal value with `=`, which turns the whole form into
    /// a union literal.
    fn parse_union_or_type(&mut self) -> Option<Expr> {
        let start = self.position();
        let mark = self.mark();
        if !self.token("<") {
            return None;
        }
        if self.token(">") {
            return Some(Expr::UnionType { alternatives: Vec::new(), span: self.span_from(start) });
        }
        let mut literal: Option<(Label, Expr)> = None;
        let mut alternatives: Vec<(Label, Option<Expr>)> = Vec::new();
        loop {
            let Some(label) = self.parse_label() else {
                self.reset(mark);
                return None;
            };
            if literal.is_none() && self.token("=") {
                let Some(value) = self.parse_expression() else {
                    self.reset(mark);
                    return None;
                };
                literal = Some((label, value));
            } else if self.token(":") {
                let Some(alternative_type) = self.parse_expression() else {
                    self.reset(mark);
                    return None;
                };
                alternatives.push((label, Some(alternative_type)));
            } else {
                alternatives.push((label, None));
            }
            if !self.token("|") {
                break;
            }
        }
        if !self.token(">") {
            self.reset(mark);
            return None;
        }
        let span = self.span_from(start);
        match literal {
            Some((label, value)) => Some(Expr::UnionLit {
                label,
                value: Box::new(value),
                alternatives,
                span,
            }),
            None => Some(Expr::UnionType { alternatives, span }),
        }
    }
}
