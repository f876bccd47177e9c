/// Binary operators, loosest first. The number is the binding level; a
/// higher level binds tighter. Entries sharing a prefix are listed longest
/// first so `//\\` is probed before `//` and `/\`; a partial match gives
/// every character back, which is what makes `a // b` reachable.
const BINARY_OPERATORS: &[(&str, Op, usize)] = &[
    ("//\\\\", Op::CombineTypes, 8),
    ("//", Op::Prefer, 7),
    ("/\\", Op::Combine, 6),
    ("==", Op::BoolEq, 10),
    ("!=", Op::BoolNe, 11),
    ("++", Op::TextAppend, 3),
    ("+", Op::NaturalPlus, 2),
    ("||", Op::BoolOr, 1),
    ("&&", Op::BoolAnd, 5),
    ("#", Op::ListAppend, 4),
    ("*", Op::NaturalTimes, 9),
    ("?", Op::ImportAlt, 0),
];

impl Parser {
    fn parse_operator_expression(&mut self) -> Option<Expr> {
        self.parse_binary_expression(0)
    }

    /// Left-folding precedence climb over [`BINARY_OPERATORS`]: operands sit
    /// at the application level, and a matched operator's right side only
    /// folds operators that bind tighter than itself. One stack frame per
    /// operand, not one per precedence level.
    fn parse_binary_expression(&mut self, min_level: usize) -> Option<Expr> {
        let mut left = self.parse_application_expression()?;
        loop {
            let mark = self.mark();
            let Some((op, level)) = self.match_binary_operator(min_level) else {
                break;
            };
            let Some(right) = self.parse_binary_expression(level + 1) else {
                self.reset(mark);
                break;
            };
            let span = merge_span(left.span(), right.span());
            left = Expr::BinOp { op, left: Box::new(left), right: Box::new(right), span };
        }
        Some(left)
    }

    /// Binary `+` additionally demands a whitespace chunk after the
    /// operator, so that `f +2` stays an application of `f` to the integer
    /// literal `+2`.
    fn match_binary_operator(&mut self, min_level: usize) -> Option<(Op, usize)> {
        for &(symbol, op, level) in BINARY_OPERATORS {
            if level < min_level {
                continue;
            }
            let mark = self.mark();
            if !self.token(symbol) {
                continue;
            }
            if op == Op::NaturalPlus && !self.prev_ws {
                self.reset(mark);
                continue;
            }
            return Some((op, level));
        }
        None
    }

    /// Juxtaposition, left-folded. Terms must be separated by mandatory
    /// whitespace; an optional leading `constructors` wraps the first term.
    fn parse_application_expression(&mut self) -> Option<Expr> {
        let start = self.position();
        let ctor_mark = self.mark();
        let constructors = self.keyword("constructors");
        if constructors && !self.prev_ws {
            self.reset(ctor_mark);
            return None;
        }
        let Some(first) = self.parse_import_expression() else {
            if constructors {
                self.reset(ctor_mark);
            }
            return None;
        };
        let mut expr = if constructors {
            let span = Span { start, end: first.span().end };
            Expr::Constructors { inner: Box::new(first), span }
        } else {
            first
        };
        loop {
            if !self.prev_ws {
                break;
            }
            let mark = self.mark();
            let Some(arg) = self.parse_import_expression() else {
                self.reset(mark);
                break;
            };
            let span = Span { start: expr.span().start, end: arg.span().end };
            expr = Expr::App { func: Box::new(expr), arg: Box::new(arg), span };
        }
        Some(expr)
    }

    fn parse_import_expression(&mut self) -> Option<Expr> {
        if let Some(import) = self.parse_import() {
            return Some(import);
        }
        self.parse_selector_expression()
    }

    fn parse_selector_expression(&mut self) -> Option<Expr> {
        let mut expr = self.parse_primitive_expression()?;
        loop {
            let mark = self.mark();
            if !self.token(".") {
                break;
            }
            if let Some(label) = self.parse_label() {
                let span = Span { start: expr.span().start, end: label.span.end };
                expr = Expr::Field { record: Box::new(expr), label, span };
                continue;
            }
            if let Some(labels) = self.parse_projection_labels() {
                let span = Span { start: expr.span().start, end: self.last_token_end };
                expr = Expr::Project { record: Box::new(expr), labels, span };
                continue;
            }
            // A `.` followed by a path character belongs to a relative
            // import one level up; give the dot back.
            self.reset(mark);
            break;
        }
        Some(expr)
    }

    fn parse_projection_labels(&mut self) -> Option<Vec<Label>> {
        let mark = self.mark();
        if !self.token("{") {
            return None;
        }
        let mut labels = Vec::new();
        if let Some(first) = self.parse_label() {
            labels.push(first);
            while self.token(",") {
                let Some(label) = self.parse_label() else {
                    self.reset(mark);
                    return None;
                };
                labels.push(label);
            }
        }
        if !self.token("}") {
            self.reset(mark);
            return None;
        }
        Some(labels)
    }

    fn parse_primitive_expression(&mut self) -> Option<Expr> {
        if matches!(self.peek(), Some(ch) if ch.is_ascii_digit() || ch == '+' || ch == '-') {
            return self.parse_number_literal();
        }
        if self.peek() == Some('"') || self.peek_is("''") {
            return self.parse_text_literal();
        }
        if self.peek() == Some('{') {
            return self.parse_record_or_type();
        }
        if self.peek() == Some('<') {
            return self.parse_union_or_type();
        }
        if self.peek() == Some('[') {
            return self.parse_non_empty_list();
        }
        if self.peek() == Some('(') {
            return self.parse_parenthesized();
        }
        self.parse_identifier_expression()
    }

    fn parse_parenthesized(&mut self) -> Option<Expr> {
        let mark = self.mark();
        if !self.token("(") {
            return None;
        }
        let Some(expr) = self.parse_expression() else {
            self.reset(mark);
            return None;
        };
        if !self.token(")") {
            self.reset(mark);
            return None;
        }
        Some(expr)
    }

    fn parse_non_empty_list(&mut self) -> Option<Expr> {
        let start = self.position();
        let mark = self.mark();
        if !self.token("[") {
            return None;
        }
        let Some(first) = self.parse_expression() else {
            self.reset(mark);
            return None;
        };
        let mut elems = vec![first];
        while self.token(",") {
            let Some(elem) = self.parse_expression() else {
                self.reset(mark);
                return None;
            };
            elems.push(elem);
        }
        if !self.token("]") {
            self.reset(mark);
            return None;
        }
        Some(Expr::ListLit { elems, elem_type: None, span: self.span_from(start) })
    }
}
