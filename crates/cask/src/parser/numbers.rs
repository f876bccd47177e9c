impl Parser {
    /// The three numeric forms share prefixes, so order matters: a double
    /// must commit before a natural would claim its integer part, and the
    /// sign-mandatory integer form comes last.
    fn parse_number_literal(&mut self) -> Option<Expr> {
        if let Some(expr) = self.parse_double_literal() {
            return Some(expr);
        }
        if let Some(expr) = self.parse_natural_literal() {
            return Some(expr);
        }
        self.parse_integer_literal()
    }

    fn scan_digits(&mut self, out: &mut String) -> bool {
        let mut any = false;
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            out.push(ch);
            self.bump();
            any = true;
        }
        if !any {
            self.note("a digit");
        }
        any
    }

    /// Doubles need a fraction or an exponent; a bare digit run belongs to
    /// the natural rule.
    fn parse_double_literal(&mut self) -> Option<Expr> {
        let start = self.position();
        let mark = self.mark();
        let mut text = String::new();
        if matches!(self.peek(), Some('+') | Some('-')) {
            if let Some(sign) = self.bump() {
                text.push(sign);
            }
        }
        if !self.scan_digits(&mut text) {
            self.reset(mark);
            return None;
        }
        let mut qualified = false;
        if self.peek() == Some('.') {
            let fraction = self.mark();
            self.bump();
            let mut digits = String::new();
            if self.scan_digits(&mut digits) {
                text.push('.');
                text.push_str(&digits);
                qualified = true;
            } else {
                self.reset(fraction);
            }
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            let exponent = self.mark();
            self.bump();
            let mut suffix = String::from("e");
            if matches!(self.peek(), Some('+') | Some('-')) {
                if let Some(sign) = self.bump() {
                    suffix.push(sign);
                }
            }
            let mut digits = String::new();
            if self.scan_digits(&mut digits) {
                text.push_str(&suffix);
                text.push_str(&digits);
                qualified = true;
            } else {
                self.reset(exponent);
            }
        }
        if !qualified {
            self.reset(mark);
            return None;
        }
        let Ok(value) = text.parse::<f64>() else {
            self.reset(mark);
            return None;
        };
        self.end_token();
        Some(Expr::DoubleLit { value: OrderedFloat(value), span: self.span_from(start) })
    }

    fn parse_natural_literal(&mut self) -> Option<Expr> {
        let start = self.position();
        let mut digits = String::new();
        if !self.scan_digits(&mut digits) {
            return None;
        }
        self.end_token();
        let value = digits.parse::<BigUint>().ok()?;
        Some(Expr::NaturalLit { value, span: self.span_from(start) })
    }

    /// Integers are the signed form; the sign is mandatory.
    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let start = self.position();
        let mark = self.mark();
        let negative = match self.peek() {
            Some('+') => false,
            Some('-') => true,
            _ => {
                self.note("a number");
                return None;
            }
        };
        self.bump();
        let mut digits = String::new();
        if !self.scan_digits(&mut digits) {
            self.reset(mark);
            return None;
        }
        self.end_token();
        let magnitude = digits.parse::<BigInt>().ok()?;
        let value = if negative { -magnitude } else { magnitude };
        Some(Expr::IntegerLit { value, span: self.span_from(start) })
    }
}
