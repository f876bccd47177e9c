/// Path components draw from the printable ASCII set minus the punctuation
/// the rest of the grammar claims (operators, brackets, separators);
/// whitespace always terminates a component.
fn is_path_char(ch: char) -> bool {
    ch.is_ascii_graphic()
        && !matches!(
            ch,
            '"' | '#' | '(' | ')' | ',' | '/' | '\\' | '?' | '[' | ']' | '{' | '}' | '<' | '>'
                | '|' | '`'
        )
}

fn is_authority_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(ch, '-' | '.' | '_' | '~' | '%' | '!' | '$' | '&' | '\'' | '*' | '+' | ';' | '=' | ':' | '@')
}

/// Inside `env:"..."` the name may contain any printable character except
/// the delimiter and the escape introducer, spaces included.
fn is_posix_env_char(ch: char) -> bool {
    ch == ' ' || (ch.is_ascii_graphic() && ch != '"' && ch != '\\')
}

impl Parser {
    /// Imports are tried before selector expressions, which is what makes
    /// `./ab` a relative path rather than field selection on a fragment.
    fn parse_import(&mut self) -> Option<Expr> {
        let start = self.position();
        let mut import = self.parse_import_hashed()?;
        let as_mark = self.mark();
        if self.keyword("as") {
            if self.keyword("Text") {
                import.mode = ImportMode::RawText;
            } else {
                self.reset(as_mark);
            }
        }
        Some(Expr::Import { import, span: self.span_from(start) })
    }

    /// An import target with its optional integrity hash but no `as Text`
    /// clause; `using` header imports take exactly this shape.
    fn parse_import_hashed(&mut self) -> Option<Import> {
        let location = self.parse_import_location()?;
        let hash = self.parse_integrity_hash();
        Some(Import { location, hash, mode: ImportMode::Code })
    }

    fn parse_import_location(&mut self) -> Option<ImportLocation> {
        if let Some(location) = self.parse_local_import() {
            return Some(location);
        }
        if let Some(location) = self.parse_env_import() {
            return Some(location);
        }
        if let Some(location) = self.parse_remote_import() {
            return Some(location);
        }
        if self.peek() == Some('m') && self.keyword("missing") {
            return Some(ImportLocation::Missing);
        }
        None
    }

    fn parse_integrity_hash(&mut self) -> Option<String> {
        if !self.prev_ws || !self.peek_is("sha256:") {
            return None;
        }
        let mark = self.mark();
        self.literal_raw("sha256:");
        let mut digits = String::new();
        for _ in 0..64 {
            match self.peek() {
                Some(ch) if ch.is_ascii_hexdigit() => {
                    digits.push(ch);
                    self.bump();
                }
                _ => {
                    self.note("64 hex digits");
                    self.reset(mark);
                    return None;
                }
            }
        }
        self.end_token();
        Some(digits)
    }

    fn parse_local_import(&mut self) -> Option<ImportLocation> {
        let mark = self.mark();
        let prefix = if self.peek_is("..") {
            self.bump();
            self.bump();
            FilePrefix::Parent
        } else if self.peek() == Some('.') {
            self.bump();
            FilePrefix::Here
        } else if self.peek() == Some('~') {
            self.bump();
            FilePrefix::Home
        } else if self.peek() == Some('/') {
            FilePrefix::Absolute
        } else {
            return None;
        };
        let components = self.scan_path_components();
        if components.is_empty() {
            self.note("a path component");
            self.reset(mark);
            return None;
        }
        self.end_token();
        Some(ImportLocation::Local { prefix, components })
    }

    fn scan_path_components(&mut self) -> Vec<String> {
        let mut components = Vec::new();
        loop {
            let mark = self.mark();
            if self.peek() != Some('/') {
                break;
            }
            self.bump();
            let mut component = String::new();
            while let Some(ch) = self.peek() {
                if !is_path_char(ch) {
                    break;
                }
                component.push(ch);
                self.bump();
            }
            if component.is_empty() {
                // a trailing slash belongs to whatever comes next
                self.reset(mark);
                break;
            }
            components.push(component);
        }
        components
    }

    fn parse_env_import(&mut self) -> Option<ImportLocation> {
        if !self.peek_is("env:") {
            return None;
        }
        let mark = self.mark();
        self.literal_raw("env:");
        let name = if self.peek() == Some('"') {
            match self.scan_posix_env_name() {
                Some(name) => name,
                None => {
                    self.reset(mark);
                    return None;
                }
            }
        } else {
            match self.scan_bash_env_name() {
                Some(name) => name,
                None => {
                    self.reset(mark);
                    return None;
                }
            }
        };
        self.end_token();
        Some(ImportLocation::Env { name })
    }

    fn scan_bash_env_name(&mut self) -> Option<String> {
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {}
            _ => {
                self.note("an environment variable name");
                return None;
            }
        }
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if !(ch.is_ascii_alphanumeric() || ch == '_') {
                break;
            }
            name.push(ch);
            self.bump();
        }
        Some(name)
    }

    /// Quoted POSIX form with its own escape set, distinct from the
    /// text-literal escapes.
    fn scan_posix_env_name(&mut self) -> Option<String> {
        self.bump(); // opening quote
        let mut name = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.bump();
                    return Some(name);
                }
                Some('\\') => {
                    self.bump();
                    let decoded = match self.bump() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('a') => '\u{0007}',
                        Some('b') => '\u{0008}',
                        Some('f') => '\u{000C}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('v') => '\u{000B}',
                        _ => {
                            self.note("an environment variable escape");
                            return None;
                        }
                    };
                    name.push(decoded);
                }
                Some(ch) if is_posix_env_char(ch) => {
                    name.push(ch);
                    self.bump();
                }
                _ => {
                    self.note("`\"`");
                    return None;
                }
            }
        }
    }

    /// The URI is recognized character by character, then the assembled
    /// text is validated through `url::Url`. A text the character grammar
    /// admits but `Url` rejects fails at the URL's start position.
    fn parse_remote_import(&mut self) -> Option<ImportLocation> {
        if !self.peek_is("http") {
            return None;
        }
        let mark = self.mark();
        let mut text = String::from("http");
        self.literal_raw("http");
        if self.peek() == Some('s') {
            self.bump();
            text.push('s');
        }
        if !self.literal_raw("://") {
            self.reset(mark);
            return None;
        }
        text.push_str("://");
        let mut authority = String::new();
        while let Some(ch) = self.peek() {
            if !is_authority_char(ch) {
                break;
            }
            authority.push(ch);
            self.bump();
        }
        if authority.is_empty() {
            self.note("a host");
            self.reset(mark);
            return None;
        }
        text.push_str(&authority);
        loop {
            let segment_mark = self.mark();
            if self.peek() != Some('/') {
                break;
            }
            self.bump();
            let mut segment = String::new();
            while let Some(ch) = self.peek() {
                if !is_path_char(ch) {
                    break;
                }
                segment.push(ch);
                self.bump();
            }
            if segment.is_empty() {
                self.reset(segment_mark);
                break;
            }
            text.push('/');
            text.push_str(&segment);
        }
        if self.peek() == Some('?') {
            self.bump();
            text.push('?');
            while let Some(ch) = self.peek() {
                if !(is_path_char(ch) || ch == '/' || ch == '?') {
                    break;
                }
                text.push(ch);
                self.bump();
            }
        }
        if self.peek() == Some('#') {
            self.bump();
            text.push('#');
            while let Some(ch) = self.peek() {
                if !(is_path_char(ch) || ch == '/' || ch == '?') {
                    break;
                }
                text.push(ch);
                self.bump();
            }
        }
        let url = match Url::parse(&text) {
            Ok(url) => url,
            Err(_) => {
                self.reset(mark);
                self.note("a valid URL");
                return None;
            }
        };
        self.end_token();
        let headers = {
            let using_mark = self.mark();
            if self.keyword("using") {
                match self.parse_import_hashed() {
                    Some(headers) => Some(Box::new(headers)),
                    None => {
                        self.reset(using_mark);
                        None
                    }
                }
            } else {
                None
            }
        };
        Some(ImportLocation::Remote(RemoteImport { url, headers }))
    }
}
