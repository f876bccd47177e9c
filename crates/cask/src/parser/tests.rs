use super::*;

fn parse_ok(src: &str) -> Expr {
    match parse_complete(src) {
        Ok(expr) => expr,
        Err(err) => panic!("failed to parse {src:?}: {err:?}"),
    }
}

fn binop(expr: &Expr) -> (Op, &Expr, &Expr) {
    match expr {
        Expr::BinOp { op, left, right, .. } => (*op, left.as_ref(), right.as_ref()),
        other => panic!("expected binary operator, got {other:?}"),
    }
}

#[test]
fn field_selection_still_works() {
    match parse_ok("foo.bar") {
        Expr::Field { record, label, .. } => {
            assert!(matches!(record.as_ref(), Expr::Var { name, .. } if name.name == "foo"));
            assert_eq!(label.name, "bar");
        }
        other => panic!("expected field selection, got {other:?}"),
    }
}

#[test]
fn chained_selection_and_projection() {
    match parse_ok("r.a.b") {
        Expr::Field { record, label, .. } => {
            assert_eq!(label.name, "b");
            assert!(matches!(record.as_ref(), Expr::Field { .. }));
        }
        other => panic!("expected nested field selection, got {other:?}"),
    }
    match parse_ok("r.{ a, b }") {
        Expr::Project { labels, .. } => {
            let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
            assert_eq!(names, vec!["a", "b"]);
        }
        other => panic!("expected projection, got {other:?}"),
    }
}

#[test]
fn namespaced_builtin_classification() {
    assert!(matches!(
        parse_ok("List/build"),
        Expr::Builtin { builtin: Builtin::ListBuild, .. }
    ));
    // Maximal munch: a longer scan falls through to a free identifier.
    assert!(matches!(
        parse_ok("List/buildCustom"),
        Expr::Var { name, .. } if name.name == "List/buildCustom"
    ));
    assert!(matches!(
        parse_ok("Natural2"),
        Expr::Var { name, .. } if name.name == "Natural2"
    ));
    assert!(matches!(
        parse_ok("Natural/even"),
        Expr::Builtin { builtin: Builtin::NaturalEven, .. }
    ));
}

#[test]
fn reserved_words_classify_before_identifiers() {
    assert!(matches!(parse_ok("True"), Expr::BoolLit { value: true, .. }));
    assert!(matches!(parse_ok("Type"), Expr::Const { constant: Const::Type, .. }));
    assert!(matches!(parse_ok("Natural"), Expr::Builtin { builtin: Builtin::Natural, .. }));
    assert!(parse_complete("if").is_err());
}

#[test]
fn variable_index_and_quoted_labels() {
    match parse_ok("x@2") {
        Expr::Var { name, index, .. } => {
            assert_eq!(name.name, "x");
            assert_eq!(index, 2);
        }
        other => panic!("expected variable, got {other:?}"),
    }
    match parse_ok("`foo bar`") {
        Expr::Var { name, .. } => {
            assert_eq!(name.name, "foo bar");
            assert!(name.quoted);
        }
        other => panic!("expected variable, got {other:?}"),
    }
}

#[test]
fn empty_list_annotation_forms() {
    match parse_ok("[] : List Natural") {
        Expr::ListLit { elems, elem_type, .. } => {
            assert!(elems.is_empty());
            assert!(matches!(
                elem_type.as_deref(),
                Some(Expr::Builtin { builtin: Builtin::Natural, .. })
            ));
        }
        other => panic!("expected empty list, got {other:?}"),
    }
    match parse_ok("[] : Optional Natural") {
        Expr::OptionalLit { value, .. } => assert!(value.is_none()),
        other => panic!("expected empty optional, got {other:?}"),
    }
    match parse_ok("[2] : Optional Natural") {
        Expr::OptionalLit { value, .. } => {
            assert!(matches!(value.as_deref(), Some(Expr::NaturalLit { .. })));
        }
        other => panic!("expected optional literal, got {other:?}"),
    }
}

#[test]
fn non_empty_list_has_no_annotation_slot() {
    match parse_ok("[1, 2, 3]") {
        Expr::ListLit { elems, elem_type, .. } => {
            assert_eq!(elems.len(), 3);
            assert!(elem_type.is_none());
        }
        other => panic!("expected list, got {other:?}"),
    }
    // An annotated non-empty list is an ordinary annotation node.
    match parse_ok("[1] : List Natural") {
        Expr::Annot { expr, annot, .. } => {
            assert!(matches!(expr.as_ref(), Expr::ListLit { .. }));
            assert!(matches!(annot.as_ref(), Expr::App { .. }));
        }
        other => panic!("expected annotation, got {other:?}"),
    }
}

#[test]
fn record_forms() {
    assert!(matches!(parse_ok("{=}"), Expr::RecordLit { fields, .. } if fields.is_empty()));
    assert!(matches!(parse_ok("{}"), Expr::RecordType { fields, .. } if fields.is_empty()));
    match parse_ok("{ x = 1, y = 2 }") {
        Expr::RecordLit { fields, .. } => {
            let names: Vec<&str> = fields.iter().map(|(l, _)| l.name.as_str()).collect();
            assert_eq!(names, vec!["x", "y"]);
        }
        other => panic!("expected record literal, got {other:?}"),
    }
    match parse_ok("{ x : Natural, y : Bool }") {
        Expr::RecordType { fields, .. } => assert_eq!(fields.len(), 2),
        other => panic!("expected record type, got {other:?}"),
    }
    // The first member commits the interpretation.
    assert!(parse_complete("{ x = 1, y : Bool }").is_err());
    match parse_ok("{ outer = { inner = 1 } }") {
        Expr::RecordLit { fields, .. } => {
            assert!(matches!(fields[0].1, Expr::RecordLit { .. }));
        }
        other => panic!("expected record literal, got {other:?}"),
    }
}

#[test]
fn union_forms() {
    assert!(matches!(parse_ok("<>"), Expr::UnionType { alternatives, .. } if alternatives.is_empty()));
    match parse_ok("< a : Bool | b >") {
        Expr::UnionType { alternatives, .. } => {
            assert_eq!(alternatives.len(), 2);
            assert!(alternatives[0].1.is_some());
            assert!(alternatives[1].1.is_none());
        }
        other => panic!("expected union type, got {other:?}"),
    }
    match parse_ok("< a = 1 | b : Bool >") {
        Expr::UnionLit { label, alternatives, .. } => {
            assert_eq!(label.name, "a");
            assert_eq!(alternatives.len(), 1);
        }
        other => panic!("expected union literal, got {other:?}"),
    }
    // At most one literal member.
    assert!(parse_complete("< a = 1 | b = 2 >").is_err());
}

#[test]
fn operator_precedence_chain() {
    let expr = parse_ok("1 + 2 * 3");
    let (op, left, right) = binop(&expr);
    assert_eq!(op, Op::NaturalPlus);
    assert!(matches!(left, Expr::NaturalLit { .. }));
    assert_eq!(binop(right).0, Op::NaturalTimes);

    let expr = parse_ok("a && b || c");
    let (op, left, _) = binop(&expr);
    assert_eq!(op, Op::BoolOr);
    assert_eq!(binop(left).0, Op::BoolAnd);

    let expr = parse_ok("a == b && c");
    let (op, left, _) = binop(&expr);
    assert_eq!(op, Op::BoolAnd);
    assert_eq!(binop(left).0, Op::BoolEq);
}

#[test]
fn operators_left_fold() {
    let expr = parse_ok("1 + 2 + 3");
    let (op, left, right) = binop(&expr);
    assert_eq!(op, Op::NaturalPlus);
    assert_eq!(binop(left).0, Op::NaturalPlus);
    assert!(matches!(right, Expr::NaturalLit { .. }));
}

#[test]
fn slash_operators_disambiguate_atomically() {
    assert_eq!(binop(&parse_ok(r"a /\ b")).0, Op::Combine);
    assert_eq!(binop(&parse_ok("a // b")).0, Op::Prefer);
    assert_eq!(binop(&parse_ok(r"a //\\ b")).0, Op::CombineTypes);
    assert_eq!(binop(&parse_ok("xs # ys")).0, Op::ListAppend);
    assert_eq!(binop(&parse_ok(r#""a" ++ "b""#)).0, Op::TextAppend);
    assert_eq!(binop(&parse_ok("a != b")).0, Op::BoolNe);
}

#[test]
fn plus_requires_trailing_whitespace() {
    assert_eq!(binop(&parse_ok("1 + 2")).0, Op::NaturalPlus);
    match parse_ok("f +2") {
        Expr::App { func, arg, .. } => {
            assert!(matches!(func.as_ref(), Expr::Var { .. }));
            assert!(matches!(arg.as_ref(), Expr::IntegerLit { .. }));
        }
        other => panic!("expected application, got {other:?}"),
    }
    // Even a natural applies: `1 +2` is application, not addition.
    match parse_ok("1 +2") {
        Expr::App { func, arg, .. } => {
            assert!(matches!(func.as_ref(), Expr::NaturalLit { .. }));
            assert!(matches!(arg.as_ref(), Expr::IntegerLit { .. }));
        }
        other => panic!("expected application, got {other:?}"),
    }
}

#[test]
fn application_left_folds() {
    match parse_ok("f x y") {
        Expr::App { func, arg, .. } => {
            assert!(matches!(arg.as_ref(), Expr::Var { name, .. } if name.name == "y"));
            assert!(matches!(func.as_ref(), Expr::App { .. }));
        }
        other => panic!("expected application, got {other:?}"),
    }
}

#[test]
fn constructors_wraps_first_term() {
    match parse_ok("constructors < a : Bool >") {
        Expr::Constructors { inner, .. } => {
            assert!(matches!(inner.as_ref(), Expr::UnionType { .. }));
        }
        other => panic!("expected constructors, got {other:?}"),
    }
}

#[test]
fn lambda_ascii_and_unicode_agree() {
    let check = |expr: Expr| match expr {
        Expr::Lambda { label, domain, body, .. } => {
            assert_eq!(label.name, "x");
            assert!(matches!(domain.as_ref(), Expr::Builtin { builtin: Builtin::Natural, .. }));
            assert!(matches!(body.as_ref(), Expr::Var { .. }));
        }
        other => panic!("expected lambda, got {other:?}"),
    };
    check(parse_ok(r"\(x : Natural) -> x"));
    check(parse_ok("λ(x : Natural) → x"));
}

#[test]
fn forall_and_arrow_types() {
    match parse_ok("forall (a : Type) -> a") {
        Expr::Pi { label, .. } => assert_eq!(label.name, "a"),
        other => panic!("expected pi, got {other:?}"),
    }
    match parse_ok("∀(a : Type) → a") {
        Expr::Pi { label, .. } => assert_eq!(label.name, "a"),
        other => panic!("expected pi, got {other:?}"),
    }
    match parse_ok("Natural -> Bool") {
        Expr::Pi { label, domain, body, .. } => {
            assert_eq!(label.name, "_");
            assert!(matches!(domain.as_ref(), Expr::Builtin { builtin: Builtin::Natural, .. }));
            assert!(matches!(body.as_ref(), Expr::Builtin { builtin: Builtin::Bool, .. }));
        }
        other => panic!("expected pi, got {other:?}"),
    }
    // Arrows nest to the right.
    match parse_ok("Natural -> Natural -> Natural") {
        Expr::Pi { body, .. } => assert!(matches!(body.as_ref(), Expr::Pi { .. })),
        other => panic!("expected pi, got {other:?}"),
    }
}

#[test]
fn let_if_and_annotations() {
    match parse_ok("let x : Natural = 1 in x") {
        Expr::Let { label, annot, .. } => {
            assert_eq!(label.name, "x");
            assert!(matches!(
                annot.as_deref(),
                Some(Expr::Builtin { builtin: Builtin::Natural, .. })
            ));
        }
        other => panic!("expected let, got {other:?}"),
    }
    assert!(matches!(parse_ok("if b then 1 else 2"), Expr::If { .. }));
    // `in` is required.
    assert!(parse_complete("let x = 1").is_err());
    match parse_ok("1 : Natural") {
        Expr::Annot { expr, .. } => assert!(matches!(expr.as_ref(), Expr::NaturalLit { .. })),
        other => panic!("expected annotation, got {other:?}"),
    }
}

#[test]
fn annotation_colon_needs_trailing_whitespace_everywhere() {
    // The expression and let-binding annotation sites agree.
    assert!(parse_complete("1 :Natural").is_err());
    assert!(parse_complete("let x :Natural = 1 in x").is_err());
    assert!(matches!(parse_ok("let x : Natural = 1 in x"), Expr::Let { .. }));
}

#[test]
fn merge_with_annotation() {
    match parse_ok("merge handlers union : Bool") {
        Expr::Merge { handler, subject, annot, .. } => {
            assert!(matches!(handler.as_ref(), Expr::Var { .. }));
            assert!(matches!(subject.as_ref(), Expr::Var { .. }));
            assert!(matches!(
                annot.as_deref(),
                Some(Expr::Builtin { builtin: Builtin::Bool, .. })
            ));
        }
        other => panic!("expected merge, got {other:?}"),
    }
    match parse_ok("merge handlers union") {
        Expr::Merge { annot, .. } => assert!(annot.is_none()),
        other => panic!("expected merge, got {other:?}"),
    }
}

#[test]
fn malformed_lambda_reports_deepest_position() {
    let err = parse_complete(r"\( -> x").unwrap_err();
    match err {
        ParseError::Syntax { position, expected } => {
            assert_eq!(position.line, 1);
            assert_eq!(position.column, 4);
            assert!(expected.iter().any(|entry| entry == "a label"));
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn trailing_input_is_its_own_error() {
    let err = parse_complete("1 ]").unwrap_err();
    match err {
        ParseError::UnexpectedTrailingInput { position } => {
            assert_eq!(position.column, 3);
        }
        other => panic!("expected trailing-input error, got {other:?}"),
    }
}

#[test]
fn deep_nesting_hits_the_depth_limit() {
    let src = format!("{}x{}", "(".repeat(64), ")".repeat(64));
    let err = parse_complete_with_limit(&src, 16).unwrap_err();
    assert!(matches!(err, ParseError::RecursionLimitExceeded { limit: 16, .. }));
    // Nesting inside the bound parses under the default limit.
    let depth = DEFAULT_DEPTH_LIMIT / 2;
    let src = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert!(parse_complete(&src).is_ok());
}

#[test]
fn pathological_nesting_fails_cleanly_under_the_default_limit() {
    // Far past the default bound: the parser must surface the limit error,
    // and the stack consumed before it trips stays proportional to the
    // limit, not to the input.
    let depth = 8 * DEFAULT_DEPTH_LIMIT;
    let src = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let err = parse_complete(&src).unwrap_err();
    assert!(matches!(
        err,
        ParseError::RecursionLimitExceeded { limit: DEFAULT_DEPTH_LIMIT, .. }
    ));
}

#[test]
fn parse_expression_reports_consumed_offset() {
    let (expr, offset) = parse_expression("1 + 2 }tail").expect("parse");
    assert!(matches!(expr, Expr::BinOp { .. }));
    assert_eq!(offset, 6);
    assert!(parse_expression("  }").is_err());
}

#[test]
fn spans_cover_the_matched_text() {
    let expr = parse_ok("  1 + 2  ");
    let span = expr.span();
    assert_eq!(span.start.offset, 2);
    assert_eq!(span.end.offset, 7);
}

#[test]
fn ast_serializes_to_json() {
    let expr = parse_ok("{ name = \"cask\" }");
    let json = serde_json::to_value(&expr).expect("serialize");
    assert!(json.get("RecordLit").is_some());
}
