use pretty_assertions::assert_eq;
use speck_sugar::{
    expand, expand_builtin_member_call, expand_builtin_member_decl_or_call, infer_decl,
    SugarError, SYNTAX_ERROR_CODE, UNKNOWN_NAME, UNNAMED,
};
use speck_syntax::{make, Arguments, CallExpr, Expr, SourceSpan};
use speck_types::Severity;

fn call_mut(expr: &mut Expr) -> &mut CallExpr {
    match expr {
        Expr::Call(call) => call,
        Expr::Binary(binary) => call_mut(&mut binary.rhs),
        other => panic!("expected a call, got {other:?}"),
    }
}

#[test]
fn typed_declaration_without_arguments_uses_declared_type() {
    let mut decl = make::declare(make::typed_var("x", "T"), make::this_call("foo", vec![]));

    expand_builtin_member_decl_or_call(&mut decl, []).expect("declared type is inferred");

    assert_eq!(
        decl,
        make::declare(
            make::typed_var("x", "T"),
            make::this_call("foo", vec![make::class_ref("T"), make::string("x")]),
        )
    );
}

#[test]
fn dynamic_declaration_uses_explicit_type_argument() {
    let mut decl = make::declare(
        make::var("x"),
        make::this_call("foo", vec![make::class_ref("U")]),
    );

    expand_builtin_member_decl_or_call(&mut decl, []).expect("explicit type argument");

    assert_eq!(
        decl,
        make::declare(
            make::var("x"),
            make::this_call("foo", vec![make::class_ref("U"), make::string("x")]),
        )
    );
}

#[test]
fn explicit_type_argument_wins_over_declared_type() {
    let mut decl = make::declare(
        make::typed_var("x", "T"),
        make::this_call("foo", vec![make::class_ref("U"), make::string("ignored")]),
    );

    expand_builtin_member_decl_or_call(&mut decl, []).expect("explicit type argument");

    assert_eq!(
        call_mut(&mut decl).args.as_slice(),
        &[make::class_ref("U"), make::string("x")]
    );
}

#[test]
fn bare_call_without_type_is_a_syntax_error() {
    let span = SourceSpan::new(12, 9, 12, 14);
    let mut call = make::this_call("foo", vec![]).with_span(span);
    let before = call.clone();

    let err = expand_builtin_member_decl_or_call(&mut call, [make::int(1)])
        .expect_err("no type can be inferred");

    assert_eq!(
        err,
        SugarError::Syntax {
            message: "Type cannot be inferred; please specify one explicitly".to_string(),
            span,
        }
    );
    assert!(!err.is_internal());
    assert_eq!(call, before);

    let diagnostic = err.to_diagnostic().expect("syntax errors are user-facing");
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.code, SYNTAX_ERROR_CODE);
    assert_eq!(diagnostic.span, Some(span));
}

#[test]
fn syntax_error_without_position_has_no_diagnostic_span() {
    let mut decl = make::declare(make::var("x"), make::this_call("foo", vec![]));
    let err = expand_builtin_member_decl_or_call(&mut decl, []).expect_err("dynamic, untyped");
    assert_eq!(err.to_diagnostic().and_then(|d| d.span), None);
}

#[test]
fn bare_call_with_type_is_unnamed() {
    let mut call = make::this_call("Mock", vec![make::class_ref("List")]);

    expand_builtin_member_call(&mut call, []).expect("explicit type argument");

    assert_eq!(
        call,
        make::this_call("Mock", vec![make::class_ref("List"), make::string(UNNAMED)])
    );
}

#[test]
fn extra_arguments_are_appended() {
    let mut decl = make::declare(make::typed_var("list", "List"), make::this_call("Mock", vec![]));
    let options = make::closure(vec![make::expr_stmt(make::var("verbose"))]);

    expand_builtin_member_decl_or_call(&mut decl, [options.clone(), make::int(3)])
        .expect("declared type is inferred");

    assert_eq!(
        call_mut(&mut decl).args.as_slice(),
        &[
            make::class_ref("List"),
            make::string("list"),
            options,
            make::int(3),
        ]
    );
}

#[test]
fn tuple_representation_is_kept() {
    let mut decl = make::declare(make::typed_var("x", "T"), make::this_call("foo", vec![]));
    call_mut(&mut decl).args = Arguments::Tuple(Vec::new());

    expand_builtin_member_decl_or_call(&mut decl, []).expect("declared type is inferred");

    assert_eq!(
        call_mut(&mut decl).args,
        Arguments::Tuple(vec![make::class_ref("T"), make::string("x")])
    );
}

#[test]
fn shared_empty_arguments_are_an_internal_error() {
    let mut decl = make::declare(make::typed_var("x", "T"), make::this_call("foo", vec![]));
    call_mut(&mut decl).args = Arguments::EMPTY;
    let before = decl.clone();

    let err = expand_builtin_member_decl_or_call(&mut decl, []).expect_err("shared empty list");

    assert!(err.is_internal());
    assert_eq!(err.to_diagnostic(), None);
    assert_eq!(decl, before);
    assert!(call_mut(&mut decl).args.is_shared_empty());
}

#[test]
fn non_variable_target_is_named_unknown() {
    let mut decl = make::field_init(
        make::property(make::this(), "field"),
        make::this_call("foo", vec![make::class_ref("U")]),
    );

    expand_builtin_member_decl_or_call(&mut decl, []).expect("explicit type argument");

    assert_eq!(
        call_mut(&mut decl).args.as_slice(),
        &[make::class_ref("U"), make::string(UNKNOWN_NAME)]
    );
}

#[test]
fn inference_reports_name_and_type() {
    let decl = make::declare(make::typed_var("items", "Set"), make::this_call("Stub", vec![]));
    let Expr::Binary(binary) = &decl else {
        panic!("declaration is a binary expression");
    };

    let inferred = infer_decl(binary).expect("declared type is inferred");
    assert_eq!(inferred.name, "items");
    assert_eq!(inferred.ty, make::class_ref("Set"));
}

#[test]
fn expanding_a_non_call_is_an_internal_error() {
    let mut expr = make::var("x");
    let err = expand(&mut expr, "x", make::class_ref("T"), []).expect_err("not a call");
    assert!(err.is_internal());
    assert_eq!(expr, make::var("x"));
}

#[test]
fn explicit_name_and_type_can_be_supplied() {
    let mut call = make::call(make::super_(), "Spy", vec![]);

    expand(&mut call, "spied", make::class_ref("Map"), []).expect("call is expandable");

    assert_eq!(
        call,
        make::call(
            make::super_(),
            "Spy",
            vec![make::class_ref("Map"), make::string("spied")],
        )
    );
}
