use pretty_assertions::assert_eq;
use speck_sugar::{closure_statements, closure_statements_mut, statements};
use speck_syntax::{make, Block, ClosureExpr, Expr, MethodNode, SourceSpan, Stmt};

fn closure(expr: Expr) -> ClosureExpr {
    match expr {
        Expr::Closure(closure) => closure,
        other => panic!("expected a closure, got {other:?}"),
    }
}

#[test]
fn absent_method_body_becomes_live_empty_block() {
    let mut method = MethodNode::new("setup");
    assert!(statements(&mut method).is_empty());

    statements(&mut method).push(make::expr_stmt(make::this_call("init", vec![])));
    assert_eq!(statements(&mut method).len(), 1);

    assert_eq!(
        method.body.as_deref(),
        Some(&Stmt::Block(Block {
            statements: vec![make::expr_stmt(make::this_call("init", vec![]))],
            span: SourceSpan::UNKNOWN,
        }))
    );
}

#[test]
fn single_statement_body_is_wrapped() {
    let single = make::expr_stmt(make::this_call("run", vec![]));
    let mut method = MethodNode::new("feature");
    method.body = Some(Box::new(single.clone()));

    assert_eq!(statements(&mut method), &vec![single.clone()]);
    statements(&mut method).insert(0, make::expr_stmt(make::var("before")));

    match method.body.as_deref() {
        Some(Stmt::Block(block)) => assert_eq!(
            block.statements,
            vec![make::expr_stmt(make::var("before")), single]
        ),
        other => panic!("expected a block body, got {other:?}"),
    }
}

#[test]
fn block_body_is_returned_as_is() {
    let stmts = vec![
        make::expr_stmt(make::var("a")),
        make::expr_stmt(make::var("b")),
    ];
    let mut method = MethodNode::new("feature");
    method.body = Some(Box::new(make::block(stmts.clone())));

    assert_eq!(statements(&mut method), &stmts);
}

#[test]
fn closure_statements_are_live() {
    let mut closure = closure(make::closure(vec![make::expr_stmt(make::var("x"))]));
    assert_eq!(closure_statements(&closure).len(), 1);

    closure_statements_mut(&mut closure)
        .expect("closure has a block")
        .push(make::expr_stmt(make::var("y")));
    assert_eq!(
        closure_statements(&closure),
        &[make::expr_stmt(make::var("x")), make::expr_stmt(make::var("y"))]
    );
}

#[test]
fn closure_without_block_has_no_statements() {
    let mut closure = ClosureExpr {
        body: None,
        span: SourceSpan::UNKNOWN,
    };
    assert!(closure_statements(&closure).is_empty());
    assert!(closure_statements_mut(&mut closure).is_none());
}

#[test]
fn normalizing_twice_does_not_nest_blocks() {
    let single = make::expr_stmt(make::this_call("run", vec![]));
    let mut method = MethodNode::new("feature");
    method.body = Some(Box::new(single.clone()));

    statements(&mut method);
    statements(&mut method);

    assert_eq!(
        method.body.as_deref(),
        Some(&Stmt::Block(Block {
            statements: vec![single],
            span: SourceSpan::UNKNOWN,
        }))
    );
}
