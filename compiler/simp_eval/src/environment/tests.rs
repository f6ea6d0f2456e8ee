use super::*;
use pretty_assertions::assert_eq;

#[test]
fn define_and_get_in_same_scope() {
    let env = Environment::new();
    env.define("x", 1);
    assert_eq!(env.get("x"), Ok(1));
}

#[test]
fn lookup_walks_outward() {
    let global = Environment::new();
    global.define("x", 1);
    let inner = global.child().child();
    assert_eq!(inner.get("x"), Ok(1));
    assert_eq!(inner.depth(), 2);
}

#[test]
fn undefined_name_errors_at_root() {
    let env: Environment<i32> = Environment::new();
    assert_eq!(env.child().get("missing"), Err(ScopeError::Undefined));
    assert_eq!(env.assign("missing", 3), Err(ScopeError::Undefined));
}

#[test]
fn no_fail_variants_do_not_error() {
    let env: Environment<i32> = Environment::new();
    assert_eq!(env.get_no_fail("missing"), None);
    assert!(!env.assign_no_fail("missing", 3));
    assert_eq!(env.get_no_fail("missing"), None);
}

#[test]
fn child_shadows_without_touching_parent() {
    let global = Environment::new();
    global.define("x", 1);
    let inner = global.child();
    inner.define("x", 2);
    assert_eq!(inner.get("x"), Ok(2));
    assert_eq!(global.get("x"), Ok(1));
}

#[test]
fn assign_updates_defining_scope() {
    let global = Environment::new();
    global.define("x", 1);
    let inner = global.child();
    assert_eq!(inner.assign("x", 5), Ok(()));
    assert_eq!(global.get("x"), Ok(5));
    assert!(!inner.contains_local("x"));
}

#[test]
fn redefinition_in_same_scope_overwrites() {
    let env = Environment::new();
    env.define("x", 1);
    env.define("x", 2);
    assert_eq!(env.get("x"), Ok(2));
}

#[test]
fn immutable_bindings_reject_assignment() {
    let env = Environment::new();
    env.define_with("k", 1, Mutability::Immutable);
    assert_eq!(env.child().assign("k", 2), Err(ScopeError::Immutable));
    assert!(!env.assign_no_fail("k", 2));
    assert_eq!(env.get("k"), Ok(1));
}

#[test]
fn clones_share_the_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.define("x", 7);
    assert_eq!(env.get("x"), Ok(7));
    assert!(env.ptr_eq(&alias));
    assert!(!env.ptr_eq(&env.child()));
}

#[test]
fn enclosing_returns_parent() {
    let global: Environment<i32> = Environment::new();
    let inner = global.child();
    assert!(inner.enclosing().is_some_and(|p| p.ptr_eq(&global)));
    assert!(global.enclosing().is_none());
}

#[test]
fn debug_lists_local_names() {
    let env = Environment::new();
    env.define("b", 1);
    env.define("a", 2);
    assert_eq!(
        format!("{env:?}"),
        r#"Environment { locals: ["a", "b"], depth: 0 }"#
    );
}
