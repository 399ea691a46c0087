//! Integration tests for building simple selectors through the facade.
//!
//! Covers each starting fragment, chaining in grammar order, and the
//! punctuation each fragment renders with.

use cssel::{
    Fragment, SelectorExpression, attr, class, element, id, pseudo_class, pseudo_element,
};

// ============================================================================
// SINGLE FRAGMENTS
// ============================================================================

#[test]
fn test_element_alone() {
    assert_eq!(element("div").stringify(), "div");
}

#[test]
fn test_id_alone() {
    assert_eq!(id("main").stringify(), "#main");
}

#[test]
fn test_class_alone() {
    assert_eq!(class("btn-primary").stringify(), ".btn-primary");
}

#[test]
fn test_attr_alone() {
    assert_eq!(attr("disabled").stringify(), "[disabled]");
}

#[test]
fn test_pseudo_class_alone() {
    assert_eq!(pseudo_class("hover").stringify(), ":hover");
}

#[test]
fn test_pseudo_element_alone() {
    assert_eq!(pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_facade_seeds_exactly_one_fragment() {
    let seeded = [
        (element("x"), Fragment::Element),
        (id("x"), Fragment::Id),
        (class("x"), Fragment::Class),
        (attr("x"), Fragment::Attribute),
        (pseudo_class("x"), Fragment::PseudoClass),
        (pseudo_element("x"), Fragment::PseudoElement),
    ];

    for (sel, fragment) in seeded {
        assert_eq!(sel.latest(), Some(fragment));
        for other in Fragment::ALL {
            assert_eq!(sel.has(other), other == fragment, "{other} on {fragment}");
        }
    }
}

// ============================================================================
// CHAINS
// ============================================================================

#[test]
fn test_id_with_classes() {
    let sel = id("main")
        .class("container")
        .and_then(|s| s.class("editable"))
        .unwrap();
    assert_eq!(sel.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attr_pseudo_class() {
    let sel = element("a")
        .attr(r#"href$=".png""#)
        .and_then(|s| s.pseudo_class("focus"))
        .unwrap();
    assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_full_chain() {
    let sel = element("input")
        .id("email")
        .and_then(|s| s.class("field"))
        .and_then(|s| s.class("required"))
        .and_then(|s| s.attr(r#"type="email""#))
        .and_then(|s| s.pseudo_class("focus"))
        .and_then(|s| s.pseudo_class("invalid"))
        .and_then(|s| s.pseudo_element("placeholder"))
        .unwrap();
    assert_eq!(
        sel.stringify(),
        r#"input#email.field.required[type="email"]:focus:invalid::placeholder"#
    );
}

#[test]
fn test_skipping_stages_is_allowed() {
    let sel = element("li").pseudo_element("marker").unwrap();
    assert_eq!(sel.stringify(), "li::marker");

    let sel = id("nav").pseudo_class("hover").unwrap();
    assert_eq!(sel.stringify(), "#nav:hover");
}

#[test]
fn test_chain_with_question_mark() -> cssel::Result<()> {
    let sel = class("card").class("wide")?.attr("data-open")?;
    assert_eq!(sel.stringify(), ".card.wide[data-open]");
    Ok(())
}

// ============================================================================
// REPEATS
// ============================================================================

#[test]
fn test_repeated_class_is_not_deduplicated() {
    let sel = class("a").class("a").unwrap();
    assert_eq!(sel.stringify(), ".a.a");
    assert_eq!(sel.classes(), ["a", "a"]);
}

#[test]
fn test_repeated_pseudo_class_is_not_deduplicated() {
    let sel = pseudo_class("hover").pseudo_class("hover").unwrap();
    assert_eq!(sel.stringify(), ":hover:hover");
}

#[test]
fn test_attr_twice_keeps_last_value() {
    let sel = element("a").attr("href").and_then(|s| s.attr("title")).unwrap();
    assert_eq!(sel.attribute(), Some("title"));
    assert_eq!(sel.stringify(), "a[title]");
}

#[test]
fn test_attr_values_are_not_validated() {
    let sel = attr("not really = an attribute").pseudo_class("").unwrap();
    assert_eq!(sel.stringify(), "[not really = an attribute]:");
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

#[test]
fn test_simple_selector_converts_to_expression() {
    let expr: SelectorExpression = id("main").into();
    assert!(expr.is_simple());
    assert!(!expr.is_combinator());
    assert_eq!(expr.as_simple().and_then(|s| s.id_name()), Some("main"));
    assert_eq!(expr.stringify(), "#main");
}

#[test]
fn test_stringify_matches_display() {
    let sel = element("p").class("lead").unwrap();
    assert_eq!(sel.stringify(), sel.to_string());
    assert_eq!(format!("{sel}"), "p.lead");
}

#[test]
fn test_stringify_is_repeatable() {
    let expr: SelectorExpression = element("p").class("lead").unwrap().into();
    let first = expr.stringify();
    assert_eq!(expr.stringify(), first);
    assert_eq!(expr.stringify(), first);
}
