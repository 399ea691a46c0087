//! Builds a few selectors and prints them, including a rejected chain.
//!
//! Run with `cargo run --example selectors`.

use cssel_rs::{Combinator, combine, element, id};

fn main() -> cssel_rs::Result<()> {
    let main = id("main").class("container")?.class("editable")?;
    println!("{main}");

    let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
    println!("{link}");

    let siblings = combine(
        combine(element("h1"), Combinator::AdjacentSibling, element("p")),
        Combinator::GeneralSibling,
        element("ul"),
    );
    println!("{siblings}");

    // The descendant token is padded on both sides.
    println!("{:?}", combine(main, Combinator::Descendant, link).stringify());

    match element("a").attr("href").and_then(|s| s.class("late")) {
        Ok(sel) => println!("unexpectedly built {sel}"),
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
