//! Style guide page against the unified theme.

use dioxus::prelude::*;
use ui::views::style_guide::{TokenGroup, TOKENS};
use ui::views::StyleGuide;
use ui::THEME_CSS_INLINE;

#[test]
fn every_catalog_token_is_defined_by_the_theme() {
    let missing: Vec<_> = TOKENS
        .iter()
        .filter(|t| !THEME_CSS_INLINE.contains(&format!("{}:", t.property)))
        .map(|t| t.property)
        .collect();

    assert!(
        missing.is_empty(),
        "Tokens listed in the style guide but not defined in main.css:\n{}",
        missing.join("\n")
    );
}

#[test]
fn every_theme_token_is_listed_in_the_catalog() {
    // Definitions inside `:root { ... }` look like `  --name: value;`
    let root = THEME_CSS_INLINE
        .split(":root {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("theme defines a :root block");

    let undocumented: Vec<_> = root
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("--"))
        .filter_map(|line| line.split(':').next())
        .filter(|prop| !TOKENS.iter().any(|t| t.property == *prop))
        .collect();

    assert!(
        undocumented.is_empty(),
        "Theme tokens missing from the style guide:\n{}",
        undocumented.join("\n")
    );
}

#[test]
fn renders_a_row_per_token_grouped() {
    ui::i18n::init();
    let mut dom = VirtualDom::new(StyleGuide);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    for token in TOKENS {
        assert!(html.contains(token.property), "missing {} in {html}", token.property);
    }
    for group in TokenGroup::ALL {
        assert!(html.contains(group.heading()), "missing heading {:?}", group);
    }
    assert_eq!(html.matches("style-guide__row").count(), TOKENS.len());
}
