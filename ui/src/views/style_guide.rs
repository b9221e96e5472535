//! Styling reference page.
//!
//! Lists the design tokens the theme (`assets/theme/main.css`) defines as CSS
//! custom properties, each with a live sample rendered through that property.
//! Adding a token to the theme means adding a row to [`TOKENS`]; the crate
//! tests check both stay in sync.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenGroup {
    Color,
    Spacing,
    Typography,
    Radius,
}

impl TokenGroup {
    pub const ALL: [TokenGroup; 4] = [
        TokenGroup::Color,
        TokenGroup::Spacing,
        TokenGroup::Typography,
        TokenGroup::Radius,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            TokenGroup::Color => "Color",
            TokenGroup::Spacing => "Spacing",
            TokenGroup::Typography => "Typography",
            TokenGroup::Radius => "Radius",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            TokenGroup::Color => "color",
            TokenGroup::Spacing => "spacing",
            TokenGroup::Typography => "typography",
            TokenGroup::Radius => "radius",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignToken {
    pub name: &'static str,
    /// CSS custom property, including the leading `--`.
    pub property: &'static str,
    pub group: TokenGroup,
}

const fn token(name: &'static str, property: &'static str, group: TokenGroup) -> DesignToken {
    DesignToken {
        name,
        property,
        group,
    }
}

pub const TOKENS: &[DesignToken] = &[
    token("Background", "--color-bg", TokenGroup::Color),
    token("Surface", "--color-surface", TokenGroup::Color),
    token("Text", "--color-text", TokenGroup::Color),
    token("Muted text", "--color-muted", TokenGroup::Color),
    token("Border", "--color-border", TokenGroup::Color),
    token("Accent", "--color-accent", TokenGroup::Color),
    token("Accent (strong)", "--color-accent-strong", TokenGroup::Color),
    token("Space 1", "--space-1", TokenGroup::Spacing),
    token("Space 2", "--space-2", TokenGroup::Spacing),
    token("Space 3", "--space-3", TokenGroup::Spacing),
    token("Space 4", "--space-4", TokenGroup::Spacing),
    token("Body font", "--font-body", TokenGroup::Typography),
    token("Monospace font", "--font-mono", TokenGroup::Typography),
    token("Base size", "--font-size-base", TokenGroup::Typography),
    token("Large size", "--font-size-lg", TokenGroup::Typography),
    token("Small radius", "--radius-sm", TokenGroup::Radius),
    token("Medium radius", "--radius-md", TokenGroup::Radius),
];

/// Inline style that makes the sample element display the token.
fn sample_style(token: &DesignToken) -> String {
    let var = format!("var({})", token.property);
    match token.group {
        TokenGroup::Color => format!("background: {var}"),
        TokenGroup::Spacing => format!("width: {var}"),
        TokenGroup::Typography if token.property.starts_with("--font-size") => {
            format!("font-size: {var}")
        }
        TokenGroup::Typography => format!("font-family: {var}"),
        TokenGroup::Radius => format!("border-radius: {var}"),
    }
}

struct SampleRow {
    name: &'static str,
    property: &'static str,
    style: String,
    text: &'static str,
}

struct GroupSection {
    slug: &'static str,
    heading: &'static str,
    rows: Vec<SampleRow>,
}

fn sections() -> Vec<GroupSection> {
    TokenGroup::ALL
        .into_iter()
        .map(|group| GroupSection {
            slug: group.slug(),
            heading: group.heading(),
            rows: TOKENS
                .iter()
                .filter(|t| t.group == group)
                .map(|t| SampleRow {
                    name: t.name,
                    property: t.property,
                    style: sample_style(t),
                    text: if group == TokenGroup::Typography { "Aa" } else { "" },
                })
                .collect(),
        })
        .collect()
}

#[component]
pub fn StyleGuide() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let token_heading = crate::t!("style-guide-token");
    let property_heading = crate::t!("style-guide-property");
    let sample_heading = crate::t!("style-guide-sample");

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-style-guide",
            h1 { {crate::t!("style-guide-title")} }
            p { {crate::t!("style-guide-intro")} }

            for section in sections() {
                div {
                    key: "{section.slug}",
                    class: format!("style-guide__group style-guide__group--{}", section.slug),
                    h2 { "{section.heading}" }
                    table { class: "style-guide__table",
                        thead {
                            tr {
                                th { "{token_heading}" }
                                th { "{property_heading}" }
                                th { "{sample_heading}" }
                            }
                        }
                        tbody {
                            for row in section.rows {
                                tr { key: "{row.property}", class: "style-guide__row",
                                    td { "{row.name}" }
                                    td { code { "{row.property}" } }
                                    td {
                                        span {
                                            class: format!("style-guide__sample style-guide__sample--{}", section.slug),
                                            style: row.style,
                                            "{row.text}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
