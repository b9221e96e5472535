use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        // Hidden marker node retains reactive dependency on language signal.
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-about",
            h1 { {crate::t!("about-title")} }
            p { {crate::t!("about-body")} }
        }
    }
}
