use dioxus::prelude::*;

/// Boxed content section, optionally with a heading.
#[component]
pub fn Card(
    #[props(default = String::new())] title: String,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "bg-white dark:bg-gray-800 rounded-lg shadow {class}",
            if !title.is_empty() {
                div {
                    class: "px-6 pt-6",
                    h2 {
                        class: "text-lg font-semibold text-gray-900 dark:text-white",
                        "{title}"
                    }
                }
            }
            div {
                class: "p-6",
                {children}
            }
        }
    }
}

/// Small pill label. The default classes give the neutral gray variant.
#[component]
pub fn Badge(
    #[props(default = "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200".to_string())]
    class: String,
    children: Element,
) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {class}",
            {children}
        }
    }
}
