use dioxus::prelude::*;

/// Avatar with an initials fallback. An empty `image` means the member never
/// uploaded one (the backend serves empty strings as well as nulls), so the
/// colored initials placeholder is shown instead.
#[component]
pub fn Avatar(
    #[props(default = String::new())] image: String,
    initials: String,
    alt: String,
    #[props(default = "w-12 h-12".to_string())] class: String,
    #[props(default = "text-base".to_string())] text_class: String,
) -> Element {
    rsx! {
        if !image.is_empty() {
            img {
                class: "{class} rounded-full object-cover",
                src: "{image}",
                alt: "{alt}",
            }
        } else {
            div {
                class: "{class} rounded-full bg-blue-600 flex items-center justify-center text-white font-bold {text_class}",
                "{initials}"
            }
        }
    }
}
