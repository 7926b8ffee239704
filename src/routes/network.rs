use dioxus::prelude::*;

/// Network page. The profile page's Connect button lands here with
/// `?connect=<id>` starting a connection request.
#[component]
pub fn Network(connect: String) -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
            h1 {
                class: "text-2xl font-bold text-gray-900 dark:text-white mb-2",
                "Network"
            }
            if connect.is_empty() {
                p {
                    class: "text-gray-600 dark:text-gray-400",
                    "Grow your developer network."
                }
            } else {
                p {
                    class: "text-gray-600 dark:text-gray-400",
                    "Sending a connection request to member {connect}..."
                }
            }
        }
    }
}
