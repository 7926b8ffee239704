use dioxus::prelude::*;

/// Messaging inbox. The profile page's Message button lands here with
/// `?user=<id>` preselecting a conversation.
#[component]
pub fn Messages(user: String) -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
            h1 {
                class: "text-2xl font-bold text-gray-900 dark:text-white mb-2",
                "Messages"
            }
            if user.is_empty() {
                p {
                    class: "text-gray-600 dark:text-gray-400",
                    "Your conversations will appear here."
                }
            } else {
                p {
                    class: "text-gray-600 dark:text-gray-400",
                    "Starting a conversation with member {user}..."
                }
            }
        }
    }
}
