use dioxus::prelude::*;

/// A pulse-animated placeholder mirroring the profile page layout, shown
/// while the user record is loading.
#[component]
pub fn ProfileSkeleton() -> Element {
    rsx! {
        div {
            class: "animate-pulse space-y-6",
            role: "status",
            aria_live: "polite",
            aria_busy: "true",

            // Screen reader announcement
            span {
                class: "sr-only",
                "Loading profile..."
            }

            // Header block
            div {
                class: "h-64 bg-gray-200 dark:bg-gray-700 rounded-lg"
            }

            // Two-column body
            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div {
                    class: "lg:col-span-2 space-y-6",
                    div {
                        class: "h-40 bg-gray-200 dark:bg-gray-700 rounded-lg"
                    }
                    div {
                        class: "h-32 bg-gray-200 dark:bg-gray-700 rounded-lg"
                    }
                }
                div {
                    class: "space-y-6",
                    div {
                        class: "h-24 bg-gray-200 dark:bg-gray-700 rounded-lg"
                    }
                    div {
                        class: "h-24 bg-gray-200 dark:bg-gray-700 rounded-lg"
                    }
                }
            }
        }
    }
}
