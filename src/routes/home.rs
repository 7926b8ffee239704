use dioxus::prelude::*;

use crate::routes::Route;

/// Landing page linking into the member pages.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
            h1 {
                class: "text-4xl font-bold text-gray-900 dark:text-white mb-4",
                "Welcome to CodeBros"
            }
            p {
                class: "text-lg text-gray-600 dark:text-gray-400 mb-8",
                "Connect with developers, share what you're building, and find your next collaborator."
            }
            div {
                class: "flex gap-3",
                Link {
                    to: Route::Network { connect: String::new() },
                    class: "inline-flex items-center px-4 py-2 bg-blue-600 text-white rounded-md font-medium hover:bg-blue-700 transition",
                    "Browse the network"
                }
                Link {
                    to: Route::Profile { id: 1 },
                    class: "inline-flex items-center px-4 py-2 border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white rounded-md font-medium hover:bg-gray-100 dark:hover:bg-gray-700 transition",
                    "View a profile"
                }
            }
        }
    }
}
