use dioxus::prelude::*;

use crate::components::icons::{
    GithubIcon, LinkedinIcon, MailIcon, MessageCircleIcon, UserPlusIcon,
};
use crate::components::{Avatar, Badge, Card, ProfileSkeleton};
use crate::hooks::use_user;
use crate::routes::Route;
use crate::stores::users::User;
use crate::utils::profile_completion;
use crate::utils::status::{experience_level_color, experience_level_label, online_status};

/// Member profile page: identity header with completion progress, bio,
/// skills, contact info and placeholder statistics.
#[component]
pub fn Profile(id: i64) -> Element {
    let user_state = use_user(id);

    let state = user_state.read();

    if state.is_loading() {
        return rsx! {
            div {
                class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                ProfileSkeleton {}
            }
        };
    }

    // Fetch failed or the id doesn't exist
    let Some(user) = state.data() else {
        return rsx! {
            UserNotFound {}
        };
    };

    rsx! {
        ProfileView { user: user.clone() }
    }
}

#[component]
fn UserNotFound() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center",
            Card {
                class: "w-full max-w-md mx-4",
                div {
                    class: "text-center",
                    h1 {
                        class: "text-2xl font-bold text-gray-900 dark:text-white mb-2",
                        "User Not Found"
                    }
                    p {
                        class: "text-gray-600 dark:text-gray-400",
                        "The user you're looking for doesn't exist."
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileView(user: User) -> Element {
    let completion = profile_completion::compute(&user);
    let status = online_status(user.is_online.unwrap_or(false), user.last_seen);
    let exp_level = user.experience_level.clone();
    let bio = user
        .bio
        .clone()
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| "No bio available.".to_string());

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

            // Profile header
            Card {
                class: "mb-8",
                div {
                    class: "flex flex-col sm:flex-row items-start sm:items-center gap-6",

                    Avatar {
                        image: user.profile_image.clone().unwrap_or_default(),
                        initials: user.initials(),
                        alt: user.full_name(),
                        class: "w-24 h-24",
                        text_class: "text-2xl",
                    }

                    div {
                        class: "flex-1 space-y-2",
                        div {
                            class: "flex flex-col sm:flex-row sm:items-center sm:justify-between",
                            div {
                                h1 {
                                    class: "text-3xl font-bold text-gray-900 dark:text-white",
                                    "{user.full_name()}"
                                }
                                if let Some(title) = user.title.as_deref().filter(|t| !t.is_empty()) {
                                    p {
                                        class: "text-xl text-gray-600 dark:text-gray-400",
                                        "{title}"
                                    }
                                }

                                // Completion progress bar
                                div {
                                    class: "mt-2",
                                    div {
                                        class: "relative w-32 h-2 bg-gray-200 dark:bg-gray-700 rounded-full",
                                        div {
                                            class: "absolute h-2 bg-blue-500 rounded-full",
                                            style: "width: {completion.percentage}%",
                                        }
                                    }
                                    p {
                                        class: "text-sm text-gray-500 dark:text-gray-400 mt-1",
                                        "Profile Completion: {completion.percentage}%"
                                    }
                                }
                            }

                            div {
                                class: "flex space-x-3 mt-4 sm:mt-0",
                                Link {
                                    to: Route::Messages { user: user.id.to_string() },
                                    class: "inline-flex items-center px-4 py-2 bg-blue-600 text-white rounded-md font-medium hover:bg-blue-700 transition",
                                    MessageCircleIcon { class: "w-4 h-4 mr-2" }
                                    "Message"
                                }
                                Link {
                                    to: Route::Network { connect: user.id.to_string() },
                                    class: "inline-flex items-center px-4 py-2 border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white rounded-md font-medium hover:bg-gray-100 dark:hover:bg-gray-700 transition",
                                    UserPlusIcon { class: "w-4 h-4 mr-2" }
                                    "Connect"
                                }
                            }
                        }

                        div {
                            class: "flex items-center flex-wrap gap-4",
                            div {
                                class: "flex items-center",
                                div {
                                    class: "w-2 h-2 {status.color} rounded-full mr-2"
                                }
                                span {
                                    class: "text-sm text-gray-500 dark:text-gray-400",
                                    "{status.text}"
                                }
                            }
                            Badge {
                                class: experience_level_color(exp_level.as_deref()).to_string(),
                                "{experience_level_label(exp_level.as_deref())}"
                            }
                            if user.open_to_collaborate.unwrap_or(false) {
                                Badge {
                                    class: "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
                                    "Open to Collaborate"
                                }
                            }
                        }
                    }
                }
            }

            // Recommendations for incomplete profiles
            if completion.percentage < 100 {
                Card {
                    title: "Complete Your Profile",
                    class: "mb-8 border-2 border-yellow-400",
                    p {
                        class: "text-yellow-700 dark:text-yellow-300 mb-2",
                        "To get the most out of CodeBros, complete your profile:"
                    }
                    ul {
                        class: "list-disc list-inside text-yellow-700 dark:text-yellow-300",
                        for field in completion.missing_fields.iter() {
                            li { "{field}" }
                        }
                    }
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-8",

                // Main content
                div {
                    class: "lg:col-span-2 space-y-6",

                    Card {
                        title: "About",
                        p {
                            class: "text-gray-600 dark:text-gray-400 leading-relaxed",
                            "{bio}"
                        }
                    }

                    Card {
                        title: "Skills & Technologies",
                        div {
                            class: "flex flex-wrap gap-2",
                            for skill in user.skills.iter().flatten() {
                                Badge {
                                    class: "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200 text-sm",
                                    "{skill}"
                                }
                            }
                        }
                    }

                    Card {
                        title: "Recent Activity",
                        div {
                            class: "space-y-4",
                            ActivityEntry {
                                color: "bg-blue-500",
                                text: "Updated profile information",
                                when: "2 days ago",
                            }
                            ActivityEntry {
                                color: "bg-green-500",
                                text: "Connected with 3 new developers",
                                when: "1 week ago",
                            }
                            ActivityEntry {
                                color: "bg-purple-500",
                                text: "Joined CodeBros community",
                                when: "2 weeks ago",
                            }
                        }
                    }
                }

                // Sidebar
                div {
                    class: "space-y-6",

                    Card {
                        title: "Contact Information",
                        div {
                            class: "space-y-3",
                            if let Some(email) = user.email.as_deref().filter(|e| !e.is_empty()) {
                                div {
                                    class: "flex items-center space-x-3",
                                    MailIcon { class: "w-4 h-4 text-gray-400" }
                                    span {
                                        class: "text-sm text-gray-600 dark:text-gray-400",
                                        "{email}"
                                    }
                                }
                            }
                            if let Some(username) = user.username.as_deref().filter(|u| !u.is_empty()) {
                                div {
                                    class: "flex items-center space-x-3",
                                    GithubIcon { class: "w-4 h-4 text-gray-400" }
                                    span {
                                        class: "text-sm text-gray-600 dark:text-gray-400",
                                        "@{username}"
                                    }
                                }
                                div {
                                    class: "flex items-center space-x-3",
                                    LinkedinIcon { class: "w-4 h-4 text-gray-400" }
                                    span {
                                        class: "text-sm text-gray-600 dark:text-gray-400",
                                        "/in/{username}"
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        title: "Statistics",
                        div {
                            class: "space-y-4",
                            StatRow { label: "Connections", value: "42" }
                            hr {
                                class: "border-gray-200 dark:border-gray-700"
                            }
                            StatRow { label: "Projects", value: "7" }
                            hr {
                                class: "border-gray-200 dark:border-gray-700"
                            }
                            StatRow { label: "Profile Views", value: "124" }
                        }
                    }

                    Card {
                        title: "Mutual Connections",
                        div {
                            class: "space-y-3",
                            MutualConnection { name: "John Doe", initials: "JD" }
                            MutualConnection { name: "Jane Smith", initials: "JS" }
                            button {
                                class: "w-full text-sm font-medium text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-700 rounded-md py-2 transition",
                                "View all mutual connections"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityEntry(color: &'static str, text: &'static str, when: &'static str) -> Element {
    rsx! {
        div {
            class: "flex items-start space-x-3",
            div {
                class: "w-2 h-2 {color} rounded-full mt-2"
            }
            div {
                p {
                    class: "text-sm text-gray-600 dark:text-gray-400",
                    "{text}"
                }
                p {
                    class: "text-xs text-gray-500 dark:text-gray-500",
                    "{when}"
                }
            }
        }
    }
}

#[component]
fn StatRow(label: &'static str, value: &'static str) -> Element {
    rsx! {
        div {
            class: "flex justify-between items-center",
            span {
                class: "text-sm text-gray-600 dark:text-gray-400",
                "{label}"
            }
            span {
                class: "font-semibold text-gray-900 dark:text-white",
                "{value}"
            }
        }
    }
}

#[component]
fn MutualConnection(name: &'static str, initials: &'static str) -> Element {
    rsx! {
        div {
            class: "flex items-center space-x-3",
            Avatar {
                initials: "{initials}",
                alt: "{name}",
                class: "w-8 h-8",
                text_class: "text-xs",
            }
            span {
                class: "text-sm text-gray-600 dark:text-gray-400",
                "{name}"
            }
        }
    }
}
