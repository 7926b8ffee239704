use dioxus::prelude::*;

use crate::components::icons::{HomeIcon, MessageCircleIcon, UsersIcon};

pub mod home;
pub mod messages;
pub mod network;
pub mod profile;

use home::Home;
use messages::Messages;
use network::Network;
use profile::Profile;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/profile/:id")]
        Profile { id: i64 },

        #[route("/messages?:user")]
        Messages { user: String },

        #[route("/network?:connect")]
        Network { connect: String },
}

#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();

    let is_home = matches!(current_route, Route::Home {});
    let is_network = matches!(current_route, Route::Network { .. });
    let is_messages = matches!(current_route, Route::Messages { .. });

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 dark:bg-gray-900",

            header {
                class: "sticky top-0 z-20 bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700",
                div {
                    class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8",
                    div {
                        class: "flex items-center justify-between h-14",

                        // Logo
                        Link {
                            to: Route::Home {},
                            class: "flex items-center gap-2",
                            div {
                                class: "w-8 h-8 bg-blue-500 rounded-full flex items-center justify-center text-white font-bold text-sm",
                                "CB"
                            }
                            span {
                                class: "font-bold text-xl text-gray-900 dark:text-white",
                                "CodeBros"
                            }
                        }

                        nav {
                            class: "flex items-center gap-1",
                            NavLink {
                                to: Route::Home {},
                                label: "Home",
                                active: is_home,
                                HomeIcon {}
                            }
                            NavLink {
                                to: Route::Network { connect: String::new() },
                                label: "Network",
                                active: is_network,
                                UsersIcon {}
                            }
                            NavLink {
                                to: Route::Messages { user: String::new() },
                                label: "Messages",
                                active: is_messages,
                                MessageCircleIcon {}
                            }
                        }
                    }
                }
            }

            Outlet::<Route> {}
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str, active: bool, children: Element) -> Element {
    let class = if active {
        "flex items-center gap-2 px-3 py-2 rounded-md text-sm font-semibold text-gray-900 dark:text-white"
    } else {
        "flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white transition"
    };

    rsx! {
        Link {
            to: to,
            class: "{class}",
            {children}
            span {
                "{label}"
            }
        }
    }
}
