use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{QuizView, StartView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StartView)] Start {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { Link { to: Route::Start {}, "Quiz" } }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
