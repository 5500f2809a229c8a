mod config;
mod history;
mod landing;
mod pages;

use dioxus::prelude::*;

use history::History;
use landing::Landing;
use pages::{ButtonPage, CardPage, CheckboxPage, InputPage, LoaderPage, TogglePage};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/button")]
    ButtonPage {},
    #[route("/card")]
    CardPage {},
    #[route("/checkbox")]
    CheckboxPage {},
    #[route("/input")]
    InputPage {},
    #[route("/loader")]
    LoaderPage {},
    #[route("/toggle")]
    TogglePage {},
    #[route("/history")]
    History {},
}

#[component]
fn Home() -> Element {
    rsx! {
        Landing {}
    }
}

#[allow(non_snake_case)]
fn App() -> Element {
    // The previews and generated snippets use utility classes, so the
    // utility engine must be present on the host page. Install it once.
    use_effect(|| {
        document::eval(
            r#"
            if (!window.__twLoaded) {
                window.__twLoaded = true;
                const s = document.createElement('script');
                s.src = 'https://cdn.tailwindcss.com';
                document.head.appendChild(s);
            }
        "#,
        );
    });

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
