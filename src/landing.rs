use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Landing() -> Element {
    let cards = vec![
        (
            Route::ButtonPage {},
            "Button",
            "Colors, padding, radius, borders, and hover effects.",
        ),
        (
            Route::CardPage {},
            "Card",
            "Composable header, body, footer, and image sections.",
        ),
        (
            Route::CheckboxPage {},
            "Checkbox",
            "Peer-styled box with a centered check and label placement.",
        ),
        (
            Route::InputPage {},
            "Input",
            "Types, sizes, states, focus colors, and right icons.",
        ),
        (
            Route::LoaderPage {},
            "Loader",
            "Spinner, dots, pulse, bar, and ring animations.",
        ),
        (
            Route::TogglePage {},
            "Toggle",
            "Track and thumb sizing with derived travel distance.",
        ),
    ];

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Widget Studio"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Configure a component visually, watch the markup update live, and copy a ready-to-paste snippet. Everything you copy lands in your history."
                }
                Link {
                    to: Route::History {},
                    style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                    "View History \u{2192}"
                }
            }

            // Configurator grid
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px; margin-top: 64px;",
                for (route, title, blurb) in cards {
                    Link {
                        to: route,
                        style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px; text-decoration: none; display: block;",
                        h3 {
                            style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                            "{title}"
                        }
                        p {
                            style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                            "{blurb}"
                        }
                    }
                }
            }

            p {
                style: "color: #4b5563; font-size: 13px; margin-top: 64px;",
                "Snippets are plain HTML with utility classes"
            }
        }
    }
}
