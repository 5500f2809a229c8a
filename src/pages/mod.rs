//! Configurator pages - one per widget kind
//!
//! Every page follows the same layout: a controls column on the left bound
//! field-by-field to a `Signal<Settings>`, and the shared code panel on the
//! right showing the live preview, the escaped snippet, and the copy/save
//! action.

mod button;
mod card;
mod checkbox;
pub(crate) mod code_panel;
mod controls;
mod input;
mod loader;
mod toggle;

pub(crate) use code_panel::CodePanel;
pub(crate) use controls::{
    CheckField, ColorField, ControlGroup, RadioField, RangeField, SelectField, TextField,
};

pub use button::ButtonPage;
pub use card::CardPage;
pub use checkbox::CheckboxPage;
pub use input::InputPage;
pub use loader::LoaderPage;
pub use toggle::TogglePage;

use dioxus::prelude::*;

use crate::Route;

pub(crate) const PAGE_STYLE: &str = "min-height: 100vh; background: #0f0f1a; padding: 24px; font-family: system-ui, sans-serif;";
pub(crate) const PANEL_STYLE: &str = "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 20px;";

/// Header bar shared by all configurator pages
#[component]
pub fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: baseline; margin-bottom: 20px; max-width: 1100px; margin-left: auto; margin-right: auto;",
            Link {
                to: Route::Home {},
                style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                "\u{2190} Studio"
            }
            h2 {
                style: "color: #e5e7eb; margin: 0; font-size: 22px;",
                "{title}"
            }
            span {
                style: "color: #6b7280; font-size: 14px;",
                "{subtitle}"
            }
            Link {
                to: Route::History {},
                style: "margin-left: auto; color: #818cf8; text-decoration: none; font-size: 14px;",
                "History \u{2192}"
            }
        }
    }
}
