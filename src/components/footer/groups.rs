use super::types::{FooterGroup, FooterItem};
use crate::app::page::Focus;
use crate::app::state::AppState;
use crate::domain::page::Dialog;

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match (state.page.dialog, state.page.focus) {
        (Some(Dialog::Jump), _) => vec![FooterGroup {
            name: "JUMP",
            items: vec![
                item("Enter", "go"),
                item("↑/↓", "select"),
                item("Esc", "close"),
            ],
        }],
        (Some(Dialog::Shortcuts), _) => vec![FooterGroup {
            name: "HELP",
            items: vec![item("Esc/?", "close")],
        }],
        (None, Focus::Search) => vec![FooterGroup {
            name: "SEARCH",
            items: vec![item("Enter", "find"), item("Esc", "cancel")],
        }],
        _ => vec![
            FooterGroup {
                name: "GO",
                items: vec![
                    item("gg/gb", "top/bottom"),
                    item("gi", "index"),
                    item("ge", "examples"),
                ],
            },
            FooterGroup {
                name: "PAGE",
                items: vec![
                    item("/", "search"),
                    item(".", "jump"),
                    item("?", "keys"),
                    item("q", "quit"),
                ],
            },
        ],
    }
}
