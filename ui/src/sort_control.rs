//! Sort selector for the notes listing.
//!
//! A closed table of five named options mapping to `(SortBy, SortDir)`
//! pairs. Selecting an option fires both change callbacks from one lookup;
//! unknown values are ignored.

use dioxus::prelude::*;

use api::{SortBy, SortDir};

/// One entry of the sort menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub sort_by: SortBy,
    pub sort_dir: SortDir,
}

pub const SORT_OPTIONS: [SortOption; 5] = [
    SortOption {
        value: "createdAt-desc",
        label: "Created (newest)",
        sort_by: SortBy::CreatedAt,
        sort_dir: SortDir::Desc,
    },
    SortOption {
        value: "createdAt-asc",
        label: "Created (oldest)",
        sort_by: SortBy::CreatedAt,
        sort_dir: SortDir::Asc,
    },
    SortOption {
        value: "updatedAt-desc",
        label: "Updated (newest)",
        sort_by: SortBy::UpdatedAt,
        sort_dir: SortDir::Desc,
    },
    SortOption {
        value: "title-asc",
        label: "Title (A-Z)",
        sort_by: SortBy::Title,
        sort_dir: SortDir::Asc,
    },
    SortOption {
        value: "title-desc",
        label: "Title (Z-A)",
        sort_by: SortBy::Title,
        sort_dir: SortDir::Desc,
    },
];

/// Look up the `(sortBy, sortDir)` pair for a menu value.
pub fn sort_option(value: &str) -> Option<(SortBy, SortDir)> {
    SORT_OPTIONS
        .iter()
        .find(|opt| opt.value == value)
        .map(|opt| (opt.sort_by, opt.sort_dir))
}

#[component]
pub fn SortControl(
    sort_by: SortBy,
    sort_dir: SortDir,
    on_sort_by_change: EventHandler<SortBy>,
    on_sort_dir_change: EventHandler<SortDir>,
) -> Element {
    let current = format!("{}-{}", sort_by.as_str(), sort_dir.as_str());

    rsx! {
        select {
            class: "sort-control",
            aria_label: "Sort by",
            value: "{current}",
            onchange: move |evt| {
                if let Some((by, dir)) = sort_option(&evt.value()) {
                    on_sort_by_change.call(by);
                    on_sort_dir_change.call(dir);
                }
            },
            for opt in SORT_OPTIONS {
                option {
                    value: "{opt.value}",
                    selected: opt.value == current,
                    "{opt.label}"
                }
            }
        }
    }
}
