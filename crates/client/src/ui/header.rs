#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        path: "/",
        label: "Dashboard",
    },
    NavItem {
        path: "/sync",
        label: "Sync",
    },
    NavItem {
        path: "/projects",
        label: "Projects",
    },
];

/// Nav item matching `current_path` exactly
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.path == current_path)
}

/// Avatar initials: first letters of the first and last names, or `?`.
pub fn user_initials(full_name: Option<&str>) -> String {
    let names: Vec<&str> = full_name.unwrap_or_default().split_whitespace().collect();
    let initial = |name: &str| name.chars().next().into_iter().flat_map(char::to_uppercase);
    match names.as_slice() {
        [] => "?".to_string(),
        [only] => initial(only).collect(),
        [first, .., last] => initial(first).chain(initial(last)).collect(),
    }
}
