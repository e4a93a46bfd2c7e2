pub struct NavLink {
    pub label: String,
    pub url: String,
    pub is_active: bool,
}

const LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/features", "Features"),
    ("/donate", "Donate"),
    ("/ngo-finder", "Find NGOs"),
];

/// Header and footer links, with the one for `current_path` marked active.
pub fn find_navigation(current_path: &str) -> Vec<NavLink> {
    LINKS
        .iter()
        .map(|(url, label)| NavLink {
            label: label.to_string(),
            url: url.to_string(),
            is_active: *url == current_path,
        })
        .collect()
}
