/// Drop-down value meaning "use the free-text field instead".
pub const OTHER_CATEGORY: &str = "other";

pub fn resolve_category(selected: &str, other: &str) -> String {
    if selected == OTHER_CATEGORY {
        other.to_string()
    } else {
        selected.to_string()
    }
}
