use super::*;

fn category(name: &str, is_active: bool) -> Category {
    Category {
        id: name.to_lowercase(),
        name: name.to_owned(),
        description: String::new(),
        post_count: 0,
        is_active,
        icon: 1,
    }
}

#[test]
fn post_count_label_pluralizes() {
    assert_eq!(post_count_label(0), "0 posts");
    assert_eq!(post_count_label(1), "1 post");
    assert_eq!(post_count_label(12), "12 posts");
}

#[test]
fn sort_categories_puts_active_first() {
    let mut categories = vec![category("Travel", false), category("Rust", true), category("Cooking", true)];
    sort_categories(&mut categories);
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Cooking", "Rust", "Travel"]);
}
