use std::collections::HashMap;

use super::*;

fn reader(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let attrs = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |name| attrs.get(name).cloned()
}

#[test]
fn reads_all_data_attributes() {
    let card = ProjectCard::from_attributes(reader(&[
        ("data-title", "Weather App"),
        ("data-image", "img/weather.png"),
        ("data-tech", "Rust, WASM"),
        ("data-desc", "Forecasts in the browser."),
    ]));
    assert_eq!(card.title, "Weather App");
    assert_eq!(card.image, "img/weather.png");
    assert_eq!(card.tech, "Rust, WASM");
    assert_eq!(card.description, "Forecasts in the browser.");
}

#[test]
fn missing_title_falls_back_to_default() {
    let card = ProjectCard::from_attributes(reader(&[("data-image", "a.png")]));
    assert_eq!(card.title, DEFAULT_TITLE);
    assert_eq!(card.image, "a.png");
    assert!(card.tech.is_empty());
    assert!(card.description.is_empty());
}

#[test]
fn empty_title_falls_back_to_default() {
    let card = ProjectCard::from_attributes(reader(&[("data-title", "")]));
    assert_eq!(card.title, "Project");
}

#[test]
fn action_messages_name_the_project() {
    let messages = Messages::default();
    assert_eq!(ProjectAction::LiveDemo.toast_message("Blog", &messages), "Membuka demo: Blog");
    assert_eq!(ProjectAction::Repository.toast_message("Blog", &messages), "Membuka repo: Blog");
}

#[test]
fn action_element_ids_are_distinct() {
    assert_eq!(ProjectAction::LiveDemo.element_id(), "modal-live");
    assert_eq!(ProjectAction::Repository.element_id(), "modal-repo");
}
