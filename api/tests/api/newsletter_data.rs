use crate::helpers::{spawn_app, spawn_app_refreshing_every};
use std::time::Duration;

#[tokio::test]
async fn newsletter_data_returns_json() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_newsletter_data().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert_eq!(content_type, "application/json");
}

#[tokio::test]
async fn newsletter_data_has_every_section_populated() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_newsletter_data().await;
    let json: serde_json::Value = response.json().await.unwrap();

    // Assert
    for section in [
        "header",
        "title",
        "mainArticle",
        "leftColumn",
        "rightColumn",
        "comicSection",
        "contributeSection",
    ] {
        assert!(!json[section].is_null(), "{} is missing", section);
    }
    assert_eq!(json["title"], "Old County Times");
    assert!(json["header"]["edition"]
        .as_str()
        .unwrap()
        .starts_with("Edition nº "));
    assert!(!json["mainArticle"]["imageCaption"].as_str().unwrap().is_empty());
    assert!(!json["rightColumn"]["jokeLines"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn the_same_issue_is_served_until_the_next_refresh() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let first = app.get_newsletter_document().await;
    let second = app.get_newsletter_document().await;

    // Assert
    assert_eq!(first, second);
}

#[tokio::test]
async fn a_new_issue_is_served_after_the_refresh_interval() {
    // Arrange
    let app = spawn_app_refreshing_every(1).await;
    let first = app.get_newsletter_document().await;

    // Act - the content is random, so poll until a refresh shows up
    let mut refreshed = false;
    for _ in 0..20 {
        tokio::time::sleep(Duration::from_millis(500)).await;
        // Deserializing checks the schema on every response
        let current = app.get_newsletter_document().await;
        assert_eq!(current.title, "Old County Times");
        assert!(current.header.edition.starts_with("Edition nº "));
        assert!(!current.right_column.joke_lines.is_empty());
        if current != first {
            refreshed = true;
            break;
        }
    }

    // Assert
    assert!(refreshed, "No new issue was published within 10 seconds");
}
