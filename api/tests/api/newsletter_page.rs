use crate::helpers::spawn_app;

#[tokio::test]
async fn home_page_is_served_as_html() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn home_page_shows_the_current_issue() {
    // Arrange
    let app = spawn_app().await;
    let document = app.get_newsletter_document().await;

    // Act
    let html_page = app.get_newsletter_html().await;

    // Assert
    assert!(html_page.contains("<h1 class=\"title\">Old County Times</h1>"));
    assert!(html_page.contains(&document.header.edition));
    assert!(html_page.contains(&document.header.date));
    assert!(html_page.contains(&document.contribute_section.title));
}
