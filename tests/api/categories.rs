use crate::helpers::spawn_app;

#[tokio::test]
async fn categories_list_the_form_options_in_order() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .api_client
        .get(&format!("{}/contact/categories", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let values: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["challenge", "lab", "event", "consultation", "other"]);
    assert_eq!(body[0]["label"], "CTF Challenge Request");
}
