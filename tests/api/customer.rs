use ecommerce_api::models::Customer;
use serde_json::{json, Value};

use crate::helpers::{id_from_location, TestApp};

#[actix_web::test]
async fn created_customer_is_retrievable_by_id(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/customers", &json!({
        "name": "Ann",
        "email": "a@x.com",
        "phone": "555-0100"
    })).await;

    assert_eq!(response.status().as_u16(), 201);
    let location = response.headers().get("Location").unwrap().to_str().unwrap().to_string();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "New customer added successfully"}));

    let response = app.get(&location).await;
    assert_eq!(response.status().as_u16(), 200);

    let customer: Customer = response.json().await.unwrap();
    assert_eq!(customer, Customer{
        customer_id: id_from_location(&location),
        name: "Ann".to_string(),
        email: Some("a@x.com".to_string()),
        phone: Some("555-0100".to_string())
    });
}

#[actix_web::test]
async fn customer_fields_keep_their_order(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;

    let body = app.get(&format!("/customers/{}", customer_id)).await.text().await.unwrap();

    assert_eq!(
        body,
        format!(r#"{{"customer_id":{},"name":"Ann","email":"ann@example.com","phone":"555-0100"}}"#, customer_id)
    );
}

#[actix_web::test]
async fn list_returns_every_customer(){
    let app = TestApp::spawn_app().await;
    app.create_customer("Ann").await;
    app.create_customer("Bob").await;

    let response = app.get("/customers").await;
    assert_eq!(response.status().as_u16(), 200);

    let customers: Vec<Customer> = response.json().await.unwrap();
    let mut names: Vec<String> = customers.into_iter().map(|c| c.name).collect();
    names.sort();
    assert_eq!(names, vec!["Ann", "Bob"]);
}

#[actix_web::test]
async fn post_customer_with_missing_fields_lists_them(){
    let app = TestApp::spawn_app().await;

    let test_cases = vec![
        (json!({"email": "a@x.com", "phone": "1"}), vec!["name"]),
        (json!({"name": "Ann"}), vec!["email", "phone"]),
        (json!({}), vec!["email", "name", "phone"]),
    ];

    for (body, missing) in test_cases {
        let response = app.post_json("/customers", &body).await;
        assert_eq!(response.status().as_u16(), 400, "payload: {}", body);

        let errors: Value = response.json().await.unwrap();
        let mut fields: Vec<&str> = errors.as_object().unwrap().keys().map(String::as_str).collect();
        fields.sort();
        assert_eq!(fields, missing, "payload: {}", body);
    }
}

#[actix_web::test]
async fn malformed_json_is_rejected(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client.post(format!("{}/customers", app.get_app_url()))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn get_unknown_customer_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/customers/9999").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Customer not found"}));
}

#[actix_web::test]
async fn partial_update_only_changes_given_fields(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;

    let response = app.put_json(&format!("/customers/{}", customer_id), &json!({"phone": "555-0199"})).await;
    assert_eq!(response.status().as_u16(), 200);

    let customer: Customer = app.get(&format!("/customers/{}", customer_id)).await.json().await.unwrap();
    assert_eq!(customer.name, "Ann");
    assert_eq!(customer.email.as_deref(), Some("ann@example.com"));
    assert_eq!(customer.phone.as_deref(), Some("555-0199"));
}

#[actix_web::test]
async fn update_cannot_change_the_id(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;

    let response = app.put_json(
        &format!("/customers/{}", customer_id),
        &json!({"customer_id": customer_id + 100, "name": "Anna"})
    ).await;
    assert_eq!(response.status().as_u16(), 200);

    let customer: Customer = app.get(&format!("/customers/{}", customer_id)).await.json().await.unwrap();
    assert_eq!(customer.customer_id, customer_id);
    assert_eq!(customer.name, "Anna");
    assert_eq!(app.get(&format!("/customers/{}", customer_id + 100)).await.status().as_u16(), 404);
}

#[actix_web::test]
async fn update_unknown_customer_is_404_before_validation(){
    let app = TestApp::spawn_app().await;

    let response = app.put_json("/customers/9999", &json!({"name": 12})).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn update_with_wrong_types_returns_400(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;

    let response = app.put_json(&format!("/customers/{}", customer_id), &json!({"name": 12})).await;

    assert_eq!(response.status().as_u16(), 400);
    let errors: Value = response.json().await.unwrap();
    assert_eq!(errors, json!({"name": ["Not a valid string."]}));
}

#[actix_web::test]
async fn deleted_customer_is_gone(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;

    let response = app.delete(&format!("/customers/{}", customer_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.get(&format!("/customers/{}", customer_id)).await.status().as_u16(), 404);
    assert_eq!(app.delete(&format!("/customers/{}", customer_id)).await.status().as_u16(), 404);
}

#[actix_web::test]
async fn non_numeric_id_is_a_json_not_found(){
    let app = TestApp::spawn_app().await;

    for response in [
        app.get("/customers/abc").await,
        app.put_json("/customers/abc", &json!({"name": "Ann"})).await,
        app.delete("/customers/abc").await
    ] {
        assert_eq!(response.status().as_u16(), 404);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Resource not found"}));
    }
}
