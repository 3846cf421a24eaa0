use chrono::NaiveDate;
use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use ecommerce_api::{models::{Order, OrderProduct}, schema::order_product};
use serde_json::{json, Value};

use crate::helpers::{id_from_location, TestApp};

async fn create_order(app: &TestApp, date: &str, customer_id: i32) -> i32{
    let location = app.create("/orders", json!({"date": date, "customer_id": customer_id})).await;
    id_from_location(&location)
}

#[actix_web::test]
async fn created_order_is_retrievable_by_id(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;

    let response = app.post_json("/orders", &json!({"date": "2024-05-17", "customer_id": customer_id})).await;
    assert_eq!(response.status().as_u16(), 201);
    let location = response.headers().get("Location").unwrap().to_str().unwrap().to_string();

    let order: Order = app.get(&location).await.json().await.unwrap();
    assert_eq!(order, Order{
        order_id: id_from_location(&location),
        date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        customer_id
    });
}

#[actix_web::test]
async fn orders_are_listed_per_customer(){
    let app = TestApp::spawn_app().await;
    let ann = app.create_customer("Ann").await;
    let bob = app.create_customer("Bob").await;
    create_order(&app, "2024-01-01", ann).await;
    create_order(&app, "2024-01-02", ann).await;
    create_order(&app, "2024-01-03", bob).await;

    let orders: Vec<Order> = app.get(&format!("/orders/{}", ann)).await.json().await.unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.customer_id == ann));

    let all: Vec<Order> = app.get("/orders").await.json().await.unwrap();
    assert_eq!(all.len(), 3);
}

#[actix_web::test]
async fn customer_without_orders_gets_empty_list(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;

    for path in [format!("/orders/{}", customer_id), "/orders/9999".to_string()] {
        let response = app.get(&path).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!([]));
    }
}

#[actix_web::test]
async fn invalid_date_is_rejected(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;

    let response = app.post_json("/orders", &json!({"date": "yesterday", "customer_id": customer_id})).await;

    assert_eq!(response.status().as_u16(), 400);
    let errors: Value = response.json().await.unwrap();
    assert_eq!(errors, json!({"date": ["Not a valid date."]}));
}

#[actix_web::test]
async fn order_for_unknown_customer_is_rejected(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/orders", &json!({"date": "2024-05-17", "customer_id": 9999})).await;

    assert_eq!(response.status().as_u16(), 400);
    let errors: Value = response.json().await.unwrap();
    assert_eq!(errors, json!({"customer_id": ["Customer does not exist."]}));
}

#[actix_web::test]
async fn order_can_be_moved_to_another_customer(){
    let app = TestApp::spawn_app().await;
    let ann = app.create_customer("Ann").await;
    let bob = app.create_customer("Bob").await;
    let order_id = create_order(&app, "2024-01-01", ann).await;

    let response = app.put_json(&format!("/orders/{}", order_id), &json!({"customer_id": bob})).await;
    assert_eq!(response.status().as_u16(), 200);

    let order: Order = app.get(&format!("/orders/by-id/{}", order_id)).await.json().await.unwrap();
    assert_eq!(order.customer_id, bob);
    assert_eq!(order.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
}

#[actix_web::test]
async fn moving_order_to_unknown_customer_is_rejected(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;
    let order_id = create_order(&app, "2024-01-01", customer_id).await;

    let response = app.put_json(&format!("/orders/{}", order_id), &json!({"customer_id": 9999})).await;

    assert_eq!(response.status().as_u16(), 400);
    let errors: Value = response.json().await.unwrap();
    assert_eq!(errors, json!({"customer_id": ["Customer does not exist."]}));

    let order: Order = app.get(&format!("/orders/by-id/{}", order_id)).await.json().await.unwrap();
    assert_eq!(order.customer_id, customer_id);
}

#[actix_web::test]
async fn non_numeric_order_id_is_a_json_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/orders/by-id/abc").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Resource not found"}));
}

#[actix_web::test]
async fn update_unknown_order_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.put_json("/orders/9999", &json!({"date": "not a date"})).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn delete_unknown_order_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.delete("/orders/9999").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Order not found"}));
}

#[actix_web::test]
async fn deleting_order_removes_its_product_links(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;
    let product_id = app.create_product("Widget", 1.0).await;
    let order_id = create_order(&app, "2024-01-01", customer_id).await;

    let mut conn = app.pool.get().unwrap();
    diesel::insert_into(order_product::table)
        .values(OrderProduct{ order_id, product_id })
        .execute(&mut conn)
        .unwrap();

    let response = app.delete(&format!("/orders/{}", order_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let links: i64 = order_product::table
        .filter(order_product::order_id.eq(order_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(links, 0);
}

#[actix_web::test]
async fn deleting_product_removes_its_order_links(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;
    let product_id = app.create_product("Widget", 1.0).await;
    let order_id = create_order(&app, "2024-01-01", customer_id).await;

    let mut conn = app.pool.get().unwrap();
    diesel::insert_into(order_product::table)
        .values(OrderProduct{ order_id, product_id })
        .execute(&mut conn)
        .unwrap();

    let response = app.delete(&format!("/products/{}", product_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let links: i64 = order_product::table
        .filter(order_product::product_id.eq(product_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(links, 0);
    assert_eq!(app.get(&format!("/orders/by-id/{}", order_id)).await.status().as_u16(), 200);
}

#[actix_web::test]
async fn customer_with_orders_cannot_be_deleted(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer("Ann").await;
    create_order(&app, "2024-01-01", customer_id).await;

    let response = app.delete(&format!("/customers/{}", customer_id)).await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(app.get(&format!("/customers/{}", customer_id)).await.status().as_u16(), 200);
}
