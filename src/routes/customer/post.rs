use actix_web::{http::header, web, HttpResponse};
use anyhow::Context;
use serde_json::Value;

use crate::{db_interaction::insert_customer, models::NewCustomer, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Adding customer",
    skip(pool, body)
)]
pub async fn post_customer(
    pool: web::Data<DbPool>,
    body: web::Json<Value>
) -> Result<HttpResponse, ApiError>{
    let customer = NewCustomer::parse(&body).map_err(ApiError::Validation)?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let customer_id = insert_customer(conn, customer)
        .await
        .map_err(|e| ApiError::from_record(e, "Customer"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/customers/{}", customer_id)))
        .json(message("New customer added successfully")))
}
