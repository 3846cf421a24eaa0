use actix_web::{web, HttpResponse};
use anyhow::Context;
use serde_json::Value;

use crate::{db_interaction::update_customer_in_database, models::CustomerChanges, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

// An unknown id answers 404 before the body's validation errors are reported
#[tracing::instrument(
    "Updating customer",
    skip(pool, body)
)]
pub async fn update_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<Value>
) -> Result<HttpResponse, ApiError>{
    let changes = CustomerChanges::parse(&body);

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    update_customer_in_database(conn, path.into_inner(), changes)
        .await
        .map_err(|e| ApiError::from_record(e, "Customer"))?;

    Ok(HttpResponse::Ok().json(message("Customer details updated successfully")))
}
