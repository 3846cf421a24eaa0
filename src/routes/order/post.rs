use actix_web::{http::header, web, HttpResponse};
use anyhow::Context;
use serde_json::Value;

use crate::{db_interaction::insert_order, models::NewOrder, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

use super::order_write_error;

#[tracing::instrument(
    "Posting order",
    skip(pool, body)
)]
pub async fn post_order(
    pool: web::Data<DbPool>,
    body: web::Json<Value>
) -> Result<HttpResponse, ApiError>{
    let order = NewOrder::parse(&body).map_err(ApiError::Validation)?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let order_id = insert_order(conn, order)
        .await
        .map_err(order_write_error)?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/orders/by-id/{}", order_id)))
        .json(message("New order has been added successfully")))
}
