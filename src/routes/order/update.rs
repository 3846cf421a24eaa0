use actix_web::{web, HttpResponse};
use anyhow::Context;
use serde_json::Value;

use crate::{db_interaction::update_order_in_database, models::OrderChanges, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

use super::order_write_error;

#[tracing::instrument(
    "Updating order",
    skip(pool, body)
)]
pub async fn update_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<Value>
) -> Result<HttpResponse, ApiError>{
    let changes = OrderChanges::parse(&body);

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    update_order_in_database(conn, path.into_inner(), changes)
        .await
        .map_err(order_write_error)?;

    Ok(HttpResponse::Ok().json(message("Order successfully updated!")))
}
