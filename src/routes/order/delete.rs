use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction::delete_order_from_database, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

// Links to products go with the order
#[tracing::instrument(
    "Deleting order by id",
    skip(pool)
)]
pub async fn delete_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    delete_order_from_database(conn, path.into_inner())
        .await
        .map_err(|e| ApiError::from_record(e, "Order"))?;

    Ok(HttpResponse::Ok().json(message("Order removed successfully")))
}
