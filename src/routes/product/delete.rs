use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction::delete_product_from_database, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Deleting product by id",
    skip(pool)
)]
pub async fn delete_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    delete_product_from_database(conn, path.into_inner())
        .await
        .map_err(|e| ApiError::from_record(e, "Product"))?;

    Ok(HttpResponse::Ok().json(message("Product removed successfully")))
}
