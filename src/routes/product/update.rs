use actix_web::{web, HttpResponse};
use anyhow::Context;
use serde_json::Value;

use crate::{db_interaction::update_product_in_database, models::ProductChanges, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Updating product",
    skip(pool, body)
)]
pub async fn update_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<Value>
) -> Result<HttpResponse, ApiError>{
    let changes = ProductChanges::parse(&body);

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    update_product_in_database(conn, path.into_inner(), changes)
        .await
        .map_err(|e| ApiError::from_record(e, "Product"))?;

    Ok(HttpResponse::Ok().json(message("Product successfully updated!")))
}
