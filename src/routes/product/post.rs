use actix_web::{http::header, web, HttpResponse};
use anyhow::Context;
use serde_json::Value;

use crate::{db_interaction::insert_product, models::NewProduct, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Adding product",
    skip(pool, body)
)]
pub async fn post_product(
    pool: web::Data<DbPool>,
    body: web::Json<Value>
) -> Result<HttpResponse, ApiError>{
    let product = NewProduct::parse(&body).map_err(ApiError::Validation)?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let product_id = insert_product(conn, product)
        .await
        .map_err(|e| ApiError::from_record(e, "Product"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/products/{}", product_id)))
        .json(message("Product added successfully")))
}
