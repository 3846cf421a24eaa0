use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction::{get_all_products, get_product_by_id, search_products_by_name}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting list of products",
    skip(pool)
)]
pub async fn get_products(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let products = get_all_products(conn)
        .await
        .map_err(|e| ApiError::from_record(e, "Product"))?;

    Ok(HttpResponse::Ok().json(products))
}

#[tracing::instrument(
    "Getting product by id",
    skip(pool)
)]
pub async fn get_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let product = get_product_by_id(conn, path.into_inner())
        .await
        .map_err(|e| ApiError::from_record(e, "Product"))?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(HttpResponse::Ok().json(product))
}

// No match is an empty list, not a 404
#[tracing::instrument(
    "Searching products by name",
    skip(pool)
)]
pub async fn get_products_by_name(
    pool: web::Data<DbPool>,
    path: web::Path<String>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let products = search_products_by_name(conn, path.into_inner())
        .await
        .map_err(|e| ApiError::from_record(e, "Product"))?;

    Ok(HttpResponse::Ok().json(products))
}
