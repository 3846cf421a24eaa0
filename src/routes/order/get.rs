use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction::{get_all_orders, get_order_by_id, get_orders_by_customer}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting list of orders",
    skip(pool)
)]
pub async fn get_orders(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let orders = get_all_orders(conn)
        .await
        .map_err(|e| ApiError::from_record(e, "Order"))?;

    Ok(HttpResponse::Ok().json(orders))
}

#[tracing::instrument(
    "Getting order by id",
    skip(pool)
)]
pub async fn get_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let order = get_order_by_id(conn, path.into_inner())
        .await
        .map_err(|e| ApiError::from_record(e, "Order"))?
        .ok_or(ApiError::NotFound("Order"))?;

    Ok(HttpResponse::Ok().json(order))
}

#[tracing::instrument(
    "Getting orders of customer",
    skip(pool)
)]
pub async fn get_customer_orders(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let orders = get_orders_by_customer(conn, path.into_inner())
        .await
        .map_err(|e| ApiError::from_record(e, "Order"))?;

    Ok(HttpResponse::Ok().json(orders))
}
