use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction::{get_all_customers, get_customer_by_id}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting list of customers",
    skip(pool)
)]
pub async fn get_customers(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let customers = get_all_customers(conn)
        .await
        .map_err(|e| ApiError::from_record(e, "Customer"))?;

    Ok(HttpResponse::Ok().json(customers))
}

#[tracing::instrument(
    "Getting customer by id",
    skip(pool)
)]
pub async fn get_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let customer = get_customer_by_id(conn, path.into_inner())
        .await
        .map_err(|e| ApiError::from_record(e, "Customer"))?
        .ok_or(ApiError::NotFound("Customer"))?;

    Ok(HttpResponse::Ok().json(customer))
}
