use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction::delete_customer_from_database, routes::{message, ApiError}, utils::{get_pooled_connection, DbPool}};

// Customers that still own orders are not removed (409)
#[tracing::instrument(
    "Deleting customer by id",
    skip(pool)
)]
pub async fn delete_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    delete_customer_from_database(conn, path.into_inner())
        .await
        .map_err(|e| ApiError::from_record(e, "Customer"))?;

    Ok(HttpResponse::Ok().json(message("Customer removed successfully")))
}
