use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper, TextExpressionMethods};

use crate::{models::{NewProduct, Product, ProductChanges}, schema::products, telemetry::spawn_blocking_with_tracing, utils::DbConnection, validation::ValidationErrors};

use super::RecordError;

#[tracing::instrument(
    "Getting all products from db",
    skip_all
)]
pub async fn get_all_products(
    mut conn: DbConnection
) -> Result<Vec<Product>, RecordError>{
    let res = spawn_blocking_with_tracing(move || {
        products::table
            .select(Product::as_select())
            .load::<Product>(&mut conn)
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Getting product by id from db",
    skip(conn)
)]
pub async fn get_product_by_id(
    mut conn: DbConnection,
    product_id: i32
) -> Result<Option<Product>, RecordError>{
    let res = spawn_blocking_with_tracing(move || {
        products::table
            .find(product_id)
            .select(Product::as_select())
            .first::<Product>(&mut conn)
            .optional()
    })
    .await??;

    Ok(res)
}

/// Case-sensitive substring search on the product name, cheapest first.
#[tracing::instrument(
    "Searching products by name in db",
    skip(conn)
)]
pub async fn search_products_by_name(
    mut conn: DbConnection,
    name: String
) -> Result<Vec<Product>, RecordError>{
    let pattern = format!("%{}%", escape_like_pattern(&name));

    let res = spawn_blocking_with_tracing(move || {
        products::table
            .filter(products::name.like(pattern))
            .order(products::price.asc())
            .select(Product::as_select())
            .load::<Product>(&mut conn)
    })
    .await??;

    Ok(res)
}

// `%` and `_` in the search term match themselves, not any character
fn escape_like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[tracing::instrument(
    "Inserting product into db",
    skip_all
)]
pub async fn insert_product(
    mut conn: DbConnection,
    product: NewProduct
) -> Result<i32, RecordError>{
    let product_id = spawn_blocking_with_tracing(move || {
        diesel::insert_into(products::table)
            .values(product)
            .returning(products::product_id)
            .get_result::<i32>(&mut conn)
    })
    .await??;

    tracing::debug!(product_id, "Product created");
    Ok(product_id)
}

#[tracing::instrument(
    "Updating product in db",
    skip(conn, changes)
)]
pub async fn update_product_in_database(
    mut conn: DbConnection,
    product_id: i32,
    changes: Result<ProductChanges, ValidationErrors>
) -> Result<(), RecordError>{
    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), RecordError, _>(|conn| {
            let existing = products::table
                .find(product_id)
                .select(products::product_id)
                .first::<i32>(conn)
                .optional()?;

            if existing.is_none() {
                return Err(RecordError::NotFound)
            }

            let changes = changes.map_err(RecordError::Invalid)?;
            if changes.is_empty() {
                return Ok(())
            }

            diesel::update(products::table)
                .filter(products::product_id.eq(product_id))
                .set(&changes)
                .execute(conn)?;

            Ok(())
        })
    })
    .await??;

    Ok(())
}

#[tracing::instrument(
    "Deleting product from db",
    skip(conn)
)]
pub async fn delete_product_from_database(
    mut conn: DbConnection,
    product_id: i32
) -> Result<(), RecordError>{
    let affected_rows = spawn_blocking_with_tracing(move || {
        diesel::delete(products::table)
            .filter(products::product_id.eq(product_id))
            .execute(&mut conn)
    })
    .await??;

    if affected_rows == 0 {
        return Err(RecordError::NotFound)
    }

    Ok(())
}
