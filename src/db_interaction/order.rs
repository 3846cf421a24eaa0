use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{NewOrder, Order, OrderChanges}, schema::orders, telemetry::spawn_blocking_with_tracing, utils::DbConnection, validation::ValidationErrors};

use super::RecordError;

#[tracing::instrument(
    "Getting all orders from db",
    skip_all
)]
pub async fn get_all_orders(
    mut conn: DbConnection
) -> Result<Vec<Order>, RecordError>{
    let res = spawn_blocking_with_tracing(move || {
        orders::table
            .select(Order::as_select())
            .load::<Order>(&mut conn)
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Getting order by id from db",
    skip(conn)
)]
pub async fn get_order_by_id(
    mut conn: DbConnection,
    order_id: i32
) -> Result<Option<Order>, RecordError>{
    let res = spawn_blocking_with_tracing(move || {
        orders::table
            .find(order_id)
            .select(Order::as_select())
            .first::<Order>(&mut conn)
            .optional()
    })
    .await??;

    Ok(res)
}

// An unknown customer and a customer without orders both give an empty list
#[tracing::instrument(
    "Getting orders of customer from db",
    skip(conn)
)]
pub async fn get_orders_by_customer(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<Vec<Order>, RecordError>{
    let res = spawn_blocking_with_tracing(move || {
        orders::table
            .filter(orders::customer_id.eq(customer_id))
            .select(Order::as_select())
            .load::<Order>(&mut conn)
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Inserting order into db",
    skip_all
)]
pub async fn insert_order(
    mut conn: DbConnection,
    order: NewOrder
) -> Result<i32, RecordError>{
    let order_id = spawn_blocking_with_tracing(move || {
        diesel::insert_into(orders::table)
            .values(order)
            .returning(orders::order_id)
            .get_result::<i32>(&mut conn)
    })
    .await??;

    tracing::debug!(order_id, "Order created");
    Ok(order_id)
}

#[tracing::instrument(
    "Updating order in db",
    skip(conn, changes)
)]
pub async fn update_order_in_database(
    mut conn: DbConnection,
    order_id: i32,
    changes: Result<OrderChanges, ValidationErrors>
) -> Result<(), RecordError>{
    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), RecordError, _>(|conn| {
            let existing = orders::table
                .find(order_id)
                .select(orders::order_id)
                .first::<i32>(conn)
                .optional()?;

            if existing.is_none() {
                return Err(RecordError::NotFound)
            }

            let changes = changes.map_err(RecordError::Invalid)?;
            if changes.is_empty() {
                return Ok(())
            }

            diesel::update(orders::table)
                .filter(orders::order_id.eq(order_id))
                .set(&changes)
                .execute(conn)?;

            Ok(())
        })
    })
    .await??;

    Ok(())
}

#[tracing::instrument(
    "Deleting order from db",
    skip(conn)
)]
pub async fn delete_order_from_database(
    mut conn: DbConnection,
    order_id: i32
) -> Result<(), RecordError>{
    let affected_rows = spawn_blocking_with_tracing(move || {
        diesel::delete(orders::table)
            .filter(orders::order_id.eq(order_id))
            .execute(&mut conn)
    })
    .await??;

    if affected_rows == 0 {
        return Err(RecordError::NotFound)
    }

    Ok(())
}
