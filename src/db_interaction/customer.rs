use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{Customer, CustomerChanges, NewCustomer}, schema::customers, telemetry::spawn_blocking_with_tracing, utils::DbConnection, validation::ValidationErrors};

use super::RecordError;

#[tracing::instrument(
    "Getting all customers from db",
    skip_all
)]
pub async fn get_all_customers(
    mut conn: DbConnection
) -> Result<Vec<Customer>, RecordError>{
    let res = spawn_blocking_with_tracing(move || {
        customers::table
            .select(Customer::as_select())
            .load::<Customer>(&mut conn)
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Getting customer by id from db",
    skip(conn)
)]
pub async fn get_customer_by_id(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<Option<Customer>, RecordError>{
    let res = spawn_blocking_with_tracing(move || {
        customers::table
            .find(customer_id)
            .select(Customer::as_select())
            .first::<Customer>(&mut conn)
            .optional()
    })
    .await??;

    Ok(res)
}

// Returns the id assigned by the database
#[tracing::instrument(
    "Inserting customer into db",
    skip_all
)]
pub async fn insert_customer(
    mut conn: DbConnection,
    customer: NewCustomer
) -> Result<i32, RecordError>{
    let customer_id = spawn_blocking_with_tracing(move || {
        diesel::insert_into(customers::table)
            .values(customer)
            .returning(customers::customer_id)
            .get_result::<i32>(&mut conn)
    })
    .await??;

    tracing::debug!(customer_id, "Customer created");
    Ok(customer_id)
}

/// Applies `changes` to an existing customer.
///
/// The existence check runs before `changes` is inspected, so an unknown id
/// reports `NotFound` even when the payload was invalid.
#[tracing::instrument(
    "Updating customer in db",
    skip(conn, changes)
)]
pub async fn update_customer_in_database(
    mut conn: DbConnection,
    customer_id: i32,
    changes: Result<CustomerChanges, ValidationErrors>
) -> Result<(), RecordError>{
    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), RecordError, _>(|conn| {
            let existing = customers::table
                .find(customer_id)
                .select(customers::customer_id)
                .first::<i32>(conn)
                .optional()?;

            if existing.is_none() {
                return Err(RecordError::NotFound)
            }

            let changes = changes.map_err(RecordError::Invalid)?;
            if changes.is_empty() {
                return Ok(())
            }

            diesel::update(customers::table)
                .filter(customers::customer_id.eq(customer_id))
                .set(&changes)
                .execute(conn)?;

            Ok(())
        })
    })
    .await??;

    Ok(())
}

#[tracing::instrument(
    "Deleting customer from db",
    skip(conn)
)]
pub async fn delete_customer_from_database(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<(), RecordError>{
    let affected_rows = spawn_blocking_with_tracing(move || {
        diesel::delete(customers::table)
            .filter(customers::customer_id.eq(customer_id))
            .execute(&mut conn)
    })
    .await??;

    if affected_rows == 0 {
        return Err(RecordError::NotFound)
    }

    Ok(())
}
