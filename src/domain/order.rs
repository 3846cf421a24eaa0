use serde_json::Value;

use crate::{models::{NewOrder, OrderChanges}, validation::{FieldReader, Presence, ValidationErrors}};

const ORDER_FIELDS: &[&str] = &["order_id", "date", "customer_id"];

impl NewOrder {
    /// The customer is not looked up here; a dangling `customer_id` is
    /// rejected by the foreign key when the order is written.
    pub fn parse(body: &Value) -> Result<NewOrder, ValidationErrors> {
        let mut reader = FieldReader::new(body, ORDER_FIELDS);
        reader.integer("order_id", Presence::Optional);
        let date = reader.date("date", Presence::Required);
        let customer_id = reader.integer("customer_id", Presence::Required);

        match (date, customer_id) {
            (Some(date), Some(customer_id)) if reader.is_valid() => Ok(NewOrder{ date, customer_id }),
            _ => Err(reader.into_errors())
        }
    }
}

impl OrderChanges {
    pub fn parse(body: &Value) -> Result<OrderChanges, ValidationErrors> {
        let mut reader = FieldReader::new(body, ORDER_FIELDS);
        reader.integer("order_id", Presence::Optional);
        let changes = OrderChanges{
            date: reader.date("date", Presence::Optional),
            customer_id: reader.integer("customer_id", Presence::Optional)
        };

        if reader.is_valid() {
            Ok(changes)
        } else {
            Err(reader.into_errors())
        }
    }
}
