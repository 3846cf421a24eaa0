use serde_json::Value;

use crate::{models::{CustomerChanges, NewCustomer}, validation::{FieldReader, Presence, ValidationErrors}};

const CUSTOMER_FIELDS: &[&str] = &["customer_id", "name", "email", "phone"];

impl NewCustomer {
    /// `customer_id` may be sent but is only type checked; storage assigns it.
    pub fn parse(body: &Value) -> Result<NewCustomer, ValidationErrors> {
        let mut reader = FieldReader::new(body, CUSTOMER_FIELDS);
        reader.integer("customer_id", Presence::Optional);
        let name = reader.string("name", Presence::Required);
        let email = reader.string("email", Presence::Required);
        let phone = reader.string("phone", Presence::Required);

        match (name, email, phone) {
            (Some(name), Some(email), Some(phone)) if reader.is_valid() => {
                Ok(NewCustomer{ name, email, phone })
            },
            _ => Err(reader.into_errors())
        }
    }
}

impl CustomerChanges {
    pub fn parse(body: &Value) -> Result<CustomerChanges, ValidationErrors> {
        let mut reader = FieldReader::new(body, CUSTOMER_FIELDS);
        reader.integer("customer_id", Presence::Optional);
        let changes = CustomerChanges{
            name: reader.string("name", Presence::Optional),
            email: reader.string("email", Presence::Optional),
            phone: reader.string("phone", Presence::Optional)
        };

        if reader.is_valid() {
            Ok(changes)
        } else {
            Err(reader.into_errors())
        }
    }
}
