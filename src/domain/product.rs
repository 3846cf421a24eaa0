use serde_json::Value;

use crate::{models::{NewProduct, ProductChanges}, validation::{FieldReader, Presence, ValidationErrors}};

const PRODUCT_FIELDS: &[&str] = &["product_id", "name", "price"];

impl NewProduct {
    pub fn parse(body: &Value) -> Result<NewProduct, ValidationErrors> {
        let mut reader = FieldReader::new(body, PRODUCT_FIELDS);
        reader.integer("product_id", Presence::Optional);
        let name = reader.string("name", Presence::Required);
        let price = reader.float("price", Presence::Required);

        match (name, price) {
            (Some(name), Some(price)) if reader.is_valid() => Ok(NewProduct{ name, price }),
            _ => Err(reader.into_errors())
        }
    }
}

impl ProductChanges {
    pub fn parse(body: &Value) -> Result<ProductChanges, ValidationErrors> {
        let mut reader = FieldReader::new(body, PRODUCT_FIELDS);
        reader.integer("product_id", Presence::Optional);
        let changes = ProductChanges{
            name: reader.string("name", Presence::Optional),
            price: reader.float("price", Presence::Optional)
        };

        if reader.is_valid() {
            Ok(changes)
        } else {
            Err(reader.into_errors())
        }
    }
}
