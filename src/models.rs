use chrono::NaiveDate;
use diesel::prelude::{AsChangeset, Insertable, Queryable, Selectable};
use serde::Deserialize;
use serde::Serialize;

use crate::schema::{customers, order_product, orders, products};

// Field order here is the field order on the wire
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = customers)]
pub struct Customer{
    pub customer_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = customers)]
pub struct NewCustomer{
    pub name: String,
    pub email: String,
    pub phone: String
}

#[derive(AsChangeset, Default, Debug, Clone, PartialEq)]
#[diesel(table_name = customers)]
pub struct CustomerChanges{
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>
}

impl CustomerChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
pub struct Product{
    pub product_id: i32,
    pub name: String,
    pub price: f64
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
pub struct NewProduct{
    pub name: String,
    pub price: f64
}

#[derive(AsChangeset, Default, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
pub struct ProductChanges{
    pub name: Option<String>,
    pub price: Option<f64>
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
pub struct Order{
    pub order_id: i32,
    pub date: NaiveDate,
    pub customer_id: i32
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
pub struct NewOrder{
    pub date: NaiveDate,
    pub customer_id: i32
}

#[derive(AsChangeset, Default, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
pub struct OrderChanges{
    pub date: Option<NaiveDate>,
    pub customer_id: Option<i32>
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.customer_id.is_none()
    }
}

// Link between an order and a product, one row per pair
#[derive(Queryable, Insertable, Debug, Clone, Copy, PartialEq)]
#[diesel(table_name = order_product)]
pub struct OrderProduct{
    pub order_id: i32,
    pub product_id: i32
}
