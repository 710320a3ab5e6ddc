use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an order.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum OrderStatus {
    A,
    B,
}

/// Represent a record in the Orders table.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Order {
    pub order_key: u64,
    pub cust_key: u64,
    pub status: OrderStatus,
    pub total_price: f64,
    pub clerk: String,
}

impl Order {
    /// Create new `Order` record.
    pub fn new(
        order_key: u64,
        cust_key: u64,
        status: OrderStatus,
        total_price: f64,
        clerk: String,
    ) -> Order {
        Order {
            order_key,
            cust_key,
            status,
            total_price,
            clerk,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use OrderStatus::*;
        let status = match *self {
            A => "A",
            B => "B",
        };
        write!(f, "{}", status)
    }
}

/// Formats the record as an insert statement, without the trailing newline.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "insert into orders values({}, {}, '{}', {}, '{}');",
            self.order_key, self.cust_key, self.status, self.total_price, self.clerk
        )
    }
}
