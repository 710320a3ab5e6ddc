use crate::datagen::orders::records::OrderStatus;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Letters a clerk name is drawn from.
const CLERK_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a clerk name.
pub const CLERK_LEN: usize = 10;

/// Upper bound (exclusive) of an order's total price.
pub const MAX_TOTAL_PRICE: f64 = 100.0;

/// Compute the order key of the `i`th generated order.
pub fn order_key(i: u64) -> u64 {
    i * 2
}

/// Compute the customer key of the `i`th generated order.
pub fn cust_key(i: u64) -> u64 {
    i * 3
}

/// Pick `A` or `B` with equal probability.
pub fn get_order_status(rng: &mut StdRng) -> OrderStatus {
    match rng.gen_range(0..=1) {
        0 => OrderStatus::A,
        _ => OrderStatus::B,
    }
}

/// Uniform price in [0, 100).
pub fn get_total_price(rng: &mut StdRng) -> f64 {
    rng.gen_range(0.0..MAX_TOTAL_PRICE)
}

/// Sample `CLERK_LEN` upper case letters w.o. replacement, in random order.
pub fn get_clerk(rng: &mut StdRng) -> String {
    CLERK_CHARSET
        .choose_multiple(rng, CLERK_LEN)
        .map(|&c| c as char)
        .collect()
}
