use self::records::Order;
use crate::settings::Settings;
use crate::Result;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

pub mod helper;

pub mod records;

/// Orders table and its secondary index.
pub const SCHEMA: &str = "create table orders (
  orderkey int,
  custkey int unique,
  orderstatus char(1),
  totalprice float,
  clerk char(15),
  primary key(orderkey)
);
create index custkeyidx on orders(custkey);

";

/// Write the table and index definitions.
pub fn schema<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(SCHEMA.as_bytes())?;
    Ok(())
}

/// Generate `Order` records in key order.
pub fn generate(records: u64, rng: &mut StdRng) -> Vec<Order> {
    (0..records)
        .map(|i| {
            let status = helper::get_order_status(rng);
            let total_price = helper::get_total_price(rng);
            let clerk = helper::get_clerk(rng);

            Order::new(
                helper::order_key(i),
                helper::cust_key(i),
                status,
                total_price,
                clerk,
            )
        })
        .collect()
}

/// Randomly permute records so insertion order is uncorrelated with key order.
pub fn shuffle(orders: &mut [Order], rng: &mut StdRng) {
    orders.shuffle(rng);
}

/// Write one insert statement per record.
pub fn inserts<W: Write>(orders: &[Order], out: &mut W) -> Result<()> {
    for order in orders {
        writeln!(out, "{}", order)?;
    }
    Ok(())
}

/// Run the generator: schema, generation, shuffle, inserts.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    match settings.seed {
        Some(seed) => debug!("using seed {}", seed),
        None => debug!("seeding from entropy"),
    }
    let mut rng = settings.rng();

    schema(out)?;

    let start = Instant::now();
    let mut orders = generate(settings.records, &mut rng);
    info!("generated {} orders in {:?}", orders.len(), start.elapsed());

    let start = Instant::now();
    shuffle(&mut orders, &mut rng);
    info!("shuffled orders in {:?}", start.elapsed());

    let start = Instant::now();
    inserts(&orders, out)?;
    out.flush()?;
    info!("wrote {} inserts in {:?}", orders.len(), start.elapsed());

    Ok(())
}
