//! # Storelens Report
//!
//! Runs the full insight catalogue over the demo dataset and logs every
//! result.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Report Runner                                   │
//! │                                                                         │
//! │  init tracing ──► seed::demo() ──► all() × 3 ──► Insights ──► log      │
//! │                                                                         │
//! │  One snapshot of each collection is taken up front; every insight      │
//! │  reads those snapshots and nothing else.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use storelens_core::Insights;
use storelens_data::seed;
use storelens_data::store::{CustomerStore, OrderStore, ProductStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Loading demo dataset");
    let dataset = seed::demo()?;

    // One consistent snapshot of all three collections before computing.
    let customers = dataset.customers().all();
    let orders = dataset.orders().all();
    let products = dataset.products().all();
    info!(
        customers = customers.len(),
        orders = orders.len(),
        products = products.len(),
        "snapshot taken"
    );

    let insights = Insights::new(&customers, &orders, &products);

    let feb_start: NaiveDate = "2021-02-01".parse()?;
    let feb_end: NaiveDate = "2021-02-28".parse()?;
    let apr_start: NaiveDate = "2021-04-01".parse()?;
    let averaging_day: NaiveDate = "2021-03-13".parse()?;
    let logging_day: NaiveDate = "2021-03-15".parse()?;

    info!("Books priced over 100:");
    for product in insights.products_in_category_over("books", 100.0) {
        info!("  {product}");
    }

    info!("Orders containing baby products:");
    for order in insights.orders_containing_category("baby") {
        info!("  {order}");
    }

    info!("Toys with a 10% discount applied:");
    for product in insights.discounted_products("toys", 0.10) {
        info!("  {product}");
    }

    info!("Products ordered by tier-2 customers between {feb_start} and {apr_start} (exclusive):");
    for product in insights.products_ordered_by_tier_between(2, feb_start, apr_start) {
        info!("  {product}");
    }

    info!("Cheapest book:");
    let cheapest = insights.cheapest_in_category("books")?;
    info!("  {cheapest}");

    info!("Three most recent orders:");
    for order in insights.most_recent_orders(3) {
        info!("  {order}");
    }

    info!("Products on orders placed {logging_day}:");
    for product in insights.products_ordered_on(logging_day) {
        info!("  {product}");
    }

    let revenue = insights.revenue_between(feb_start, feb_end);
    info!("Revenue for February 2021: {revenue:.2}");

    let average = insights.average_order_value_on(averaging_day);
    info!("Average order value on {averaging_day}: {average:.2}");

    let summary = insights.price_summary_for("books");
    info!("Book price statistics: {summary}");

    info!("Product counts per order:");
    let mut counts: Vec<_> = insights.product_counts_by_order().into_iter().collect();
    counts.sort_unstable();
    for (order_id, count) in counts {
        info!("  order {order_id}: {count} product(s)");
    }

    info!("Orders grouped by customer:");
    let mut grouped: Vec<_> = insights.orders_by_customer().into_iter().collect();
    grouped.sort_by_key(|(customer, _)| customer.id);
    for (customer, customer_orders) in grouped {
        info!("  {customer}: {} order(s)", customer_orders.len());
    }

    info!("Order totals:");
    let mut totals: Vec<_> = insights.order_totals().into_iter().collect();
    totals.sort_by_key(|(order, _)| order.id);
    for (order, total) in totals {
        info!("  {order} totals {total:.2}");
    }

    info!("Products grouped by category:");
    let mut by_category: Vec<_> = insights.products_by_category().into_iter().collect();
    by_category.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (category, members) in by_category {
        let names: Vec<&str> = members.iter().map(|p| p.name.as_str()).collect();
        info!("  {category}: {}", names.join(", "));
    }

    info!("Most expensive product per category:");
    let mut priciest: Vec<_> = insights.priciest_by_category().into_iter().collect();
    priciest.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (category, product) in priciest {
        info!("  {category}: {product}");
    }

    Ok(())
}
