//! # Insights
//!
//! The catalogue of analytical derivations over the retail object graph.
//!
//! ## Pipeline Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Every Insight Is One Pipeline                       │
//! │                                                                         │
//! │  snapshot ──► filter ──► transform / join ──► aggregate ──► order       │
//! │                                                                         │
//! │  • No shared mutable state between operations                           │
//! │  • Each operation reads the snapshots it was handed and nothing else    │
//! │  • Deduplication is by entity id (identity equality)                    │
//! │  • "Sorted" means ascending on the stated key unless noted              │
//! │  • Category comparison is ASCII case-insensitive everywhere             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Joins Without Back-References
//! The Order→Product direction is stored on the entity; the reverse
//! direction is derived from the Order snapshot when needed. Both directions
//! of a navigable relation therefore agree by construction, and each insight
//! ships exactly one canonical traversal.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::stats::PriceSummary;
use crate::types::{Customer, Order, Product};

// =============================================================================
// Insights Engine
// =============================================================================

/// A stateless view over one consistent snapshot of the three collections.
///
/// The engine borrows its snapshots; it never mutates them and holds no
/// other state, so two engines over the same snapshots always agree.
///
/// ## Usage
/// ```rust,ignore
/// let insights = Insights::new(&customers, &orders, &products);
///
/// let pricey_books = insights.products_in_category_over("books", 100.0);
/// let cheapest = insights.cheapest_in_category("books")?;
/// ```
#[derive(Debug)]
pub struct Insights<'a> {
    customers: &'a [Customer],
    orders: &'a [Order],
    products: &'a [Product],
}

impl<'a> Insights<'a> {
    /// Creates an engine over read-only snapshots of the three collections.
    ///
    /// The snapshots must be stable for the duration of each call; the
    /// engine performs no locking of its own.
    pub fn new(customers: &'a [Customer], orders: &'a [Order], products: &'a [Product]) -> Self {
        Insights {
            customers,
            orders,
            products,
        }
    }

    // -------------------------------------------------------------------------
    // Filtered lists
    // -------------------------------------------------------------------------

    /// Products of `category` priced strictly above `min_price`, in source
    /// order.
    pub fn products_in_category_over(&self, category: &str, min_price: f64) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.in_category(category))
            .filter(|p| p.price > min_price)
            .cloned()
            .collect()
    }

    /// Orders containing at least one product of `category`, ascending by
    /// order id.
    ///
    /// This is the canonical order-side traversal of the Order↔Product
    /// relation; the product-side derivation yields the same set because the
    /// relation is symmetric.
    pub fn orders_containing_category(&self, category: &str) -> Vec<Order> {
        let mut matching: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.contains_category(category))
            .cloned()
            .collect();
        matching.sort_by_key(|o| o.id);
        matching
    }

    /// Products of `category`, each returned as a copy repriced by
    /// `discount` (0.10 = 10% off), in source order.
    ///
    /// The snapshot is never mutated: repricing goes through
    /// [`Product::with_price`], so re-reading the stores afterwards shows
    /// the original prices.
    pub fn discounted_products(&self, category: &str, discount: f64) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.in_category(category))
            .map(|p| p.with_price(p.price * (1.0 - discount)))
            .collect()
    }

    /// Products ordered by customers of `tier` strictly after `after` and
    /// strictly before `before`, deduplicated, ascending by product id.
    ///
    /// Both boundary dates are excluded: an order placed exactly on `after`
    /// or exactly on `before` does not contribute.
    pub fn products_ordered_by_tier_between(
        &self,
        tier: i32,
        after: NaiveDate,
        before: NaiveDate,
    ) -> Vec<Product> {
        let orders = self
            .orders
            .iter()
            .filter(|o| o.customer.tier == tier)
            .filter(|o| o.placed_on > after)
            .filter(|o| o.placed_on < before);
        collect_distinct_products(orders)
    }

    // -------------------------------------------------------------------------
    // Pick-one reductions
    // -------------------------------------------------------------------------

    /// The cheapest product of `category`.
    ///
    /// ## Errors
    /// [`CoreError::NoProductsInCategory`] when the snapshot holds no
    /// product of that category.
    ///
    /// ## Tie-break
    /// Among equally cheap products, the lowest id wins. The comparator
    /// orders by `(price, id)`, so the minimum is unique and the result does
    /// not depend on snapshot ordering.
    pub fn cheapest_in_category(&self, category: &str) -> CoreResult<Product> {
        self.products
            .iter()
            .filter(|p| p.in_category(category))
            .min_by(|a, b| a.price.total_cmp(&b.price).then(a.id.cmp(&b.id)))
            .cloned()
            .ok_or_else(|| CoreError::NoProductsInCategory {
                category: category.to_string(),
            })
    }

    // -------------------------------------------------------------------------
    // Date-driven views
    // -------------------------------------------------------------------------

    /// The `count` most recently placed orders, descending by date.
    ///
    /// With fewer than `count` orders in the snapshot, all of them are
    /// returned. The sort is stable, so same-date orders keep source order.
    pub fn most_recent_orders(&self, count: usize) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.to_vec();
        orders.sort_by(|a, b| b.placed_on.cmp(&a.placed_on));
        orders.truncate(count);
        orders
    }

    /// Products on orders placed exactly on `date`, deduplicated, ascending
    /// by product id. Each matching order is logged before its products are
    /// collected - an observation point, not a filter.
    pub fn products_ordered_on(&self, date: NaiveDate) -> Vec<Product> {
        self.collect_products_ordered_on(date, |order| {
            info!(order = %order, "order placed on requested date");
        })
    }

    /// Shared pipeline behind [`Insights::products_ordered_on`], with the
    /// observation point injectable so tests can count callbacks.
    fn collect_products_ordered_on<F>(&self, date: NaiveDate, mut observe: F) -> Vec<Product>
    where
        F: FnMut(&Order),
    {
        let orders = self
            .orders
            .iter()
            .filter(|o| o.placed_on == date)
            .inspect(|o| observe(o));
        collect_distinct_products(orders)
    }

    /// Total value of all orders placed in the inclusive range
    /// `from..=to`. `0.0` when no order falls in the range.
    pub fn revenue_between(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        self.orders
            .iter()
            .filter(|o| (from..=to).contains(&o.placed_on))
            .flat_map(|o| o.products.iter())
            .map(|p| p.price)
            .sum()
    }

    /// Average order value across orders placed exactly on `date`; `0.0`
    /// when no order matches.
    ///
    /// Each matching order contributes its product-price sum, and those
    /// sums are averaged. Averaging the flattened product prices instead
    /// would compute the average price per product sold - a different
    /// statistic whenever order sizes differ.
    pub fn average_order_value_on(&self, date: NaiveDate) -> f64 {
        let totals: Vec<f64> = self
            .orders
            .iter()
            .filter(|o| o.placed_on == date)
            .map(Order::total)
            .collect();

        if totals.is_empty() {
            return 0.0;
        }
        totals.iter().sum::<f64>() / totals.len() as f64
    }

    // -------------------------------------------------------------------------
    // Aggregations
    // -------------------------------------------------------------------------

    /// Price statistics (count, sum, min, max, average) over the products
    /// of `category`. An empty category yields the documented sentinels:
    /// count=0, sum=0.0, min=+∞, max=-∞, average=0.0.
    pub fn price_summary_for(&self, category: &str) -> PriceSummary {
        PriceSummary::from_prices(
            self.products
                .iter()
                .filter(|p| p.in_category(category))
                .map(|p| p.price),
        )
    }

    /// Map from order id to that order's product-set size.
    pub fn product_counts_by_order(&self) -> HashMap<i64, usize> {
        self.orders
            .iter()
            .map(|o| (o.id, o.products.len()))
            .collect()
    }

    /// Orders grouped by the customer who placed them.
    ///
    /// Customers hash and compare by id, so the grouping is immune to field
    /// drift between snapshot and grouping. Customers without orders do not
    /// appear.
    pub fn orders_by_customer(&self) -> HashMap<Customer, Vec<Order>> {
        let mut grouped: HashMap<Customer, Vec<Order>> = HashMap::new();
        for order in self.orders {
            grouped
                .entry(order.customer.clone())
                .or_default()
                .push(order.clone());
        }
        debug!(
            grouped = grouped.len(),
            known = self.customers.len(),
            "grouped orders by customer"
        );
        grouped
    }

    /// Map from order (full entity, identity-keyed) to the sum of its
    /// products' prices.
    pub fn order_totals(&self) -> HashMap<Order, f64> {
        self.orders
            .iter()
            .map(|o| (o.clone(), o.total()))
            .collect()
    }

    /// Products grouped by lowercased category, source order within each
    /// group.
    ///
    /// Keys are normalized to ASCII lowercase so differently-cased
    /// spellings of one category land in a single group, consistent with
    /// the case-insensitive matching used everywhere else.
    pub fn products_by_category(&self) -> HashMap<String, Vec<Product>> {
        let mut grouped: HashMap<String, Vec<Product>> = HashMap::new();
        for product in self.products {
            grouped
                .entry(product.category.to_ascii_lowercase())
                .or_default()
                .push(product.clone());
        }
        grouped
    }

    /// The single most expensive product per lowercased category.
    ///
    /// ## Tie-break
    /// Among equally expensive products, the lowest id wins, so the result
    /// does not depend on snapshot ordering.
    pub fn priciest_by_category(&self) -> HashMap<String, Product> {
        let mut priciest: HashMap<String, Product> = HashMap::new();
        for product in self.products {
            let key = product.category.to_ascii_lowercase();
            let current = priciest.entry(key).or_insert_with(|| product.clone());
            if beats_on_price(product, current) {
                *current = product.clone();
            }
        }
        priciest
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Flattens orders to their products, deduplicating by product id and
/// sorting ascending by id. Shared tail of the flatten-style joins.
fn collect_distinct_products<'o>(orders: impl Iterator<Item = &'o Order>) -> Vec<Product> {
    let mut seen: HashSet<i64> = HashSet::new();
    let mut distinct: Vec<Product> = Vec::new();
    for order in orders {
        for product in &order.products {
            if seen.insert(product.id) {
                distinct.push(product.clone());
            }
        }
    }
    distinct.sort_by_key(|p| p.id);
    distinct
}

/// Whether `candidate` beats `current` as "most expensive": strictly higher
/// price, or equal price with a lower id.
fn beats_on_price(candidate: &Product, current: &Product) -> bool {
    match candidate.price.total_cmp(&current.price) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => candidate.id < current.id,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
