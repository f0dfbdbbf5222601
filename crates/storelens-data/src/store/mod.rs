//! # Store Contract
//!
//! The collaborator contract the analytics core consumes: three stores,
//! one method each.
//!
//! ## The Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Full-Snapshot Reads Only                           │
//! │                                                                         │
//! │  CustomerStore.all() ──► Vec<Customer>   (every customer, every call)  │
//! │  OrderStore.all()    ──► Vec<Order>      (every order, every call)     │
//! │  ProductStore.all()  ──► Vec<Product>    (every product, every call)   │
//! │                                                                         │
//! │  • No query pushdown: filtering, joining, aggregation all happen       │
//! │    downstream in storelens-core                                        │
//! │  • Snapshots are OWNED: mutating a returned Vec never affects the      │
//! │    store or later readers                                              │
//! │  • Reads are infallible and non-blocking                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{CustomerStore, MemoryCustomerStore};
pub use order::{MemoryOrderStore, OrderStore};
pub use product::{MemoryProductStore, ProductStore};
