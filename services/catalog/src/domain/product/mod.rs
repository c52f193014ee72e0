//! 商品领域模块

#![allow(clippy::module_inception)]

pub mod product;
pub mod repository;

pub use product::{Product, ProductId};
pub use repository::ProductRepository;
