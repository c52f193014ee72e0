//! 持久化层

mod product_repository;

pub use product_repository::PostgresProductRepository;
