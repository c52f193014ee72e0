//! 领域层

pub mod product;
