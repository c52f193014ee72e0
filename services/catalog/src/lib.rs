//! 商品目录服务
//!
//! /api/products 下的单表 CRUD HTTP API

pub mod api;
pub mod domain;
pub mod infrastructure;
