//! PostgreSQL 商品仓储实现

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tienda_errors::{AppError, AppResult};

use crate::domain::product::{Product, ProductId, ProductRepository};

/// 将 sqlx 错误转换为 AppError
fn map_sqlx_error(e: sqlx::Error) -> AppError {
    AppError::database(e.to_string())
}

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        // 不排序，集合顺序即存储的自然顺序
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, quantity FROM products",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, quantity FROM products WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn save(&self, product: &Product) -> AppResult<Product> {
        // 带 id 且行存在: 整行覆盖; 否则插入新行, id 由存储分配
        if let Some(id) = product.id {
            let row = sqlx::query_as::<_, ProductRow>(
                r#"
                UPDATE products
                SET name = $2, description = $3, price = $4, quantity = $5
                WHERE id = $1
                RETURNING id, name, description, price, quantity
                "#,
            )
            .bind(id.0)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.quantity)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            if let Some(row) = row {
                return Ok(row.into_product());
            }
        }

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, description, price, quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, quantity
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_product())
    }

    async fn exists_by_id(&self, id: ProductId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn delete_by_id(&self, id: ProductId) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

/// products 表行
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
    quantity: Option<i32>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: Some(ProductId(self.id)),
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}
