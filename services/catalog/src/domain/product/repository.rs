//! 商品仓储接口

use async_trait::async_trait;
use tienda_errors::AppResult;

use super::product::{Product, ProductId};

/// 商品仓储
///
/// 对单表的五个通用操作，无自定义查询
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 查询全部商品（按存储的自然顺序）
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// 根据 ID 查找商品
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// 保存商品（upsert）
    ///
    /// 载荷无 id 或 id 不在存储中时插入新行并分配新 id；
    /// id 已存在时整行覆盖。返回存储后的商品
    async fn save(&self, product: &Product) -> AppResult<Product>;

    /// 判断指定 ID 是否存在
    async fn exists_by_id(&self, id: ProductId) -> AppResult<bool>;

    /// 根据 ID 删除商品
    async fn delete_by_id(&self, id: ProductId) -> AppResult<()>;
}
