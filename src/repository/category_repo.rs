// ==========================================
// 酒店客房库存 - 房型数据仓储
// ==========================================

use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

use crate::domain::category::Category;
use crate::domain::types::EntityKind;
use crate::repository::error::RepositoryResult;
use crate::repository::store::{exists_active_value, EntityStore};

// ==========================================
// CategoryRepository - 房型仓储
// ==========================================
pub struct CategoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CategoryRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 有效房型中是否已存在同名描述
    pub fn exists_active_description(
        &self,
        description: &str,
        exclude_id: Option<i64>,
    ) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        exists_active_value(&conn, EntityKind::Category, "description", description, exclude_id)
    }
}

impl EntityStore for CategoryRepository {
    type Entity = Category;
    const KIND: EntityKind = EntityKind::Category;
    const COLUMNS: &'static str = "id, description, capacity, service_id, active";

    fn shared_conn(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            description: row.get(1)?,
            capacity: row.get(2)?,
            service_id: row.get(3)?,
            active: row.get(4)?,
        })
    }

    fn insert(&self, category: &Category) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO category (description, capacity, service_id, active)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                category.description,
                category.capacity,
                category.service_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, category: &Category) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            r#"
            UPDATE category
            SET description = ?1, capacity = ?2, service_id = ?3
            WHERE id = ?4 AND active = 1
            "#,
            params![
                category.description,
                category.capacity,
                category.service_id,
                category.id,
            ],
        )?;
        Ok(rows)
    }
}
