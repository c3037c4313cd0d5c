// ==========================================
// 酒店客房库存 - 楼层数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

use crate::domain::floor::Floor;
use crate::domain::types::EntityKind;
use crate::repository::error::RepositoryResult;
use crate::repository::store::{exists_active_value, EntityStore};

// ==========================================
// FloorRepository - 楼层仓储
// ==========================================
pub struct FloorRepository {
    conn: Arc<Mutex<Connection>>,
}

impl FloorRepository {
    /// 从共享连接创建仓储实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 有效楼层中是否已存在同名描述
    pub fn exists_active_description(
        &self,
        description: &str,
        exclude_id: Option<i64>,
    ) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        exists_active_value(&conn, EntityKind::Floor, "description", description, exclude_id)
    }
}

impl EntityStore for FloorRepository {
    type Entity = Floor;
    const KIND: EntityKind = EntityKind::Floor;
    const COLUMNS: &'static str = "id, description, active";

    fn shared_conn(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Floor> {
        Ok(Floor {
            id: row.get(0)?,
            description: row.get(1)?,
            active: row.get(2)?,
        })
    }

    fn insert(&self, floor: &Floor) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO floor (description, active) VALUES (?1, ?2)",
            params![floor.description, floor.active],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, floor: &Floor) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            "UPDATE floor SET description = ?1 WHERE id = ?2 AND active = 1",
            params![floor.description, floor.id],
        )?;
        Ok(rows)
    }
}
