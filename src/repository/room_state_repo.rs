// ==========================================
// 酒店客房库存 - 客房状态数据仓储
// ==========================================

use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

use crate::domain::room::RoomState;
use crate::domain::types::EntityKind;
use crate::repository::error::RepositoryResult;
use crate::repository::store::{exists_active_value, EntityStore};

// ==========================================
// RoomStateRepository - 客房状态仓储
// ==========================================
pub struct RoomStateRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RoomStateRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 有效客房状态中是否已存在同名描述
    pub fn exists_active_description(
        &self,
        description: &str,
        exclude_id: Option<i64>,
    ) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        exists_active_value(&conn, EntityKind::RoomState, "description", description, exclude_id)
    }
}

impl EntityStore for RoomStateRepository {
    type Entity = RoomState;
    const KIND: EntityKind = EntityKind::RoomState;
    const COLUMNS: &'static str = "id, description, active";

    fn shared_conn(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<RoomState> {
        Ok(RoomState {
            id: row.get(0)?,
            description: row.get(1)?,
            active: row.get(2)?,
        })
    }

    fn insert(&self, state: &RoomState) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO room_state (description, active) VALUES (?1, ?2)",
            params![state.description, state.active],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, state: &RoomState) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            "UPDATE room_state SET description = ?1 WHERE id = ?2 AND active = 1",
            params![state.description, state.id],
        )?;
        Ok(rows)
    }
}
