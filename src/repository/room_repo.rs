// ==========================================
// 酒店客房库存 - 客房数据仓储
// ==========================================

use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

use crate::domain::room::Room;
use crate::domain::types::EntityKind;
use crate::repository::error::RepositoryResult;
use crate::repository::store::{exists_active_value, EntityStore};

// ==========================================
// RoomRepository - 客房仓储
// ==========================================
pub struct RoomRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RoomRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 有效客房中是否已存在同一房号
    ///
    /// 已停用客房不参与唯一性校验
    pub fn exists_active_number(&self, number: &str, exclude_id: Option<i64>) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        exists_active_value(&conn, EntityKind::Room, "number", number, exclude_id)
    }

    /// 查询某房型下的有效客房
    pub fn find_active_by_category(&self, category_id: i64) -> RepositoryResult<Vec<Room>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM room WHERE category_id = ?1 AND active = 1 ORDER BY id ASC",
            Self::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rooms = stmt
            .query_map(params![category_id], |row| Self::map_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }
}

impl EntityStore for RoomRepository {
    type Entity = Room;
    const KIND: EntityKind = EntityKind::Room;
    const COLUMNS: &'static str =
        "id, number, detail, price, floor_id, category_id, room_state_id, active";

    fn shared_conn(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Room> {
        Ok(Room {
            id: row.get(0)?,
            number: row.get(1)?,
            detail: row.get(2)?,
            price: row.get(3)?,
            floor_id: row.get(4)?,
            category_id: row.get(5)?,
            room_state_id: row.get(6)?,
            active: row.get(7)?,
        })
    }

    fn insert(&self, room: &Room) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO room (
                number, detail, price,
                floor_id, category_id, room_state_id,
                active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                room.number,
                room.detail,
                room.price,
                room.floor_id,
                room.category_id,
                room.room_state_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, room: &Room) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            r#"
            UPDATE room
            SET number = ?1, detail = ?2, price = ?3,
                floor_id = ?4, category_id = ?5, room_state_id = ?6
            WHERE id = ?7 AND active = 1
            "#,
            params![
                room.number,
                room.detail,
                room.price,
                room.floor_id,
                room.category_id,
                room.room_state_id,
                room.id,
            ],
        )?;
        Ok(rows)
    }
}
