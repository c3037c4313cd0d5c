// ==========================================
// 酒店客房库存 - 酒店服务数据仓储
// ==========================================
// 说明: 服务由其他子系统维护，本系统只读；insert/update 仅供初始化数据
// ==========================================

use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

use crate::domain::category::HotelService;
use crate::domain::types::EntityKind;
use crate::repository::error::RepositoryResult;
use crate::repository::store::EntityStore;

pub struct HotelServiceRepository {
    conn: Arc<Mutex<Connection>>,
}

impl HotelServiceRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

impl EntityStore for HotelServiceRepository {
    type Entity = HotelService;
    const KIND: EntityKind = EntityKind::HotelService;
    const COLUMNS: &'static str = "id, name, active";

    fn shared_conn(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<HotelService> {
        Ok(HotelService {
            id: row.get(0)?,
            name: row.get(1)?,
            active: row.get(2)?,
        })
    }

    fn insert(&self, service: &HotelService) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO hotel_service (name, active) VALUES (?1, ?2)",
            params![service.name, service.active],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, service: &HotelService) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            "UPDATE hotel_service SET name = ?1 WHERE id = ?2 AND active = 1",
            params![service.name, service.id],
        )?;
        Ok(rows)
    }
}
