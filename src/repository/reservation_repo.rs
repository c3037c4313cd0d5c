// ==========================================
// 酒店客房库存 - 预订数据仓储 (只读信号)
// ==========================================
// 说明: 预订由预订子系统维护；本系统只在停用客房时查询是否存在有效预订
// ==========================================

use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

use crate::domain::reservation::Reservation;
use crate::domain::types::EntityKind;
use crate::repository::error::RepositoryResult;
use crate::repository::store::EntityStore;

pub struct ReservationRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ReservationRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

impl EntityStore for ReservationRepository {
    type Entity = Reservation;
    const KIND: EntityKind = EntityKind::Reservation;
    const COLUMNS: &'static str = "id, room_id, guest_name, check_in, check_out, active";

    fn shared_conn(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Reservation> {
        Ok(Reservation {
            id: row.get(0)?,
            room_id: row.get(1)?,
            guest_name: row.get(2)?,
            check_in: row.get(3)?,
            check_out: row.get(4)?,
            active: row.get(5)?,
        })
    }

    fn insert(&self, reservation: &Reservation) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO reservation (room_id, guest_name, check_in, check_out, active)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                reservation.room_id,
                reservation.guest_name,
                reservation.check_in,
                reservation.check_out,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, reservation: &Reservation) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            r#"
            UPDATE reservation
            SET room_id = ?1, guest_name = ?2, check_in = ?3, check_out = ?4
            WHERE id = ?5 AND active = 1
            "#,
            params![
                reservation.room_id,
                reservation.guest_name,
                reservation.check_in,
                reservation.check_out,
                reservation.id,
            ],
        )?;
        Ok(rows)
    }
}
