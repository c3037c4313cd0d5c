// ==========================================
// 酒店客房库存 - 房价数据仓储
// ==========================================
// 说明: 日期列以 TEXT (YYYY-MM-DD) 存储，依赖 rusqlite 的 chrono 特性读写
// ==========================================

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

use crate::domain::rate::Rate;
use crate::domain::types::EntityKind;
use crate::repository::error::RepositoryResult;
use crate::repository::store::{exists_active_value, EntityStore};

// ==========================================
// RateRepository - 房价仓储
// ==========================================
pub struct RateRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RateRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 有效房价中是否已存在同名描述
    pub fn exists_active_description(
        &self,
        description: &str,
        exclude_id: Option<i64>,
    ) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        exists_active_value(&conn, EntityKind::Rate, "description", description, exclude_id)
    }

    /// 查询区间覆盖指定日期的有效房价（两端包含，按存储顺序）
    pub fn find_active_covering(&self, date: NaiveDate) -> RepositoryResult<Vec<Rate>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM rate WHERE active = 1 AND start_date <= ?1 AND end_date >= ?1 ORDER BY id ASC",
            Self::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rates = stmt
            .query_map(params![date], |row| Self::map_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rates)
    }
}

impl EntityStore for RateRepository {
    type Entity = Rate;
    const KIND: EntityKind = EntityKind::Rate;
    const COLUMNS: &'static str =
        "id, description, price_per_night, discount, start_date, end_date, category_id, active";

    fn shared_conn(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Rate> {
        Ok(Rate {
            id: row.get(0)?,
            description: row.get(1)?,
            price_per_night: row.get(2)?,
            discount: row.get(3)?,
            start_date: row.get(4)?,
            end_date: row.get(5)?,
            category_id: row.get(6)?,
            active: row.get(7)?,
        })
    }

    fn insert(&self, rate: &Rate) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO rate (
                description, price_per_night, discount,
                start_date, end_date, category_id, active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                rate.description,
                rate.price_per_night,
                rate.discount,
                rate.start_date,
                rate.end_date,
                rate.category_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, rate: &Rate) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            r#"
            UPDATE rate
            SET description = ?1, price_per_night = ?2, discount = ?3,
                start_date = ?4, end_date = ?5, category_id = ?6
            WHERE id = ?7 AND active = 1
            "#,
            params![
                rate.description,
                rate.price_per_night,
                rate.discount,
                rate.start_date,
                rate.end_date,
                rate.category_id,
                rate.id,
            ],
        )?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{Category, HotelService};
    use crate::repository::category_repo::CategoryRepository;
    use crate::repository::service_repo::HotelServiceRepository;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_dates_roundtrip_and_covering_query() {
        let conn = Arc::new(Mutex::new(crate::db::open_in_memory().unwrap()));
        let service_id = HotelServiceRepository::new(conn.clone())
            .insert(&HotelService {
                id: 0,
                name: "住宿".to_string(),
                active: true,
            })
            .unwrap();
        let category_id = CategoryRepository::new(conn.clone())
            .insert(&Category::new("标准间", 2, service_id))
            .unwrap();

        let repo = RateRepository::new(conn);
        let id = repo
            .insert(&Rate {
                id: 0,
                description: "一月价".to_string(),
                price_per_night: 100.0,
                discount: 0.0,
                start_date: d(2023, 1, 1),
                end_date: d(2023, 1, 31),
                category_id,
                active: true,
            })
            .unwrap();

        let stored = repo.find_active_by_id(id).unwrap().unwrap();
        assert_eq!(stored.start_date, d(2023, 1, 1));
        assert_eq!(stored.end_date, d(2023, 1, 31));

        assert_eq!(repo.find_active_covering(d(2023, 1, 31)).unwrap().len(), 1);
        assert!(repo.find_active_covering(d(2023, 2, 1)).unwrap().is_empty());

        // 停用后修改不影响任何行, 也不会恢复 active
        repo.deactivate(id).unwrap();
        let mut edited = stored.clone();
        edited.price_per_night = 120.0;
        assert_eq!(repo.update(&edited).unwrap(), 0);
        let after = repo.find_by_id(id).unwrap().unwrap();
        assert!(!after.active);
        assert_eq!(after.price_per_night, 100.0);
    }
}
