// Dev utility: back up the existing DB, recreate it and seed a small hotel.
//
// Usage:
//   cargo run --bin reset_and_seed_demo_db -- [db_path]
//
// Hotel services and reservations are read-only through the API, so they are
// inserted directly here.

use chrono::{Duration, Local};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fs;
use std::path::Path;

use hotel_inventory::app::get_default_db_path;
use hotel_inventory::db::{ensure_schema, open_sqlite_connection};

const FLOORS: &[&str] = &["一楼", "二楼", "三楼"];
const ROOM_STATES: &[&str] = &["空闲", "已入住", "清洁中", "维修中"];
const ROOMS_PER_FLOOR: i64 = 6;

fn main() -> Result<(), Box<dyn Error>> {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(get_default_db_path);

    backup_and_reset_db(&db_path)?;

    let conn = open_sqlite_connection(&db_path)?;
    ensure_schema(&conn)?;
    seed_demo(&conn)?;

    eprintln!("Seeded demo hotel into {}", db_path);
    Ok(())
}

fn backup_and_reset_db(db_path: &str) -> Result<(), Box<dyn Error>> {
    let path = Path::new(db_path);
    if !path.exists() {
        return Ok(());
    }

    let ts = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let backup_path = format!("{}.bak.{}", db_path, ts);
    fs::copy(path, &backup_path)?;
    fs::remove_file(path)?;

    eprintln!("Backed up {} -> {}", db_path, backup_path);
    Ok(())
}

fn seed_demo(conn: &Connection) -> Result<(), Box<dyn Error>> {
    let today = Local::now().date_naive();
    let tx = conn.unchecked_transaction()?;

    tx.execute("INSERT INTO hotel_service (name) VALUES (?1)", params!["住宿"])?;
    let lodging_id = tx.last_insert_rowid();
    tx.execute("INSERT INTO hotel_service (name) VALUES (?1)", params!["长住公寓"])?;
    let apartment_id = tx.last_insert_rowid();

    let mut floor_ids = Vec::new();
    for desc in FLOORS {
        tx.execute("INSERT INTO floor (description) VALUES (?1)", params![desc])?;
        floor_ids.push(tx.last_insert_rowid());
    }

    for desc in ROOM_STATES {
        tx.execute("INSERT INTO room_state (description) VALUES (?1)", params![desc])?;
    }
    let vacant_state_id: i64 = 1;

    let categories = [
        ("标准间", 2, lodging_id, 280.0),
        ("豪华间", 2, lodging_id, 420.0),
        ("套房", 4, lodging_id, 880.0),
        ("公寓", 3, apartment_id, 350.0),
    ];

    let mut category_ids = Vec::new();
    for (desc, capacity, service_id, price) in categories {
        tx.execute(
            "INSERT INTO category (description, capacity, service_id) VALUES (?1, ?2, ?3)",
            params![desc, capacity, service_id],
        )?;
        let category_id = tx.last_insert_rowid();
        category_ids.push(category_id);

        // 全年基础价 + 未来两周的促销价（区间重叠，取开始日期最晚者）
        tx.execute(
            r#"
            INSERT INTO rate (description, price_per_night, discount, start_date, end_date, category_id)
            VALUES (?1, ?2, 0, ?3, ?4, ?5)
            "#,
            params![
                format!("{}基础价", desc),
                price,
                today - Duration::days(180),
                today + Duration::days(180),
                category_id
            ],
        )?;
        tx.execute(
            r#"
            INSERT INTO rate (description, price_per_night, discount, start_date, end_date, category_id)
            VALUES (?1, ?2, 10, ?3, ?4, ?5)
            "#,
            params![
                format!("{}促销价", desc),
                price * 0.9,
                today,
                today + Duration::days(14),
                category_id
            ],
        )?;
    }

    let mut first_room_id = None;
    for (floor_idx, floor_id) in floor_ids.iter().enumerate() {
        for n in 1..=ROOMS_PER_FLOOR {
            let number = format!("{}{:02}", floor_idx + 1, n);
            let category_id = category_ids[(n as usize - 1) % category_ids.len()];
            tx.execute(
                r#"
                INSERT INTO room (number, detail, price, floor_id, category_id, room_state_id)
                VALUES (?1, NULL, 0, ?2, ?3, ?4)
                "#,
                params![number, floor_id, category_id, vacant_state_id],
            )?;
            first_room_id.get_or_insert(tx.last_insert_rowid());
        }
    }

    if let Some(room_id) = first_room_id {
        tx.execute(
            "INSERT INTO reservation (room_id, guest_name, check_in, check_out) VALUES (?1, ?2, ?3, ?4)",
            params![room_id, "张三", today, today + Duration::days(2)],
        )?;
    }

    tx.commit()?;
    Ok(())
}
