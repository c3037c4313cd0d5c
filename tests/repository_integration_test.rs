// ==========================================
// Repository 层集成测试
// ==========================================
// 测试目标: 验证文件数据库上的共享连接读写、事务内检查 + 软删除、
//           以及重新打开后数据与 schema 版本保持
// ==========================================


use std::sync::{Arc, Mutex};

use hotel_inventory::db::{ensure_schema, open_sqlite_connection, read_schema_version, CURRENT_SCHEMA_VERSION};
use hotel_inventory::domain::category::Category;
use hotel_inventory::domain::floor::Floor;
use hotel_inventory::domain::types::EntityKind;
use hotel_inventory::engine::InventoryRepositories;
use hotel_inventory::logging;
use hotel_inventory::repository::{
    EntityStore, ExistenceProbe, ForeignKey, ReferencePredicate, RepositoryError,
};

fn open_repos(db_path: &str) -> InventoryRepositories {
    let conn = open_sqlite_connection(db_path).expect("Failed to open db");
    InventoryRepositories::new(Arc::new(Mutex::new(conn)))
}

#[test]
fn test_guarded_deactivate_rolls_back_on_failed_check() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repos = open_repos(&db_path);

    let floor_id = repos.floor_repo.insert(&Floor::new("一楼")).unwrap();

    let result: Result<bool, RepositoryError> = repos.floor_repo.deactivate_guarded(floor_id, |_| {
        Err(RepositoryError::InternalError("检查失败".to_string()))
    });
    assert!(result.is_err());
    assert!(repos.floor_repo.find_active_by_id(floor_id).unwrap().is_some());

    let changed: Result<bool, RepositoryError> =
        repos.floor_repo.deactivate_guarded(floor_id, |_| Ok(()));
    assert!(changed.unwrap());
    assert!(repos.floor_repo.find_active_by_id(floor_id).unwrap().is_none());

    // 已停用记录仍可按 id 读取
    let stored = repos.floor_repo.find_by_id(floor_id).unwrap().unwrap();
    assert!(!stored.active);

    // 再次停用不改变任何行
    assert!(!repos.floor_repo.deactivate(floor_id).unwrap());
}

#[test]
fn test_probe_sees_writes_from_other_connection() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repos = open_repos(&db_path);
    let other = open_sqlite_connection(&db_path).unwrap();

    let service_id = test_helpers::insert_service(&other, "住宿", true).unwrap();
    let category_id = repos
        .category_repo
        .insert(&Category::new("标准间", 2, service_id))
        .unwrap();

    let predicate = ReferencePredicate::new(EntityKind::Rate, ForeignKey::Category, category_id);
    let probe = repos.probe();
    assert!(!probe.exists(&predicate).unwrap());

    other
        .execute(
            "INSERT INTO rate (description, price_per_night, discount, start_date, end_date, category_id)
             VALUES ('标准价', 100.0, 0, '2023-01-01', '2023-12-31', ?1)",
            [category_id],
        )
        .unwrap();
    assert!(probe.exists(&predicate).unwrap());

    // 已停用的依赖记录不计入
    other
        .execute("UPDATE rate SET active = 0 WHERE category_id = ?1", [category_id])
        .unwrap();
    assert!(!probe.exists(&predicate).unwrap());
    assert!(!other.exists(&predicate).unwrap());
}

#[test]
fn test_data_survives_reopen() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");

    let floor_id = {
        let repos = open_repos(&db_path);
        repos.floor_repo.insert(&Floor::new("二楼")).unwrap()
    };

    let conn = open_sqlite_connection(&db_path).unwrap();
    // 重复建表不破坏已有数据
    ensure_schema(&conn).unwrap();
    assert_eq!(read_schema_version(&conn).unwrap(), Some(CURRENT_SCHEMA_VERSION));
    drop(conn);

    let repos = open_repos(&db_path);
    let floors = repos.floor_repo.find_all_active().unwrap();
    assert_eq!(floors.len(), 1);
    assert_eq!(floors[0].id, floor_id);
    assert_eq!(floors[0].description, "二楼");
}
