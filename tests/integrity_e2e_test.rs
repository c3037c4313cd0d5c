// ==========================================
// 引用完整性端到端测试
// ==========================================
// 测试范围:
// 1. 依赖记录存在时停用被阻断, 清理依赖后可停用
// 2. 有效预订阻断客房停用, 取消预订后放行
// 3. 重复停用 / 不存在 id 返回 NotFound
// 4. 两步（非事务）停用模式下行为一致
// 5. 引用记录不存在或已停用时新建失败
// ==========================================

mod helpers;

use helpers::api_test_helper::*;
use helpers::test_data_builder::*;
use hotel_inventory::api::{ApiError, ErrorKind};
use hotel_inventory::domain::dto::{CreateFloorDto, DeleteDto, UpdateFloorDto};

#[test]
fn test_category_deletable_after_dependents_removed() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let base = env.prepare_base().expect("准备基础数据失败");
    let category = env
        .state
        .category_api
        .create(category_dto("Suite", 4, base.service_id))
        .unwrap();
    let room = env
        .state
        .room_api
        .create(
            RoomBuilder::new("501")
                .floor(base.floor_id)
                .category(category.id)
                .state(base.room_state_id)
                .build(),
        )
        .unwrap();
    let rate = env
        .state
        .rate_api
        .create(
            RateBuilder::new("套房价", d(2023, 1, 1), d(2023, 12, 31))
                .price(300.0)
                .category(category.id)
                .build(),
        )
        .unwrap();

    assert_integrity_blocked(
        env.state.category_api.delete(DeleteDto { id: category.id }),
        "存在关联客房",
    );

    env.state.room_api.delete(DeleteDto { id: room.id }).unwrap();
    assert_integrity_blocked(
        env.state.category_api.delete(DeleteDto { id: category.id }),
        "存在有效房价",
    );

    env.state.rate_api.delete(DeleteDto { id: rate.id }).unwrap();
    env.state
        .category_api
        .delete(DeleteDto { id: category.id })
        .expect("依赖清理后应可停用");
    assert!(!env.is_active("category", category.id));
}

#[test]
fn test_floor_and_room_state_blocked_by_rooms() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let base = env.prepare_base().expect("准备基础数据失败");
    let category = env
        .state
        .category_api
        .create(category_dto("标准间", 2, base.service_id))
        .unwrap();
    env.state
        .room_api
        .create(
            RoomBuilder::new("101")
                .floor(base.floor_id)
                .category(category.id)
                .state(base.room_state_id)
                .build(),
        )
        .unwrap();

    assert_integrity_blocked(
        env.state.floor_api.delete(DeleteDto { id: base.floor_id }),
        "存在关联客房",
    );
    assert_integrity_blocked(
        env.state
            .room_state_api
            .delete(DeleteDto { id: base.room_state_id }),
        "存在关联客房",
    );
    assert!(env.is_active("floor", base.floor_id));
    assert!(env.is_active("room_state", base.room_state_id));
}

#[test]
fn test_active_reservation_blocks_room_delete() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let base = env.prepare_base().expect("准备基础数据失败");
    let category = env
        .state
        .category_api
        .create(category_dto("标准间", 2, base.service_id))
        .unwrap();
    let room = env
        .state
        .room_api
        .create(
            RoomBuilder::new("301")
                .floor(base.floor_id)
                .category(category.id)
                .state(base.room_state_id)
                .build(),
        )
        .unwrap();

    let reservation_id = env
        .insert_reservation(room.id, d(2023, 5, 1), d(2023, 5, 3))
        .unwrap();

    assert_integrity_blocked(
        env.state.room_api.delete(DeleteDto { id: room.id }),
        "存在有效预订",
    );

    env.cancel_reservation(reservation_id).unwrap();
    env.state
        .room_api
        .delete(DeleteDto { id: room.id })
        .expect("预订取消后应可停用");
}

#[test]
fn test_delete_twice_is_not_found() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let floor = env
        .state
        .floor_api
        .create(CreateFloorDto {
            description: "二楼".to_string(),
        })
        .unwrap();

    env.state.floor_api.delete(DeleteDto { id: floor.id }).unwrap();

    let again = env.state.floor_api.delete(DeleteDto { id: floor.id });
    assert!(matches!(again, Err(ApiError::NotFound(_))));
    assert_error_kind(
        env.state.floor_api.delete(DeleteDto { id: 9999 }),
        ErrorKind::NotFound,
    );
    assert_error_kind(env.state.floor_api.get(floor.id), ErrorKind::NotFound);
}

#[test]
fn test_invalid_id_rejected_before_store() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let result = env.state.floor_api.delete(DeleteDto { id: 0 });
    assert!(matches!(result, Err(ApiError::InvalidId(0))));
    assert_error_kind(env.state.room_api.get(-3), ErrorKind::Validation);
    assert_error_kind(
        env.state.floor_api.update(UpdateFloorDto {
            id: -1,
            description: "三楼".to_string(),
        }),
        ErrorKind::Validation,
    );
}

#[test]
fn test_non_transactional_delete_same_outcome() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    env.use_non_transactional_delete().unwrap();
    let base = env.prepare_base().expect("准备基础数据失败");
    let category = env
        .state
        .category_api
        .create(category_dto("标准间", 2, base.service_id))
        .unwrap();
    let room = env
        .state
        .room_api
        .create(
            RoomBuilder::new("101")
                .floor(base.floor_id)
                .category(category.id)
                .state(base.room_state_id)
                .build(),
        )
        .unwrap();

    assert_integrity_blocked(
        env.state.category_api.delete(DeleteDto { id: category.id }),
        "存在关联客房",
    );

    env.state.room_api.delete(DeleteDto { id: room.id }).unwrap();
    env.state
        .category_api
        .delete(DeleteDto { id: category.id })
        .unwrap();
    assert_error_kind(
        env.state.category_api.delete(DeleteDto { id: category.id }),
        ErrorKind::NotFound,
    );
}

#[test]
fn test_create_requires_active_references() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let base = env.prepare_base().expect("准备基础数据失败");

    // 服务不存在
    assert_error_kind(
        env.state.category_api.create(category_dto("标准间", 2, 777)),
        ErrorKind::NotFound,
    );

    let category = env
        .state
        .category_api
        .create(category_dto("标准间", 2, base.service_id))
        .unwrap();

    // 楼层不存在
    assert_error_kind(
        env.state.room_api.create(
            RoomBuilder::new("101")
                .floor(999)
                .category(category.id)
                .state(base.room_state_id)
                .build(),
        ),
        ErrorKind::NotFound,
    );

    // 房型已停用
    env.state
        .category_api
        .delete(DeleteDto { id: category.id })
        .unwrap();
    assert_error_kind(
        env.state.rate_api.create(
            RateBuilder::new("一月价", d(2023, 1, 1), d(2023, 1, 31))
                .category(category.id)
                .build(),
        ),
        ErrorKind::NotFound,
    );
}

#[test]
fn test_duplicate_descriptions_among_active_only() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let floor = env
        .state
        .floor_api
        .create(CreateFloorDto {
            description: "一楼".to_string(),
        })
        .unwrap();

    let dup = env.state.floor_api.create(CreateFloorDto {
        description: "  一楼 ".to_string(),
    });
    assert!(matches!(dup, Err(ApiError::Duplicate { .. })));

    env.state.floor_api.delete(DeleteDto { id: floor.id }).unwrap();
    env.state
        .floor_api
        .create(CreateFloorDto {
            description: "一楼".to_string(),
        })
        .expect("停用后描述应可复用");
}
