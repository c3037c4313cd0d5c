// ==========================================
// 酒店客房库存 - 引用完整性守卫
// ==========================================
// 职责: 停用前检查是否仍有有效依赖记录引用目标
// 红线: 只读; 置 active = 0 由调用方完成
// 规则: 按依赖表顺序逐条执行存在性查询, 第一条命中即阻断
// ==========================================

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::types::{BlockingReason, EntityKind};
use crate::repository::error::RepositoryError;
use crate::repository::store::{ExistenceProbe, ForeignKey, ReferencePredicate};

// ==========================================
// DependencyRule - 依赖规则
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyRule {
    pub target: EntityKind,
    pub dependent: EntityKind,
    pub foreign_key: ForeignKey,
    pub reason: BlockingReason,
}

/// 静态依赖表（顺序即检查顺序）
pub const DEPENDENCY_RULES: &[DependencyRule] = &[
    DependencyRule {
        target: EntityKind::Category,
        dependent: EntityKind::Room,
        foreign_key: ForeignKey::Category,
        reason: BlockingReason::AssociatedRooms,
    },
    DependencyRule {
        target: EntityKind::Category,
        dependent: EntityKind::Rate,
        foreign_key: ForeignKey::Category,
        reason: BlockingReason::ActiveRates,
    },
    DependencyRule {
        target: EntityKind::Floor,
        dependent: EntityKind::Room,
        foreign_key: ForeignKey::Floor,
        reason: BlockingReason::AssociatedRooms,
    },
    DependencyRule {
        target: EntityKind::RoomState,
        dependent: EntityKind::Room,
        foreign_key: ForeignKey::RoomState,
        reason: BlockingReason::AssociatedRooms,
    },
    DependencyRule {
        target: EntityKind::Room,
        dependent: EntityKind::Reservation,
        foreign_key: ForeignKey::Room,
        reason: BlockingReason::ActiveReservations,
    },
];

// ==========================================
// IntegrityViolation - 阻断结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityViolation {
    pub target: EntityKind,
    pub id: i64,
    pub dependent: EntityKind,
    pub reason: BlockingReason,
}

impl std::fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "无法停用{}(id={}): {}",
            self.target.label(),
            self.id,
            self.reason
        )
    }
}

#[derive(Error, Debug)]
pub enum IntegrityError {
    #[error("{0}")]
    Blocked(IntegrityViolation),

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

// ==========================================
// ReferentialIntegrityGuard
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferentialIntegrityGuard;

impl ReferentialIntegrityGuard {
    pub fn new() -> Self {
        Self
    }

    /// 目标种类适用的依赖规则
    pub fn rules_for(kind: EntityKind) -> impl Iterator<Item = &'static DependencyRule> {
        DEPENDENCY_RULES.iter().filter(move |rule| rule.target == kind)
    }

    /// 检查目标是否可以停用
    ///
    /// # 返回
    /// - Ok(()): 无有效依赖记录
    /// - Err(IntegrityError::Blocked): 第一条命中的规则
    /// - Err(IntegrityError::Store): 存在性查询失败
    pub fn can_deactivate(
        &self,
        probe: &dyn ExistenceProbe,
        kind: EntityKind,
        id: i64,
    ) -> Result<(), IntegrityError> {
        for rule in Self::rules_for(kind) {
            let predicate = ReferencePredicate::new(rule.dependent, rule.foreign_key, id);
            if probe.exists(&predicate)? {
                let violation = IntegrityViolation {
                    target: kind,
                    id,
                    dependent: rule.dependent,
                    reason: rule.reason,
                };
                warn!(
                    entity_kind = %kind,
                    entity_id = id,
                    dependent = %rule.dependent,
                    reason = %rule.reason,
                    "停用被引用完整性阻断"
                );
                return Err(IntegrityError::Blocked(violation));
            }
        }

        debug!(entity_kind = %kind, entity_id = id, "引用完整性检查通过");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::error::RepositoryResult;
    use std::cell::RefCell;

    /// 记录查询顺序的桩探针
    struct StubProbe {
        hits: Vec<(EntityKind, ForeignKey)>,
        calls: RefCell<Vec<ReferencePredicate>>,
    }

    impl StubProbe {
        fn with_hits(hits: Vec<(EntityKind, ForeignKey)>) -> Self {
            Self {
                hits,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ExistenceProbe for StubProbe {
        fn exists(&self, predicate: &ReferencePredicate) -> RepositoryResult<bool> {
            self.calls.borrow_mut().push(*predicate);
            Ok(self
                .hits
                .contains(&(predicate.dependent, predicate.foreign_key)))
        }
    }

    struct FailingProbe;

    impl ExistenceProbe for FailingProbe {
        fn exists(&self, _predicate: &ReferencePredicate) -> RepositoryResult<bool> {
            Err(RepositoryError::DatabaseQueryError("disk I/O error".to_string()))
        }
    }

    #[test]
    fn test_category_blocked_by_rooms_first() {
        let probe = StubProbe::with_hits(vec![
            (EntityKind::Room, ForeignKey::Category),
            (EntityKind::Rate, ForeignKey::Category),
        ]);
        let guard = ReferentialIntegrityGuard::new();

        match guard.can_deactivate(&probe, EntityKind::Category, 7) {
            Err(IntegrityError::Blocked(v)) => {
                assert_eq!(v.reason, BlockingReason::AssociatedRooms);
                assert_eq!(v.dependent, EntityKind::Room);
                assert_eq!(v.id, 7);
            }
            other => panic!("Expected Blocked, got {:?}", other),
        }
        // 第一条命中后不再继续查询
        assert_eq!(probe.calls.borrow().len(), 1);
    }

    #[test]
    fn test_category_blocked_by_rates() {
        let probe = StubProbe::with_hits(vec![(EntityKind::Rate, ForeignKey::Category)]);
        let result = ReferentialIntegrityGuard::new().can_deactivate(&probe, EntityKind::Category, 1);
        assert!(matches!(
            result,
            Err(IntegrityError::Blocked(IntegrityViolation {
                reason: BlockingReason::ActiveRates,
                ..
            }))
        ));
    }

    #[test]
    fn test_room_blocked_by_reservation() {
        let probe = StubProbe::with_hits(vec![(EntityKind::Reservation, ForeignKey::Room)]);
        let result = ReferentialIntegrityGuard::new().can_deactivate(&probe, EntityKind::Room, 3);
        match result {
            Err(IntegrityError::Blocked(v)) => {
                assert_eq!(v.reason, BlockingReason::ActiveReservations);
                assert!(v.to_string().contains("存在有效预订"));
            }
            other => panic!("Expected Blocked, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_has_no_dependents() {
        let probe = StubProbe::with_hits(vec![(EntityKind::Room, ForeignKey::Category)]);
        assert!(ReferentialIntegrityGuard::new()
            .can_deactivate(&probe, EntityKind::Rate, 1)
            .is_ok());
        assert!(probe.calls.borrow().is_empty());
    }

    #[test]
    fn test_floor_and_state_checks_use_their_column() {
        let probe = StubProbe::with_hits(vec![]);
        let guard = ReferentialIntegrityGuard::new();
        guard.can_deactivate(&probe, EntityKind::Floor, 2).unwrap();
        guard.can_deactivate(&probe, EntityKind::RoomState, 2).unwrap();

        let calls = probe.calls.borrow();
        assert_eq!(calls[0].foreign_key, ForeignKey::Floor);
        assert_eq!(calls[1].foreign_key, ForeignKey::RoomState);
        assert!(calls.iter().all(|p| p.dependent == EntityKind::Room && p.target_id == 2));
    }

    #[test]
    fn test_store_error_propagates() {
        let result = ReferentialIntegrityGuard::new().can_deactivate(&FailingProbe, EntityKind::Floor, 1);
        assert!(matches!(result, Err(IntegrityError::Store(_))));
    }
}
