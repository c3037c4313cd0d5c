use super::core::{ActionLogRepository, TS_FORMAT};
use crate::domain::action_log::ActionLog;
use crate::domain::types::{ActionType, EntityKind};
use crate::repository::error::RepositoryResult;
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Result as SqliteResult, Row};

const SELECT_COLUMNS: &str = r#"
    SELECT action_id, action_type, entity_kind, entity_id,
           action_ts, actor, payload_json, detail
    FROM action_log
"#;

impl ActionLogRepository {
    // ==========================================
    // 查询操作
    // ==========================================

    /// 按 action_id 查询单个日志
    pub fn find_by_id(&self, action_id: &str) -> RepositoryResult<Option<ActionLog>> {
        let conn = self.get_conn()?;
        let sql = format!("{} WHERE action_id = ?1", SELECT_COLUMNS);
        let log = conn
            .query_row(&sql, params![action_id], |row| self.map_row(row))
            .optional()?;
        Ok(log)
    }

    /// 查询某个实体的全部操作日志（最新在前）
    pub fn find_by_entity(&self, kind: EntityKind, entity_id: i64) -> RepositoryResult<Vec<ActionLog>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "{} WHERE entity_kind = ?1 AND entity_id = ?2 ORDER BY action_ts DESC, rowid DESC",
            SELECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let logs = stmt
            .query_map(params![kind.to_string(), entity_id], |row| self.map_row(row))?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(logs)
    }

    /// 查询最近的操作日志
    pub fn find_recent(&self, limit: i32) -> RepositoryResult<Vec<ActionLog>> {
        let conn = self.get_conn()?;
        let sql = format!("{} ORDER BY action_ts DESC, rowid DESC LIMIT ?1", SELECT_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let logs = stmt
            .query_map(params![limit], |row| self.map_row(row))?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(logs)
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn map_row(&self, row: &Row) -> SqliteResult<ActionLog> {
        let action_type_str: String = row.get(1)?;
        let entity_kind_str: String = row.get(2)?;
        let action_ts_str: String = row.get(4)?;
        let payload_json_str: Option<String> = row.get(6)?;

        let action_type = parse_action_type(&action_type_str).ok_or_else(|| conversion_error(1, &action_type_str))?;
        let entity_kind = EntityKind::from_db_str(&entity_kind_str)
            .ok_or_else(|| conversion_error(2, &entity_kind_str))?;

        // 解析时间戳
        let action_ts = NaiveDateTime::parse_from_str(&action_ts_str, TS_FORMAT)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

        // 解析 JSON 字段
        let payload_json = payload_json_str.and_then(|s| serde_json::from_str(&s).ok());

        Ok(ActionLog {
            action_id: row.get(0)?,
            action_type,
            entity_kind,
            entity_id: row.get(3)?,
            action_ts,
            actor: row.get(5)?,
            payload_json,
            detail: row.get(7)?,
        })
    }
}

fn parse_action_type(s: &str) -> Option<ActionType> {
    match s {
        "CREATE" => Some(ActionType::Create),
        "UPDATE" => Some(ActionType::Update),
        "DELETE" => Some(ActionType::Delete),
        _ => None,
    }
}

fn conversion_error(idx: usize, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        format!("无法识别的取值: {}", value).into(),
    )
}
