// ==========================================
// 酒店客房库存 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value + scope, 当前只使用 global)
// ==========================================

use rusqlite::{params, Connection};
use serde_json::json;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::db::open_sqlite_connection;
use crate::engine::rate_validity::DEFAULT_DATE_FORMATS;

/// 默认操作人
pub const DEFAULT_ACTOR: &str = "system";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        crate::db::ensure_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 读取 global scope 的配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// 写入 global scope 的配置值（存在则覆盖）
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let key = key.trim();
        if key.is_empty() {
            return Err("配置键不能为空".into());
        }

        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value, updated_at)
            VALUES ('global', ?1, ?2, datetime('now'))
            ON CONFLICT(scope_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        debug!(key = key, "配置已更新");
        Ok(())
    }

    /// 获取所有配置的快照（JSON格式）
    ///
    /// # 返回
    /// - Ok(String): 配置快照的JSON字符串（键有序）
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        let json_value = json!(config_map);
        Ok(serde_json::to_string(&json_value)?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    ///
    /// # 注意
    /// - 此方法会覆盖现有的global配置
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> Result<usize, Box<dyn Error>> {
        let config_map: BTreeMap<String, String> = serde_json::from_str(snapshot_json)?;

        let mut conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM config_kv WHERE scope_id = 'global'", [])?;
        for (key, value) in &config_map {
            tx.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)",
                params![key, value],
            )?;
        }
        tx.commit()?;

        Ok(config_map.len())
    }

    // ==========================================
    // 业务配置项
    // ==========================================

    /// 房价查询的日期格式表
    ///
    /// 未配置或配置无法解析时回退默认格式表
    pub fn get_date_formats(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let defaults = || -> Vec<String> { DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect() };

        let raw = match self.get_config_value(config_keys::RATE_DATE_FORMATS)? {
            Some(v) => v,
            None => return Ok(defaults()),
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(formats) if !formats.is_empty() => Ok(formats),
            Ok(_) => Ok(defaults()),
            Err(e) => {
                warn!(key = config_keys::RATE_DATE_FORMATS, error = %e, "日期格式配置无法解析，使用默认值");
                Ok(defaults())
            }
        }
    }

    /// 停用时是否在同一事务内执行完整性检查与置位（默认 true）
    pub fn is_transactional_delete(&self) -> Result<bool, Box<dyn Error>> {
        let raw = self.get_config_value(config_keys::TRANSACTIONAL_DELETE)?;
        Ok(parse_bool(raw.as_deref()).unwrap_or(true))
    }

    /// 操作日志中记录的操作人
    pub fn default_actor(&self) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(config_keys::DEFAULT_ACTOR)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ACTOR.to_string()))
    }
}

fn parse_bool(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 房价
    pub const RATE_DATE_FORMATS: &str = "rate.date_formats"; // JSON 数组

    // 引用完整性
    pub const TRANSACTIONAL_DELETE: &str = "integrity.transactional_delete";

    // 操作日志
    pub const DEFAULT_ACTOR: &str = "inventory.default_actor";
}
