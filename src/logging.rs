//! Structured JSON line logging.
//!
//! Diagnostic only: nothing in the workflow reads these records back, and no
//! control flow depends on them. One JSON object per line on stderr.

use chrono::Utc;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Error = 2,
}

impl Level {
    pub fn from_env() -> Self {
        match std::env::var("LOG_LEVEL").as_deref() {
            Ok("debug") => Level::Debug,
            Ok("error") => Level::Error,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

fn emit(level: Level, module: &str, mut fields: Map<String, Value>) {
    if level < Level::from_env() {
        return;
    }
    fields.insert("ts".to_string(), json!(Utc::now().to_rfc3339()));
    fields.insert("lvl".to_string(), json!(level.as_str()));
    fields.insert("module".to_string(), json!(module));
    eprintln!("{}", Value::Object(fields));
}

pub fn json_log(module: &str, fields: Map<String, Value>) {
    emit(Level::Info, module, fields);
}

pub fn json_error(module: &str, fields: Map<String, Value>) {
    emit(Level::Error, module, fields);
}

pub fn obj(pairs: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert((*k).to_string(), v.clone());
    }
    map
}

pub fn v_str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn v_num(n: f64) -> Value {
    json!(n)
}
