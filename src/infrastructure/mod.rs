//! 基础设施层：配置、日志、数据库与文档存储

pub mod config;
pub mod database;
pub mod logger;
pub mod store;
