//! # 产品目录服务
//!
//! 基于 Axum 的产品 REST 服务，分层如下：
//! - `app`：路由、处理器、业务服务与映射
//! - `core`：错误处理、请求提取器、中间件
//! - `infrastructure`：配置、日志、数据库与文档存储

pub mod app;
pub mod core;
pub mod infrastructure;
