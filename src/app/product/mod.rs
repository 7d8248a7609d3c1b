//! 产品目录：列出产品、创建产品

pub mod dto;
pub mod handler;
pub mod mapper;
pub mod model;
pub mod price;
pub mod routes;
pub mod service;
