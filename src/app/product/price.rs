//! 价格的 JSON 表示
//!
//! 价格以 JSON 数值（不是字符串）读写，全程不经过二进制浮点。
//! 无法用 `Decimal` 精确表示的数值（有效位过多）直接拒绝，不做舍入。

use rust_decimal::Decimal;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::str::FromStr;

pub fn serialize<S>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = Number::from_str(&price.to_string()).map_err(ser::Error::custom)?;
    number.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    parse_exact(&number.to_string()).map_err(de::Error::custom)
}

fn parse_exact(text: &str) -> Result<Decimal, String> {
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str_exact(text)
    };
    parsed.map_err(|_| format!("price {} cannot be represented exactly", text))
}
