//! 需要真实 PostgreSQL，通过 `DATABASE_URL` 指定：
//! `DATABASE_URL=postgres://... cargo test -- --ignored`

use product_service::app::product::model::Product;
use product_service::infrastructure::config::{DatabaseConfig, StoreBackend};
use product_service::infrastructure::database::DatabaseManager;
use product_service::infrastructure::store::{Document, PgDocumentStore, Repository};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    #[serde(skip)]
    id: Option<String>,
    text: String,
    #[serde(with = "product_service::app::product::price")]
    amount: Decimal,
}

impl Document for Note {
    const COLLECTION: &'static str = "store_test_notes";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

async fn database() -> DatabaseManager {
    let config = DatabaseConfig {
        backend: StoreBackend::Postgres,
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
        max_connections: 5,
        min_connections: 1,
        acquire_timeout_seconds: 8,
    };
    DatabaseManager::new(&config).await.unwrap()
}

async fn store<T: Document>(database: &DatabaseManager) -> PgDocumentStore<T> {
    let store = PgDocumentStore::new(database.get_pool().clone());
    store.ensure_collection().await.unwrap();
    store.delete_all().await.unwrap();
    store
}

#[tokio::test]
#[ignore]
async fn test_document_lifecycle() {
    let database = database().await;
    let store = store::<Note>(&database).await;

    assert!(store.find_all().await.unwrap().is_empty());

    let saved = store
        .save(Note {
            id: None,
            text: "first".to_string(),
            amount: Decimal::from_str("0.10").unwrap(),
        })
        .await
        .unwrap();
    let id = saved.id.clone().unwrap();
    assert!(!id.is_empty());

    let found = store.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.amount.to_string(), "0.10");

    let mut updated = saved.clone();
    updated.text = "rewritten".to_string();
    store.save(updated.clone()).await.unwrap();
    let all = store.find_all().await.unwrap();
    assert_eq!(all, vec![updated]);

    assert_eq!(store.find_by_id("not-a-uuid").await.unwrap(), None);
    assert_eq!(
        store
            .find_by_id("00000000-0000-0000-0000-000000000000")
            .await
            .unwrap(),
        None
    );

    let mut invalid = saved.clone();
    invalid.id = Some("not-a-uuid".to_string());
    assert!(store.save(invalid).await.is_err());

    let mut uppercase = saved.clone();
    uppercase.id = Some(id.to_uppercase());
    let resaved = store.save(uppercase).await.unwrap();
    assert_eq!(resaved.id.as_deref(), Some(id.as_str()));
    assert_eq!(store.find_all().await.unwrap().len(), 1);

    assert_eq!(store.delete_all().await.unwrap(), 1);
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_products_collection() {
    let database = database().await;
    let store = store::<Product>(&database).await;

    let saved = store
        .save(Product::new(
            "iPhone 18",
            "iPhone 18 es un Smartphone de Apple",
            "p-001",
            Decimal::from(2000),
        ))
        .await
        .unwrap();
    let id = saved.id.clone().unwrap();

    let found = store.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.name, "iPhone 18");
    assert_eq!(found.sku_code, "p-001");
    assert_eq!(found.price, Decimal::from_str("2000.00").unwrap());
    assert_eq!(store.find_all().await.unwrap().len(), 1);

    let kind: String = sqlx::query_scalar(
        "SELECT jsonb_typeof(body -> 'price') FROM products WHERE id = $1::uuid",
    )
    .bind(&id)
    .fetch_one(database.get_pool())
    .await
    .unwrap();
    assert_eq!(kind, "number");
}
