mod common;

use sqlx::SqlitePool;
use std::sync::Arc;

use short_url::domain::entities::NewShortUrl;
use short_url::domain::repositories::UrlRepository;
use short_url::error::AppError;
use short_url::infrastructure::persistence::SqliteUrlRepository;

fn new_url(code: &str, url: &str) -> NewShortUrl {
    NewShortUrl {
        code: code.to_string(),
        original_url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_insert_assigns_id_and_zero_clicks(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    let record = repo
        .insert(new_url("abc123", "https://example.com"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.code, "abc123");
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.clicks, 0);
}

#[sqlx::test]
async fn test_insert_ids_are_monotonic(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    let first = repo
        .insert(new_url("first1", "https://example.com/1"))
        .await
        .unwrap();
    let second = repo
        .insert(new_url("second", "https://example.com/2"))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[sqlx::test]
async fn test_insert_duplicate_code_is_conflict(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    repo.insert(new_url("taken1", "https://example.com/1"))
        .await
        .unwrap();

    let result = repo.insert(new_url("taken1", "https://example.com/2")).await;

    assert!(matches!(result.unwrap_err(), AppError::CodeConflict));
}

#[sqlx::test]
async fn test_find_by_code(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    repo.insert(new_url("findme", "https://example.com"))
        .await
        .unwrap();

    let found = repo.find_by_code("findme").await.unwrap();
    assert_eq!(found.unwrap().original_url, "https://example.com");

    let missing = repo.find_by_code("other0").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_find_by_original_url(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    repo.insert(new_url("dedup1", "https://example.com/page"))
        .await
        .unwrap();

    let found = repo
        .find_by_original_url("https://example.com/page")
        .await
        .unwrap();
    assert_eq!(found.unwrap().code, "dedup1");

    let missing = repo
        .find_by_original_url("https://example.com/other")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_resolve_returns_url_and_increments(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool.clone());

    repo.insert(new_url("visit1", "https://example.com"))
        .await
        .unwrap();

    let target = repo.resolve("visit1").await.unwrap();
    assert_eq!(target.unwrap(), "https://example.com");
    assert_eq!(common::clicks_for(&pool, "visit1").await, 1);

    repo.resolve("visit1").await.unwrap();
    repo.resolve("visit1").await.unwrap();
    assert_eq!(common::clicks_for(&pool, "visit1").await, 3);
}

#[sqlx::test]
async fn test_resolve_miss_mutates_nothing(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool.clone());

    repo.insert(new_url("stay00", "https://example.com"))
        .await
        .unwrap();

    let target = repo.resolve("gone00").await.unwrap();

    assert!(target.is_none());
    assert_eq!(common::clicks_for(&pool, "stay00").await, 0);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_concurrent_resolves_lose_no_clicks(pool: SqlitePool) {
    let repo = Arc::new(SqliteUrlRepository::new(pool.clone()));

    repo.insert(new_url("conc01", "https://example.com"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.resolve("conc01").await.unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_some());
    }

    assert_eq!(common::clicks_for(&pool, "conc01").await, 10);
}

#[sqlx::test]
async fn test_count(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    assert_eq!(repo.count().await.unwrap(), 0);

    repo.insert(new_url("cnt001", "https://example.com/1"))
        .await
        .unwrap();
    repo.insert(new_url("cnt002", "https://example.com/2"))
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}
