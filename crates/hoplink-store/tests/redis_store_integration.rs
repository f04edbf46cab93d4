use std::time::Duration;

use hoplink_core::{KvStore, Mapping, ShortToken};
use hoplink_store::RedisKvStore;
use hoplink_test_infra::RedisServer;
use jiff::{SignedDuration, Timestamp};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

struct Fixture {
    _redis: RedisServer,
    store: RedisKvStore,
}

impl Fixture {
    async fn start() -> Self {
        let redis = RedisServer::start().await.expect("start redis");
        let url = redis.url().await.expect("redis url");

        // Wait a moment to ensure Redis is fully ready
        tokio::time::sleep(Duration::from_millis(500)).await;

        let store = RedisKvStore::connect(&url).await.expect("connect redis");

        Self {
            _redis: redis,
            store,
        }
    }
}

fn token(value: &str) -> ShortToken {
    ShortToken::new_unchecked(value)
}

fn mapping(url: &str, ttl: Duration) -> Mapping {
    Mapping {
        target_url: url.to_string(),
        expires_at: Timestamp::now() + SignedDuration::try_from(ttl).unwrap(),
    }
}

#[tokio::test]
async fn set_and_get_mapping() {
    let fixture = Fixture::start().await;
    let t = token("bf705e83");

    fixture
        .store
        .set(&t, mapping("https://example.com/page", DAY), DAY)
        .await
        .unwrap();

    let got = fixture.store.get(&t).await.unwrap().unwrap();
    assert_eq!(got.target_url, "https://example.com/page");
}

#[tokio::test]
async fn get_returns_none_for_missing_key() {
    let fixture = Fixture::start().await;

    let got = fixture.store.get(&token("deadbeef")).await.unwrap();
    assert!(got.is_none());
}

#[tokio::test]
async fn entry_expires_after_ttl() {
    let fixture = Fixture::start().await;
    let t = token("bf705e83");
    let ttl = Duration::from_secs(1);

    fixture
        .store
        .set(&t, mapping("https://example.com/page", ttl), ttl)
        .await
        .unwrap();

    let got = fixture.store.get(&t).await.unwrap();
    assert!(got.is_some(), "entry should be readable before the TTL");

    tokio::time::sleep(Duration::from_secs(2)).await;

    let got = fixture.store.get(&t).await.unwrap();
    assert!(got.is_none(), "Redis should have evicted the entry");
}

#[tokio::test]
async fn later_write_overwrites() {
    let fixture = Fixture::start().await;
    let t = token("bf705e83");

    fixture
        .store
        .set(&t, mapping("https://one.example", DAY), DAY)
        .await
        .unwrap();
    fixture
        .store
        .set(&t, mapping("https://two.example", DAY), DAY)
        .await
        .unwrap();

    let got = fixture.store.get(&t).await.unwrap().unwrap();
    assert_eq!(got.target_url, "https://two.example");
}
