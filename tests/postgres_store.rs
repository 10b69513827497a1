//! Tests against a live PostgreSQL seeded by `deploy/postgres/init.sql`.
//!
//! Ignored by default. Start the store image and export the usual variables:
//!
//! ```sh
//! docker build -t greeter-postgres deploy/postgres
//! docker run --rm -d -p 5432:5432 -e POSTGRES_DB=greetings \
//!     -e POSTGRES_USER=greeter -e POSTGRES_PASSWORD=greeter greeter-postgres
//! DB_HOST=127.0.0.1 POSTGRES_DB=greetings POSTGRES_USER=greeter \
//!     POSTGRES_PASSWORD=greeter cargo test --test postgres_store -- --ignored
//! ```

mod common;

use common::TestServer;
use greeter::config::DatabaseConfig;
use greeter::store::{PostgresSource, SubjectSource};

fn source() -> PostgresSource {
    let config = DatabaseConfig::from_env().expect("store environment not set");
    PostgresSource::new(&config)
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL seeded with init.sql"]
async fn test_reads_seed_row() {
    let subject = source().fetch_subject().await.unwrap();
    assert_eq!(subject.name(), "Ada");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL seeded with init.sql"]
async fn test_serves_seed_row() {
    let store = source();
    let server = TestServer::start(&store).await.unwrap();

    let body = reqwest::get(server.url("/")).await.unwrap().text().await.unwrap();
    assert_eq!(body, "hello world, Ada");

    server.stop().await;
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL seeded with init.sql"]
async fn test_repeated_startup_reads_same_row() {
    let store = source();
    let first = store.fetch_subject().await.unwrap();
    let second = store.fetch_subject().await.unwrap();
    assert_eq!(first, second);
}
