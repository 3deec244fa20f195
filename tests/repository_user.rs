use linktrack::domain::entities::NewUser;
use linktrack::domain::repositories::UserRepository;
use linktrack::error::AppError;
use linktrack::infrastructure::persistence::StoreClient;
use sqlx::PgPool;
use std::time::Duration;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Test User".to_string(),
    }
}

fn client(pool: PgPool) -> StoreClient {
    StoreClient::from_pool(pool, Duration::from_secs(5))
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_user(pool: PgPool) {
    let repo = client(pool).users();

    let result = repo.create(new_user("ada@example.com")).await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.id > 0);
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Test User");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_user_duplicate_email(pool: PgPool) {
    let repo = client(pool).users();

    repo.create(new_user("dup@example.com")).await.unwrap();
    let result = repo.create(new_user("dup@example.com")).await;

    match result {
        Err(AppError::Conflict { message, details }) => {
            assert_eq!(message, "User already exists");
            assert_eq!(details["email"], "dup@example.com");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_email(pool: PgPool) {
    let repo = client(pool).users();

    let created = repo.create(new_user("grace@example.com")).await.unwrap();

    let found = repo.find_by_email("grace@example.com").await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_email_not_found(pool: PgPool) {
    let repo = client(pool).users();

    let result = repo.find_by_email("nobody@example.com").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}
