//! Register use case tests against the in-memory repository.

use std::sync::Arc;

use register_api::errors::AppError;
use register_api::infra::{InMemoryUserStore, UserRepository};
use register_api::services::{RegisterInput, RegisterService, RegisterUseCase};

fn input(email: &str) -> RegisterInput {
    RegisterInput {
        name: "John Doe".to_string(),
        email: email.to_string(),
        password: "123456".to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_user() {
    let store = Arc::new(InMemoryUserStore::new());
    let use_case = RegisterUseCase::new(store.clone());

    let user = use_case.register(input("johndoe@example.com")).await.unwrap();

    let stored = store.find_by_email("johndoe@example.com").await.unwrap();
    assert_eq!(stored.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_register_rejects_existing_email() {
    let store = Arc::new(InMemoryUserStore::new());
    let use_case = RegisterUseCase::new(store.clone());

    use_case.register(input("johndoe@example.com")).await.unwrap();
    let result = use_case.register(input("johndoe@example.com")).await;

    assert!(matches!(result, Err(AppError::UserAlreadyExists)));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_distinct_emails_both_register() {
    let store = Arc::new(InMemoryUserStore::new());
    let use_case = RegisterUseCase::new(store.clone());

    use_case.register(input("a@example.com")).await.unwrap();
    use_case.register(input("b@example.com")).await.unwrap();

    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_concurrent_registrations_keep_email_unique() {
    let store = Arc::new(InMemoryUserStore::new());
    let use_case = Arc::new(RegisterUseCase::new(store.clone()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let use_case = use_case.clone();
            tokio::spawn(async move { use_case.register(input("race@example.com")).await })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::UserAlreadyExists) => conflicts += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 3);
    assert_eq!(store.len().await, 1);
}
