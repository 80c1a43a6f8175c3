use std::collections::HashSet;

use keygate_access::domain::types::KeyStatus;
use keygate_access::error::AccessServiceError;
use keygate_access::usecase::create_key::CreateKeyUseCase;

use crate::helpers::{FailingAccessKeyRepo, MockAccessKeyRepo, TEST_CODE_BYTES};

#[tokio::test]
async fn should_create_pending_key_with_hex_code() {
    let repo = MockAccessKeyRepo::empty();
    let uc = CreateKeyUseCase {
        keys: repo.clone(),
        code_bytes: TEST_CODE_BYTES,
    };

    let code = uc.execute().await.unwrap();

    assert_eq!(code.len(), 16, "8 random bytes should give 16 hex chars");
    assert!(
        code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()),
        "code should be lowercase hex, got {code}"
    );

    let stored = repo.get(&code).expect("key should be persisted");
    assert_eq!(stored.status, KeyStatus::Pending);
    assert!(stored.owner_email.is_none(), "pending key has no owner");
    assert!(stored.expires_at.is_none(), "pending key has no expiry");
}

#[tokio::test]
async fn should_respect_configured_code_size() {
    let uc = CreateKeyUseCase {
        keys: MockAccessKeyRepo::empty(),
        code_bytes: 4,
    };

    let code = uc.execute().await.unwrap();
    assert_eq!(code.len(), 8);
}

#[tokio::test]
async fn should_generate_distinct_codes() {
    let repo = MockAccessKeyRepo::empty();
    let uc = CreateKeyUseCase {
        keys: repo.clone(),
        code_bytes: TEST_CODE_BYTES,
    };

    let mut seen = HashSet::new();
    for _ in 0..50 {
        let code = uc.execute().await.unwrap();
        assert!(seen.insert(code), "generated codes must be unique");
    }
}

#[tokio::test]
async fn should_surface_storage_failure() {
    let uc = CreateKeyUseCase {
        keys: FailingAccessKeyRepo,
        code_bytes: TEST_CODE_BYTES,
    };

    let result = uc.execute().await;
    assert!(
        matches!(result, Err(AccessServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}
