use std::sync::Arc;

use tokio::sync::Barrier;

use keygate_access::error::AccessServiceError;
use keygate_access::usecase::check_key::{CheckKeyInput, CheckKeyUseCase, CheckOutcome};

use crate::helpers::{MockAccessKeyRepo, TEST_TTL_SECS, active_key, pending_key};

const CODE: &str = "a1b2c3d4e5f60718";

/// N callers race to redeem the same fresh key with distinct emails: exactly
/// one may win the activation, and every loser must observe the winner's
/// binding as an ownership mismatch. The stored owner must match the single
/// winner.
#[tokio::test(flavor = "multi_thread")]
async fn should_let_exactly_one_caller_win_activation() {
    const CALLERS: usize = 16;

    let repo = MockAccessKeyRepo::with(vec![pending_key(CODE)]);
    let barrier = Arc::new(Barrier::new(CALLERS));

    let mut handles = Vec::with_capacity(CALLERS);
    for i in 0..CALLERS {
        let repo = repo.clone();
        let barrier = Arc::clone(&barrier);
        let email = format!("caller{i}@example.com");
        handles.push(tokio::spawn(async move {
            let uc = CheckKeyUseCase {
                keys: repo,
                ttl_secs: TEST_TTL_SECS,
            };
            barrier.wait().await;
            let result = uc
                .execute(CheckKeyInput {
                    code: CODE.to_owned(),
                    email: email.clone(),
                })
                .await;
            (email, result)
        }));
    }

    let mut winners = Vec::new();
    let mut mismatches = 0;
    for handle in handles {
        let (email, result) = handle.await.unwrap();
        match result {
            Ok(CheckOutcome::Activated { .. }) => winners.push(email),
            Err(AccessServiceError::OwnershipMismatch) => mismatches += 1,
            other => panic!("unexpected outcome for {email}: {other:?}"),
        }
    }

    assert_eq!(winners.len(), 1, "exactly one caller may activate");
    assert_eq!(mismatches, CALLERS - 1);

    let stored = repo.get(CODE).expect("key should still exist");
    assert_eq!(
        stored.owner_email.as_deref(),
        Some(winners[0].as_str()),
        "stored owner must be the race winner"
    );
}

/// Concurrent checks of an already-expired key: exactly one call's delete
/// takes effect and reports the expiry; every other call sees an absent key.
/// No call may report the key as valid after the delete.
#[tokio::test(flavor = "multi_thread")]
async fn should_delete_expired_key_exactly_once_under_contention() {
    const CALLERS: usize = 8;

    let repo = MockAccessKeyRepo::with(vec![active_key(CODE, "owner@example.com", -1)]);
    let barrier = Arc::new(Barrier::new(CALLERS));

    let mut handles = Vec::with_capacity(CALLERS);
    for _ in 0..CALLERS {
        let repo = repo.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(tokio::spawn(async move {
            let uc = CheckKeyUseCase {
                keys: repo,
                ttl_secs: TEST_TTL_SECS,
            };
            barrier.wait().await;
            uc.execute(CheckKeyInput {
                code: CODE.to_owned(),
                email: "owner@example.com".to_owned(),
            })
            .await
        }));
    }

    let mut expired = 0;
    let mut not_found = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Err(AccessServiceError::KeyExpired) => expired += 1,
            Err(AccessServiceError::InvalidKey) => not_found += 1,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    assert_eq!(expired, 1, "exactly one caller observes the delete");
    assert_eq!(not_found, CALLERS - 1);
    assert!(repo.get(CODE).is_none(), "key must be gone");
}
