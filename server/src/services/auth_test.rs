use super::*;
use crate::state::test_helpers::{TEST_ADDRESS, sign_personal, test_app_state};

const CHECKSUMMED: &str = "0x2C7536E3605D9C16a7a3D7b1898e529396a65c23";

#[tokio::test]
async fn challenge_normalizes_address() {
    let (state, store) = test_app_state();

    let challenge = issue_challenge(state.store.as_ref(), &state.config, CHECKSUMMED).await.unwrap();

    assert!(challenge.message.contains(TEST_ADDRESS));
    assert!(challenge.message.contains(&challenge.nonce));
    assert!(store.has_nonce(TEST_ADDRESS).await);
}

#[tokio::test]
async fn challenge_rejects_malformed_address() {
    let (state, _) = test_app_state();
    let err = issue_challenge(state.store.as_ref(), &state.config, "alice").await.unwrap_err();
    assert!(matches!(err, LoginError::Malformed(SignatureError::InvalidAddress)));
}

#[tokio::test]
async fn signed_challenge_logs_in() {
    let (state, store) = test_app_state();
    let challenge = issue_challenge(state.store.as_ref(), &state.config, TEST_ADDRESS).await.unwrap();

    let token = login(state.store.as_ref(), &state.config, CHECKSUMMED, &sign_personal(&challenge.message))
        .await
        .unwrap();

    assert_eq!(token.len(), 64);
    assert_eq!(store.session_address(&token).await.unwrap().as_deref(), Some(TEST_ADDRESS));
}

#[tokio::test]
async fn nonce_is_single_use() {
    let (state, _) = test_app_state();
    let challenge = issue_challenge(state.store.as_ref(), &state.config, TEST_ADDRESS).await.unwrap();
    let signature = sign_personal(&challenge.message);

    login(state.store.as_ref(), &state.config, TEST_ADDRESS, &signature).await.unwrap();
    let replay = login(state.store.as_ref(), &state.config, TEST_ADDRESS, &signature).await.unwrap_err();

    assert!(matches!(replay, LoginError::NonceMissing));
}

#[tokio::test]
async fn reissued_nonce_replaces_previous() {
    let (state, _) = test_app_state();
    let first = issue_challenge(state.store.as_ref(), &state.config, TEST_ADDRESS).await.unwrap();
    issue_challenge(state.store.as_ref(), &state.config, TEST_ADDRESS).await.unwrap();

    let err = login(state.store.as_ref(), &state.config, TEST_ADDRESS, &sign_personal(&first.message))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::SignerMismatch));
}

#[tokio::test]
async fn signature_for_other_address_is_rejected() {
    let (state, store) = test_app_state();
    let other = "0x0000000000000000000000000000000000000001";
    let challenge = issue_challenge(state.store.as_ref(), &state.config, other).await.unwrap();

    let err = login(state.store.as_ref(), &state.config, other, &sign_personal(&challenge.message))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::SignerMismatch));
    assert_eq!(store.session_count().await, 0);
}

#[tokio::test]
async fn malformed_signature_keeps_nonce() {
    let (state, store) = test_app_state();
    issue_challenge(state.store.as_ref(), &state.config, TEST_ADDRESS).await.unwrap();

    let err = login(state.store.as_ref(), &state.config, TEST_ADDRESS, "0x1234").await.unwrap_err();

    assert!(matches!(err, LoginError::Malformed(SignatureError::InvalidEncoding)));
    assert!(store.has_nonce(TEST_ADDRESS).await);
}

#[tokio::test]
async fn login_without_nonce_fails() {
    let (state, _) = test_app_state();
    let err = login(state.store.as_ref(), &state.config, TEST_ADDRESS, &sign_personal("anything"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::NonceMissing));
}
