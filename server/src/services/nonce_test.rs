use super::*;

#[test]
fn nonce_is_32_hex_chars() {
    let nonce = generate_nonce();
    assert_eq!(nonce.len(), 32);
    assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn nonces_differ() {
    assert_ne!(generate_nonce(), generate_nonce());
}

#[test]
fn challenge_embeds_address_nonce_and_chain() {
    let message = challenge_message("The Gods", "0xabc", "n1", 1);
    assert_eq!(
        message,
        "The Gods wants you to sign in with your Ethereum account:\n0xabc\n\nNonce: n1\nChain ID: 1"
    );
}

#[test]
fn challenge_is_deterministic() {
    assert_eq!(challenge_message("s", "0xabc", "n", 5), challenge_message("s", "0xabc", "n", 5));
}
