use super::*;

#[test]
fn first_valid_account_wins() {
    let accounts = vec![
        "not-an-address".to_owned(),
        "0xABC0000000000000000000000000000000000001".to_owned(),
        "0xdef0000000000000000000000000000000000002".to_owned(),
    ];
    let account = account_from_list(&accounts);
    assert!(account.connected);
    assert_eq!(account.address.map(String::from).as_deref(), Some("0xabc0000000000000000000000000000000000001"));
}

#[test]
fn empty_list_means_disconnected() {
    assert_eq!(account_from_list(&[]), WalletAccount::disconnected());
    assert_eq!(account_from_list(&["0x12".to_owned()]), WalletAccount::disconnected());
}
