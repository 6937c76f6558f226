use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastVariant::Success, "Attributes saved.");
    let b = state.push(ToastVariant::Danger, "Failed to save (HTTP 500)");

    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Attributes saved.");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastVariant::Neutral, "Changes have been reset.");
    let b = state.push(ToastVariant::Success, "Link copied");

    state.dismiss(a);
    state.dismiss(999);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn variants_map_to_distinct_classes() {
    let all = [
        ToastVariant::Primary,
        ToastVariant::Success,
        ToastVariant::Neutral,
        ToastVariant::Warning,
        ToastVariant::Danger,
    ];
    let mut classes: Vec<_> = all.iter().map(|v| v.class()).collect();
    classes.dedup();
    assert_eq!(classes.len(), all.len());
}

#[test]
fn success_and_warning_have_own_icons() {
    assert_ne!(ToastVariant::Success.icon(), ToastVariant::Danger.icon());
    assert_ne!(ToastVariant::Warning.icon(), ToastVariant::Danger.icon());
    assert_eq!(ToastVariant::Primary.icon(), ToastVariant::Danger.icon());
}

#[test]
fn toast_duration_is_three_seconds() {
    assert_eq!(TOAST_DURATION_MS, 3000);
}
