use super::*;

fn base() -> GodMetadata {
    GodMetadata {
        element: ElementType::Stone,
        gender: Gender::Man,
        parts: [("Hair".to_owned(), "Short".to_owned())].into_iter().collect(),
    }
}

#[test]
fn element_edit_changes_type() {
    let next = apply_edit(&base(), AttributeEdit::Element(ElementType::Water)).expect("changed");
    assert_eq!(next.element, ElementType::Water);
    assert_eq!(next.parts, base().parts);
}

#[test]
fn same_value_is_not_a_change() {
    assert_eq!(apply_edit(&base(), AttributeEdit::Gender(Gender::Man)), None);
    assert_eq!(
        apply_edit(&base(), AttributeEdit::Part { category: "Hair".to_owned(), value: " Short ".to_owned() }),
        None
    );
}

#[test]
fn part_edit_is_trimmed() {
    let next = apply_edit(&base(), AttributeEdit::Part { category: "Hair".to_owned(), value: " Long ".to_owned() })
        .expect("changed");
    assert_eq!(next.parts.get("Hair").map(String::as_str), Some("Long"));
}
