//! Integration tests for usecases_data_structures crate

use entities_data_handling::{Integ, Str, TypeTag};
use usecases_data_structures::*;

#[test]
fn test_stack_of_strings() {
    let mut stack = Stack::new(Str::new(" first ")).unwrap();
    stack.push(Str::new("second")).unwrap();

    let mut top = match stack.pop() {
        Some(StackItem::Str(s)) => s,
        other => panic!("expected a string item, got {:?}", other),
    };
    assert_eq!(top.upcase().active(), "SECOND");

    match stack.peek() {
        Some(StackItem::Str(s)) => assert_eq!(s.original(), " first "),
        other => panic!("expected a string item, got {:?}", other),
    }
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_mismatch_keeps_stack_intact() {
    let mut stack = Stack::new(Integ::new(10)).unwrap();
    let err = stack.push(Str::new("ten")).unwrap_err();
    assert_eq!(
        err,
        StackError::TypeMismatch {
            expected: TypeTag::Integer,
            found: TypeTag::String
        }
    );
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Some(&StackItem::Integ(Integ::new(10))));
}
