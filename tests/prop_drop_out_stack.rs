use drop_out_stack::{DropOutStack, StackError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    PushIfNotFull(u32),
    Pop,
    Peek,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u32>().prop_map(Op::Push),
        any::<u32>().prop_map(Op::PushIfNotFull),
        Just(Op::Pop),
        Just(Op::Peek),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_retains_last_capacity_items_newest_first(
        capacity in 1usize..16,
        items in prop::collection::vec(any::<u32>(), 0..64),
    ) {
        let mut stack = DropOutStack::new(capacity).unwrap();
        for &item in &items {
            stack.push(item);
            prop_assert!(stack.count() <= capacity);
        }

        let expected: Vec<u32> = items.iter().rev().take(capacity).copied().collect();
        prop_assert_eq!(stack.count(), expected.len());
        prop_assert_eq!(stack.is_full(), items.len() >= capacity);
        prop_assert_eq!(stack.drain().collect::<Vec<_>>(), expected);
        prop_assert!(stack.is_empty());
        prop_assert_eq!(stack.drain().next(), None);
    }

    #[test]
    fn prop_matches_bounded_vec_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(op(), 0..128),
    ) {
        let mut stack = DropOutStack::new(capacity).unwrap();
        // oldest at index 0, newest at the end
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    if model.len() == capacity {
                        model.remove(0);
                    }
                    model.push(value);
                    stack.push(value);
                }
                Op::PushIfNotFull(value) => {
                    let was_full = model.len() == capacity;
                    if !was_full {
                        model.push(value);
                    }
                    prop_assert_eq!(stack.push_if_not_full(value), !was_full);
                }
                Op::Pop => match model.pop() {
                    Some(expected) => prop_assert_eq!(stack.pop(), Ok(expected)),
                    None => {
                        prop_assert_eq!(stack.pop(), Err(StackError::EmptyContainer));
                        prop_assert_eq!(stack.try_pop(), None);
                    }
                },
                Op::Peek => {
                    let before = (stack.count(), stack.is_empty(), stack.is_full());
                    prop_assert_eq!(stack.try_peek(), model.last());
                    match model.last() {
                        Some(expected) => prop_assert_eq!(stack.peek(), Ok(expected)),
                        None => prop_assert_eq!(stack.peek(), Err(StackError::EmptyContainer)),
                    }
                    prop_assert_eq!(before, (stack.count(), stack.is_empty(), stack.is_full()));
                }
            }

            prop_assert_eq!(stack.count(), model.len());
            prop_assert_eq!(stack.is_empty(), model.is_empty());
            prop_assert_eq!(stack.is_full(), model.len() == capacity);
        }

        let expected: Vec<u32> = model.into_iter().rev().collect();
        prop_assert_eq!(stack.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_pop_after_push_on_empty(capacity in 1usize..16, value in any::<u32>()) {
        let mut stack = DropOutStack::new(capacity).unwrap();
        stack.push(value);
        prop_assert_eq!(stack.pop(), Ok(value));
        prop_assert!(stack.is_empty());
    }
}

#[test]
fn test_capacity_three_scenario() {
    let mut stack = DropOutStack::new(3).unwrap();
    for value in 1..=4 {
        stack.push(value);
    }

    assert_eq!(stack.pop(), Ok(4));
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(StackError::EmptyContainer));
}

#[test]
fn test_zero_capacity_is_invalid() {
    assert_eq!(
        DropOutStack::<u8>::new(0).err(),
        Some(StackError::InvalidCapacity { capacity: 0 })
    );
}
