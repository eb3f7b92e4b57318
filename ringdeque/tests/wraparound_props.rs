//! Model-based property tests: arbitrary front/back operation sequences
//! against `std::collections::VecDeque`, exercising index wraparound far
//! past the ring capacity.

use std::collections::VecDeque;

use proptest::prelude::*;
use ringdeque::Deque;

#[derive(Debug, Clone, Copy)]
enum Op {
    PushFront(u8),
    PushBack(u8),
    PopFront,
    PopBack,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::PushFront),
        any::<u8>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
    ]
}

proptest! {
    #[test]
    fn deque_matches_vecdeque_model(
        ops in prop::collection::vec(op_strategy(), 1..400),
        capacity in 1usize..8,
    ) {
        let mut storage = vec![0u8; capacity];
        let mut deque = Deque::new(&mut storage).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    if model.len() < capacity {
                        model.push_front(v);
                        prop_assert!(deque.push_front(v).is_ok());
                    } else {
                        prop_assert!(deque.push_front(v).is_err());
                    }
                }
                Op::PushBack(v) => {
                    if model.len() < capacity {
                        model.push_back(v);
                        prop_assert!(deque.push_back(v).is_ok());
                    } else {
                        prop_assert!(deque.push_back(v).is_err());
                    }
                }
                Op::PopFront => {
                    prop_assert_eq!(deque.pop_front(), model.pop_front());
                }
                Op::PopBack => {
                    prop_assert_eq!(deque.pop_back(), model.pop_back());
                }
            }

            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.front(), model.front());
            prop_assert_eq!(deque.back(), model.back());
        }

        let collected: Vec<u8> = deque.iter().copied().collect();
        let expected: Vec<u8> = model.iter().copied().collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn fifo_order_survives_wraparound(
        capacity in 1usize..16,
        rounds in 1usize..64,
    ) {
        let mut storage = vec![0usize; capacity];
        let mut deque = Deque::new(&mut storage).unwrap();

        let mut pushed = 0;
        let mut popped = 0;
        for _ in 0..rounds {
            while !deque.is_full() {
                deque.push_back(pushed).unwrap();
                pushed += 1;
            }
            prop_assert_eq!(deque.pop_front(), Some(popped));
            popped += 1;
        }
    }
}
