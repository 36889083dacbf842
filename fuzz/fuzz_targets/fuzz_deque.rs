#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pushlex::CircularDeque;

#[derive(Debug, Arbitrary)]
enum Op {
    AddFirst(u16),
    AddLast(u16),
    RemoveFirst,
    RemoveLast,
    Insert(u16, u16),
    RemoveAt(u16),
    Set(u16, u16),
    Retain(u8),
    Clear,
}

fn deque(ops: Vec<Op>) {
    let mut deque = CircularDeque::new();
    let mut model = VecDeque::new();

    for op in ops {
        match op {
            Op::AddFirst(v) => {
                deque.add_first(v);
                model.push_front(v);
            }
            Op::AddLast(v) => {
                deque.add_last(v);
                model.push_back(v);
            }
            Op::RemoveFirst => assert_eq!(deque.remove_first().ok(), model.pop_front()),
            Op::RemoveLast => assert_eq!(deque.remove_last().ok(), model.pop_back()),
            Op::Insert(i, v) => {
                let i = usize::from(i);
                let ok = deque.insert(i, v).is_ok();
                assert_eq!(ok, i <= model.len());
                if ok {
                    model.insert(i, v);
                }
            }
            Op::RemoveAt(i) => {
                let i = usize::from(i);
                assert_eq!(deque.remove_at(i).ok(), model.remove(i));
            }
            Op::Set(i, v) => {
                let i = usize::from(i);
                let expected = model.get_mut(i).map(|slot| std::mem::replace(slot, v));
                assert_eq!(deque.set(i, v).ok(), expected);
            }
            Op::Retain(m) => {
                let m = u16::from(m.max(1));
                deque.retain(|x| x % m != 0);
                model.retain(|x| x % m != 0);
            }
            Op::Clear => {
                deque.clear();
                model.clear();
            }
        }
        assert_eq!(deque.len(), model.len());
        assert!(deque.iter().eq(model.iter()));
    }
}

fuzz_target!(|ops: Vec<Op>| deque(ops));
