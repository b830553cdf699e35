use super::*;
use crate::{node::Link, DEFAULT_MAX_HEIGHT};

use std::{format, vec::Vec};

use proptest::prelude::*;

fn seeded<T>(max_height: usize, seed: u64) -> SkipList<T> {
  SkipList::with_options(Options::new().with_max_height(max_height).with_seed(seed)).unwrap()
}

fn to_vec<T: Clone>(list: &SkipList<T>) -> Vec<T> {
  list.iter().cloned().collect()
}

/// Walks the whole graph and checks every structural invariant: level 0 is a sorted doubly
/// linked chain starting at the head, and every level links exactly the nodes taller than it,
/// in order, symmetrically in both directions.
fn check_invariants<T: Ord + fmt::Debug>(list: &SkipList<T>) {
  let arena = list.arena();

  let mut order = Vec::new();
  let mut prev = None;
  let mut cur = list.head();
  while let Some(id) = cur {
    assert_eq!(arena[id].prev(), prev, "broken level 0 back link");
    order.push(id);
    prev = cur;
    cur = arena[id].next();
  }

  assert_eq!(order.len(), list.len());
  assert_eq!(arena.len(), list.len());
  assert_eq!(list.is_empty(), list.head().is_none());

  for pair in order.windows(2) {
    assert!(
      arena[pair[0]].value() <= arena[pair[1]].value(),
      "{:?} ordered before {:?}",
      arena[pair[0]].value(),
      arena[pair[1]].value()
    );
  }

  for &id in &order {
    let height = arena[id].height();
    assert!(height >= 1 && height <= list.max_height());
  }

  for level in 0..list.max_height() {
    let tall: Vec<_> = order
      .iter()
      .copied()
      .filter(|&id| arena[id].height() > level)
      .collect();

    for (i, &id) in tall.iter().enumerate() {
      let expected = Link {
        prev: i.checked_sub(1).map(|i| tall[i]),
        next: tall.get(i + 1).copied(),
      };
      assert_eq!(
        arena[id].tower()[level],
        expected,
        "bad tower of {:?} at level {level}",
        arena[id].value()
      );
    }
  }
}

#[test]
fn test_empty() {
  let mut list = seeded::<u32>(8, 0);
  assert!(list.is_empty());
  assert_eq!(list.len(), 0);
  assert_eq!(list.first(), None);
  assert_eq!(list.last(), None);
  assert!(list.first_entry().is_none());
  assert!(!list.contains(&42));
  assert_eq!(list.iter().next(), None);

  assert_eq!(list.remove(&42), None);
  assert_eq!(list.len(), 0);
  check_invariants(&list);
}

#[test]
fn test_invalid_configuration() {
  assert_eq!(
    SkipList::<u32>::with_options(Options::new().with_max_height(0)).err(),
    Some(Error::InvalidConfiguration { requested: 0 })
  );
  assert_eq!(
    SkipList::<u32>::with_options(Options::new().with_max_height(32)).err(),
    Some(Error::InvalidConfiguration { requested: 32 })
  );
  assert!(SkipList::<u32>::with_options(Options::new().with_max_height(31)).is_ok());
}

#[test]
fn test_descending_insert_then_remove() {
  let mut list = seeded(8, 2024);
  for i in (1..=100u32).rev() {
    list.insert(i);
    check_invariants(&list);
  }

  assert_eq!(list.len(), 100);
  assert_eq!(to_vec(&list), (1..=100).collect::<Vec<_>>());
  assert_eq!(list.first(), Some(&1));
  assert_eq!(list.last(), Some(&100));

  assert_eq!(list.remove(&95), Some(95));
  check_invariants(&list);
  assert_eq!(list.len(), 99);
  assert!(!list.contains(&95));
  assert_eq!(
    to_vec(&list),
    (1..=100).filter(|&i| i != 95).collect::<Vec<_>>()
  );
}

#[test]
fn test_remove_head_and_tail() {
  let mut list = seeded(4, 7);
  list.extend([10u32, 20, 30, 40, 50]);

  assert_eq!(list.remove(&10), Some(10));
  check_invariants(&list);
  assert_eq!(list.first(), Some(&20));

  assert_eq!(list.remove(&50), Some(50));
  check_invariants(&list);
  assert_eq!(list.last(), Some(&40));

  list.insert(5);
  check_invariants(&list);
  assert_eq!(list.first(), Some(&5));
  assert_eq!(to_vec(&list), [5, 20, 30, 40]);

  for v in [5, 20, 30, 40] {
    assert_eq!(list.remove(&v), Some(v));
    check_invariants(&list);
  }
  assert!(list.is_empty());
  assert_eq!(list.first(), None);

  list.insert(1);
  check_invariants(&list);
  assert_eq!(to_vec(&list), [1]);
}

#[test]
fn test_remove_absent_is_noop() {
  let mut list = seeded(6, 3);
  list.extend([1u32, 3, 5, 7]);

  for v in [0, 2, 4, 6, 8] {
    assert_eq!(list.remove(&v), None);
    assert_eq!(list.try_remove(&v), Err(Error::ElementNotFound));
    check_invariants(&list);
  }
  assert_eq!(list.len(), 4);
  assert_eq!(to_vec(&list), [1, 3, 5, 7]);
  assert_eq!(list.try_remove(&3), Ok(3));
}

#[test]
fn test_duplicates_tracked_individually() {
  let mut list = seeded(8, 11);
  list.insert(5u32);
  list.insert(5);
  list.remove(&5);
  list.remove(&5);
  check_invariants(&list);
  assert!(!list.contains(&5));
  assert!(list.is_empty());

  list.extend([5, 5, 5]);
  list.remove(&5);
  list.remove(&5);
  check_invariants(&list);
  assert_eq!(to_vec(&list), [5]);
}

#[derive(Debug, Clone, Copy)]
struct Tagged {
  key: u8,
  tag: usize,
}

impl PartialEq for Tagged {
  fn eq(&self, other: &Self) -> bool {
    self.key == other.key
  }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
  fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Tagged {
  fn cmp(&self, other: &Self) -> cmp::Ordering {
    self.key.cmp(&other.key)
  }
}

impl Borrow<u8> for Tagged {
  fn borrow(&self) -> &u8 {
    &self.key
  }
}

#[test]
fn test_duplicates_keep_insertion_order() {
  let keys = [3u8, 1, 3, 2, 1, 3, 2, 3, 1];
  for seed in 0..16 {
    let mut list = seeded(4, seed);
    for (tag, &key) in keys.iter().enumerate() {
      list.insert(Tagged { key, tag });
      check_invariants(&list);
    }

    let got: Vec<_> = list.iter().map(|t| (t.key, t.tag)).collect();
    let mut expected: Vec<_> = keys.iter().copied().zip(0..).collect();
    // stable sort keeps the insertion order of equal keys
    expected.sort_by_key(|&(key, _)| key);
    assert_eq!(got, expected, "seed {seed}");
  }
}

#[test]
fn test_lookup_by_ordering_equality() {
  let mut list = seeded(4, 5);
  list.insert(Tagged { key: 4, tag: 0 });
  list.insert(Tagged { key: 9, tag: 1 });

  // lookups use the ordering, not identity
  assert!(list.contains(&Tagged { key: 9, tag: 100 }));
  assert_eq!(list.get(&4u8).map(|t| t.tag), Some(0));
  assert_eq!(list.remove(&9u8).map(|t| t.tag), Some(1));
  assert!(!list.contains(&9u8));
  check_invariants(&list);
}

#[test]
fn test_max_height_one_degenerates() {
  let mut list = seeded(1, 99);
  for i in [5u32, 3, 9, 1, 7, 3] {
    list.insert(i);
    check_invariants(&list);
  }
  assert!(list.entries().all(|e| e.height() == 1));
  assert_eq!(to_vec(&list), [1, 3, 3, 5, 7, 9]);

  assert_eq!(list.remove(&3), Some(3));
  assert_eq!(list.remove(&9), Some(9));
  assert_eq!(list.remove(&1), Some(1));
  assert_eq!(list.remove(&4), None);
  check_invariants(&list);
  assert_eq!(to_vec(&list), [3, 5, 7]);
}

#[test]
fn test_seed_reproduces_shape() {
  let shape = |seed| {
    let mut list = seeded(12, seed);
    list.extend(0..200u32);
    let heights: Vec<_> = list.entries().map(|e| e.height()).collect();
    heights
  };

  assert_eq!(shape(42), shape(42));
  assert_ne!(shape(42), shape(43));
}

#[test]
fn test_entry_navigation() {
  let mut list = seeded(8, 1);
  list.extend([1u32, 2, 3, 4, 5, 6, 7, 8]);

  let first = list.first_entry().unwrap();
  assert_eq!(*first.value(), 1);
  assert!(first.prev().is_none());

  let third = first.next().and_then(|e| e.next()).unwrap();
  assert_eq!(*third.value(), 3);
  assert_eq!(third.prev().map(|e| *e.value()), Some(2));

  // every level jumps to the nearest taller node
  for entry in list.entries() {
    assert!(entry.next_at(entry.height()).is_none());
    for level in 0..entry.height() {
      if let Some(next) = entry.next_at(level) {
        assert!(next.height() > level);
        assert!(next.value() > entry.value());
        assert_eq!(next.prev_at(level).map(|e| *e.value()), Some(*entry.value()));
      }
    }
  }

  let found = list.find(&6).unwrap();
  assert_eq!(*found.value(), 6);
  assert!(list.find(&60).is_none());
  assert_eq!(format!("{:?}", list.find(&1).map(|e| *e.value())), "Some(1)");
}

#[test]
fn test_iter_is_exact_and_restartable() {
  let list: SkipList<u32> = (0..10).rev().collect();
  let mut iter = list.iter();
  assert_eq!(iter.len(), 10);
  iter.next();
  assert_eq!(iter.size_hint(), (9, Some(9)));
  assert_eq!(iter.clone().count(), 9);

  assert!(list.iter().copied().eq(0..10));
  assert!((&list).into_iter().copied().eq(0..10));

  let mut drained = list.iter();
  for _ in 0..10 {
    drained.next();
  }
  assert_eq!(drained.next(), None);
  assert_eq!(drained.next(), None);
}

#[test]
fn test_clear_and_reuse() {
  let mut list = seeded(6, 8);
  list.extend(0..64u32);
  list.clear();
  check_invariants(&list);
  assert!(list.is_empty());

  list.extend([3, 1, 2]);
  check_invariants(&list);
  assert_eq!(to_vec(&list), [1, 2, 3]);
}

#[test]
fn test_freed_slots_are_reused() {
  let mut list = seeded(6, 8);
  list.extend(0..32u32);
  for i in 0..32 {
    list.remove(&i);
    list.insert(i + 100);
    check_invariants(&list);
  }
  assert_eq!(list.arena().capacity(), 32);
  assert_eq!(to_vec(&list), (100..132).collect::<Vec<_>>());
}

#[test]
fn test_debug_and_towers() {
  let mut list = seeded(3, 4);
  list.extend([2u32, 1]);
  assert_eq!(format!("{list:?}"), "{1, 2}");

  let towers = format!("{}", list.towers());
  assert!(towers.starts_with("max height: 3, len: 2\n"));
  assert!(towers.contains("forward:"));
  assert!(towers.contains("backward:"));
}

#[derive(Debug, Clone)]
enum Op {
  Insert(u8),
  Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
  prop_oneof![
    3 => (0u8..48).prop_map(Op::Insert),
    2 => (0u8..48).prop_map(Op::Remove),
  ]
}

proptest! {
  #[test]
  fn prop_matches_sorted_model(
    max_height in 1usize..=10,
    seed in any::<u64>(),
    ops in prop::collection::vec(op(), 0..300),
  ) {
    let mut list = seeded(max_height, seed);
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
      match op {
        Op::Insert(v) => {
          list.insert(v);
          let at = model.partition_point(|&x| x <= v);
          model.insert(at, v);
        }
        Op::Remove(v) => {
          let expected = model.binary_search(&v).ok().map(|at| model.remove(at));
          prop_assert_eq!(list.remove(&v), expected);
        }
      }

      check_invariants(&list);
      prop_assert_eq!(list.len(), model.len());
      prop_assert_eq!(list.first(), model.first());
      prop_assert_eq!(list.last(), model.last());
    }

    prop_assert_eq!(to_vec(&list), model);
  }

  #[test]
  fn prop_insert_then_remove_subset(
    values in prop::collection::btree_set(any::<u32>(), 0..200),
    take in 0usize..200,
    seed in any::<u64>(),
  ) {
    let mut values = values;
    let mut list = seeded(DEFAULT_MAX_HEIGHT, seed);
    list.extend(values.iter().rev().copied());

    let removed: Vec<u32> = values.iter().copied().step_by(2).take(take).collect();
    for v in &removed {
      prop_assert_eq!(list.remove(v), Some(*v));
      values.remove(v);
    }

    check_invariants(&list);
    prop_assert_eq!(list.len(), values.len());
    prop_assert_eq!(to_vec(&list), values.into_iter().collect::<Vec<_>>());
  }
}
