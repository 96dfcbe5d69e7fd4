use reflex_core::{BbKey, Blackboard};

#[test]
fn blackboard_set_get_remove_roundtrip() {
    let k_u32 = BbKey::<u32>::new(1, "k_u32");
    let k_str = BbKey::<String>::new(2, "k_str");

    let mut bb = Blackboard::new();
    assert!(!bb.contains(k_u32));
    assert!(bb.is_empty());

    bb.set(k_u32, 123);
    bb.set(k_str, "hello".to_string());
    assert_eq!(bb.len(), 2);

    assert_eq!(bb.get(k_u32).copied(), Some(123));
    assert_eq!(bb.get(k_str).map(|s| s.as_str()), Some("hello"));

    assert_eq!(bb.remove(k_u32), Some(123));
    assert_eq!(bb.get(k_u32), None);
}

#[test]
fn get_or_insert_with_initializes_vacant_slot_once() {
    let key = BbKey::<u32>::new(3, "counter");
    let mut bb = Blackboard::new();

    *bb.get_or_insert_with(key, || 10) += 1;
    *bb.get_or_insert_with(key, || 99) += 1;

    assert_eq!(bb.get(key).copied(), Some(12));
}

#[test]
fn clear_drops_all_slots() {
    let key = BbKey::<u32>::new(4, "slot");
    let mut bb = Blackboard::new();
    bb.set(key, 7);
    bb.clear();
    assert!(bb.is_empty());
    assert_eq!(bb.get(key), None);
}

#[test]
#[should_panic(expected = "blackboard type mismatch")]
fn blackboard_type_mismatch_panics() {
    let mut bb = Blackboard::new();
    bb.set(BbKey::<u32>::new(1, "slot"), 1u32);
    let _ = bb.get(BbKey::<i32>::new(1, "slot"));
}
