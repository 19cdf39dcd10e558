use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::success("one"));
    let b = state.push(Notice::error("two"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].level, NoticeLevel::Error);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::success("one"));
    let b = state.push(Notice::success("two"));
    assert!(state.dismiss(a));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_of_unknown_id_is_false() {
    let mut state = NoticeState::default();
    state.push(Notice::success("one"));
    assert!(!state.dismiss(99));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn push_drops_oldest_beyond_capacity() {
    let mut state = NoticeState::default();
    for i in 0..(MAX_VISIBLE + 2) {
        state.push(Notice::success(format!("n{i}")));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].message, "n2");
}

#[test]
fn ids_keep_growing_after_dismissal() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::success("one"));
    state.dismiss(a);
    let b = state.push(Notice::success("two"));
    assert_ne!(a, b);
}

#[test]
fn level_class_distinguishes_levels() {
    assert_ne!(level_class(NoticeLevel::Success), level_class(NoticeLevel::Error));
}
