use reflex_core::Status;

#[test]
fn invert_swaps_only_the_terminal_outcomes() {
    assert_eq!(Status::Success.invert(), Status::Failure);
    assert_eq!(Status::Failure.invert(), Status::Success);
    assert_eq!(Status::Running.invert(), Status::Running);
    assert_eq!(Status::Error.invert(), Status::Error);
}

#[test]
fn running_is_the_only_non_terminal_status() {
    assert!(Status::Success.is_terminal());
    assert!(Status::Failure.is_terminal());
    assert!(Status::Error.is_terminal());
    assert!(!Status::Running.is_terminal());
    assert!(Status::Running.is_running());
}

#[test]
fn codes_are_stable() {
    assert_eq!(Status::Success.code(), 0);
    assert_eq!(Status::Failure.code(), 1);
    assert_eq!(Status::Running.code(), 2);
    assert_eq!(Status::Error.code(), 255);
}
