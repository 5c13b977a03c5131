use pirates_revenge::{BoardCoordinate, HoverChange, TargetResolver};

fn c(x: usize, z: usize) -> Option<BoardCoordinate> {
    Some(BoardCoordinate::new(x, z))
}

#[test]
fn test_hover_diff_sequence() {
    let mut resolver = TargetResolver::new();

    let change = resolver.update(c(1, 1));
    assert_eq!(change, HoverChange { restore: None, hover: c(1, 1) });

    let change = resolver.update(c(1, 1));
    assert!(change.is_empty());

    let change = resolver.update(c(2, 3));
    assert_eq!(change, HoverChange { restore: c(1, 1), hover: c(2, 3) });
    assert_eq!(resolver.current(), c(2, 3));

    let change = resolver.update(None);
    assert_eq!(change, HoverChange { restore: c(2, 3), hover: None });
    assert_eq!(resolver.current(), None);

    assert!(resolver.update(None).is_empty());
}

#[test]
fn test_clear_returns_hovered_cell() {
    let mut resolver = TargetResolver::new();
    assert_eq!(resolver.clear(), None);
    resolver.update(c(0, 5));
    assert_eq!(resolver.clear(), c(0, 5));
    assert_eq!(resolver.current(), None);
}
