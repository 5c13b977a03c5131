mod common;

use common::tracker_of;
use pirates_revenge::{
    validate, BoardCoordinate, CellMask, CellMaskError, OccupancyTracker, Orientation, Rejected,
    BOARD_SIZE,
};

fn c(x: usize, z: usize) -> BoardCoordinate {
    BoardCoordinate::new(x, z)
}

#[test]
fn test_horizontal_overrun_is_rejected() {
    let locked = OccupancyTracker::new();
    let res = validate(c(4, 0), Orientation::Horizontal, 3, &locked, BOARD_SIZE);
    assert_eq!(res, Err(Rejected::OutOfBounds));
}

#[test]
fn test_overlap_is_rejected() {
    let locked = tracker_of([c(2, 2)]);
    let res = validate(c(1, 2), Orientation::Horizontal, 3, &locked, BOARD_SIZE);
    assert_eq!(res, Err(Rejected::Overlap));
}

#[test]
fn test_vertical_placement_cells() {
    let locked = OccupancyTracker::new();
    let cells = validate(c(0, 0), Orientation::Vertical, 2, &locked, BOARD_SIZE).unwrap();
    assert_eq!(cells, vec![c(0, 0), c(0, 1)]);
}

#[test]
fn test_anchor_itself_is_checked() {
    let locked = tracker_of([c(3, 3)]);
    assert_eq!(
        validate(c(3, 3), Orientation::Vertical, 2, &locked, BOARD_SIZE),
        Err(Rejected::Overlap)
    );
    assert_eq!(
        validate(c(6, 0), Orientation::Vertical, 2, &locked, BOARD_SIZE),
        Err(Rejected::OutOfBounds)
    );
}

#[test]
fn test_fits_flush_against_edge() {
    let locked = OccupancyTracker::new();
    let cells = validate(c(2, 5), Orientation::Horizontal, 4, &locked, BOARD_SIZE).unwrap();
    assert_eq!(cells, vec![c(2, 5), c(3, 5), c(4, 5), c(5, 5)]);
}

#[test]
fn test_lock_is_all_or_nothing() {
    let mut tracker = OccupancyTracker::new();
    tracker.lock(&[c(0, 0), c(1, 0)]).unwrap();
    assert_eq!(tracker.lock(&[c(1, 1), c(1, 0)]), Err(Rejected::Overlap));
    assert_eq!(tracker.cells(), &[c(0, 0), c(1, 0)]);
    assert!(!tracker.contains(c(1, 1)));

    assert_eq!(tracker.lock(&[c(2, 2), c(2, 2)]), Err(Rejected::Overlap));
    assert_eq!(tracker.len(), 2);
}

#[test]
fn test_tracker_keeps_insertion_order_and_clears() {
    let mut tracker = OccupancyTracker::new();
    tracker.lock(&[c(5, 5), c(0, 0)]).unwrap();
    tracker.lock(&[c(3, 1)]).unwrap();
    let order: Vec<_> = tracker.iter().collect();
    assert_eq!(order, vec![c(5, 5), c(0, 0), c(3, 1)]);

    tracker.clear();
    assert!(tracker.is_empty());
    assert!(!tracker.contains(c(5, 5)));
}

#[test]
fn test_lock_refuses_cells_beyond_mask() {
    let mut tracker = OccupancyTracker::new();
    assert_eq!(tracker.lock(&[c(1, 1), c(8, 0)]), Err(Rejected::OutOfBounds));
    assert!(tracker.is_empty());
    assert!(!tracker.contains(c(1, 1)));
}

#[test]
fn test_cell_mask_sizes() {
    assert!(CellMask::<u64, 8>::try_new().is_ok());
    let err = CellMask::<u8, 3>::try_new();
    assert!(matches!(err, Err(CellMaskError::SizeTooLarge { .. })));
}

#[test]
fn test_cell_mask_insert_and_iter() {
    let mut mask = CellMask::<u64, 6>::new();
    mask.insert(c(4, 1)).unwrap();
    mask.insert(c(0, 3)).unwrap();
    assert_eq!(
        mask.insert(c(6, 0)),
        Err(CellMaskError::OutOfBounds { x: 6, z: 0 })
    );
    assert!(mask.contains(c(4, 1)));
    assert!(!mask.contains(c(1, 4)));
    assert!(!mask.contains(c(9, 9)));
    let cells: Vec<_> = mask.iter().collect();
    assert_eq!(cells, vec![c(4, 1), c(0, 3)]);
    assert_eq!(mask.count(), 2);
}
