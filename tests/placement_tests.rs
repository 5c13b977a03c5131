use pirates_revenge::{BoardCoordinate, Orientation, PlacementEngine, Rejected, BOARD_SIZE};
use rand::{rngs::SmallRng, SeedableRng};

fn c(x: usize, z: usize) -> BoardCoordinate {
    BoardCoordinate::new(x, z)
}

#[test]
fn test_ships_are_placed_in_index_order() {
    let mut engine = PlacementEngine::new(BOARD_SIZE);
    assert_eq!(engine.current_ship().unwrap().length(), 2);

    let first = engine.confirm_placement(c(0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(first.ship_index, 0);
    assert_eq!(first.cells, vec![c(0, 0), c(1, 0)]);
    assert_eq!(engine.ship_index(), 1);
    assert_eq!(engine.current_ship().unwrap().length(), 3);

    let second = engine.confirm_placement(c(5, 0), Orientation::Vertical).unwrap();
    assert_eq!(second.cells, vec![c(5, 0), c(5, 1), c(5, 2)]);

    let third = engine.confirm_placement(c(0, 5), Orientation::Horizontal).unwrap();
    assert_eq!(third.cells.len(), 4);
    assert!(engine.is_complete());
    assert_eq!(engine.ship_index(), 3);
    assert_eq!(engine.current_ship(), None);
    assert_eq!(engine.locked().len(), 9);
}

#[test]
fn test_rejected_confirm_changes_nothing() {
    let mut engine = PlacementEngine::new(BOARD_SIZE);
    engine.confirm_placement(c(2, 2), Orientation::Horizontal).unwrap();
    let before = engine.locked().clone();

    assert_eq!(
        engine.confirm_placement(c(3, 0), Orientation::Vertical),
        Err(Rejected::Overlap)
    );
    assert_eq!(
        engine.confirm_placement(c(4, 4), Orientation::Horizontal),
        Err(Rejected::OutOfBounds)
    );
    assert_eq!(engine.ship_index(), 1);
    assert_eq!(engine.locked(), &before);
}

#[test]
fn test_preview_does_not_commit() {
    let engine = PlacementEngine::new(BOARD_SIZE);
    let preview = engine.preview_at(c(1, 1), Orientation::Vertical).unwrap();
    assert_eq!(preview.cells, vec![c(1, 1), c(1, 2)]);
    assert_eq!(engine.ship_index(), 0);
    assert!(engine.locked().is_empty());
}

#[test]
fn test_toggle_orientation_only_affects_next_ship() {
    let mut engine = PlacementEngine::new(BOARD_SIZE);
    assert_eq!(engine.orientation(), Orientation::Horizontal);
    engine.confirm_placement(c(0, 0), engine.orientation()).unwrap();

    assert_eq!(engine.toggle_orientation(), Orientation::Vertical);
    assert_eq!(engine.locked().cells(), &[c(0, 0), c(1, 0)]);
    let placed = engine.confirm_placement(c(0, 1), engine.orientation()).unwrap();
    assert_eq!(placed.orientation, Orientation::Vertical);
    assert_eq!(engine.toggle_orientation(), Orientation::Horizontal);
}

#[test]
fn test_complete_engine_is_inert() {
    let mut engine = PlacementEngine::new(BOARD_SIZE);
    let mut rng = SmallRng::seed_from_u64(42);
    engine.place_all_random(&mut rng);
    assert_eq!(
        engine.confirm_placement(c(0, 0), Orientation::Horizontal),
        Err(Rejected::FleetComplete)
    );
    assert!(engine.place_all_random(&mut rng).is_empty());
    assert_eq!(engine.locked().len(), 9);
}

#[test]
fn test_random_fills_only_remaining_ships() {
    let mut engine = PlacementEngine::new(BOARD_SIZE);
    engine.confirm_placement(c(0, 0), Orientation::Vertical).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let placed = engine.place_all_random(&mut rng);
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].ship_index, 1);
    assert_eq!(placed[1].ship_index, 2);
    assert_eq!(&engine.locked().cells()[..2], &[c(0, 0), c(0, 1)]);
}

#[test]
fn test_random_placement_is_reproducible() {
    let mut a = PlacementEngine::new(BOARD_SIZE);
    let mut b = PlacementEngine::new(BOARD_SIZE);
    a.place_all_random(&mut SmallRng::seed_from_u64(99));
    b.place_all_random(&mut SmallRng::seed_from_u64(99));
    assert_eq!(a.locked(), b.locked());
}
