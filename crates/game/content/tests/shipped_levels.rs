use std::path::PathBuf;

use atomix_content::{ContentFactory, FileSaveRepository, SaveRepository};
use atomix_core::{AtomHandle, Direction, GameEngine, GameEvent, PuzzleState};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data"))
}

/// (atom, direction, expected distance)
const WATER_SOLUTION: [(u32, Direction, u32); 7] = [
    (0, Direction::Down, 2),
    (0, Direction::Right, 8),
    (0, Direction::Down, 9),
    (0, Direction::Left, 9),
    (1, Direction::Down, 11),
    (0, Direction::Right, 8),
    (2, Direction::Down, 6),
];

const CARBON_DIOXIDE_SOLUTION: [(u32, Direction, u32); 7] = [
    (0, Direction::Down, 2),
    (0, Direction::Right, 7),
    (0, Direction::Up, 3),
    (1, Direction::Up, 2),
    (2, Direction::Right, 4),
    (2, Direction::Up, 8),
    (2, Direction::Left, 2),
];

fn play(engine: &mut GameEngine<'_>, steps: &[(u32, Direction, u32)]) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for &(atom, direction, distance) in steps {
        engine.select_atom(AtomHandle(atom)).unwrap();
        assert_eq!(engine.slide_distance(direction), distance);
        events.extend(engine.interactive_move(direction).unwrap());
        events.extend(engine.complete_move().unwrap());
    }
    events
}

#[test]
fn every_shipped_level_loads() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let names = factory.list_levels().unwrap();
    assert!(names.contains(&"water".to_owned()));

    for name in names {
        let level = factory.load_level(&name, &config).unwrap();
        assert_eq!(level.atom_count(), level.molecule().len(), "{name}");
    }
}

#[test]
fn water_is_solvable() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let level = factory.load_level("water", &config).unwrap();
    let mut state = PuzzleState::new(&level);
    let mut engine = GameEngine::new(&level, &mut state);
    engine.reset();

    let events = play(&mut engine, &WATER_SOLUTION);
    assert_eq!(events.last(), Some(&GameEvent::GameOver { moves: 7 }));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, GameEvent::GameOver { .. }))
            .count(),
        1
    );
}

#[test]
fn carbon_dioxide_is_solvable() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let level = factory.load_level("carbon_dioxide", &config).unwrap();
    let mut state = PuzzleState::new(&level);
    let mut engine = GameEngine::new(&level, &mut state);
    engine.reset();

    let events = play(&mut engine, &CARBON_DIOXIDE_SOLUTION);
    assert_eq!(events.last(), Some(&GameEvent::GameOver { moves: 7 }));
}

#[test]
fn saved_water_game_resumes_from_disk() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let level = factory.load_level("water", &config).unwrap();
    let saves = tempfile::tempdir().unwrap();
    let repo = FileSaveRepository::new(saves.path()).unwrap();

    let mut state = PuzzleState::new(&level);
    let mut engine = GameEngine::new(&level, &mut state);
    engine.reset();
    play(&mut engine, &WATER_SOLUTION[..4]);
    repo.save("halfway", &engine.save()).unwrap();

    let saved = repo.load("halfway").unwrap().unwrap();
    let mut resumed = PuzzleState::new(&level);
    let mut engine = GameEngine::new(&level, &mut resumed);
    engine.load_saved(&saved).unwrap();
    assert_eq!(engine.move_count(), 4);

    let events = play(&mut engine, &WATER_SOLUTION[4..]);
    assert_eq!(events.last(), Some(&GameEvent::GameOver { moves: 7 }));

    for _ in 0..7 {
        engine.undo().unwrap();
        engine.complete_move().unwrap();
    }
    assert_eq!(engine.state().board.positions(), PuzzleState::new(&level).board.positions());
}
