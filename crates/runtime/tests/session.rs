use hearthwild_content::ContentFactory;
use hearthwild_core::{
    ActionError, Actor, Fighter, GameConfig, GameState, Grid, Inventory, Offset, Position, Rgb,
    Survival, Tile, TileKind,
};
use hearthwild_runtime::{
    Command, CommandOutcome, FileStateRepository, RuntimeError, Session, StateRepository,
};

/// A 10x6 floor with a wall at x = 4 open only on the bottom row.
fn walled_session() -> Session {
    let config = GameConfig::default();
    let mut grid = Grid::new(10, 6, Tile::from_kind(TileKind::Floor)).unwrap();
    for y in 0..5 {
        grid.set_tile(Position::new(4, y), Tile::from_kind(TileKind::Wall));
    }
    let player = grid.add_actor(
        Actor::new(Position::new(1, 1), '@', Rgb::WHITE, "player")
            .with_fighter(Fighter::new(30, 2, 5))
            .with_inventory(Inventory::default())
            .with_survival(Survival::default()),
    );
    Session::new(GameState::new(grid, player, &config), config, 1)
}

fn clearing(seed: u64) -> Session {
    let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data"));
    let config = factory.load_config().unwrap();
    let state = factory.load_level("clearing", &config).unwrap();
    Session::new(state, config, seed)
}

fn player(session: &Session) -> Position {
    session.state().player_position().unwrap()
}

#[test]
fn travel_follows_the_route_around_walls() {
    let mut session = walled_session();
    let goal = Position::new(7, 1);

    let mut turns = 0;
    while player(&session) != goal {
        let before = player(&session);
        let outcome = session.submit(Command::Travel(goal)).unwrap();
        assert!(outcome.report().is_some());
        assert_eq!(before.chebyshev(player(&session)), 1);
        assert!(session.state().grid.is_passable(player(&session)));
        turns += 1;
        assert!(turns <= 12, "travel did not converge");
    }
    assert_eq!(session.turn(), turns);
}

#[test]
fn travel_without_route_consumes_no_turn() {
    let mut session = walled_session();

    let error = session.submit(Command::Travel(Position::new(4, 2))).unwrap_err();
    assert!(matches!(error, RuntimeError::NoRoute { goal, .. } if goal == Position::new(4, 2)));

    let error = session.submit(Command::Travel(Position::new(1, 1))).unwrap_err();
    assert!(matches!(error, RuntimeError::NoRoute { .. }));
    assert_eq!(session.turn(), 0);
}

#[test]
fn refused_moves_surface_the_engine_reason() {
    let mut session = walled_session();
    session.submit(Command::Move(Offset::new(1, 0))).unwrap();
    session.submit(Command::Move(Offset::new(1, 0))).unwrap();

    let error = session.submit(Command::Move(Offset::new(1, 0))).unwrap_err();
    assert!(matches!(
        error,
        RuntimeError::Action(ActionError::Blocked { destination }) if destination == Position::new(4, 1)
    ));
    assert_eq!(session.turn(), 2);
}

#[test]
fn rest_toggle_is_free() {
    let mut session = walled_session();

    let outcome = session.submit(Command::ToggleRest).unwrap();
    assert_eq!(outcome, CommandOutcome::Rest { resting: true });
    assert_eq!(session.turn(), 0);

    let outcome = session.submit(Command::ToggleRest).unwrap();
    assert_eq!(outcome, CommandOutcome::Rest { resting: false });
}

#[test]
fn same_seed_replays_identically() {
    let script = [
        Command::Wait,
        Command::Move(Offset::new(1, 0)),
        Command::Move(Offset::new(1, 1)),
        Command::Travel(Position::new(12, 8)),
        Command::Wait,
    ];
    let mut first = clearing(42);
    let mut second = clearing(42);

    for _ in 0..6 {
        for command in script {
            let a = first.submit(command).ok();
            let b = second.submit(command).ok();
            assert_eq!(a, b);
        }
    }
    assert_eq!(first.state(), second.state());
}

#[test]
fn saved_sessions_resume_where_they_left_off() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileStateRepository::new(dir.path()).unwrap();
    let mut session = clearing(9);
    for _ in 0..3 {
        session.submit(Command::Wait).unwrap();
    }

    let turn = session.save(&repository).unwrap();
    assert_eq!(turn, 3);
    assert!(repository.exists(3));

    let resumed = Session::load(&repository, 3, session.config().clone(), 9).unwrap();
    assert_eq!(resumed.state(), session.state());

    let missing = Session::load(&repository, 4, GameConfig::default(), 9);
    assert!(matches!(missing, Err(RuntimeError::MissingState { turn: 4 })));
}
