use hearthwild_core::{
    ActionError, Actor, AiBehavior, Fighter, GameConfig, GameEngine, GamePhase, GameState, Grid,
    HostileAi, Inventory, Item, Offset, PassiveAi, PlayerAction, PlayerOutcome, Position, Rgb,
    Survival, Tile, TileKind,
};
use rand::SeedableRng;
use rand::rngs::mock::StepRng;
use rand_chacha::ChaCha8Rng;

fn player_at(position: Position) -> Actor {
    Actor::new(position, '@', Rgb::WHITE, "player")
        .with_fighter(Fighter::new(30, 2, 5))
        .with_inventory(Inventory::default())
        .with_survival(Survival::default())
}

fn orc_at(position: Position) -> Actor {
    Actor::new(position, 'o', Rgb(0, 127, 0), "orc")
        .with_fighter(Fighter::new(16, 1, 4))
        .with_ai(AiBehavior::Hostile(HostileAi::new(8)))
}

/// A 12x12 floor room with the player placed and sight computed.
fn room(player: Position) -> (GameState, GameConfig) {
    let config = GameConfig::default();
    let mut grid = Grid::new(12, 12, Tile::from_kind(TileKind::Floor)).unwrap();
    let id = grid.add_actor(player_at(player));
    let mut state = GameState::new(grid, id, &config);
    GameEngine::new(&mut state, &config).refresh_visibility();
    (state, config)
}

fn never_rolls() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

#[test]
fn out_of_bounds_move_consumes_no_turn() {
    let (mut state, config) = room(Position::new(0, 0));
    let before = state.clone();
    let mut engine = GameEngine::new(&mut state, &config);

    let error = engine
        .take_turn(PlayerAction::Move(Offset::new(-1, 0)), &mut never_rolls())
        .unwrap_err();

    assert_eq!(
        error,
        ActionError::OutOfBounds {
            destination: Position::new(-1, 0)
        }
    );
    assert_eq!(state.clock.turn, before.clock.turn);
    assert_eq!(state.player_position(), Some(Position::new(0, 0)));
    assert_eq!(
        state.log.iter().last().map(|m| m.text.as_str()),
        Some("you can't go that way")
    );
}

#[test]
fn huge_move_delta_is_out_of_bounds_not_a_fault() {
    let (mut state, config) = room(Position::new(5, 5));
    let mut engine = GameEngine::new(&mut state, &config);

    let error = engine
        .take_turn(PlayerAction::Move(Offset::new(i32::MAX, 0)), &mut never_rolls())
        .unwrap_err();

    assert_eq!(
        error,
        ActionError::OutOfBounds {
            destination: Position::new(i32::MAX, 5)
        }
    );
    let error = engine
        .apply_player_action(Offset::new(i32::MIN, i32::MIN))
        .unwrap_err();
    assert!(matches!(error, ActionError::OutOfBounds { .. }));
    assert_eq!(state.clock.turn, 0);
    assert_eq!(state.player_position(), Some(Position::new(5, 5)));
}

#[test]
fn open_floor_move_shifts_player_by_exact_delta() {
    let (mut state, config) = room(Position::new(4, 4));
    let mut engine = GameEngine::new(&mut state, &config);

    let report = engine
        .take_turn(PlayerAction::Move(Offset::new(1, -1)), &mut never_rolls())
        .unwrap();

    assert_eq!(report.turn, 1);
    assert!(matches!(report.player, PlayerOutcome::Moved { to, .. } if to == Position::new(5, 3)));
    assert_eq!(state.player_position(), Some(Position::new(5, 3)));
}

#[test]
fn walls_block_without_consuming_a_turn() {
    let (mut state, config) = room(Position::new(4, 4));
    state
        .grid
        .set_tile(Position::new(5, 4), Tile::from_kind(TileKind::Wall));
    let mut engine = GameEngine::new(&mut state, &config);
    let error = engine.apply_player_action(Offset::new(1, 0)).unwrap_err();
    assert!(matches!(error, ActionError::Blocked { .. }));
}

#[test]
fn adjacent_orc_attacks_instead_of_moving() {
    let (mut state, config) = room(Position::new(5, 6));
    let orc = state.grid.add_actor(orc_at(Position::new(5, 5)));
    GameEngine::new(&mut state, &config).refresh_visibility();

    let mut engine = GameEngine::new(&mut state, &config);
    let attacks = engine.run_ai_turn(&mut never_rolls());

    assert_eq!(attacks.len(), 1);
    assert_eq!(attacks[0].attacker, orc);
    // Orc power 4 against player defense 2.
    assert_eq!(attacks[0].outcome.damage, 2);
    assert_eq!(state.grid.actor(orc).map(Actor::position), Some(Position::new(5, 5)));
    assert_eq!(state.player().and_then(|p| p.fighter).map(|f| f.hp()), Some(28));
}

#[test]
fn distant_orc_steps_toward_player() {
    let (mut state, config) = room(Position::new(5, 8));
    let orc = state.grid.add_actor(orc_at(Position::new(5, 5)));

    let mut engine = GameEngine::new(&mut state, &config);
    let attacks = engine.run_ai_turn(&mut never_rolls());

    assert!(attacks.is_empty());
    assert_eq!(state.grid.actor(orc).map(Actor::position), Some(Position::new(5, 6)));
}

#[test]
fn killing_a_monster_leaves_a_corpse_and_its_loot() {
    let (mut state, config) = room(Position::new(3, 3));
    let mut pack = Inventory::new(4);
    pack.add(Item::new(Position::ORIGIN, '!', Rgb::RED, "healing potion").consumable(0, 0, 20))
        .unwrap();
    let rabbit = state.grid.add_actor(
        Actor::new(Position::new(4, 3), 'r', Rgb(150, 100, 50), "rabbit")
            .with_fighter(Fighter::new(5, 0, 0))
            .with_inventory(pack)
            .with_ai(AiBehavior::Passive(PassiveAi::new(0.5, false))),
    );

    let mut engine = GameEngine::new(&mut state, &config);
    let report = engine
        .take_turn(PlayerAction::Move(Offset::new(1, 0)), &mut never_rolls())
        .unwrap();

    match report.player {
        PlayerOutcome::Attacked { target, outcome } => {
            assert_eq!(target, rabbit);
            assert_eq!(outcome.damage, 5);
            assert!(outcome.defender_dead);
        }
        other => panic!("expected an attack, got {other:?}"),
    }
    assert!(state.grid.actor(rabbit).is_none());
    let names: Vec<&str> = state
        .grid
        .items_at(Position::new(4, 3))
        .map(Item::name)
        .collect();
    assert_eq!(names, ["rabbit corpse", "healing potion"]);
    let corpse = &state.grid.items()[0];
    assert_eq!((corpse.entity.glyph, corpse.nutrition, corpse.hydration), ('%', 100, 20));
}

#[test]
fn hitting_a_passive_animal_provokes_it() {
    let (mut state, config) = room(Position::new(3, 3));
    let deer = state.grid.add_actor(
        Actor::new(Position::new(4, 3), 'd', Rgb(139, 90, 43), "deer")
            .with_fighter(Fighter::new(15, 0, 2))
            .with_ai(AiBehavior::Passive(PassiveAi::new(0.3, false))),
    );

    let mut engine = GameEngine::new(&mut state, &config);
    let report = engine
        .take_turn(PlayerAction::Move(Offset::new(1, 0)), &mut never_rolls())
        .unwrap();

    let ai = state.grid.actor(deer).and_then(|a| a.ai.as_ref());
    assert!(ai.is_some_and(AiBehavior::is_hostile));
    // The provoked deer bites back in the same turn: power 2 vs defense 2.
    assert_eq!(report.ai_attacks.len(), 1);
    assert_eq!(report.ai_attacks[0].outcome.damage, 0);
}

#[test]
fn starvation_kills_after_exactly_hp_ticks() {
    const HP: u32 = 4;
    let config = GameConfig::default();
    let mut grid = Grid::new(3, 3, Tile::default()).unwrap();
    let mut survival = Survival::default();
    survival.set_hunger(0);
    let id = grid.add_actor(
        Actor::new(Position::new(1, 1), '@', Rgb::WHITE, "player")
            .with_fighter(Fighter::from_parts(30, HP, 2, 5))
            .with_survival(survival),
    );
    let mut state = GameState::new(grid, id, &config);
    let mut engine = GameEngine::new(&mut state, &config);

    for _ in 0..HP - 1 {
        engine.tick_world();
        assert_eq!(engine.state().phase, GamePhase::Playing);
    }
    engine.tick_world();

    let player = state.player().unwrap();
    assert_eq!(player.fighter.map(|f| f.hp()), Some(0));
    assert!(!player.is_alive());
    assert_eq!(player.entity.glyph, '%');
    assert_eq!(state.phase, GamePhase::PlayerDead);
}

#[test]
fn player_killed_mid_phase_stops_later_attackers() {
    let (mut state, config) = room(Position::new(5, 6));
    if let Some(player) = state.grid.actor_mut(state.player) {
        player.fighter = Some(Fighter::from_parts(30, 1, 2, 5));
        if let Some(survival) = player.survival.as_mut() {
            survival.set_hunger(500);
        }
    }
    let first = state.grid.add_actor(orc_at(Position::new(5, 5)));
    let second = state.grid.add_actor(orc_at(Position::new(6, 5)));
    GameEngine::new(&mut state, &config).refresh_visibility();

    let mut engine = GameEngine::new(&mut state, &config);
    let report = engine
        .take_turn(PlayerAction::Wait, &mut never_rolls())
        .unwrap();

    assert_eq!(report.ai_attacks.len(), 1);
    assert_eq!(report.ai_attacks[0].attacker, first);
    assert!(report.ai_attacks[0].outcome.defender_dead);
    assert!(report.player_died);
    assert_eq!(report.turn, 1);

    assert_eq!(state.phase, GamePhase::PlayerDead);
    assert_eq!(state.clock.turn, 1);
    assert!(state.grid.actor(second).is_some());
    let player = state.player().unwrap();
    assert_eq!(player.entity.glyph, '%');
    assert_eq!(player.fighter.map(|f| f.hp()), Some(0));
    // The world tick ran but left the dead player's meters alone.
    assert_eq!(player.survival.as_ref().map(|s| s.hunger()), Some(500));
}

#[test]
fn configured_sight_radius_bounds_the_refresh() {
    let config = GameConfig::with_fov_radius(3);
    let mut grid = Grid::new(12, 12, Tile::from_kind(TileKind::Floor)).unwrap();
    let id = grid.add_actor(player_at(Position::new(1, 5)));
    let mut state = GameState::new(grid, id, &config);

    GameEngine::new(&mut state, &config).refresh_visibility();

    assert!(state.grid.is_visible(Position::new(4, 5)));
    assert!(!state.grid.is_visible(Position::new(5, 5)));
    assert!(!state.grid.is_explored(Position::new(8, 5)));
}

#[test]
fn dead_player_cannot_take_turns() {
    let (mut state, config) = room(Position::new(2, 2));
    state.phase = GamePhase::PlayerDead;
    let mut engine = GameEngine::new(&mut state, &config);
    let error = engine
        .take_turn(PlayerAction::Wait, &mut never_rolls())
        .unwrap_err();
    assert_eq!(
        error,
        ActionError::NotPlaying {
            phase: GamePhase::PlayerDead
        }
    );
}

#[test]
fn pick_up_use_and_drop_transfer_ownership() {
    let (mut state, config) = room(Position::new(2, 2));
    state.grid.add_item(
        Item::new(Position::new(2, 2), '!', Rgb(0, 150, 255), "water flask").consumable(0, 300, 0),
    );
    state.grid.add_item(Item::new(Position::new(2, 2), '/', Rgb::GRAY, "stick"));
    if let Some(survival) = state
        .grid
        .actor_mut(state.player)
        .and_then(|p| p.survival.as_mut())
    {
        survival.set_thirst(100);
    }
    let mut rng = never_rolls();
    let mut engine = GameEngine::new(&mut state, &config);

    engine.take_turn(PlayerAction::PickUp, &mut rng).unwrap();
    engine.take_turn(PlayerAction::PickUp, &mut rng).unwrap();
    assert_eq!(
        engine.take_turn(PlayerAction::PickUp, &mut rng).unwrap_err(),
        ActionError::NothingToPickUp
    );
    assert_eq!(
        engine.take_turn(PlayerAction::UseItem(1), &mut rng).unwrap_err(),
        ActionError::NotConsumable {
            name: "stick".into()
        }
    );

    engine.take_turn(PlayerAction::UseItem(0), &mut rng).unwrap();
    engine.take_turn(PlayerAction::DropItem(0), &mut rng).unwrap();
    assert_eq!(
        engine.take_turn(PlayerAction::DropItem(0), &mut rng).unwrap_err(),
        ActionError::NoSuchItem { index: 0 }
    );

    let player = state.player().unwrap();
    assert!(player.inventory.as_ref().is_some_and(Inventory::is_empty));
    // Four successful turns at 2 thirst each, plus 300 drunk on the third.
    assert_eq!(player.survival.as_ref().map(Survival::thirst), Some(392));
    let ground: Vec<&str> = state.grid.items_at(Position::new(2, 2)).map(Item::name).collect();
    assert_eq!(ground, ["stick"]);
    assert_eq!(state.clock.turn, 4);
}

#[test]
fn full_inventory_leaves_item_on_the_ground() {
    let (mut state, config) = room(Position::new(2, 2));
    if let Some(player) = state.grid.actor_mut(state.player) {
        player.inventory = Some(Inventory::new(0));
    }
    state
        .grid
        .add_item(Item::new(Position::new(2, 2), '%', Rgb::CORPSE, "dried meat"));
    let mut engine = GameEngine::new(&mut state, &config);
    assert_eq!(engine.pickup_item().unwrap_err(), ActionError::InventoryFull);
    assert_eq!(state.grid.items().len(), 1);
}

#[test]
fn resting_toggles_without_advancing_time() {
    let (mut state, config) = room(Position::new(2, 2));
    let mut engine = GameEngine::new(&mut state, &config);
    assert_eq!(engine.toggle_rest(), Ok(true));
    assert_eq!(engine.toggle_rest(), Ok(false));
    assert_eq!(state.clock.turn, 0);
}

#[test]
fn same_seed_replays_the_same_trace() {
    fn play(seed: u64) -> GameState {
        let (mut state, config) = room(Position::new(1, 1));
        for (x, y) in [(8, 8), (9, 2), (3, 10)] {
            state.grid.add_actor(
                Actor::new(Position::new(x, y), 'r', Rgb(150, 100, 50), "rabbit")
                    .with_fighter(Fighter::new(5, 0, 0))
                    .with_ai(AiBehavior::Passive(PassiveAi::new(0.5, false))),
            );
        }
        state.grid.add_actor(orc_at(Position::new(10, 10)));
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut engine = GameEngine::new(&mut state, &config);
        for _ in 0..40 {
            let _ = engine.take_turn(PlayerAction::Wait, &mut rng);
        }
        state
    }

    assert_eq!(play(7), play(7));
}
