//! Headless simulation runs.
//!
//! Loads a level from the content directory and plays it with a scripted
//! player: pick things up, eat and drink when the meters run low, fight what
//! is adjacent, walk to visible items, otherwise wander.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use hearthwild_content::ContentFactory;
use hearthwild_core::{Actor, GameState, Offset, Position, SurvivalStatus};
use hearthwild_runtime::{Command, FileStateRepository, Session};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dirs;

/// Stream offset that keeps the scripted player's dice apart from the world's.
const POLICY_STREAM: u64 = 0x5eed_cafe;

/// Run a headless game with a scripted player
#[derive(Parser)]
pub struct Simulate {
    /// Seed for the world and the scripted player
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum number of turns to play
    #[arg(long, default_value_t = 500)]
    turns: u64,

    /// Map to load from `maps/`
    #[arg(long, default_value = "clearing")]
    map: String,

    /// Content directory (config.toml, catalogs, maps/)
    #[arg(long, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Save the final state to `<data-dir>/saves/<map>_<seed>/`
    #[arg(long)]
    save: bool,

    /// Custom data directory for saves (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Number of log messages to print at the end
    #[arg(long, default_value_t = 10)]
    messages: usize,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let content_dir = self.content_dir.clone().unwrap_or_else(dirs::content_dir);
        let factory = ContentFactory::new(&content_dir);
        let config = factory
            .load_config()
            .with_context(|| format!("Failed to load config from {}", content_dir.display()))?;
        let state = factory
            .load_level(&self.map, &config)
            .with_context(|| format!("Failed to build map '{}'", self.map))?;
        let population = state.grid.actors().count();

        let mut session = Session::new(state, config, self.seed);
        let mut policy = ChaCha8Rng::seed_from_u64(self.seed ^ POLICY_STREAM);
        let mut refused = 0u64;

        while session.turn() < self.turns && !session.is_over() {
            let command = choose(session.state(), &mut policy);
            if session.submit(command).is_err() {
                refused += 1;
                session
                    .submit(Command::Wait)
                    .context("Scripted player could not even wait")?;
            }
        }

        print_summary(&self, &session, population, refused);

        if self.save {
            let data_dir = self.data_dir.clone().unwrap_or_else(dirs::data_dir);
            let saves = data_dir
                .join("saves")
                .join(format!("{}_{}", self.map, self.seed));
            let repository = FileStateRepository::new(&saves)
                .with_context(|| format!("Failed to open {}", saves.display()))?;
            let turn = session.save(&repository)?;
            println!();
            println!(
                "{} {}",
                style("Saved:").bold().cyan(),
                repository.state_path(turn).display()
            );
        }
        Ok(())
    }
}

/// Picks the scripted player's next command.
fn choose(state: &GameState, rng: &mut ChaCha8Rng) -> Command {
    let Some(player) = state.player() else {
        return Command::Wait;
    };
    let here = player.position();

    if let Some(index) = wanted_consumable(player) {
        return Command::UseItem(index);
    }
    let has_room = player
        .inventory
        .as_ref()
        .is_some_and(|inventory| !inventory.is_full());
    if has_room && state.grid.items_at(here).next().is_some() {
        return Command::PickUp;
    }

    let adjacent_enemy = state.grid.actors().find(|actor| {
        actor.id != state.player
            && actor.position().is_adjacent(here)
            && actor.ai.as_ref().is_some_and(|ai| ai.is_hostile())
    });
    if let Some(enemy) = adjacent_enemy {
        return Command::Move(here.delta_to(enemy.position()));
    }

    if has_room {
        let nearest_item = state
            .grid
            .items()
            .iter()
            .map(|item| item.position())
            .filter(|&position| state.grid.is_visible(position))
            .min_by_key(|&position| here.chebyshev(position));
        if let Some(goal) = nearest_item {
            return Command::Travel(goal);
        }
    }

    if rng.gen_bool(0.1) {
        return Command::Wait;
    }
    let mut directions = Offset::NEIGHBORS;
    directions.shuffle(rng);
    directions
        .into_iter()
        .find(|&offset| state.grid.is_walkable(here + offset))
        .map_or(Command::Wait, Command::Move)
}

/// Slot of an item worth using now: food when hungry, water when thirsty,
/// healing when badly hurt.
fn wanted_consumable(player: &Actor) -> Option<usize> {
    let inventory = player.inventory.as_ref()?;
    let hungry = player
        .survival
        .as_ref()
        .is_some_and(|s| s.hunger_status() != SurvivalStatus::Normal);
    let thirsty = player
        .survival
        .as_ref()
        .is_some_and(|s| s.thirst_status() != SurvivalStatus::Normal);
    let hurt = player
        .fighter
        .as_ref()
        .is_some_and(|f| f.health_fraction() < 0.5);

    inventory.iter().position(|item| {
        item.consumable
            && ((hungry && item.nutrition > 0)
                || (thirsty && item.hydration > 0)
                || (hurt && item.healing > 0))
    })
}

fn print_summary(args: &Simulate, session: &Session, population: usize, refused: u64) {
    let state = session.state();
    println!("{}", style("=== Simulation Summary ===").bold().green());
    println!();
    println!("{} {}", style("Map:").bold().cyan(), args.map);
    println!("{} {}", style("Seed:").bold().cyan(), session.seed());
    println!(
        "{} {} ({})",
        style("Turns:").bold().cyan(),
        session.turn(),
        state.clock.time_string()
    );
    println!("{} {}", style("Refused commands:").bold().cyan(), refused);
    let outcome = if session.is_over() {
        style("player died").red().bold()
    } else {
        style("player alive").green().bold()
    };
    println!("{} {}", style("Outcome:").bold().cyan(), outcome);
    println!();

    if let Some(player) = state.player() {
        println!("{}", style("Player:").bold().yellow());
        println!("  Position: {}", player.position());
        if let Some(fighter) = &player.fighter {
            println!("  HP: {}/{}", fighter.hp(), fighter.max_hp());
        }
        if let Some(survival) = &player.survival {
            println!("  Status: {}", survival.status_summary());
        }
        if let Some(inventory) = &player.inventory {
            let names: Vec<&str> = inventory.iter().map(|item| item.name()).collect();
            println!("  Carrying: {}", join_or_none(&names));
        }
        println!();
    }

    let survivors = state.grid.actors().count();
    println!("{}", style("World:").bold().yellow());
    println!("  Creatures slain: {}", population.saturating_sub(survivors));
    println!("  Items on the ground: {}", state.grid.items().len());
    let explored = state.grid.explored().iter().filter(|&&seen| seen).count();
    println!(
        "  Explored: {}/{} cells",
        explored,
        state.grid.explored().len()
    );
    println!();

    println!("{}", style("Recent messages:").bold().yellow());
    for message in state.log.recent(args.messages) {
        println!("  {}", message.text);
    }
}

fn join_or_none(names: &[&str]) -> String {
    if names.is_empty() {
        "nothing".to_owned()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearthwild_core::{
        AiBehavior, Fighter, GameConfig, Grid, HostileAi, Inventory, Item, Rgb, Survival, Tile,
        TileKind,
    };

    fn state_with(player: Actor, others: Vec<Actor>, items: Vec<Item>) -> GameState {
        let config = GameConfig::default();
        let mut grid = Grid::new(8, 8, Tile::from_kind(TileKind::Floor)).unwrap();
        let id = grid.add_actor(player);
        for actor in others {
            grid.add_actor(actor);
        }
        for item in items {
            grid.add_item(item);
        }
        let mut state = GameState::new(grid, id, &config);
        hearthwild_core::GameEngine::new(&mut state, &config).refresh_visibility();
        state
    }

    fn player() -> Actor {
        Actor::new(Position::new(3, 3), '@', Rgb::WHITE, "player")
            .with_fighter(Fighter::new(30, 2, 5))
            .with_inventory(Inventory::default())
            .with_survival(Survival::default())
    }

    #[test]
    fn picks_up_what_it_stands_on() {
        let herb = Item::new(Position::new(3, 3), '"', Rgb::WHITE, "herb");
        let state = state_with(player(), vec![], vec![herb]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(choose(&state, &mut rng), Command::PickUp);
    }

    #[test]
    fn attacks_adjacent_hostiles() {
        let orc = Actor::new(Position::new(4, 2), 'o', Rgb::WHITE, "orc")
            .with_fighter(Fighter::new(16, 1, 4))
            .with_ai(AiBehavior::Hostile(HostileAi::new(8)));
        let state = state_with(player(), vec![orc], vec![]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(choose(&state, &mut rng), Command::Move(Offset::new(1, -1)));
    }

    #[test]
    fn walks_toward_visible_items() {
        let flask = Item::new(Position::new(6, 3), '!', Rgb::WHITE, "water flask");
        let state = state_with(player(), vec![], vec![flask]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(choose(&state, &mut rng), Command::Travel(Position::new(6, 3)));
    }

    #[test]
    fn drinks_when_thirsty() {
        let mut thirsty = player();
        if let Some(survival) = thirsty.survival.as_mut() {
            survival.set_thirst(100);
        }
        if let Some(inventory) = thirsty.inventory.as_mut() {
            let meat = Item::new(Position::ORIGIN, '%', Rgb::WHITE, "meat").consumable(200, 0, 0);
            let flask = Item::new(Position::ORIGIN, '!', Rgb::WHITE, "flask").consumable(0, 300, 0);
            inventory.add(meat).unwrap();
            inventory.add(flask).unwrap();
        }
        let state = state_with(thirsty, vec![], vec![]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(choose(&state, &mut rng), Command::UseItem(1));
    }
}
