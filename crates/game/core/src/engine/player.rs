//! Player-initiated actions: movement, melee and item handling.

use super::{ActionError, GameEngine, PlayerOutcome, capitalized, palette};
use crate::combat::{AttackOutcome, resolve_attack};
use crate::state::{Actor, EntityId, Offset};

impl GameEngine<'_> {
    /// Moves the player by `offset`, or attacks whoever stands there.
    ///
    /// Checks run in order: bounds, terrain, combatant on the destination
    /// (melee), any other blocker. Only terrain is checked before the
    /// combatant lookup, otherwise an occupied cell could never be attacked.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` or `Blocked` when the move is impossible. Neither
    /// consumes a turn.
    pub fn apply_player_action(&mut self, offset: Offset) -> Result<PlayerOutcome, ActionError> {
        self.ensure_playing()?;
        let player_id = self.state.player;
        let destination = self.player()?.position() + offset;
        let grid = &self.state.grid;

        if !grid.in_bounds(destination) {
            return Err(ActionError::OutOfBounds { destination });
        }
        if !grid.is_passable(destination) {
            return Err(ActionError::Blocked { destination });
        }
        let target = grid
            .actor_at(destination)
            .map(|actor| actor.id)
            .filter(|&id| id != player_id);
        if let Some(target) = target {
            if let Some(ai) = self
                .state
                .grid
                .actor_mut(target)
                .and_then(|actor| actor.ai.as_mut())
            {
                ai.provoke();
            }
            let outcome = self.melee(player_id, target)?;
            return Ok(PlayerOutcome::Attacked { target, outcome });
        }
        if self.state.grid.entity_blocking_at(destination).is_some() {
            return Err(ActionError::Blocked { destination });
        }

        self.state.grid.move_actor(player_id, destination);
        let items_here: Vec<String> = self
            .state
            .grid
            .items_at(destination)
            .map(|item| item.name().to_owned())
            .collect();
        if !items_here.is_empty() {
            self.say(format!("You see here: {}.", items_here.join(", ")), palette::INFO);
        }
        tracing::debug!("player moved to {}", destination);
        Ok(PlayerOutcome::Moved {
            to: destination,
            items_here,
        })
    }

    /// Resolves one melee hit and handles the defender's death.
    pub(super) fn melee(
        &mut self,
        attacker: EntityId,
        defender: EntityId,
    ) -> Result<AttackOutcome, ActionError> {
        let grid = &mut self.state.grid;
        let (power_profile, attacker_name) = match grid.actor(attacker) {
            Some(Actor {
                fighter: Some(fighter),
                entity,
                ..
            }) => (*fighter, entity.name.clone()),
            _ => return Err(ActionError::NoCombatProfile { entity: attacker }),
        };
        let Some(target) = grid.actor_mut(defender) else {
            return Err(ActionError::NoCombatProfile { entity: defender });
        };
        debug_assert!(
            target.fighter.is_some(),
            "{defender} attacked without a combat profile"
        );
        let Some(fighter) = target.fighter.as_mut() else {
            return Err(ActionError::NoCombatProfile { entity: defender });
        };
        let outcome = resolve_attack(&power_profile, fighter);
        let defender_name = target.entity.name.clone();

        let color = if attacker == self.state.player {
            palette::PLAYER_ATTACK
        } else {
            palette::ENEMY_ATTACK
        };
        let description = format!("{} attacks {}", capitalized(&attacker_name), defender_name);
        if outcome.damage > 0 {
            self.say(
                format!("{description} for {} hit points.", outcome.damage),
                color,
            );
        } else {
            self.say(format!("{description} but does no damage."), color);
        }
        tracing::debug!(
            "{} {:?} hit {} {:?}: {:?}",
            attacker_name,
            attacker,
            defender_name,
            defender,
            outcome
        );

        if outcome.defender_dead {
            self.kill(defender);
        }
        Ok(outcome)
    }

    /// Picks up the first item lying under the player.
    pub fn pickup_item(&mut self) -> Result<PlayerOutcome, ActionError> {
        self.ensure_playing()?;
        let player = self.player()?;
        let position = player.position();
        if self.state.grid.items_at(position).next().is_none() {
            return Err(ActionError::NothingToPickUp);
        }
        match player.inventory.as_ref() {
            None => return Err(ActionError::NoInventory),
            Some(inventory) if inventory.is_full() => return Err(ActionError::InventoryFull),
            Some(_) => {}
        }

        let item = self
            .state
            .grid
            .take_item_at(position)
            .ok_or(ActionError::NothingToPickUp)?;
        let name = item.name().to_owned();
        let stored = self
            .player_mut()?
            .inventory
            .as_mut()
            .ok_or(ActionError::NoInventory)?
            .add(item);
        if let Err(item) = stored {
            self.state.grid.add_item(item);
            return Err(ActionError::InventoryFull);
        }

        self.say(format!("You pick up the {name}."), palette::INFO);
        Ok(PlayerOutcome::PickedUp { item: name })
    }

    /// Consumes the item in an inventory slot, applying each of its effects.
    pub fn use_item(&mut self, index: usize) -> Result<PlayerOutcome, ActionError> {
        self.ensure_playing()?;
        let Actor {
            inventory,
            survival,
            fighter,
            ..
        } = self.player_mut()?;
        let inventory = inventory.as_mut().ok_or(ActionError::NoInventory)?;
        let item = inventory.get(index).ok_or(ActionError::NoSuchItem { index })?;
        if !item.consumable {
            return Err(ActionError::NotConsumable {
                name: item.name().to_owned(),
            });
        }
        let item = inventory
            .remove(index)
            .ok_or(ActionError::NoSuchItem { index })?;

        let mut effects: Vec<String> = Vec::new();
        if let Some(survival) = survival.as_mut() {
            if item.nutrition > 0 {
                effects.push(survival.eat(item.nutrition).to_owned());
            }
            if item.hydration > 0 {
                effects.push(survival.drink(item.hydration).to_owned());
            }
        }
        if item.healing > 0 {
            if let Some(fighter) = fighter.as_mut() {
                let healed = fighter.heal(item.healing);
                effects.push(format!("You recover {healed} health."));
            }
        }

        let name = item.entity.name;
        self.say(format!("You use the {name}."), palette::INFO);
        for effect in effects {
            self.say(effect, palette::INFO);
        }
        Ok(PlayerOutcome::Used { item: name })
    }

    /// Puts the item in an inventory slot down on the player's cell.
    pub fn drop_item(&mut self, index: usize) -> Result<PlayerOutcome, ActionError> {
        self.ensure_playing()?;
        let player = self.player_mut()?;
        let position = player.position();
        let mut item = player
            .inventory
            .as_mut()
            .ok_or(ActionError::NoInventory)?
            .remove(index)
            .ok_or(ActionError::NoSuchItem { index })?;
        item.entity.position = position;
        let name = item.name().to_owned();
        self.state.grid.add_item(item);

        self.say(format!("You drop the {name}."), palette::INFO);
        Ok(PlayerOutcome::Dropped { item: name })
    }

    /// Starts or stops resting. Does not consume a turn.
    ///
    /// # Returns
    ///
    /// Whether the player is resting afterwards.
    pub fn toggle_rest(&mut self) -> Result<bool, ActionError> {
        self.ensure_playing()?;
        let survival = self
            .player_mut()?
            .survival
            .as_mut()
            .ok_or(ActionError::NoSurvival)?;
        let message = if survival.is_resting() {
            survival.stop_rest()
        } else {
            survival.rest()
        };
        let resting = survival.is_resting();
        self.say(message, palette::INFO);
        Ok(resting)
    }
}
