//! Damage, armor, and chest resolution.

use rand_chacha::rand_core::Rng;

use super::*;
use crate::mapgen::progression::armor_erosion;

impl Game {
    /// Player attacks the monster in the target cell. Flat damage, monsters
    /// carry no armor; the corpse is removed by the cleanup step, not here.
    pub(super) fn strike_monster(&mut self, id: EntityId, view: &mut dyn GameView) {
        let damage = self.state.player().damage;
        self.state.actors[id].change_health(-damage);
        view.notify_combat(&format!("Monster took {damage} damage"));
    }

    /// A monster strikes the player. Any armor absorbs the full hit and erodes
    /// by a fixed amount; health is only touched once armor has reached zero.
    pub(super) fn monster_hits_player(&mut self, id: EntityId, view: &mut dyn GameView) {
        let erosion = armor_erosion(self.state.depth);
        let damage = self.state.actors[id].damage;
        let player = &mut self.state.actors[self.state.player_id];
        if player.armor > 0 {
            player.change_armor(-erosion);
            view.notify_combat("Your armour was hit!");
        } else {
            player.change_health(-damage);
            view.notify_combat(&format!("You took {damage} damage"));
        }
    }

    pub(super) fn open_chest(&mut self, view: &mut dyn GameView) {
        let roll = 1 + self.rng.next_u32() % 6;
        self.apply_chest_reward(roll, view);
    }

    /// Six equally likely rewards, announced by name.
    pub(super) fn apply_chest_reward(&mut self, roll: u32, view: &mut dyn GameView) {
        let player = &mut self.state.actors[self.state.player_id];
        match roll {
            1 => {
                let missing = player.max_health - player.health;
                player.change_health(missing);
                view.notify_chest("Greater Healing Potion");
            }
            2 => {
                player.damage += 5;
                view.notify_chest("Sword Upgrade");
            }
            3 => {
                player.change_armor(5);
                view.notify_chest("Armour");
            }
            4 => {
                player.damage += 5;
                view.notify_chest("Greater Sword Upgrade");
            }
            5 => {
                player.change_armor(10);
                view.notify_chest("Super Armour");
            }
            _ => {
                player.change_health(20);
                view.notify_chest("Health Potion");
            }
        }
    }
}
