//! Collectible coin systems and overlap observer.
//!
//! - [`coin_shine_system`] sets each active coin's [`Emission`] intensity from
//!   its distance to the player. Coins without an `Emission` are skipped.
//! - [`coin_proximity_system`] collects coins the player has come close to.
//! - [`coin_overlap_observer`] collects coins whose collider overlaps the
//!   player's, or a collider that belongs to the player by name or ancestry.
//!
//! Both collection paths funnel into [`collect_coin`], which is a no-op for a
//! coin that is already collected.
use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;

use crate::components::collectible::{CollectAction, Collectible};
use crate::components::collider::{Renderable, SphereCollider};
use crate::components::light::Emission;
use crate::components::position::Position;
use crate::components::scenename::SceneName;
use crate::components::ttl::Ttl;
use crate::events::coin::CoinCollected;
use crate::events::collision::CollisionEvent;
use crate::resources::worldsignals::{COINS_COLLECTED, WorldSignals};

/// Upper bound on the ancestry walk, guards against malformed hierarchies.
const MAX_ANCESTRY_DEPTH: usize = 32;

type CoinItem<'a> = (
    &'a mut Collectible,
    &'a Position,
    Option<&'a mut Renderable>,
    Option<&'a mut SphereCollider>,
);

/// Collect a coin once: fire [`CoinCollected`], spawn the optional effect,
/// then despawn or disable the coin. Returns `false` if it was already
/// collected.
pub fn collect_coin(
    entity: Entity,
    coin: &mut Collectible,
    position: Vec3,
    renderable: Option<&mut Renderable>,
    collider: Option<&mut SphereCollider>,
    signals: Option<&mut WorldSignals>,
    commands: &mut Commands,
) -> bool {
    if !coin.collect() {
        return false;
    }
    info!("coin {:?} collected at {:?}", entity, position);

    commands.trigger(CoinCollected {
        coin: entity,
        position,
    });

    if let Some(effect) = &coin.spawn_effect {
        commands.spawn((
            SceneName::new(effect.name.clone()),
            Position::from_vec(position),
            Ttl::new(effect.lifetime),
        ));
    }

    if let Some(signals) = signals {
        signals.increment_integer(COINS_COLLECTED);
    }

    match coin.on_collect {
        CollectAction::Despawn => {
            commands.entity(entity).try_despawn();
        }
        CollectAction::Disable => {
            if let Some(renderable) = renderable {
                renderable.visible = false;
            }
            if let Some(collider) = collider {
                collider.enabled = false;
            }
        }
    }
    true
}

/// Update emission intensity of active coins from the player distance.
pub fn coin_shine_system(
    mut coins: Query<(&Collectible, &Position, &mut Emission)>,
    players: Query<&Position, Without<Collectible>>,
) {
    for (coin, position, mut emission) in coins.iter_mut() {
        if !coin.is_active() {
            continue;
        }
        let Some(player) = coin.player else {
            continue;
        };
        let Ok(player_pos) = players.get(player) else {
            continue;
        };
        emission.color = coin.emission_color;
        emission.intensity = coin.shine_intensity(position.distance(player_pos));
    }
}

/// Collect active coins within `collection_radius` of their player.
pub fn coin_proximity_system(
    mut coins: Query<(Entity, CoinItem)>,
    players: Query<&Position, Without<Collectible>>,
    mut signals: Option<ResMut<WorldSignals>>,
    mut commands: Commands,
) {
    for (entity, (mut coin, position, renderable, collider)) in coins.iter_mut() {
        if !coin.is_active() || !coin.collect_on_proximity {
            continue;
        }
        let Some(player) = coin.player else {
            continue;
        };
        let Ok(player_pos) = players.get(player) else {
            continue;
        };
        if position.distance(player_pos) <= coin.collection_radius {
            collect_coin(
                entity,
                &mut coin,
                position.pos,
                renderable.map(|r| r.into_inner()),
                collider.map(|c| c.into_inner()),
                signals.as_deref_mut(),
                &mut commands,
            );
        }
    }
}

/// Whether `candidate` counts as the coin's player: the player itself, an
/// entity named like the player, or a descendant of either.
pub fn is_player(
    candidate: Entity,
    coin: &Collectible,
    names: &Query<&SceneName>,
    parents: &Query<&ChildOf>,
) -> bool {
    let mut current = candidate;
    for _ in 0..MAX_ANCESTRY_DEPTH {
        if coin.player == Some(current) {
            return true;
        }
        if let (Some(wanted), Ok(name)) = (coin.player_name.as_deref(), names.get(current)) {
            if name.as_str() == wanted {
                return true;
            }
        }
        match parents.get(current) {
            Ok(child_of) => current = child_of.parent(),
            Err(_) => return false,
        }
    }
    false
}

/// Collect a coin when its collider overlaps the player's.
pub fn coin_overlap_observer(
    trigger: On<CollisionEvent>,
    mut coins: Query<CoinItem>,
    names: Query<&SceneName>,
    parents: Query<&ChildOf>,
    mut signals: Option<ResMut<WorldSignals>>,
    mut commands: Commands,
) {
    let event = *trigger.event();
    for (coin_entity, other) in [(event.a, event.b), (event.b, event.a)] {
        let Ok((mut coin, position, renderable, collider)) = coins.get_mut(coin_entity) else {
            continue;
        };
        if !coin.is_active() || !coin.collect_on_overlap {
            continue;
        }
        if !is_player(other, &coin, &names, &parents) {
            continue;
        }
        collect_coin(
            coin_entity,
            &mut coin,
            position.pos,
            renderable.map(|r| r.into_inner()),
            collider.map(|c| c.into_inner()),
            signals.as_deref_mut(),
            &mut commands,
        );
    }
}
