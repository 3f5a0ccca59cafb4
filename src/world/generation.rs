//! Cave population
//!
//! Places the player, the wumpus, bats and pits in distinct rooms. Nothing
//! dangerous may start next to the player.

use rand::Rng;
use thiserror::Error;

use super::cave::{build_rooms, Cave};
use super::room::{Feature, RoomId, ROOM_COUNT};
use super::vacancy::Vacancy;
use crate::entities::Player;

/// Errors raised while laying out the cave
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Ran out of free rooms before everything was placed
    #[error("no vacant room left to place the {what}")]
    Exhausted { what: &'static str },

    /// Two entities were assigned the same room
    #[error("room {room} is already occupied")]
    Conflict { room: RoomId },

    #[error("room {room} does not exist")]
    OutOfRange { room: RoomId },
}

/// Populate a fresh cave: player, wumpus, then `bats` bats and `pits` pits
pub fn populate(rng: &mut impl Rng, bats: usize, pits: usize) -> Result<Cave, PlacementError> {
    let mut rooms = build_rooms();
    let mut vacancy = Vacancy::all(ROOM_COUNT);

    let start = take(&mut vacancy, rng, "player")?;
    let player = Player::new(start);

    // Keep the first turn survivable
    for n in player.neighbors() {
        vacancy.occupy(n);
    }

    let wumpus = take(&mut vacancy, rng, "wumpus")?;

    for _ in 0..bats {
        let room = take(&mut vacancy, rng, "bat")?;
        rooms[room].feature = Feature::Bat;
    }

    for _ in 0..pits {
        let room = take(&mut vacancy, rng, "pit")?;
        rooms[room].feature = Feature::Pit;
    }

    // Neighbors are fair game again once everything is placed
    for n in player.neighbors() {
        vacancy.release(n);
    }

    log::info!(
        "Populated cave: player in room {}, {} bats, {} pits, {} rooms vacant",
        start,
        bats,
        pits,
        vacancy.len()
    );
    log::debug!("Wumpus starts in room {}", wumpus);

    Ok(Cave {
        rooms,
        player,
        wumpus,
        vacancy,
    })
}

fn take(
    vacancy: &mut Vacancy,
    rng: &mut impl Rng,
    what: &'static str,
) -> Result<RoomId, PlacementError> {
    vacancy
        .take_random(rng)
        .ok_or(PlacementError::Exhausted { what })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::room::neighbors_of;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_placement_distinct_and_clear_of_player() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cave = populate(&mut rng, 3, 3).unwrap();
            let player = cave.player.room();

            let hazards: Vec<RoomId> = cave
                .rooms
                .iter()
                .filter(|r| r.feature.is_hazard())
                .map(|r| r.id)
                .collect();
            assert_eq!(hazards.len(), 6, "seed {}", seed);
            assert_eq!(cave.count_feature(Feature::Bat), 3);
            assert_eq!(cave.count_feature(Feature::Pit), 3);

            let mut taken = hazards.clone();
            taken.push(player);
            taken.push(cave.wumpus);
            taken.sort_unstable();
            taken.dedup();
            assert_eq!(taken.len(), 8, "seed {} has overlapping entities", seed);

            let near = neighbors_of(player);
            assert!(!near.contains(&cave.wumpus), "seed {}", seed);
            for h in hazards {
                assert!(!near.contains(&h), "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_vacancy_after_placement() {
        let mut rng = StdRng::seed_from_u64(42);
        let cave = populate(&mut rng, 3, 3).unwrap();

        assert_eq!(cave.vacancy.len(), ROOM_COUNT - 8);
        for n in cave.player.neighbors() {
            assert!(cave.vacancy.contains(n));
        }
        for &room in cave.vacancy.rooms() {
            assert_eq!(cave.feature(room), Feature::Empty);
            assert_ne!(room, cave.player.room());
            assert_ne!(room, cave.wumpus);
        }
    }

    #[test]
    fn test_same_seed_same_cave() {
        let a = populate(&mut StdRng::seed_from_u64(9), 3, 3).unwrap();
        let b = populate(&mut StdRng::seed_from_u64(9), 3, 3).unwrap();
        assert_eq!(a.rooms, b.rooms);
        assert_eq!(a.player, b.player);
        assert_eq!(a.wumpus, b.wumpus);
    }

    #[test]
    fn test_too_many_hazards_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        // 16 rooms are left after the player and its neighbors
        assert!(populate(&mut rng, 8, 7).is_ok());
        let err = populate(&mut rng, 8, 8).unwrap_err();
        assert_eq!(err, PlacementError::Exhausted { what: "pit" });
    }
}
