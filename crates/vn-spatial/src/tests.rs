//! Unit tests for vn-spatial.
//!
//! All tests use hand-built graphs.

#[cfg(test)]
mod helpers {
    use vn_core::{AgentId, LocationId};

    use crate::{LocationGraph, LocationGraphBuilder, LocationSpec};

    pub const ALICE: AgentId = AgentId(0);
    pub const BOB: AgentId = AgentId(1);

    /// `a ↔ b ↔ c`, all on floor 1.
    pub fn line() -> (LocationGraph, [LocationId; 3]) {
        let mut b = LocationGraphBuilder::new();
        let a = b.add_location(LocationSpec::new("A", 1));
        let m = b.add_location(LocationSpec::new("B", 1));
        let c = b.add_location(LocationSpec::new("C", 1));
        b.add_passage("A", "B");
        b.add_passage("B", "C");
        (b.build().unwrap(), [a, m, c])
    }

    /// ```text
    /// lobby ↔ hall ↔ room1 (private, owner = Alice)
    /// ```
    pub fn lobby_with_private_room() -> (LocationGraph, [LocationId; 3]) {
        let mut b = LocationGraphBuilder::new();
        let lobby = b.add_location(LocationSpec::new("lobby", 1));
        let hall = b.add_location(LocationSpec::new("hall", 1));
        let room1 = b.add_location(LocationSpec::new("room1", 1).private(Some(ALICE)));
        b.add_passage("lobby", "hall");
        b.add_passage("hall", "room1");
        (b.build().unwrap(), [lobby, hall, room1])
    }

    /// Two routes from `start` to `end` on floor 1:
    ///
    /// ```text
    /// start → suite (private, Alice) → end           (2 hops)
    /// start → west → corridor → end                  (3 hops)
    /// ```
    ///
    /// plus `stairs` on floor 2, linked to `start`.
    pub fn detour() -> (LocationGraph, [LocationId; 6]) {
        let mut b = LocationGraphBuilder::new();
        let start = b.add_location(
            LocationSpec::new("start", 1).connect("suite").connect("west").connect("stairs"),
        );
        let suite = b.add_location(LocationSpec::new("suite", 1).private(Some(ALICE)).connect("end"));
        let west = b.add_location(LocationSpec::new("west", 1).connect("corridor"));
        let corridor = b.add_location(LocationSpec::new("corridor", 1).connect("end"));
        let end = b.add_location(LocationSpec::new("end", 1));
        let stairs = b.add_location(LocationSpec::new("stairs", 2).connect("start"));
        (b.build().unwrap(), [start, suite, west, corridor, end, stairs])
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use vn_core::{AgentId, LocationId};

    use crate::{LocationGraphBuilder, LocationSpec, SpatialError};

    #[test]
    fn empty_build() {
        let graph = LocationGraphBuilder::new().build().unwrap();
        assert!(graph.is_empty());
        assert!(!graph.exists("anything"));
    }

    #[test]
    fn neighbors_keep_declaration_order() {
        let mut b = LocationGraphBuilder::new();
        b.add_location(LocationSpec::new("hub", 1).connect("z").connect("a"));
        b.add_location(LocationSpec::new("a", 1));
        b.add_location(LocationSpec::new("z", 1));
        b.add_directed("hub", "hub2");
        b.add_location(LocationSpec::new("hub2", 1));
        let graph = b.build().unwrap();

        let hub = graph.id_of("hub").unwrap();
        let names: Vec<&str> = graph
            .neighbors(hub)
            .unwrap()
            .iter()
            .map(|&id| graph.name(id).unwrap())
            .collect();
        assert_eq!(names, ["z", "a", "hub2"]);
    }

    #[test]
    fn directed_edges_are_not_mirrored() {
        let mut b = LocationGraphBuilder::new();
        b.add_location(LocationSpec::new("a", 1).connect("b"));
        b.add_location(LocationSpec::new("b", 1));
        let graph = b.build().unwrap();
        let a = graph.id_of("a").unwrap();
        let bb = graph.id_of("b").unwrap();
        assert_eq!(graph.neighbors(a).unwrap(), &[bb]);
        assert!(graph.neighbors(bb).unwrap().is_empty());
    }

    #[test]
    fn unknown_connection_fails() {
        let mut b = LocationGraphBuilder::new();
        b.add_location(LocationSpec::new("a", 1).connect("nowhere"));
        let err = b.build().unwrap_err();
        assert!(matches!(err, SpatialError::UnknownLocation(ref n) if n == "nowhere"));
    }

    #[test]
    fn duplicate_name_fails() {
        let mut b = LocationGraphBuilder::new();
        b.add_location(LocationSpec::new("a", 1));
        b.add_location(LocationSpec::new("a", 2));
        assert!(matches!(b.build(), Err(SpatialError::Config(_))));
    }

    #[test]
    fn floor_zero_fails() {
        let mut b = LocationGraphBuilder::new();
        b.add_location(LocationSpec::new("basement", 0));
        assert!(matches!(b.build(), Err(SpatialError::Config(_))));
    }

    #[test]
    fn owner_on_public_location_fails() {
        let mut b = LocationGraphBuilder::new();
        let mut spec = LocationSpec::new("lobby", 1);
        spec.owner = Some(AgentId(0));
        b.add_location(spec);
        assert!(matches!(b.build(), Err(SpatialError::NotPrivateRoom(LocationId(0)))));
    }

    #[test]
    fn lookups_on_unknown_fail() {
        let (graph, _) = super::helpers::line();
        assert!(matches!(graph.id_of("D"), Err(SpatialError::UnknownLocation(_))));
        assert!(matches!(graph.floor(LocationId(99)), Err(SpatialError::LocationNotFound(_))));
        assert!(matches!(graph.neighbors(LocationId(99)), Err(SpatialError::LocationNotFound(_))));
    }
}

// ── Administrative mutation ───────────────────────────────────────────────────

#[cfg(test)]
mod mutation {
    use super::helpers::{lobby_with_private_room, ALICE, BOB};
    use crate::SpatialError;

    #[test]
    fn set_owner_on_private_room() {
        let (mut graph, [_, _, room1]) = lobby_with_private_room();
        graph.set_owner(room1, Some(BOB)).unwrap();
        assert_eq!(graph.location(room1).unwrap().owner(), Some(BOB));
        graph.set_owner(room1, None).unwrap();
        assert_eq!(graph.location(room1).unwrap().owner(), None);
    }

    #[test]
    fn set_owner_on_public_location_rejected() {
        let (mut graph, [lobby, _, _]) = lobby_with_private_room();
        let err = graph.set_owner(lobby, Some(ALICE)).unwrap_err();
        assert!(matches!(err, SpatialError::NotPrivateRoom(id) if id == lobby));
        // Clearing a public location's (absent) owner is harmless.
        graph.set_owner(lobby, None).unwrap();
    }

    #[test]
    fn set_locked_toggles_flag() {
        let (mut graph, [_, hall, _]) = lobby_with_private_room();
        graph.set_locked(hall, true).unwrap();
        assert!(graph.location(hall).unwrap().locked);
    }
}

// ── Access policy ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod access {
    use super::helpers::{lobby_with_private_room, ALICE, BOB};
    use crate::{AccessPolicy, PrivateRoomPolicy};

    #[test]
    fn public_locations_open_to_all() {
        let (graph, [lobby, hall, _]) = lobby_with_private_room();
        for agent in [ALICE, BOB] {
            assert!(PrivateRoomPolicy.can_enter(agent, graph.location(lobby).unwrap()));
            assert!(PrivateRoomPolicy.can_enter(agent, graph.location(hall).unwrap()));
        }
    }

    #[test]
    fn private_room_admits_only_owner() {
        let (graph, [_, _, room1]) = lobby_with_private_room();
        let room = graph.location(room1).unwrap();
        assert!(PrivateRoomPolicy.can_enter(ALICE, room));
        assert!(!PrivateRoomPolicy.can_enter(BOB, room));
    }

    #[test]
    fn unowned_private_room_admits_nobody() {
        let (mut graph, [_, _, room1]) = lobby_with_private_room();
        graph.set_owner(room1, None).unwrap();
        let room = graph.location(room1).unwrap();
        assert!(!PrivateRoomPolicy.can_enter(ALICE, room));
        assert!(!PrivateRoomPolicy.can_enter(BOB, room));
    }

    #[test]
    fn staff_only_and_locked_do_not_gate() {
        let (mut graph, [_, hall, _]) = lobby_with_private_room();
        graph.set_locked(hall, true).unwrap();
        assert!(PrivateRoomPolicy.can_enter(BOB, graph.location(hall).unwrap()));
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use vn_core::{AgentId, LocationId};

    use super::helpers::{detour, line, lobby_with_private_room, ALICE, BOB};
    use crate::{AccessPolicy, BfsRouter, Location, Router, SpatialError};

    #[test]
    fn line_route_is_inclusive() {
        let (graph, [a, b, c]) = line();
        let route = BfsRouter::new().route(&graph, a, c, BOB).unwrap().unwrap();
        assert_eq!(route.locations, vec![a, b, c]);
        assert_eq!(route.hops(), 2);
        assert_eq!(route.destination(), Some(c));
    }

    #[test]
    fn same_location_is_single_element() {
        let (graph, [_, b, _]) = line();
        let route = BfsRouter::new().route(&graph, b, b, BOB).unwrap().unwrap();
        assert_eq!(route.locations, vec![b]);
        assert!(route.is_trivial());
    }

    #[test]
    fn unknown_endpoint_is_not_found() {
        let (graph, [a, _, _]) = line();
        let result = BfsRouter::new().route(&graph, a, LocationId(42), BOB);
        assert!(matches!(result, Err(SpatialError::LocationNotFound(LocationId(42)))));
        let result = BfsRouter::new().route(&graph, LocationId(42), a, BOB);
        assert!(matches!(result, Err(SpatialError::LocationNotFound(LocationId(42)))));
    }

    #[test]
    fn private_destination_filtered_for_non_owner() {
        let (graph, [lobby, hall, room1]) = lobby_with_private_room();
        // A structural path exists, but Bob may not enter room1.
        assert_eq!(BfsRouter::new().route(&graph, lobby, room1, BOB).unwrap(), None);
        let route = BfsRouter::new().route(&graph, lobby, room1, ALICE).unwrap().unwrap();
        assert_eq!(route.locations, vec![lobby, hall, room1]);
    }

    #[test]
    fn private_waypoint_never_used_by_non_owner() {
        let (graph, [start, suite, west, corridor, end, _]) = detour();
        let bob = BfsRouter::new().route(&graph, start, end, BOB).unwrap().unwrap();
        assert_eq!(bob.locations, vec![start, west, corridor, end]);
        assert!(!bob.locations.contains(&suite));

        // The owner gets the shorter path through the suite.
        let alice = BfsRouter::new().route(&graph, start, end, ALICE).unwrap().unwrap();
        assert_eq!(alice.locations, vec![start, suite, end]);
    }

    #[test]
    fn cross_floor_rejected_before_search() {
        let (graph, [start, _, _, _, _, stairs]) = detour();
        // stairs → start is a real edge, yet floors differ.
        let err = BfsRouter::new().route(&graph, stairs, start, BOB).unwrap_err();
        match err {
            SpatialError::CrossFloor { from, to, from_floor, to_floor } => {
                assert_eq!((from, to, from_floor, to_floor), (stairs, start, 2, 1));
            }
            other => panic!("expected CrossFloor, got {other:?}"),
        }
    }

    #[test]
    fn other_floor_never_used_as_waypoint() {
        use crate::{LocationGraphBuilder, LocationSpec};
        // a → up (floor 2) → b is the only structural path.
        let mut builder = LocationGraphBuilder::new();
        let a = builder.add_location(LocationSpec::new("a", 1).connect("up"));
        builder.add_location(LocationSpec::new("up", 2).connect("b"));
        let b = builder.add_location(LocationSpec::new("b", 1));
        let graph = builder.build().unwrap();
        assert_eq!(BfsRouter::new().route(&graph, a, b, BOB).unwrap(), None);
    }

    #[test]
    fn one_way_edges_are_respected() {
        use crate::{LocationGraphBuilder, LocationSpec};
        let mut builder = LocationGraphBuilder::new();
        let a = builder.add_location(LocationSpec::new("a", 1).connect("b"));
        let b = builder.add_location(LocationSpec::new("b", 1));
        let graph = builder.build().unwrap();
        assert!(BfsRouter::new().route(&graph, a, b, BOB).unwrap().is_some());
        assert_eq!(BfsRouter::new().route(&graph, b, a, BOB).unwrap(), None);
    }

    #[test]
    fn route_length_matches_bfs_distance_on_grid() {
        use crate::{LocationGraphBuilder, LocationSpec};
        // 4×4 grid, 4-neighbour passages; distance = manhattan distance.
        let mut builder = LocationGraphBuilder::new();
        let name = |r: u32, c: u32| format!("r{r}c{c}");
        for r in 0..4 {
            for c in 0..4 {
                builder.add_location(LocationSpec::new(name(r, c), 1));
            }
        }
        for r in 0..4 {
            for c in 0..4 {
                if c + 1 < 4 {
                    builder.add_passage(&name(r, c), &name(r, c + 1));
                }
                if r + 1 < 4 {
                    builder.add_passage(&name(r, c), &name(r + 1, c));
                }
            }
        }
        let graph = builder.build().unwrap();
        let router = BfsRouter::new();

        for (r1, c1) in [(0, 0), (1, 2), (3, 3)] {
            for (r2, c2) in [(0, 3), (2, 1), (3, 0), (0, 0)] {
                let from = graph.id_of(&name(r1, c1)).unwrap();
                let to = graph.id_of(&name(r2, c2)).unwrap();
                let route = router.route(&graph, from, to, BOB).unwrap().unwrap();
                let expected = r1.abs_diff(r2) + c1.abs_diff(c2);
                assert_eq!(route.hops() as u32, expected, "{} → {}", name(r1, c1), name(r2, c2));
                assert_eq!(route.locations.first(), Some(&from));
                assert_eq!(route.locations.last(), Some(&to));
                // Consecutive entries are joined by real edges.
                for pair in route.locations.windows(2) {
                    assert!(graph.neighbors(pair[0]).unwrap().contains(&pair[1]));
                }
            }
        }
    }

    #[test]
    fn custom_policy_is_consulted() {
        /// Refuses every location whose name starts with "B".
        struct NoB;
        impl AccessPolicy for NoB {
            fn can_enter(&self, _agent: AgentId, location: &Location) -> bool {
                !location.name.starts_with('B')
            }
        }
        let (graph, [a, _, c]) = line();
        assert_eq!(BfsRouter::with_policy(NoB).route(&graph, a, c, BOB).unwrap(), None);
    }
}
