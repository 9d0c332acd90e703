//! Property tests for membership changes.

use std::collections::BTreeSet;

use proptest::prelude::*;
use shardring::{HashRing, ServerId};

fn servers() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..8)
}

fn keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,24}", 1..200)
}

fn resolve_all(ring: &HashRing, keys: &[String]) -> Vec<ServerId> {
    keys.iter().map(|key| ring.resolve(key).unwrap()).collect()
}

proptest! {
    #[test]
    fn adding_moves_keys_only_to_new_server(
        servers in servers(),
        joining in "[A-Z]{1,8}",
        vnodes in 1usize..16,
        keys in keys(),
    ) {
        let ring = HashRing::new(&servers, vnodes).unwrap();
        let before = resolve_all(&ring, &keys);

        prop_assert!(ring.add_server(joining.as_str()));
        let after = resolve_all(&ring, &keys);

        for (old, new) in before.iter().zip(&after) {
            prop_assert!(old == new || new == joining.as_str());
        }
    }

    #[test]
    fn removing_moves_only_removed_servers_keys(
        servers in servers(),
        pick in any::<prop::sample::Index>(),
        vnodes in 1usize..16,
        keys in keys(),
    ) {
        let ring = HashRing::new(&servers, vnodes).unwrap();
        let leaving = ring.servers()[pick.index(servers.len())].clone();
        let before = resolve_all(&ring, &keys);

        prop_assert!(ring.remove_server(&leaving));
        if ring.is_empty() {
            return Ok(());
        }
        let after = resolve_all(&ring, &keys);

        for (old, new) in before.iter().zip(&after) {
            prop_assert_ne!(new, &leaving);
            if *old != leaving {
                prop_assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn repeated_add_is_noop(servers in servers(), vnodes in 1usize..16, keys in keys()) {
        let ring = HashRing::new(&servers, vnodes).unwrap();
        let tokens = ring.tokens();
        let before = resolve_all(&ring, &keys);

        for server in &servers {
            prop_assert!(!ring.add_server(server.as_str()));
        }

        prop_assert_eq!(ring.tokens(), tokens);
        prop_assert_eq!(resolve_all(&ring, &keys), before);
    }

    #[test]
    fn index_stays_sorted_and_bounded(servers in servers(), vnodes in 1usize..16) {
        let ring = HashRing::new(&servers, vnodes).unwrap();
        let tokens = ring.tokens();

        prop_assert!(tokens.windows(2).all(|w| w[0].0 < w[1].0));
        prop_assert!(tokens.len() <= servers.len() * vnodes);
        for server in &servers {
            let owned = tokens.iter().filter(|(_, owner)| owner == server.as_str()).count();
            prop_assert!(owned <= vnodes);
        }
    }
}
