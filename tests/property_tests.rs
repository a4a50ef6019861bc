//! Property tests for zone capacity and card equality.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use king_mat::{CardPosition, MagicCard, MonsterCard, PlayerMat, MAX_ZONE_CARDS};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn position() -> impl Strategy<Value = CardPosition> {
    prop_oneof![Just(CardPosition::Attack), Just(CardPosition::Defense)]
}

proptest! {
    #[test]
    fn monster_zone_size_is_capped(adds in 0usize..12, atk in 0i64..5000, def in 0i64..5000) {
        let mut mat = PlayerMat::new();
        for _ in 0..adds {
            mat.add_monster_card(MonsterCard::new(atk, def, CardPosition::Attack));
        }
        prop_assert_eq!(mat.monster_zone().len(), adds.min(MAX_ZONE_CARDS));
        prop_assert!(mat.magic_zone().is_empty());
    }

    #[test]
    fn magic_zone_size_is_capped(names in prop::collection::vec("[a-z]{1,8}", 0..12)) {
        let mut mat = PlayerMat::new();
        for name in &names {
            mat.add_magic_card(MagicCard::new(name.as_str()));
        }
        prop_assert_eq!(mat.magic_zone().len(), names.len().min(MAX_ZONE_CARDS));

        // The first cards in are the ones kept.
        for (kept, name) in mat.magic_zone().iter().zip(&names) {
            prop_assert_eq!(kept.as_magic().map(|m| m.name.as_str()), Some(name.as_str()));
        }
    }

    #[test]
    fn magic_equality_follows_name(a in "[a-zA-Z ]{0,12}", b in "[a-zA-Z ]{0,12}") {
        let left = MagicCard::new(a.clone());
        let right = MagicCard::new(b.clone());
        prop_assert_eq!(left == right, a == b);
        if a == b {
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }
    }

    #[test]
    fn monster_equality_follows_stats(
        atk in 0i64..3000,
        def in 0i64..3000,
        pos in position(),
    ) {
        let a = MonsterCard::new(atk, def, pos);
        let b = MonsterCard::new(atk, def, pos);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_ne!(a, MonsterCard::new(atk, def, pos.toggled()));
    }

    #[test]
    fn remove_takes_exactly_one_match(copies in 1usize..=5, target in "[a-z]{1,4}") {
        let mut mat = PlayerMat::new();
        for _ in 0..copies {
            mat.add_magic_card(MagicCard::new(target.as_str()));
        }
        mat.remove_magic_card(MagicCard::new(target.as_str()));
        prop_assert_eq!(mat.magic_zone().len(), copies - 1);

        // Uppercase never matches the lowercase target.
        let before = mat.clone();
        mat.remove_magic_card(MagicCard::new(target.to_uppercase()));
        prop_assert_eq!(mat, before);
    }
}
