//! Property-based tests for the host data model.

use pdguard_schemas::fields::PERSONAL_DATA_ENTITY;
use pdguard_schemas::{AttributeValue, Attributes, Entity, MessageName};
use proptest::prelude::*;

fn flip_case(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().copied().chain(std::iter::repeat(false)))
        .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_message_name_ignores_case(mask in proptest::collection::vec(any::<bool>(), 6)) {
        let Ok(update) = flip_case("update", &mask).parse::<MessageName>();
        prop_assert_eq!(update, MessageName::Update);
        let Ok(create) = flip_case("create", &mask).parse::<MessageName>();
        prop_assert_eq!(create, MessageName::Create);
    }

    #[test]
    fn prop_entity_type_ignores_case(mask in proptest::collection::vec(any::<bool>(), 16)) {
        let entity = Entity::new(flip_case(PERSONAL_DATA_ENTITY, &mask));
        prop_assert!(entity.is_type(PERSONAL_DATA_ENTITY));
    }

    #[test]
    fn prop_text_reads_back_what_was_set(name in "[a-z_]{1,12}", value in ".{0,24}") {
        let mut attrs = Attributes::new();
        attrs.set(name.as_str(), value.as_str());
        prop_assert!(attrs.contains(&name));
        prop_assert_eq!(attrs.text(&name), Ok(Some(value.as_str())));
        prop_assert_eq!(attrs.get(&name), Some(&AttributeValue::text(value.as_str())));
    }
}
