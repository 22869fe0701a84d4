//! Property-based tests for verity-validator.

use proptest::prelude::*;
use verity_validator::foundation::{DEFAULT_GROUP, is_ignored_for_groups};
use verity_validator::prelude::*;

fn element() -> impl Strategy<Value = PropertyPathElement> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(PropertyPathElement::Property),
        (0usize..100).prop_map(PropertyPathElement::Index),
    ]
}

fn expected_rendering(elements: &[PropertyPathElement]) -> String {
    let mut out = String::new();
    for (position, element) in elements.iter().enumerate() {
        match element {
            PropertyPathElement::Property(name) => {
                if position > 0 {
                    out.push('.');
                }
                out.push_str(name);
            }
            PropertyPathElement::Index(index) => out.push_str(&format!("[{index}]")),
        }
    }
    out
}

// ============================================================================
// PATHS
// ============================================================================

proptest! {
    #[test]
    fn path_renders_dotted_and_bracketed(elements in prop::collection::vec(element(), 0..8)) {
        let path: PropertyPath = elements.iter().cloned().collect();
        prop_assert_eq!(path.to_string(), expected_rendering(&elements));
        prop_assert_eq!(path.len(), elements.len());
    }

    #[test]
    fn scope_paths_compose(elements in prop::collection::vec(element(), 1..6)) {
        let validator = Validator::new().at(elements.iter().cloned());
        let violations = validator
            .validate(&[&string("").with(it::is_not_blank())])
            .unwrap_err()
            .into_violations()
            .unwrap();
        prop_assert_eq!(
            violations.first().unwrap().path().to_string(),
            expected_rendering(&elements)
        );
    }
}

// ============================================================================
// VIOLATION LISTS
// ============================================================================

proptest! {
    #[test]
    fn list_is_error_iff_non_empty(count in 0usize..5) {
        let scope = Scope::default();
        let list: ViolationList = (0..count)
            .map(|i| scope.at_index(i).build_violation("code", "Message.").create())
            .collect();
        prop_assert_eq!(list.into_result().is_err(), count > 0);
    }

    #[test]
    fn fatal_errors_pass_through_untouched(count in 0usize..5) {
        let scope = Scope::default();
        let mut list: ViolationList = (0..count)
            .map(|_| scope.build_violation("code", "Message.").create())
            .collect();
        let returned = list.append_from_error(Error::Cancelled);
        prop_assert!(matches!(returned, Err(Error::Cancelled)));
        prop_assert_eq!(list.len(), count);
    }
}

// ============================================================================
// GROUPS
// ============================================================================

proptest! {
    #[test]
    fn ungrouped_constraints_ignore_default_group(value in ".{0,10}") {
        let plain = Validator::new().validate(&[&string(&value).with(it::is_not_blank())]);
        let with_default = Validator::new()
            .with_groups([DEFAULT_GROUP])
            .validate(&[&string(&value).with(it::is_not_blank())]);
        prop_assert_eq!(plain.is_ok(), with_default.is_ok());
        prop_assert!(!is_ignored_for_groups::<&str, &str>(&[], &[]));
        prop_assert!(!is_ignored_for_groups(&[DEFAULT_GROUP], &[] as &[&str]));
    }

    #[test]
    fn groups_match_on_intersection(
        active in prop::collection::vec("[a-c]", 1..3),
        groups in prop::collection::vec("[a-c]", 1..3),
    ) {
        let intersects = active.iter().any(|a| groups.contains(a));
        prop_assert_eq!(is_ignored_for_groups(&active, &groups), !intersects);
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

proptest! {
    #[test]
    fn between_agrees_with_bounds(n in -1000i64..1000, min in -500i64..0, max in 0i64..500) {
        let result = Validator::new().validate_number(n, &[&it::is_between(min, max)]);
        prop_assert_eq!(result.is_ok(), (min..=max).contains(&n));
    }

    #[test]
    fn validation_is_idempotent(s in ".{0,20}") {
        let validator = Validator::new();
        let constraints: [&dyn Constraint; 2] = [&it::has_min_length(3), &it::has_max_length(10)];
        let first = validator.validate_string(&s, &constraints);
        let second = validator.validate_string(&s, &constraints);
        prop_assert_eq!(first.is_ok(), second.is_ok());
    }
}
