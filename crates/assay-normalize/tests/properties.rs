//! Property tests for the numeric list normalizer.

use assay_normalize::{RawValue, normalize_numeric_list};
use proptest::prelude::*;

fn raw_value() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        any::<f64>().prop_map(RawValue::Float),
        any::<i64>().prop_map(RawValue::Integer),
        ".{0,16}".prop_map(RawValue::Text),
        "<?[0-9]{1,4}(\\.[0-9]{1,3})? ?(mg|ng/mL|%)?".prop_map(RawValue::Text),
        Just(RawValue::Missing),
    ]
}

proptest! {
    #[test]
    fn output_length_matches_input(
        items in prop::collection::vec(raw_value(), 0..64),
        flag in any::<bool>()
    ) {
        prop_assert_eq!(normalize_numeric_list(&items, flag).len(), items.len());
    }

    #[test]
    fn non_nan_floats_pass_through(
        values in prop::collection::vec(
            any::<f64>().prop_filter("not NaN", |v| !v.is_nan()),
            0..32,
        )
    ) {
        let items: Vec<RawValue> = values.iter().copied().map(RawValue::Float).collect();
        let output = normalize_numeric_list(&items, true);
        for (value, normalized) in values.iter().zip(&output) {
            prop_assert_eq!(normalized.map(f64::to_bits), Some(value.to_bits()));
        }
    }

    #[test]
    fn normalizing_output_is_idempotent(
        items in prop::collection::vec(raw_value(), 0..64),
        flag in any::<bool>()
    ) {
        let first = normalize_numeric_list(&items, flag);
        let again_input: Vec<RawValue> = first.iter().copied().map(RawValue::from).collect();
        let second = normalize_numeric_list(&again_input, flag);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn censored_text_is_missing_when_removed(text in "<[0-9]{1,4}(\\.[0-9]{1,3})?") {
        let items = vec![RawValue::Text(text)];
        prop_assert_eq!(normalize_numeric_list(&items, true), vec![None]);
    }

    #[test]
    fn censored_text_parses_when_kept(digits in "[1-9][0-9]{0,3}") {
        let items = vec![RawValue::Text(format!("<{digits}"))];
        let expected: f64 = digits.parse().unwrap();
        prop_assert_eq!(normalize_numeric_list(&items, false), vec![Some(expected)]);
    }
}
