//! Property tests: editable cells keep their payload and text form in sync.

use hostbind_tests::ThrustHost;
use hostbind_thrust::{PropertyValue, THRUST_PROPERTIES};
use hostbind_core::FieldKind;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Name and host field of an editable property.
fn arb_editable_property() -> impl Strategy<Value = (&'static str, &'static str)> {
    let editable: Vec<_> = THRUST_PROPERTIES
        .iter()
        .filter(|s| s.kind == FieldKind::EditableNumber)
        .map(|s| (s.name, s.field))
        .collect();
    prop::sample::select(editable)
}

/// Finite values, including ones far outside any sensible limit.
fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0..=1.0f64,
        -1.0e6..1.0e6f64,
        Just(0.0),
        Just(1.0),
        Just(f64::MAX),
        Just(f64::MIN_POSITIVE),
    ]
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Whatever is written is read back verbatim, and the host's text form
    /// parses back to the same number.
    #[test]
    fn write_then_read_is_verbatim(
        (name, field) in arb_editable_property(),
        value in arb_number(),
    ) {
        let host = ThrustHost::conforming();
        let tc = host.controller().unwrap();

        tc.surface().set(name, PropertyValue::Double(value)).unwrap();

        prop_assert_eq!(tc.surface().get(name).unwrap(), PropertyValue::Double(value));
        let text = host.cell_text(field);
        prop_assert_eq!(text.parse::<f64>().unwrap(), value);
    }

    /// The last of a sequence of writes wins, for both payload and text.
    #[test]
    fn last_write_wins(
        (name, field) in arb_editable_property(),
        values in prop::collection::vec(arb_number(), 1..8),
    ) {
        let host = ThrustHost::conforming();
        let tc = host.controller().unwrap();

        for v in &values {
            tc.surface().set(name, PropertyValue::Double(*v)).unwrap();
        }
        let last = *values.last().unwrap();
        prop_assert_eq!(tc.surface().get_double(name).unwrap(), last);
        prop_assert_eq!(host.cell_text(field), last.to_string());
    }
}
