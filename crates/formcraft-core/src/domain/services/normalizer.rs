//! Display-order normalization

use crate::domain::form::FormFieldDefinition;

/// Replace every zero display order with the field's 1-based input position.
///
/// Explicit non-zero orders are left as supplied, so mixing the two can
/// yield repeated or non-increasing orders.
pub fn normalize_display_order(fields: &mut [FormFieldDefinition]) {
    for (index, field) in fields.iter_mut().enumerate() {
        if field.display_order == 0 {
            field.display_order = index as i32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_orders(orders: &[i32]) -> Vec<FormFieldDefinition> {
        orders
            .iter()
            .map(|order| FormFieldDefinition {
                label: "F".into(),
                display_order: *order,
                ..Default::default()
            })
            .collect()
    }

    fn orders(fields: &[FormFieldDefinition]) -> Vec<i32> {
        fields.iter().map(|f| f.display_order).collect()
    }

    #[test]
    fn test_mixed_orders() {
        let mut fields = with_orders(&[0, 5, 0]);
        normalize_display_order(&mut fields);
        assert_eq!(orders(&fields), vec![1, 5, 3]);
    }

    #[test]
    fn test_collisions_are_kept() {
        let mut fields = with_orders(&[2, 0]);
        normalize_display_order(&mut fields);
        assert_eq!(orders(&fields), vec![2, 2]);
    }

    #[test]
    fn test_empty() {
        let mut fields = Vec::new();
        normalize_display_order(&mut fields);
        assert!(fields.is_empty());
    }

    proptest! {
        #[test]
        fn prop_zero_becomes_position(raw in proptest::collection::vec(-3i32..4, 0..32)) {
            let mut fields = with_orders(&raw);
            normalize_display_order(&mut fields);

            for (i, (before, after)) in raw.iter().zip(orders(&fields)).enumerate() {
                if *before == 0 {
                    prop_assert_eq!(after, i as i32 + 1);
                } else {
                    prop_assert_eq!(after, *before);
                }
            }
        }
    }
}
