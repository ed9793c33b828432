//! Summary figures over both collections.

use chrono::Utc;

use domain::{Item, ItemStats, Summary, User, UserStats};

/// Compute counts, inventory value and average price.
///
/// Sums are taken at full precision and rounded to cents only at the end.
/// The average price of an empty item collection is 0.
pub fn aggregate<'a, I, U>(items: I, users: U) -> Summary
where
    I: IntoIterator<Item = &'a Item>,
    U: IntoIterator<Item = &'a User>,
{
    let (count, inventory_value, price_sum) = items
        .into_iter()
        .fold((0usize, 0.0f64, 0.0f64), |(count, value, prices), item| {
            (count + 1, value + item.stock_value(), prices + item.price)
        });

    let average_price = if count > 0 {
        price_sum / count as f64
    } else {
        0.0
    };

    Summary {
        users: UserStats {
            total: users.into_iter().count(),
        },
        items: ItemStats {
            total: count,
            total_inventory_value: round_cents(inventory_value),
            average_price: round_cents(average_price),
        },
        timestamp: Utc::now(),
    }
}

/// Round to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn item(price: f64, quantity: i64) -> Item {
        Item {
            id: Uuid::new_v4(),
            title: "Thing".to_string(),
            description: None,
            price,
            quantity,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_inventory_value_and_average() {
        let items = vec![item(10.0, 2), item(20.0, 1)];
        let summary = aggregate(&items, &Vec::<User>::new());

        assert_eq!(summary.items.total, 2);
        assert_eq!(summary.items.total_inventory_value, 40.0);
        assert_eq!(summary.items.average_price, 15.0);
        assert_eq!(summary.users.total, 0);
    }

    #[test]
    fn test_empty_items_average_is_zero() {
        let summary = aggregate(&Vec::<Item>::new(), &Vec::<User>::new());
        assert_eq!(summary.items.total, 0);
        assert_eq!(summary.items.total_inventory_value, 0.0);
        assert_eq!(summary.items.average_price, 0.0);
    }

    #[test]
    fn test_rounding_applies_to_the_final_sum() {
        // 0.1 × 3 is 0.30000000000000004 at full precision
        let items = vec![item(0.1, 3)];
        let summary = aggregate(&items, &Vec::<User>::new());

        assert_eq!(summary.items.total_inventory_value, 0.3);
        assert_eq!(summary.items.average_price, 0.1);
    }

    #[test]
    fn test_zero_quantity_counts_toward_average_only() {
        let items = vec![item(9.99, 0), item(0.01, 3)];
        let summary = aggregate(&items, &Vec::<User>::new());

        assert_eq!(summary.items.total_inventory_value, 0.03);
        assert_eq!(summary.items.average_price, 5.0);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.344), 12.34);
        assert_eq!(round_cents(12.346), 12.35);
        assert_eq!(round_cents(-0.0), 0.0);
    }
}
