//! Chart Aggregation
//!
//! Pure grouping logic for the charts view. Components only render what this
//! module computes; backend summaries are never recomputed here beyond the
//! per-category sums the charts need.

use crate::assets::AssetRecord;

/// Cycled when a category declares no color of its own.
pub const FALLBACK_PALETTE: &[&str] = &[
    "#14b8a6", "#f97316", "#6366f1", "#eab308", "#ec4899", "#22c55e", "#64748b",
];

/// Name used for assets without a category reference.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Per-category sums in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    pub name: String,
    pub value: f64,
    pub equity: f64,
    pub color: String,
}

/// Group assets by category name, summing current value and equity.
///
/// Color comes from the category's declared color when present, otherwise
/// from the fallback palette cycled by group index.
pub fn totals_by_category(assets: &[AssetRecord]) -> Vec<CategoryTotals> {
    let mut groups: Vec<CategoryTotals> = Vec::new();
    for asset in assets {
        let (name, declared_color) = match &asset.category {
            Some(c) => (c.name.as_str(), c.color.clone()),
            None => (UNCATEGORIZED, None),
        };
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => {
                group.value += asset.current_value;
                group.equity += asset.equity;
                if group.color.is_empty() {
                    group.color = declared_color.unwrap_or_default();
                }
            }
            None => groups.push(CategoryTotals {
                name: name.to_string(),
                value: asset.current_value,
                equity: asset.equity,
                color: declared_color.unwrap_or_default(),
            }),
        }
    }
    for (i, group) in groups.iter_mut().enumerate() {
        if group.color.is_empty() {
            group.color = FALLBACK_PALETTE[i % FALLBACK_PALETTE.len()].to_string();
        }
    }
    groups
}

/// Proportional share of total value per group, as (name, fraction, color).
///
/// Fractions sum to 1.0; a zero-value total yields zero shares so the donut
/// renders empty rather than dividing by zero.
pub fn value_shares(groups: &[CategoryTotals]) -> Vec<(String, f64, String)> {
    let total: f64 = groups.iter().map(|g| g.value).sum();
    groups
        .iter()
        .map(|g| {
            let share = if total > 0.0 { g.value / total } else { 0.0 };
            (g.name.clone(), share, g.color.clone())
        })
        .collect()
}

/// Largest single bar across value and equity, for bar-height scaling.
pub fn max_bar_value(groups: &[CategoryTotals]) -> f64 {
    groups
        .iter()
        .flat_map(|g| [g.value, g.equity])
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::collections::BTreeMap;

    fn make_asset(category: Option<(&str, Option<&str>)>, value: f64, equity: f64) -> AssetRecord {
        AssetRecord {
            id: 0,
            name: "asset".to_string(),
            current_value: value,
            purchase_price: None,
            amount_owed: None,
            equity,
            purchase_date: None,
            notes: None,
            category: category.map(|(name, color)| Category {
                id: 1,
                name: name.to_string(),
                description: None,
                icon: None,
                color: color.map(str::to_string),
            }),
            custom_fields: BTreeMap::new(),
        }
    }

    #[test]
    fn test_groups_and_sums_by_category() {
        let assets = vec![
            make_asset(Some(("Vehicles", None)), 100.0, 60.0),
            make_asset(Some(("Vehicles", None)), 50.0, 40.0),
            make_asset(None, 10.0, 10.0),
        ];
        let groups = totals_by_category(&assets);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Vehicles");
        assert_eq!(groups[0].value, 150.0);
        assert_eq!(groups[0].equity, 100.0);
        assert_eq!(groups[1].name, UNCATEGORIZED);
        assert_eq!(groups[1].value, 10.0);
        assert_eq!(groups[1].equity, 10.0);
    }

    #[test]
    fn test_declared_color_wins_over_palette() {
        let assets = vec![
            make_asset(Some(("Vehicles", Some("#ff0000"))), 1.0, 1.0),
            make_asset(Some(("Jewelry", None)), 1.0, 1.0),
        ];
        let groups = totals_by_category(&assets);
        assert_eq!(groups[0].color, "#ff0000");
        assert_eq!(groups[1].color, FALLBACK_PALETTE[1]);
    }

    #[test]
    fn test_palette_cycles_past_its_length() {
        let assets: Vec<_> = (0..FALLBACK_PALETTE.len() + 1)
            .map(|i| make_asset(Some((&format!("Cat{}", i), None)), 1.0, 1.0))
            .collect();
        let groups = totals_by_category(&assets);
        assert_eq!(groups.last().unwrap().color, FALLBACK_PALETTE[0]);
    }

    #[test]
    fn test_empty_list_yields_no_groups() {
        assert!(totals_by_category(&[]).is_empty());
        assert!(value_shares(&[]).is_empty());
    }

    #[test]
    fn test_value_shares_sum_to_one() {
        let assets = vec![
            make_asset(Some(("Vehicles", None)), 150.0, 100.0),
            make_asset(None, 50.0, 50.0),
        ];
        let shares = value_shares(&totals_by_category(&assets));
        assert_eq!(shares[0].1, 0.75);
        assert_eq!(shares[1].1, 0.25);
    }

    #[test]
    fn test_zero_total_avoids_division() {
        let assets = vec![make_asset(None, 0.0, 0.0)];
        let shares = value_shares(&totals_by_category(&assets));
        assert_eq!(shares[0].1, 0.0);
    }

    #[test]
    fn test_max_bar_value_spans_value_and_equity() {
        let groups = totals_by_category(&[
            make_asset(Some(("A", None)), 10.0, 90.0),
            make_asset(Some(("B", None)), 40.0, 20.0),
        ]);
        assert_eq!(max_bar_value(&groups), 90.0);
    }
}
