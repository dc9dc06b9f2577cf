use pantry_planner::{
    AvailabilityEngine, IngredientRequirement, InventoryStore, RawStockLine, Recipe, RecipeCatalog,
};
use proptest::prelude::*;

fn stock_line() -> impl Strategy<Value = (String, u32, String)> {
    ("[a-d]", 0u32..20, prop_oneof![Just("g".to_string()), Just("ml".to_string())])
}

fn requirement() -> impl Strategy<Value = IngredientRequirement> {
    ("[a-f]", 0u32..20, prop_oneof![Just("g"), Just("ml"), Just("units")])
        .prop_map(|(name, quantity, unit)| IngredientRequirement::new(name, quantity, unit))
}

fn build_inventory(lines: &[(String, u32, String)]) -> InventoryStore {
    let mut store = InventoryStore::new();
    store.load(lines.iter().enumerate().map(|(i, (name, quantity, unit))| {
        RawStockLine::from_triple(i + 1, name, &quantity.to_string(), unit)
    }));
    store
}

fn build_catalog(requirements: Vec<Vec<IngredientRequirement>>) -> RecipeCatalog {
    requirements
        .into_iter()
        .enumerate()
        .map(|(i, reqs)| Recipe::new(i as i64, format!("recipe {}", i), reqs, ""))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: a recipe without requirements is feasible for any inventory.
    #[test]
    fn empty_recipe_is_always_feasible(lines in prop::collection::vec(stock_line(), 0..10)) {
        let store = build_inventory(&lines);
        let recipe = Recipe::new(1, "nothing", vec![], "");
        prop_assert!(AvailabilityEngine::default().is_feasible(&recipe, &store));
    }

    /// Property: a requirement with no matching (name, unit) makes the recipe infeasible.
    #[test]
    fn unmatched_requirement_is_infeasible(
        lines in prop::collection::vec(stock_line(), 0..10),
        others in prop::collection::vec(requirement(), 0..4),
        quantity in 0u32..20,
    ) {
        let store = build_inventory(&lines);
        let mut reqs = others;
        // stock names only span a-d, so "zz" never matches
        reqs.push(IngredientRequirement::new("zz", quantity, "g"));
        let recipe = Recipe::new(1, "impossible", reqs, "");

        prop_assert!(!AvailabilityEngine::default().is_feasible(&recipe, &store));
    }

    /// Property: feasibility flips exactly at the first matching line's quantity.
    #[test]
    fn equal_quantity_is_enough_one_more_is_not(have in 0u32..1000) {
        let store = build_inventory(&[("flour".to_string(), have, "g".to_string())]);
        let engine = AvailabilityEngine::default();

        let exact = Recipe::new(1, "exact", vec![IngredientRequirement::new("flour", have, "g")], "");
        let over = Recipe::new(2, "over", vec![IngredientRequirement::new("flour", have + 1, "g")], "");

        prop_assert!(engine.is_feasible(&exact, &store));
        prop_assert!(!engine.is_feasible(&over, &store));
    }

    /// Property: list_available is the order-preserving filter of is_feasible and is idempotent.
    #[test]
    fn list_available_is_an_ordered_filter(
        lines in prop::collection::vec(stock_line(), 0..12),
        recipes in prop::collection::vec(prop::collection::vec(requirement(), 0..4), 0..8),
    ) {
        let store = build_inventory(&lines);
        let catalog = build_catalog(recipes);
        let engine = AvailabilityEngine::default();

        let expected: Vec<i64> = catalog
            .all()
            .iter()
            .filter(|r| engine.is_feasible(r, &store))
            .map(|r| r.id)
            .collect();
        let first: Vec<i64> = engine.list_available(&catalog, &store).iter().map(|r| r.id).collect();
        let second: Vec<i64> = engine.list_available(&catalog, &store).iter().map(|r| r.id).collect();

        prop_assert_eq!(&first, &expected);
        prop_assert_eq!(first, second);
    }

    /// Property: N valid lines plus one malformed line load N and report exactly one issue.
    #[test]
    fn one_bad_line_costs_exactly_one(
        lines in prop::collection::vec(stock_line(), 0..50),
        bad_at in 0usize..50,
    ) {
        let mut raw: Vec<RawStockLine> = lines
            .iter()
            .map(|(name, quantity, unit)| RawStockLine::from_triple(0, name, &quantity.to_string(), unit))
            .collect();
        let bad_at = bad_at.min(raw.len());
        raw.insert(bad_at, RawStockLine::from_triple(0, "broken", "1.5", "g"));

        let mut store = InventoryStore::new();
        let report = store.load(raw);

        prop_assert_eq!(report.loaded, lines.len());
        prop_assert_eq!(report.issues.len(), 1);
    }
}
