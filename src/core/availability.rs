use crate::core::catalog::RecipeCatalog;
use crate::domain::model::{IngredientRequirement, Recipe, Shortfall};
use crate::domain::ports::{MatchPolicy, StockLookup};

/// Decides which recipes the current stock can satisfy.
///
/// Stateless apart from the match policy: every call reads the inventory it is
/// handed, so stock added between calls is picked up without invalidation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityEngine {
    policy: MatchPolicy,
}

impl AvailabilityEngine {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Quantity the policy offers for a requirement, `None` when nothing matches.
    pub fn available_for<S: StockLookup + ?Sized>(
        &self,
        requirement: &IngredientRequirement,
        inventory: &S,
    ) -> Option<u64> {
        match self.policy {
            MatchPolicy::FirstMatch => inventory
                .find(&requirement.name, &requirement.unit)
                .map(|stock| u64::from(stock.quantity)),
            MatchPolicy::SumByKey => inventory.total_quantity(&requirement.name, &requirement.unit),
        }
    }

    fn is_met<S: StockLookup + ?Sized>(&self, requirement: &IngredientRequirement, inventory: &S) -> bool {
        self.available_for(requirement, inventory)
            .is_some_and(|available| available >= u64::from(requirement.quantity))
    }

    /// Stops at the first unmet requirement. A recipe with no requirements is always feasible.
    pub fn is_feasible<S: StockLookup + ?Sized>(&self, recipe: &Recipe, inventory: &S) -> bool {
        recipe
            .requirements
            .iter()
            .all(|requirement| self.is_met(requirement, inventory))
    }

    pub fn list_available<'a, S: StockLookup + ?Sized>(
        &self,
        catalog: &'a RecipeCatalog,
        inventory: &S,
    ) -> Vec<&'a Recipe> {
        let available: Vec<&Recipe> = catalog
            .all()
            .iter()
            .filter(|recipe| self.is_feasible(recipe, inventory))
            .collect();
        tracing::debug!(
            "{} of {} recipes can be prepared ({:?})",
            available.len(),
            catalog.len(),
            self.policy
        );
        available
    }

    /// Every unmet requirement, in recipe order. Empty exactly when the recipe is feasible.
    pub fn shortfalls<S: StockLookup + ?Sized>(&self, recipe: &Recipe, inventory: &S) -> Vec<Shortfall> {
        recipe
            .requirements
            .iter()
            .filter_map(|requirement| {
                let available = self.available_for(requirement, inventory);
                match available {
                    Some(quantity) if quantity >= u64::from(requirement.quantity) => None,
                    _ => Some(Shortfall {
                        requirement: requirement.clone(),
                        available: available.unwrap_or(0),
                    }),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inventory::InventoryStore;
    use crate::domain::model::RawStockLine;

    fn inventory(lines: &[(&str, &str, &str)]) -> InventoryStore {
        let mut store = InventoryStore::new();
        store.load(
            lines
                .iter()
                .enumerate()
                .map(|(i, (n, q, u))| RawStockLine::from_triple(i + 1, n, q, u)),
        );
        store
    }

    fn recipe(id: i64, requirements: &[(&str, u32, &str)]) -> Recipe {
        Recipe::new(
            id,
            format!("Recipe {}", id),
            requirements
                .iter()
                .map(|(n, q, u)| IngredientRequirement::new(*n, *q, *u))
                .collect(),
            "",
        )
    }

    #[test]
    fn test_insufficient_milk_then_lowered_requirement() {
        let store = inventory(&[("egg", "4", "units"), ("milk", "200", "ml")]);
        let engine = AvailabilityEngine::default();

        let too_much = recipe(1, &[("egg", 2, "units"), ("milk", 250, "ml")]);
        assert!(!engine.is_feasible(&too_much, &store));

        let just_enough = recipe(2, &[("egg", 2, "units"), ("milk", 200, "ml")]);
        assert!(engine.is_feasible(&just_enough, &store));
    }

    #[test]
    fn test_boundary_equal_and_one_less() {
        let store = inventory(&[("flour", "300", "g")]);
        let engine = AvailabilityEngine::default();

        assert!(engine.is_feasible(&recipe(1, &[("flour", 300, "g")]), &store));
        assert!(!engine.is_feasible(&recipe(2, &[("flour", 301, "g")]), &store));
    }

    #[test]
    fn test_empty_requirements_always_feasible() {
        let engine = AvailabilityEngine::default();
        assert!(engine.is_feasible(&recipe(1, &[]), &InventoryStore::new()));
    }

    #[test]
    fn test_unit_and_name_must_match_exactly() {
        let store = inventory(&[("sugar", "500", "gram"), ("Egg", "6", "units")]);
        let engine = AvailabilityEngine::default();

        assert!(!engine.is_feasible(&recipe(1, &[("sugar", 10, "grams")]), &store));
        assert!(!engine.is_feasible(&recipe(2, &[("egg", 1, "units")]), &store));
    }

    #[test]
    fn test_first_match_versus_sum_by_key() {
        let store = inventory(&[("flour", "100", "g"), ("flour", "500", "g")]);
        let bread = recipe(1, &[("flour", 300, "g")]);

        assert!(!AvailabilityEngine::new(MatchPolicy::FirstMatch).is_feasible(&bread, &store));
        assert!(AvailabilityEngine::new(MatchPolicy::SumByKey).is_feasible(&bread, &store));
    }

    #[test]
    fn test_list_available_preserves_catalog_order() {
        let store = inventory(&[("egg", "4", "units"), ("milk", "200", "ml")]);
        let catalog: RecipeCatalog = vec![
            recipe(3, &[("milk", 100, "ml")]),
            recipe(1, &[("butter", 10, "g")]),
            recipe(2, &[]),
            recipe(4, &[("egg", 4, "units")]),
        ]
        .into_iter()
        .collect();
        let engine = AvailabilityEngine::default();

        let first: Vec<i64> = engine.list_available(&catalog, &store).iter().map(|r| r.id).collect();
        let second: Vec<i64> = engine.list_available(&catalog, &store).iter().map(|r| r.id).collect();

        assert_eq!(first, vec![3, 2, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_added_stock_is_seen_on_next_query() {
        let mut store = inventory(&[("egg", "2", "units")]);
        let catalog: RecipeCatalog = vec![recipe(1, &[("egg", 2, "units"), ("sugar", 5, "grams")])]
            .into_iter()
            .collect();
        let engine = AvailabilityEngine::default();

        assert!(engine.list_available(&catalog, &store).is_empty());

        store.add("sugar", 5, "grams").unwrap();
        assert_eq!(engine.list_available(&catalog, &store).len(), 1);
    }

    #[test]
    fn test_later_duplicate_does_not_unblock_first_match() {
        let mut store = inventory(&[("egg", "1", "units")]);
        let catalog: RecipeCatalog = vec![recipe(1, &[("egg", 2, "units")])].into_iter().collect();

        store.add("egg", 2, "units").unwrap();

        assert!(AvailabilityEngine::default().list_available(&catalog, &store).is_empty());
        assert_eq!(
            AvailabilityEngine::new(MatchPolicy::SumByKey)
                .list_available(&catalog, &store)
                .len(),
            1
        );
    }

    #[test]
    fn test_shortfalls_report_missing_and_insufficient() {
        let store = inventory(&[("egg", "1", "units"), ("milk", "500", "ml")]);
        let engine = AvailabilityEngine::default();
        let omelette = recipe(1, &[("egg", 3, "units"), ("milk", 100, "ml"), ("salt", 2, "g")]);

        let shortfalls = engine.shortfalls(&omelette, &store);

        assert_eq!(shortfalls.len(), 2);
        assert_eq!(shortfalls[0].requirement.name, "egg");
        assert_eq!(shortfalls[0].available, 1);
        assert_eq!(shortfalls[0].missing(), 2);
        assert_eq!(shortfalls[1].requirement.name, "salt");
        assert_eq!(shortfalls[1].available, 0);
        assert!(engine.shortfalls(&recipe(2, &[("milk", 500, "ml")]), &store).is_empty());
    }
}
