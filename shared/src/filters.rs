//! Derived views over resource lists: table occupancy counts and menu filtering

use crate::models::{DiningTable, Food, FoodStatus, TableStatus};

/// Occupancy summary shown above the table map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStatusCounts {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
}

impl TableStatusCounts {
    pub fn from_tables<'a>(tables: impl IntoIterator<Item = &'a DiningTable>) -> Self {
        tables.into_iter().fold(Self::default(), |mut acc, t| {
            acc.total += 1;
            match t.status {
                TableStatus::Available => acc.available += 1,
                TableStatus::Occupied => acc.occupied += 1,
                TableStatus::Reserved => acc.reserved += 1,
            }
            acc
        })
    }

    /// Counts restricted to one area
    pub fn for_area(tables: &[DiningTable], area_id: i64) -> Self {
        Self::from_tables(tables.iter().filter(|t| t.area_id == area_id))
    }
}

/// Food list filter of the menu screen
///
/// Empty criteria match everything. The keyword is matched case-insensitively
/// against name and description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuFilter {
    pub keyword: Option<String>,
    pub category_id: Option<i64>,
    pub menu_id: Option<i64>,
    pub status: Option<FoodStatus>,
}

impl MenuFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let trimmed = keyword.trim();
        self.keyword = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn menu(mut self, menu_id: i64) -> Self {
        self.menu_id = Some(menu_id);
        self
    }

    pub fn status(mut self, status: FoodStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, food: &Food) -> bool {
        if self.category_id.is_some_and(|c| food.category_id != Some(c)) {
            return false;
        }
        if self.menu_id.is_some_and(|m| food.menu_id != Some(m)) {
            return false;
        }
        if self.status.is_some_and(|s| food.status != s) {
            return false;
        }
        match &self.keyword {
            None => true,
            Some(kw) => {
                food.name.to_lowercase().contains(kw.as_str())
                    || food
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(kw.as_str()))
            }
        }
    }

    pub fn apply<'a>(&self, foods: &'a [Food]) -> Vec<&'a Food> {
        foods.iter().filter(|f| self.matches(f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: i64, area_id: i64, status: TableStatus) -> DiningTable {
        DiningTable {
            id,
            name: format!("Bàn {id}"),
            area_id,
            capacity: 4,
            status,
            branch_id: Some(1),
        }
    }

    fn food(id: i64, name: &str, category_id: i64, status: FoodStatus) -> Food {
        Food {
            id,
            name: name.into(),
            description: None,
            price: 50_000.0,
            category_id: Some(category_id),
            menu_id: Some(1),
            image: None,
            unit_id: None,
            status,
        }
    }

    #[test]
    fn test_table_status_counts() {
        let tables = vec![
            table(1, 1, TableStatus::Available),
            table(2, 1, TableStatus::Occupied),
            table(3, 2, TableStatus::Occupied),
            table(4, 2, TableStatus::Reserved),
        ];

        let all = TableStatusCounts::from_tables(&tables);
        assert_eq!(all, TableStatusCounts { total: 4, available: 1, occupied: 2, reserved: 1 });

        let area2 = TableStatusCounts::for_area(&tables, 2);
        assert_eq!(area2, TableStatusCounts { total: 2, available: 0, occupied: 1, reserved: 1 });
    }

    #[test]
    fn test_menu_filter() {
        let foods = vec![
            food(1, "Phở bò tái", 1, FoodStatus::Available),
            food(2, "Phở gà", 1, FoodStatus::OutOfStock),
            food(3, "Cơm tấm", 2, FoodStatus::Available),
        ];

        let names = |f: &MenuFilter| f.apply(&foods).iter().map(|f| f.id).collect::<Vec<_>>();

        assert_eq!(names(&MenuFilter::new()), vec![1, 2, 3]);
        assert_eq!(names(&MenuFilter::new().keyword("  PHỞ ")), vec![1, 2]);
        assert_eq!(names(&MenuFilter::new().keyword("phở").status(FoodStatus::Available)), vec![1]);
        assert_eq!(names(&MenuFilter::new().category(2)), vec![3]);
        assert_eq!(names(&MenuFilter::new().keyword("   ")), vec![1, 2, 3]);
        assert!(names(&MenuFilter::new().menu(9)).is_empty());
    }
}
