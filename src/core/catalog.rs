//! The demos of the tour and the catalog that builds them from configuration.

use crate::core::grouping::group_sorted;
use crate::core::inventory::Inventory;
use crate::core::memo::Fibonacci;
use crate::core::sequences::{cubes, cubes_where, evens, is_even, squares};
use crate::domain::model::{ConnectionOpts, PlainOpts, ProductRecord};
use crate::domain::ports::{ConfigProvider, Demo};
use crate::utils::error::Result;
use crate::utils::repr::PyRepr;

/// Demo names in the order the tour runs them.
pub const DEMO_NAMES: [&str; 8] = [
    "filter-evens",
    "squares",
    "cubes",
    "comprehension-filters",
    "grouping",
    "fibonacci",
    "inventory",
    "records",
];

pub struct FilterEvensDemo;

impl Demo for FilterEvensDemo {
    fn name(&self) -> &'static str {
        "filter-evens"
    }

    fn description(&self) -> &'static str {
        "Filter the range [1, 15) for even numbers"
    }

    fn run(&mut self) -> Result<Vec<String>> {
        Ok(vec![evens(1..15).repr()])
    }
}

pub struct SquaresDemo;

impl Demo for SquaresDemo {
    fn name(&self) -> &'static str {
        "squares"
    }

    fn description(&self) -> &'static str {
        "Square every value of [0, 10)"
    }

    fn run(&mut self) -> Result<Vec<String>> {
        Ok(vec![squares(0..10).repr()])
    }
}

pub struct CubesDemo;

impl Demo for CubesDemo {
    fn name(&self) -> &'static str {
        "cubes"
    }

    fn description(&self) -> &'static str {
        "Map every value of [0, 5) to its cube"
    }

    fn run(&mut self) -> Result<Vec<String>> {
        Ok(vec![cubes(0..5).repr()])
    }
}

pub struct ComprehensionFiltersDemo;

impl Demo for ComprehensionFiltersDemo {
    fn name(&self) -> &'static str {
        "comprehension-filters"
    }

    fn description(&self) -> &'static str {
        "Repeat the even filter and the cube mapping with inline conditions"
    }

    fn run(&mut self) -> Result<Vec<String>> {
        let even_values: Vec<i64> = (0..10).filter(|x| x % 2 == 0).collect();
        Ok(vec![even_values.repr(), cubes_where(0..5, is_even).repr()])
    }
}

pub struct GroupingDemo {
    pairs: Vec<(String, i64)>,
}

impl GroupingDemo {
    pub fn new(pairs: Vec<(String, i64)>) -> Self {
        Self { pairs }
    }
}

impl Default for GroupingDemo {
    fn default() -> Self {
        Self::new(vec![
            ("apple".to_string(), 1),
            ("banana".to_string(), 2),
            ("apple".to_string(), 3),
            ("banana".to_string(), 4),
        ])
    }
}

impl Demo for GroupingDemo {
    fn name(&self) -> &'static str {
        "grouping"
    }

    fn description(&self) -> &'static str {
        "Sort labelled pairs and group consecutive equal labels"
    }

    fn run(&mut self) -> Result<Vec<String>> {
        let lines = group_sorted(&self.pairs)
            .into_iter()
            .map(|(label, members)| format!("{} {}", label.to_display(), members.repr()))
            .collect();
        Ok(lines)
    }
}

pub struct FibonacciDemo {
    fibonacci: Fibonacci,
    limit: u32,
}

impl FibonacciDemo {
    pub fn new(limit: u32, cache_size: usize) -> Self {
        Self {
            fibonacci: Fibonacci::new(cache_size),
            limit,
        }
    }
}

impl Demo for FibonacciDemo {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn description(&self) -> &'static str {
        "Memoized Fibonacci numbers with LRU cache statistics"
    }

    fn run(&mut self) -> Result<Vec<String>> {
        let values: Vec<u64> = (0..=self.limit)
            .map(|n| self.fibonacci.compute(n))
            .collect();
        tracing::debug!(
            "fibonacci body ran {} times for limit {}",
            self.fibonacci.evaluations(),
            self.limit
        );
        Ok(vec![
            values.repr(),
            self.fibonacci.cache_info().to_string(),
        ])
    }
}

pub struct InventoryDemo;

impl Demo for InventoryDemo {
    fn name(&self) -> &'static str {
        "inventory"
    }

    fn description(&self) -> &'static str {
        "Nested product inventory that fills in default records on read"
    }

    fn run(&mut self) -> Result<Vec<String>> {
        let mut inventory = Inventory::new();
        let mut lines = vec![inventory.entry("electronics", "laptop").repr()];

        inventory.insert(
            "electronics",
            "laptop",
            ProductRecord {
                warehouse: "main".to_string(),
                sku: "LAP123".to_string(),
                price: 999.99,
                quantity: 10,
            },
        );
        lines.push(inventory.entry("electronics", "laptop").repr());

        Ok(lines)
    }
}

pub struct RecordsDemo;

impl Demo for RecordsDemo {
    fn name(&self) -> &'static str {
        "records"
    }

    fn description(&self) -> &'static str {
        "Named-field connection option records"
    }

    fn run(&mut self) -> Result<Vec<String>> {
        let plain = PlainOpts::new("localhost", 8080, true);
        let checked = ConnectionOpts::new("localhost", 6000, true);

        Ok(vec![
            plain.host.to_display(),
            plain.port.to_display(),
            plain.debug.to_display(),
            checked.host.to_display(),
            checked.port.to_display(),
            checked.debug.to_display(),
            checked.is_port_ok().to_display(),
        ])
    }
}

/// Every demo in tour order, with the given Fibonacci settings.
pub fn all_demos(fibonacci_limit: u32, cache_size: usize) -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(FilterEvensDemo),
        Box::new(SquaresDemo),
        Box::new(CubesDemo),
        Box::new(ComprehensionFiltersDemo),
        Box::new(GroupingDemo::default()),
        Box::new(FibonacciDemo::new(fibonacci_limit, cache_size)),
        Box::new(InventoryDemo),
        Box::new(RecordsDemo),
    ]
}

/// Demos selected by `config`, still in tour order.
pub fn build_catalog<C: ConfigProvider>(config: &C) -> Vec<Box<dyn Demo>> {
    let enabled = config.enabled_demos();
    all_demos(config.fibonacci_limit(), config.cache_size())
        .into_iter()
        .filter(|demo| enabled.is_empty() || enabled.iter().any(|name| name == demo.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticConfig {
        demos: Vec<String>,
    }

    impl ConfigProvider for StaticConfig {
        fn enabled_demos(&self) -> &[String] {
            &self.demos
        }

        fn fibonacci_limit(&self) -> u32 {
            5
        }

        fn cache_size(&self) -> usize {
            16
        }

        fn output_format(&self) -> &str {
            "text"
        }
    }

    #[test]
    fn test_catalog_names_match_constant() {
        let names: Vec<&str> = all_demos(20, 256).iter().map(|d| d.name()).collect();
        assert_eq!(names, DEMO_NAMES.to_vec());
    }

    #[test]
    fn test_catalog_keeps_tour_order_when_filtered() {
        let config = StaticConfig {
            demos: vec!["records".to_string(), "squares".to_string()],
        };
        let names: Vec<&str> = build_catalog(&config).iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["squares", "records"]);
    }

    #[test]
    fn test_grouping_lines() {
        let lines = GroupingDemo::default().run().unwrap();
        assert_eq!(
            lines,
            vec![
                "apple [('apple', 1), ('apple', 3)]",
                "banana [('banana', 2), ('banana', 4)]",
            ]
        );
    }

    #[test]
    fn test_fibonacci_lines_respect_limit() {
        let lines = FibonacciDemo::new(5, 16).run().unwrap();
        assert_eq!(lines[0], "[0, 1, 1, 2, 3, 5]");
        assert_eq!(lines[1], "CacheInfo(hits=8, misses=6, maxsize=16, currsize=6)");
    }

    #[test]
    fn test_records_lines() {
        let lines = RecordsDemo.run().unwrap();
        assert_eq!(
            lines,
            vec!["localhost", "8080", "True", "localhost", "6000", "True", "False"]
        );
    }
}
