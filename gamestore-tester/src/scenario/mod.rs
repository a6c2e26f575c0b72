use anyhow::Result;
use gamestore_core::Catalog;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;

pub mod cart;
pub mod filters;
pub mod random;
pub mod smoke;

/// Inputs shared by every scenario iteration.
#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub catalog: Rc<Catalog>,
    pub seed: u64,
    pub verbose: bool,
}

pub type ScenarioCheck = fn(&ScenarioCtx, &mut ChaCha8Rng) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub check: ScenarioCheck,
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        key: "smoke",
        name: "Smoke Test",
        check: smoke::smoke,
    },
    TestScenario {
        key: "documented-examples",
        name: "Documented Examples",
        check: smoke::documented_examples,
    },
    TestScenario {
        key: "filter-properties",
        name: "Filter Properties",
        check: filters::filter_properties,
    },
    TestScenario {
        key: "sort-orders",
        name: "Sort Orders",
        check: filters::sort_orders,
    },
    TestScenario {
        key: "cart-lifecycle",
        name: "Cart Lifecycle",
        check: cart::cart_lifecycle,
    },
    TestScenario {
        key: "random-actions",
        name: "Random Action Sequences",
        check: random::random_actions,
    },
];

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = match name.to_lowercase().as_str() {
        "examples" => "documented-examples",
        "filters" => "filter-properties",
        "sort" | "sorting" => "sort-orders",
        "cart" => "cart-lifecycle",
        "random" | "fuzz" => "random-actions",
        other => return SCENARIOS.iter().find(|s| s.key == other).cloned(),
    };
    SCENARIOS.iter().find(|s| s.key == key).cloned()
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.name)).collect()
}
