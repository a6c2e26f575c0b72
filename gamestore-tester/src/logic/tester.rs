use colored::Colorize;
use gamestore_core::Catalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::scenario::{ScenarioCtx, TestScenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    catalog: Rc<Catalog>,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(catalog: Rc<Catalog>, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::new();

        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (seed: {})",
                    scenario.name.bright_white(),
                    seed
                );
            }

            let result = self.run_single_scenario(scenario, seed, iterations);
            results.push(result);
        }

        results
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let ctx = ScenarioCtx {
                catalog: Rc::clone(&self.catalog),
                seed: iteration_seed,
                verbose: self.verbose,
            };
            let mut rng = ChaCha8Rng::seed_from_u64(iteration_seed);
            let start_time = Instant::now();

            match (scenario.check)(&ctx, &mut rng) {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{} passed ({duration:?})",
                            i + 1,
                            iterations
                        );
                    }
                }
                Err(err) => {
                    log::debug!("{} failed on seed {iteration_seed}: {err:#}", scenario.key);
                    failures.push(format!(
                        "Iteration {} (seed {iteration_seed}): {err:#}",
                        i + 1
                    ));
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            i + 1,
                            iterations,
                            format!("{err:#}").red()
                        );
                    }
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis_vec = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis_vec
            .into_iter()
            .map(|m| Duration::from_millis(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::get_scenario;
    use crate::source::EmbeddedCatalog;
    use anyhow::bail;
    use gamestore_core::CatalogSource;

    fn tester() -> LogicTester {
        LogicTester::new(Rc::new(EmbeddedCatalog.load_catalog().unwrap()), false)
    }

    fn always_fails(_ctx: &ScenarioCtx, _rng: &mut ChaCha8Rng) -> anyhow::Result<()> {
        bail!("boom")
    }

    #[test]
    fn runs_one_result_per_seed() {
        let scenario = get_scenario("random-actions").unwrap();
        let results = tester().run_scenario(&scenario, &[1, 2, 3], 2);
        assert_eq!(results.len(), 3);
        for result in &results {
            assert!(result.passed, "{:?}", result.failures);
            assert_eq!(result.iterations_run, 2);
            assert_eq!(result.successful_iterations, 2);
            assert_eq!(result.performance_data.len(), 2);
        }
        assert_eq!(results[1].seed, 2);
    }

    #[test]
    fn failures_are_recorded_with_seed() {
        let scenario = TestScenario {
            key: "broken",
            name: "Broken",
            check: always_fails,
        };
        let results = tester().run_scenario(&scenario, &[7], 3);
        let result = &results[0];
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 3);
        assert!(result.failures[1].contains("seed 8"));
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn results_serialize_durations_as_millis() {
        let result = ScenarioResult {
            scenario_name: "Smoke".into(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
            performance_data: vec![Duration::from_millis(12)],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["average_duration"], 12);
        assert_eq!(value["performance_data"][0], 12);
        let back: ScenarioResult = serde_json::from_value(value).unwrap();
        assert_eq!(back.average_duration, result.average_duration);
    }
}
