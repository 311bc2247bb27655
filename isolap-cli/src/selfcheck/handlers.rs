use anyhow::{Result, bail};
use log::{error, info};

use isolap_detect::{Detector, DetectorType, Interval, overlaps};

/// A small interval set with a known answer.
struct Scenario {
    name: &'static str,
    intervals: &'static [(i64, i64)],
    expected: Option<(i64, i64)>,
}

const SCENARIOS: [Scenario; 6] = [
    Scenario {
        name: "isolated first",
        intervals: &[(0, 3), (4, 6), (5, 7), (7, 10)],
        expected: Some((0, 3)),
    },
    Scenario {
        name: "isolated last",
        intervals: &[(4, 6), (5, 7), (7, 10), (25, 50)],
        expected: Some((25, 50)),
    },
    Scenario {
        name: "isolated middle",
        intervals: &[(3, 5), (4, 6), (7, 9), (10, 30), (10, 20)],
        expected: Some((7, 9)),
    },
    Scenario {
        name: "chained",
        intervals: &[(1, 3), (2, 4), (3, 5), (4, 6)],
        expected: None,
    },
    Scenario {
        name: "empty",
        intervals: &[],
        expected: None,
    },
    Scenario {
        name: "single",
        intervals: &[(5, 9)],
        expected: Some((5, 9)),
    },
];

/// Pairs checked against the overlap predicate, with the expected answer.
const PREDICATE_CASES: [((i64, i64), (i64, i64), bool); 6] = [
    ((0, 4), (3, 5), true),
    ((0, 4), (4, 5), true),
    ((0, 4), (6, 7), false),
    ((3, 5), (4, 5), true),
    ((3, 5), (6, 7), false),
    ((4, 5), (6, 7), false),
];

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
}

pub fn run_selfcheck() -> Result<()> {
    let outcomes = selfcheck()?;
    let failed: Vec<_> = outcomes.iter().filter(|o| !o.passed).collect();

    for outcome in &outcomes {
        if outcome.passed {
            info!("[SUCCESS] {}", outcome.name);
        } else {
            error!("[FAILED ] {}", outcome.name);
        }
    }

    if !failed.is_empty() {
        bail!("{} of {} checks failed", failed.len(), outcomes.len());
    }

    info!("All {} checks passed", outcomes.len());
    Ok(())
}

/// Run the predicate checks and every scenario against every detector.
pub fn selfcheck() -> Result<Vec<CheckOutcome>> {
    let mut outcomes = Vec::new();

    for (a, b, expected) in PREDICATE_CASES {
        let a = Interval::new(a.0, a.1)?;
        let b = Interval::new(b.0, b.1)?;
        let passed = overlaps(&a, &b) == expected
            && overlaps(&b, &a) == expected
            && overlaps(&a, &a)
            && overlaps(&b, &b);
        outcomes.push(CheckOutcome {
            name: format!("overlaps({}, {}) == {}", a, b, expected),
            passed,
        });
    }

    for scenario in &SCENARIOS {
        let intervals = scenario
            .intervals
            .iter()
            .map(|&(low, high)| Interval::new(low, high))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let expected = scenario
            .expected
            .map(|(low, high)| Interval::new(low, high))
            .transpose()?;

        for detector in DetectorType::ALL {
            let result = detector.detect(&intervals);
            outcomes.push(CheckOutcome {
                name: format!("{} ({})", scenario.name, detector),
                passed: result.interval() == expected,
            });
        }
    }

    Ok(outcomes)
}
