//! Debounce timing properties under paused tokio time.

use proptest::prelude::*;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use vms_app::Debouncer;

const DELAY: Duration = Duration::from_millis(300);

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

/// Gaps are either well inside or well outside the quiet period so the
/// expected emissions do not depend on scheduler jitter.
fn arb_gap() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..250, 350u64..700]
}

/// Emissions a debouncer must produce for values fed at the given gaps.
fn expected(values: &[u32], gaps: &[u64]) -> Vec<u32> {
    let mut out = Vec::new();
    let mut last = 0;
    for (i, value) in values.iter().enumerate() {
        let settled = gaps.get(i).map_or(true, |gap| *gap >= 350);
        if settled && *value != last {
            out.push(*value);
            last = *value;
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn emits_only_settled_changes(
        inputs in proptest::collection::vec((1u32..4, arb_gap()), 1..12)
    ) {
        let values: Vec<u32> = inputs.iter().map(|(v, _)| *v).collect();
        let gaps: Vec<u64> = inputs.iter().map(|(_, g)| *g).collect();
        let want = expected(&values, &gaps[..gaps.len() - 1]);

        let got = paused_runtime().block_on(async {
            let (debouncer, mut output) = Debouncer::new(0u32, DELAY);
            for (value, gap) in &inputs {
                debouncer.set(*value);
                sleep(Duration::from_millis(*gap)).await;
            }
            sleep(DELAY * 2).await;
            drop(debouncer);

            let mut got = Vec::new();
            while let Ok(value) = output.try_recv() {
                got.push(value);
            }
            got
        });

        prop_assert_eq!(got, want);
    }
}

#[tokio::test(start_paused = true)]
async fn emission_waits_for_the_full_quiet_period() {
    let (debouncer, mut output) = Debouncer::new(String::new(), DELAY);
    let started = Instant::now();
    debouncer.set("park".to_string());

    assert_eq!(output.recv().await.as_deref(), Some("park"));
    assert!(started.elapsed() >= DELAY);
}
