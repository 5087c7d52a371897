//! Binary that runs every sample world under every strategy and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `history_fixture`
//!
//! Output: key=value lines on stdout, `<world>.<strategy>.<field>=<value>`.
//! Logs go to stderr, filtered by `TRAILSCOPE_LOG` (default `warn`).

use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;
use trailscope_harness::runner::run_world;
use trailscope_harness::worlds;
use trailscope_kernel::proof::fingerprint::graph_digest;
use trailscope_search::params::SearchParams;
use trailscope_search::strategy::StrategyKind;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TRAILSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    for world in worlds::all() {
        let world_id = world.world_id();
        let sample = world.build().expect("sample world builds");
        let digest = graph_digest(&sample.graph).expect("graph digest");
        println!("{world_id}.graph_digest={digest}");

        for strategy in StrategyKind::iter() {
            let report =
                run_world(world.as_ref(), strategy, SearchParams::default()).expect("run succeeds");
            let s = &report.summary;
            let path: Vec<String> = s.path.iter().map(ToString::to_string).collect();
            let cost = s.path_cost.map_or_else(|| "none".to_string(), |c| c.to_string());
            let prefix = format!("{world_id}.{strategy}");
            println!("{prefix}.status={}", s.status);
            println!("{prefix}.path={}", path.join("-"));
            println!("{prefix}.path_cost={cost}");
            println!("{prefix}.nodes_explored={}", s.nodes_explored);
            println!("{prefix}.total_snapshots={}", s.total_snapshots);
            println!("{prefix}.history_digest={}", s.history_digest);
            println!(
                "{prefix}.summary_digest={}",
                s.digest().expect("summary digest")
            );
        }
    }
}
