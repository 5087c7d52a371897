//! Cross-process determinism of snapshot histories.
//!
//! Runs the `history_fixture` binary under several process environments and
//! requires byte-identical stdout from each.

use std::path::{Path, PathBuf};
use std::process::Command;

/// One process environment to run the fixture under.
struct Variant {
    label: &'static str,
    cwd: PathBuf,
    env: &'static [(&'static str, &'static str)],
}

fn fixture_binary() -> PathBuf {
    // Test binaries live in target/<profile>/deps; bins one level up.
    let exe = std::env::current_exe().expect("test binary path");
    exe.parent()
        .and_then(Path::parent)
        .expect("target profile directory")
        .join(format!("history_fixture{}", std::env::consts::EXE_SUFFIX))
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("workspace root")
        .to_path_buf()
}

fn stdout_of(variant: &Variant) -> String {
    let bin = fixture_binary();
    let mut command = Command::new(&bin);
    command.current_dir(&variant.cwd);
    for key in ["LC_ALL", "LC_COLLATE", "LANG", "LANGUAGE", "TRAILSCOPE_LOG"] {
        command.env_remove(key);
    }
    command.envs(variant.env.iter().copied());

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("{}: failed to spawn {}: {e}", variant.label, bin.display()));
    assert!(
        output.status.success(),
        "{}: history_fixture exited with {}: stderr={}",
        variant.label,
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn fixture_output_is_stable_across_environments() {
    let root = workspace_root();
    let baseline = stdout_of(&Variant {
        label: "baseline",
        cwd: root.clone(),
        env: &[],
    });

    for expected in [
        "simple_path.graph_digest=sha256:",
        "simple_path.bfs.history_digest=sha256:",
        "weighted_detour.ucs.path_cost=7",
        "weighted_detour.astar.status=succeeded",
    ] {
        assert!(baseline.contains(expected), "baseline missing {expected}");
    }

    let variants = [
        Variant {
            label: "other cwd",
            cwd: std::env::temp_dir(),
            env: &[],
        },
        Variant {
            label: "C locale",
            cwd: root.clone(),
            env: &[("LC_ALL", "C"), ("LANG", "C")],
        },
        // Logs go to stderr and must not reach stdout.
        Variant {
            label: "noisy env",
            cwd: root,
            env: &[
                ("TRAILSCOPE_LOG", "trace"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        },
    ];
    for variant in &variants {
        assert_eq!(
            baseline,
            stdout_of(variant),
            "output differs under {}",
            variant.label
        );
    }
}
