use std::fs::create_dir_all;

use anyhow::bail;
use xtaskops::ops::{clean_files, cmd};

fn main() -> Result<(), anyhow::Error> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("cover") => cover(CoverageFormat::from_arg(args.next().as_deref())),
        Some(task) => bail!("unknown task '{task}', available tasks: cover [xml|cobertura|lcov]"),
        None => bail!("no task given, available tasks: cover [xml|cobertura|lcov]"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoverageFormat {
    Cobertura,
    Lcov,
}

impl CoverageFormat {
    /// Falls back to cobertura for missing or unknown formats.
    fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::to_ascii_lowercase).as_deref() {
            Some("xml") | Some("cobertura") | None => Self::Cobertura,
            Some("lcov") => Self::Lcov,
            Some(s) => {
                eprintln!("Warning: invalid format: {s}");
                Self::Cobertura
            }
        }
    }

    fn grcov_name(self) -> &'static str {
        match self {
            Self::Cobertura => "cobertura",
            Self::Lcov => "lcov",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Cobertura => "xml",
            Self::Lcov => "lcov",
        }
    }
}

// https://blog.rng0.io/how-to-do-code-coverage-in-rust
fn cover(format: CoverageFormat) -> Result<(), anyhow::Error> {
    create_dir_all("coverage")?;
    let file = format!("coverage/tests.{}", format.extension());

    println!("=== outputting format '{}' ===", format.grcov_name());

    println!("=== running coverage ===");
    cmd!("cargo", "test", "--package", "int_list")
        .env("CARGO_INCREMENTAL", "0")
        .env("RUSTFLAGS", "-Cinstrument-coverage")
        .env("LLVM_PROFILE_FILE", "cargo-test-%p-%m.profraw")
        .run()?;
    println!("ok.");

    println!("=== generating report ===");
    cmd!(
        "grcov",
        ".",
        "--binary-path",
        "./target/debug/deps",
        "-s",
        ".",
        "-t",
        format.grcov_name(),
        "--branch",
        "--ignore-not-existing",
        "--ignore",
        "../*",
        "--ignore",
        "/*",
        "--ignore",
        "xtask/*",
        "--ignore",
        "src/bin/*",
        "-o",
        file,
    )
    .run()?;
    println!("ok.");

    println!("=== cleaning up ===");
    clean_files("**/*.profraw")?;
    println!("ok.");

    Ok(())
}
