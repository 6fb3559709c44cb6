use clap::Parser;
use std::path::PathBuf;
use tokio::process::Command;

mod cli;

const BUNDLE_DIR: &str = "SALLM";

async fn run(mut cmd: Command, what: &str) -> Result<(), Box<dyn std::error::Error>> {
    let status = cmd.spawn()?.wait().await?;
    if !status.success() {
        return Err(format!("{what} failed: {status}").into());
    }
    Ok(())
}

fn trunk_build(release: bool) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::new("trunk");
    cmd.current_dir(std::fs::canonicalize("frontend")?);
    cmd.arg("build");
    if release {
        cmd.arg("--release");
    }
    Ok(cmd)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Launch => {
            run(trunk_build(false)?, "trunk build").await?;

            let mut cmd = Command::new("cargo");
            cmd.arg("run")
                .arg("--package")
                .arg("sallm-launcher")
                .arg("--")
                .arg("--dist-dir")
                .arg("frontend/dist");
            run(cmd, "sallm-launcher").await
        }
        cli::Command::Dist { target_triple } => {
            let mut cmd = Command::new("cargo");
            cmd.arg("build")
                .arg("--package")
                .arg("sallm-launcher")
                .arg("--release");
            let mut binary = PathBuf::from("target");
            if let Some(target_triple) = target_triple {
                cmd.arg("--target").arg(&target_triple);
                binary.push(target_triple);
            }
            binary.push("release/sallm-launcher");
            run(cmd, "cargo build").await?;

            run(trunk_build(true)?, "trunk build --release").await?;

            let bundle = PathBuf::from(BUNDLE_DIR);
            tokio::fs::create_dir_all(bundle.join("dist")).await?;
            tokio::fs::copy(&binary, bundle.join("sallm-launcher")).await?;

            let mut entries = tokio::fs::read_dir("frontend/dist").await?;
            while let Some(file) = entries.next_entry().await? {
                tokio::fs::copy(file.path(), bundle.join("dist").join(file.file_name())).await?;
            }

            Ok(())
        }
    }
}
