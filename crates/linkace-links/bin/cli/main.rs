mod cli;

use crate::cli::{Command, CLI};
use anyhow::{bail, Context};
use clap::Parser;
use linkace_core::{find_duplicates, normalize, ArchiveSettings, LinkId};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = CLI::try_parse()?;
    debug!(command = ?config.command, "parsed command line");

    match config.command {
        Command::Normalize { url } => match normalize(&url) {
            Some(key) => {
                println!("{key}");
                Ok(ExitCode::SUCCESS)
            }
            None => {
                warn!(url = %url, "url is not comparable");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Duplicates { url, candidates } => {
            let content = std::fs::read_to_string(&candidates)
                .with_context(|| format!("failed to read {}", candidates.display()))?;
            let existing = parse_candidates(&content)?;
            debug!(count = existing.len(), "loaded candidate urls");

            for id in find_duplicates(normalize(&url).as_ref(), existing) {
                println!("{id}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::ShouldArchive {
            backups_enabled,
            private_backups_enabled,
            private,
        } => {
            let settings =
                ArchiveSettings::from_raw(Some(&backups_enabled), Some(&private_backups_enabled));
            println!("{}", settings.allows(private));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Parses `<id> <url>` lines. Blank lines and `#` comments are skipped.
fn parse_candidates(content: &str) -> anyhow::Result<Vec<(LinkId, String)>> {
    let mut candidates = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((id, url)) = line.split_once(char::is_whitespace) else {
            bail!("line {}: expected `<id> <url>`", number + 1);
        };
        let id: u64 = id
            .parse()
            .with_context(|| format!("line {}: invalid id '{id}'", number + 1))?;
        candidates.push((LinkId::new(id), url.trim().to_owned()));
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_candidate_lines() {
        let content = "# exported links\n1 http://ex.com/a/\n\n2\thttp://other.com/a\n";
        let candidates = parse_candidates(content).unwrap();
        assert_eq!(
            candidates,
            vec![
                (LinkId::new(1), "http://ex.com/a/".to_string()),
                (LinkId::new(2), "http://other.com/a".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_candidates("http://ex.com/a").is_err());
        assert!(parse_candidates("x http://ex.com/a").is_err());
    }

    #[test]
    fn candidates_feed_duplicate_search() {
        let candidates = parse_candidates("1 http://ex.com/a/\n2 http://other.com/a").unwrap();
        let ids = find_duplicates(normalize("https://ex.com/a?x=1").as_ref(), candidates);
        assert_eq!(ids, vec![LinkId::new(1)]);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = CLI::try_parse_from([
            "linkace",
            "should-archive",
            "--backups-enabled",
            "1",
            "--private",
        ])
        .unwrap();
        match cli.command {
            Command::ShouldArchive {
                backups_enabled,
                private,
                ..
            } => {
                assert_eq!(backups_enabled, "1");
                assert!(private);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
