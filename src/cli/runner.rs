use anyhow::{bail, Result};
use clap::Parser;
use secrecy::SecretString;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::cli::{AlgoArg, Cli, Commands};
use crate::config::app_config::Config;
use crate::core::digest::{AlgorithmId, DigestDispatcher, RingShaProvider, Selection};
use crate::core::generator::SecretGenerator;
use crate::core::ports::Constraints;
use crate::core::rng::SystemRng;
use crate::core::strength;
use crate::output::clipboard;
use crate::output::export;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gen {
            length,
            no_lower,
            no_upper,
            no_digits,
            no_symbols,
            min_letters,
            min_digits,
            min_symbols,
            allow_ambiguous,
            count,
            out,
            copy,
            ttl,
            json,
        } => {
            let config = Config::create();
            let constraints = Constraints {
                length: length.or(config.generator_length).unwrap_or(20),
                lower: !no_lower,
                upper: !no_upper,
                digits: !no_digits,
                symbols: !no_symbols,
                avoid_ambiguous: if allow_ambiguous {
                    false
                } else {
                    config.avoid_ambiguous.unwrap_or(true)
                },
                min_letters,
                min_digits,
                min_symbols,
            };
            run_gen(&config, &constraints, count as usize, out, copy, ttl, json)
        }
        Commands::Hash {
            text,
            salt,
            algo,
            json,
        } => run_hash(&text, &salt, algo, json),
    }
}

fn run_gen(
    config: &Config,
    constraints: &Constraints,
    count: usize,
    out: Option<PathBuf>,
    copy: bool,
    ttl: Option<u64>,
    json: bool,
) -> Result<()> {
    let generator = SecretGenerator::new(Arc::new(SystemRng));
    let secrets = generator.generate_many(constraints, count)?;

    if let Some(path) = &out {
        export::write_secrets(path, &secrets)?;
        println!("Wrote {} secret(s) to {}", secrets.len(), path.display());
    } else if json {
        println!("{}", serde_json::to_string_pretty(&secrets)?);
    } else if secrets.len() == 1 {
        let secret = &secrets[0];
        println!("{secret}");
        let variety = [
            constraints.upper,
            constraints.lower,
            constraints.digits,
            constraints.symbols,
        ]
        .iter()
        .filter(|&&on| on)
        .count();
        let score = strength::score(secret.len(), variety);
        println!("strength: {score}/100 ({})", strength::label(score));
    } else {
        for (i, secret) in secrets.iter().enumerate() {
            println!("{:>2}. {secret}", i + 1);
        }
    }

    if copy {
        if let Some(warning) = clipboard::environment_warning() {
            eprintln!("⚠️  {warning}");
        }
        let engine = Arc::new(clipboard::SystemClipboardEngine::new()?);
        let joined = SecretString::from(secrets.join("\n"));
        let ttl_secs = clipboard::ttl_seconds(config, ttl);
        clipboard::copy_with_ttl(engine, &joined, Duration::from_secs(ttl_secs))?;
        println!("Copied to clipboard; holding for {ttl_secs}s to restore previous contents.");
        // The restore runs on a background thread; hold the process open so
        // it survives until the swap-back has happened.
        std::thread::sleep(Duration::from_secs(ttl_secs) + Duration::from_millis(100));
    }

    Ok(())
}

fn run_hash(text: &str, salt: &str, algo: AlgoArg, json: bool) -> Result<()> {
    // The dispatcher requires non-empty text; enforce that here.
    let raw = text.trim();
    if raw.is_empty() {
        bail!("nothing to hash: text is empty");
    }

    let selection = match algo {
        AlgoArg::All => Selection::All,
        AlgoArg::Md5 => Selection::Single(AlgorithmId::Md5),
        AlgoArg::Sha1 => Selection::Single(AlgorithmId::Sha1),
        AlgoArg::Sha256 => Selection::Single(AlgorithmId::Sha256),
        AlgoArg::Sha512 => Selection::Single(AlgorithmId::Sha512),
    };

    let dispatcher = DigestDispatcher::new(Arc::new(RingShaProvider));
    let rows = dispatcher.compute(raw, salt, selection);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{:<8}{}", row.label, row.hex);
        }
    }

    Ok(())
}
