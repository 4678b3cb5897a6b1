//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::dictionary::{loader, Lexicon};
use crate::engine::{RhymeEngine, RhymeRule};
use crate::phonetic::Phone;
use crate::serialization::{BincodeSerializer, JsonSerializer, LexiconSerializer};
#[cfg(feature = "compression")]
use crate::serialization::GzipSerializer;
use crate::syllable::Syllable;

use super::args::{Commands, DictFormat, SourceArgs};
use super::detect::detect_format;
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.as_deref();
    match command {
        Commands::Rhyme {
            word,
            rule,
            all,
            syllables,
            limit,
            source,
        } => cmd_rhyme(&word, rule, all, syllables, limit, source, config_path),
        Commands::Syllables {
            word,
            syllables,
            source,
        } => cmd_syllables(&word, syllables, source, config_path),
        Commands::Search {
            symbols,
            limit,
            source,
        } => cmd_search(&symbols, limit, source, config_path),
        Commands::Info { source } => cmd_info(source, config_path),
        Commands::Snapshot {
            output,
            to_format,
            source,
        } => cmd_snapshot(&output, to_format, source, config_path),
        Commands::Settings {
            set_dict,
            set_phones,
            set_format,
            set_rule,
            set_max_additive_length,
            set_tail_span,
            set_budget,
            reset,
        } => cmd_settings(
            SettingsUpdate {
                dict: set_dict,
                phones: set_phones,
                format: set_format,
                rule: set_rule,
                max_additive_length: set_max_additive_length,
                tail_span: set_tail_span,
                budget: set_budget,
            },
            reset,
            config_path,
        ),
    }
}

/// Rhyme command
fn cmd_rhyme(
    word: &str,
    rule: Option<RhymeRule>,
    all: bool,
    syllables: Option<usize>,
    limit: Option<usize>,
    source: SourceArgs,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let config = config.merge_with_cli(source.dict, source.phone_types, source.format, rule);
    let engine = RhymeEngine::with_config(load_configured_lexicon(&config)?, config.engine);

    let rules: Vec<RhymeRule> = if all {
        RhymeRule::ALL.to_vec()
    } else {
        vec![config.rule]
    };

    for rule in rules {
        let results = engine.rhymes(rule, word, syllables)?;
        if all {
            println!("{}", format!("{} rhymes", rule).bold().underline());
        }
        print_words(results, limit);
        if all {
            println!();
        }
    }

    Ok(())
}

/// Syllables command
fn cmd_syllables(
    word: &str,
    syllables: Option<usize>,
    source: SourceArgs,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let config = config.merge_with_cli(source.dict, source.phone_types, source.format, None);
    let engine = RhymeEngine::with_config(load_configured_lexicon(&config)?, config.engine);

    let phones = engine.phones(word)?;
    let all = engine.syllables(word)?;
    let tail = engine.tail_syllables(word, syllables)?;

    println!("  Word:      {}", word.to_uppercase().bold());
    println!("  Phones:    {}", spell(phones).cyan());
    println!(
        "  Syllables: {} ({})",
        all.len().to_string().green(),
        all.iter().map(|s| format!("[{}]", spell(s))).collect::<Vec<_>>().join(" ")
    );
    println!(
        "  Tail:      {}",
        tail.iter()
            .map(|s: &Syllable| format!("[{}]", spell(s)))
            .collect::<Vec<_>>()
            .join(" ")
            .yellow()
    );

    Ok(())
}

/// Search command
fn cmd_search(
    symbols: &[String],
    limit: Option<usize>,
    source: SourceArgs,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let config = config.merge_with_cli(source.dict, source.phone_types, source.format, None);
    let engine = RhymeEngine::with_config(load_configured_lexicon(&config)?, config.engine);

    let phones: Vec<Phone> = symbols
        .iter()
        .flat_map(|s| s.split_whitespace())
        .map(|s| Phone::new(&s.to_uppercase()))
        .collect();

    match engine.search(&phones) {
        Some(words) => print_words(words, limit),
        None => println!("{}", "No words end with these phones".yellow()),
    }

    Ok(())
}

/// Info command
fn cmd_info(source: SourceArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let config = config.merge_with_cli(source.dict, source.phone_types, source.format, None);
    let (path, format) = resolve_dict(&config)?;
    let lexicon = load_lexicon(&path, format, config.phones_path.as_deref())?;

    println!("{}", "Lexicon Information".bold().underline());
    println!();
    println!("  Path:       {}", path.display().to_string().cyan());
    println!("  Format:     {}", format.to_string().green());
    println!(
        "  Words:      {}",
        lexicon.pronunciations().len().to_string().green()
    );
    println!(
        "  Trie nodes: {}",
        lexicon.trie().node_count().to_string().green()
    );
    println!(
        "  Vowels:     {}",
        lexicon.taxonomy().vowels().len().to_string().green()
    );
    println!(
        "  Consonants: {}",
        lexicon.taxonomy().consonants().len().to_string().green()
    );
    println!();

    Ok(())
}

/// Snapshot command
fn cmd_snapshot(
    output: &Path,
    to_format: DictFormat,
    source: SourceArgs,
    config_path: Option<&Path>,
) -> Result<()> {
    if !to_format.is_snapshot() {
        bail!("Snapshots cannot be written as {}; choose a serialized format", to_format);
    }

    let config = load_config(config_path)?;
    let config = config.merge_with_cli(source.dict, source.phone_types, source.format, None);
    let lexicon = load_configured_lexicon(&config)?;

    save_lexicon(&lexicon, output, to_format)?;
    println!(
        "{}  Wrote {} words to {} ({})",
        "✓".green(),
        lexicon.pronunciations().len().to_string().green(),
        output.display().to_string().cyan(),
        to_format
    );

    Ok(())
}

/// Values to store with the settings command
struct SettingsUpdate {
    dict: Option<PathBuf>,
    phones: Option<PathBuf>,
    format: Option<DictFormat>,
    rule: Option<RhymeRule>,
    max_additive_length: Option<usize>,
    tail_span: Option<usize>,
    budget: Option<usize>,
}

/// Settings command
fn cmd_settings(update: SettingsUpdate, reset: bool, config_path: Option<&Path>) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config, config_path);
        return Ok(());
    }

    let mut config = load_config(config_path)?;
    let mut changed = false;

    if let Some(dict) = update.dict {
        println!(
            "  Set default dictionary path: {}",
            dict.display().to_string().cyan()
        );
        config.dict_path = Some(dict);
        changed = true;
    }

    if let Some(phones) = update.phones {
        println!(
            "  Set default phone table: {}",
            phones.display().to_string().cyan()
        );
        config.phones_path = Some(phones);
        changed = true;
    }

    if let Some(format) = update.format {
        config.format = Some(format);
        println!("  Set default format: {}", format.to_string().green());
        changed = true;
    }

    if let Some(rule) = update.rule {
        config.rule = rule;
        println!("  Set default rule: {}", rule.to_string().green());
        changed = true;
    }

    if let Some(length) = update.max_additive_length {
        config.engine.max_additive_length = length;
        println!("  Set max additive length: {}", length.to_string().green());
        changed = true;
    }

    if let Some(span) = update.tail_span {
        if span == 0 {
            bail!("Tail span must be at least 1");
        }
        config.engine.unstressed_tail_span = span;
        println!("  Set unstressed tail span: {}", span.to_string().green());
        changed = true;
    }

    if let Some(budget) = update.budget {
        config.engine.candidate_budget = (budget > 0).then_some(budget);
        println!("  Set candidate budget: {}", budget_label(budget > 0, budget).green());
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
    }

    println!();
    print_config(&config, config_path);

    Ok(())
}

fn budget_label(bounded: bool, budget: usize) -> String {
    if bounded {
        budget.to_string()
    } else {
        "unbounded".to_string()
    }
}

fn load_config(config_path: Option<&Path>) -> Result<PersistentConfig> {
    PersistentConfig::load_from(config_path)
}

/// Dictionary path and its format, from flags or settings
fn resolve_dict(config: &PersistentConfig) -> Result<(PathBuf, DictFormat)> {
    let path = config.dict_path.clone().context(
        "No dictionary configured. Pass --dict or run `librhyme settings --set-dict <PATH>`",
    )?;
    let detection = detect_format(&path, config.format)?;
    info!(
        path = %path.display(),
        format = %detection.format,
        method = %detection.method,
        "resolved dictionary"
    );
    Ok((path, detection.format))
}

fn load_configured_lexicon(config: &PersistentConfig) -> Result<Lexicon> {
    let (path, format) = resolve_dict(config)?;
    load_lexicon(&path, format, config.phones_path.as_deref())
}

/// Load a lexicon from a dictionary file
pub fn load_lexicon(path: &Path, format: DictFormat, phones_path: Option<&Path>) -> Result<Lexicon> {
    if !path.exists() {
        bail!("Dictionary file does not exist: {}", path.display());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let lexicon = match format {
        DictFormat::Cmudict => {
            let phone_types = match phones_path {
                Some(phones) => {
                    let file = File::open(phones).with_context(|| {
                        format!("Failed to open phone table: {}", phones.display())
                    })?;
                    loader::parse_phone_types(BufReader::new(file)).with_context(|| {
                        format!("Failed to parse phone table: {}", phones.display())
                    })?
                }
                None => loader::cmudict_phone_types()?,
            };
            let entries = loader::parse_pronunciations(reader)
                .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
            Lexicon::build(entries, phone_types)
                .with_context(|| format!("Failed to build lexicon from: {}", path.display()))?
        }
        DictFormat::Bincode => BincodeSerializer::deserialize(reader)
            .with_context(|| format!("Failed to deserialize bincode from: {}", path.display()))?,
        DictFormat::Json => JsonSerializer::deserialize(reader)
            .with_context(|| format!("Failed to deserialize JSON from: {}", path.display()))?,
        #[cfg(feature = "compression")]
        DictFormat::BincodeGzip => GzipSerializer::<BincodeSerializer>::deserialize(reader)
            .with_context(|| format!("Failed to deserialize bincode-gz from: {}", path.display()))?,
        #[cfg(feature = "compression")]
        DictFormat::JsonGzip => GzipSerializer::<JsonSerializer>::deserialize(reader)
            .with_context(|| format!("Failed to deserialize json-gz from: {}", path.display()))?,
    };

    info!(
        words = lexicon.pronunciations().len(),
        "loaded lexicon"
    );
    Ok(lexicon)
}

/// Save a lexicon snapshot
pub fn save_lexicon(lexicon: &Lexicon, path: &Path, format: DictFormat) -> Result<()> {
    if !format.is_snapshot() {
        bail!("Cannot write a lexicon as {} text", format);
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    match format {
        DictFormat::Cmudict => bail!("Cannot write a lexicon as CMUdict text"),
        DictFormat::Bincode => BincodeSerializer::serialize(lexicon, writer)?,
        DictFormat::Json => JsonSerializer::serialize(lexicon, writer)?,
        #[cfg(feature = "compression")]
        DictFormat::BincodeGzip => GzipSerializer::<BincodeSerializer>::serialize(lexicon, writer)?,
        #[cfg(feature = "compression")]
        DictFormat::JsonGzip => GzipSerializer::<JsonSerializer>::serialize(lexicon, writer)?,
    }

    Ok(())
}

fn spell(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print words sorted, with an optional limit
fn print_words(words: HashSet<String>, limit: Option<usize>) {
    if words.is_empty() {
        println!("{}", "No rhymes found".yellow());
        return;
    }

    let total = words.len();
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort_unstable();
    if let Some(lim) = limit {
        words.truncate(lim);
    }

    for (i, word) in words.iter().enumerate() {
        println!("   {}. {}", i + 1, word.green());
    }
    println!();
    println!("{} word(s) found", total);
}

/// Print current configuration
fn print_config(config: &PersistentConfig, config_path: Option<&Path>) {
    println!("{}", "Current Configuration:".bold().underline());
    println!();

    let unset = || "(not set)".to_string();
    println!(
        "  Dictionary Path:  {}",
        config
            .dict_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(unset)
            .cyan()
    );
    println!(
        "  Phone Table:      {}",
        config
            .phones_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(bundled CMUdict)".to_string())
            .cyan()
    );
    println!(
        "  Format:           {}",
        config
            .format
            .map(|f| f.to_string())
            .unwrap_or_else(|| "auto".to_string())
            .yellow()
    );
    println!("  Rule:             {}", config.rule.to_string().yellow());
    println!(
        "  Max Additive:     {}",
        config.engine.max_additive_length.to_string().yellow()
    );
    println!(
        "  Tail Span:        {}",
        config.engine.unstressed_tail_span.to_string().yellow()
    );
    println!(
        "  Candidate Budget: {}",
        match config.engine.candidate_budget {
            Some(budget) => budget_label(true, budget),
            None => budget_label(false, 0),
        }
        .yellow()
    );

    println!();
    match config_file_path_with_override(config_path) {
        Ok(path) => println!("  Config file: {}", path.display().to_string().cyan()),
        Err(e) => println!("  Config file: {}", e.to_string().red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::paths::file_extension;
    use tempfile::TempDir;

    const SAMPLE_DICT: &str = include_str!("../../tests/data/cmudict-sample.dict");

    fn write_sample(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("sample.dict");
        std::fs::write(&path, SAMPLE_DICT).unwrap();
        path
    }

    #[test]
    fn test_load_cmudict_with_bundled_phones() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir);
        let lexicon = load_lexicon(&path, DictFormat::Cmudict, None).unwrap();
        assert_eq!(lexicon.pronunciations().len(), 51);
    }

    #[test]
    fn test_snapshot_round_trip_through_files() {
        let dir = TempDir::new().unwrap();
        let source = load_lexicon(&write_sample(&dir), DictFormat::Cmudict, None).unwrap();

        for format in [DictFormat::Bincode, DictFormat::Json] {
            let out = dir.path().join(format!("lexicon.{}", file_extension(format)));
            save_lexicon(&source, &out, format).unwrap();

            let detected = detect_format(&out, None).unwrap().format;
            assert_eq!(detected, format);

            let loaded = load_lexicon(&out, detected, None).unwrap();
            assert_eq!(loaded.pronunciations().len(), source.pronunciations().len());
        }
    }

    #[test]
    fn test_missing_dictionary() {
        let err = load_lexicon(Path::new("/nonexistent/cmudict.dict"), DictFormat::Cmudict, None)
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_dict_requires_a_path() {
        let err = resolve_dict(&PersistentConfig::default()).unwrap_err();
        assert!(err.to_string().contains("No dictionary configured"));
    }

    #[test]
    fn test_cmudict_is_not_a_snapshot_format() {
        let dir = TempDir::new().unwrap();
        let source = load_lexicon(&write_sample(&dir), DictFormat::Cmudict, None).unwrap();
        let out = dir.path().join("out.dict");
        assert!(save_lexicon(&source, &out, DictFormat::Cmudict).is_err());
        assert!(!out.exists(), "rejected format must not leave a file behind");
    }
}
