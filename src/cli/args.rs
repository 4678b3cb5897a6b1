//! CLI argument definitions

use crate::engine::RhymeRule;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "librhyme")]
#[command(about = "Find rhymes using a phonetic pronunciation dictionary")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the lexicon comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Pronunciation dictionary (CMUdict text or a snapshot)
    #[arg(short, long)]
    pub dict: Option<PathBuf>,

    /// Phone-type table (defaults to the bundled CMUdict table)
    #[arg(long = "phones")]
    pub phone_types: Option<PathBuf>,

    /// Dictionary format (auto-detected if not specified)
    #[arg(short = 'f', long)]
    pub format: Option<DictFormat>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Find rhymes for a word
    Rhyme {
        /// Word to rhyme
        word: String,

        /// Rhyme rule
        #[arg(short, long)]
        rule: Option<RhymeRule>,

        /// Run every rule and group the results
        #[arg(short, long, conflicts_with = "rule")]
        all: bool,

        /// Number of trailing syllables to rhyme on (default: last stressed)
        #[arg(short = 'n', long)]
        syllables: Option<usize>,

        /// Limit results per rule
        #[arg(short, long)]
        limit: Option<usize>,

        /// Dictionary source
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show a word's pronunciation, syllables and rhyme tail
    Syllables {
        /// Word to inspect
        word: String,

        /// Number of trailing syllables in the tail (default: last stressed)
        #[arg(short = 'n', long)]
        syllables: Option<usize>,

        /// Dictionary source
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List words ending with a phone sequence
    Search {
        /// Phones in natural order, e.g. `AO1 G`
        #[arg(required = true, value_name = "PHONE")]
        symbols: Vec<String>,

        /// Limit results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Dictionary source
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Display lexicon statistics
    Info {
        /// Dictionary source
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write a prebuilt lexicon snapshot for faster loading
    Snapshot {
        /// Output file
        output: PathBuf,

        /// Output format
        #[arg(long, default_value = "bincode")]
        to_format: DictFormat,

        /// Dictionary source
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show or update user settings
    Settings {
        /// Set default dictionary path
        #[arg(long)]
        set_dict: Option<PathBuf>,

        /// Set default phone-type table path
        #[arg(long)]
        set_phones: Option<PathBuf>,

        /// Set default dictionary format
        #[arg(long)]
        set_format: Option<DictFormat>,

        /// Set default rhyme rule
        #[arg(long)]
        set_rule: Option<RhymeRule>,

        /// Set longest syllable the additive and assonance rules may build
        #[arg(long)]
        set_max_additive_length: Option<usize>,

        /// Set syllables used when the last one is unstressed
        #[arg(long)]
        set_tail_span: Option<usize>,

        /// Set maximum candidates examined per query (0 = unbounded)
        #[arg(long)]
        set_budget: Option<usize>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// On-disk dictionary formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictFormat {
    /// CMUdict text (`WORD  PH PH ...`)
    Cmudict,
    /// Bincode lexicon snapshot
    Bincode,
    /// JSON lexicon snapshot
    Json,
    /// Gzip-compressed Bincode snapshot
    #[cfg(feature = "compression")]
    #[value(name = "bincode-gz")]
    #[serde(rename = "bincode-gz")]
    BincodeGzip,
    /// Gzip-compressed JSON snapshot
    #[cfg(feature = "compression")]
    #[value(name = "json-gz")]
    #[serde(rename = "json-gz")]
    JsonGzip,
}

impl DictFormat {
    /// Whether the format is a serialized lexicon rather than source text.
    pub fn is_snapshot(&self) -> bool {
        !matches!(self, Self::Cmudict)
    }
}

impl std::fmt::Display for DictFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cmudict => write!(f, "cmudict"),
            Self::Bincode => write!(f, "bincode"),
            Self::Json => write!(f, "json"),
            #[cfg(feature = "compression")]
            Self::BincodeGzip => write!(f, "bincode-gz"),
            #[cfg(feature = "compression")]
            Self::JsonGzip => write!(f, "json-gz"),
        }
    }
}
