//! game-tree CLI - generate, solve, and render a random extensive-form game.
//!
//! Prints the root game values for every player, writes a Graphviz DOT file,
//! and converts it with `dot` when available. Output file and rendering
//! problems are logged as warnings; the computed values are always printed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rust_gametree::render::{self, DotStyle};
use rust_gametree::{GameRng, GameTree, TreeConfig};

#[derive(Parser, Debug)]
#[command(name = "game-tree")]
#[command(version, about = "Solve random N-player game trees by backward induction", long_about = None)]
struct Cli {
    /// JSON config file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plies below the root
    #[arg(short, long)]
    depth: Option<usize>,

    /// Number of players
    #[arg(short, long)]
    players: Option<usize>,

    /// Strategies per player, comma separated (e.g. 2,3,2)
    #[arg(short, long, value_delimiter = ',')]
    strategies: Option<Vec<usize>>,

    /// Smallest reward (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    min_reward: Option<i32>,

    /// Largest reward (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    max_reward: Option<i32>,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the DOT description
    #[arg(long, default_value = "visualisation.dot")]
    dot: PathBuf,

    /// Output format passed to `dot -T`
    #[arg(long, default_value = "pdf")]
    format: String,

    /// Skip running `dot`
    #[arg(long)]
    no_render: bool,

    /// Write the solved tree as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn tree_config(&self) -> Result<TreeConfig> {
        let mut config = match &self.config {
            Some(path) => TreeConfig::from_json_file(path)?,
            None => TreeConfig::default(),
        };

        if let Some(players) = self.players {
            // A new player count invalidates the old strategy table
            let depth = config.depth;
            let range = config.reward_range;
            config = TreeConfig::new(players)
                .with_depth(depth)
                .with_reward_range(range.min, range.max);
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(strategies) = &self.strategies {
            config = config.with_strategy_counts(strategies.clone());
        }
        if let Some(min) = self.min_reward {
            config.reward_range.min = min;
        }
        if let Some(max) = self.max_reward {
            config.reward_range.max = max;
        }

        config.validate().context("invalid tree configuration")?;
        Ok(config)
    }
}

/// Write the solved tree as pretty-printed JSON.
fn write_snapshot(tree: &GameTree, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(tree).context("serializing tree")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.tree_config()?;
    let mut rng = GameRng::new(cli.seed.unwrap_or_else(rand::random));
    log::info!(
        "generating {} players, depth {}, rewards {}..={}, seed {}",
        config.player_count,
        config.depth,
        config.reward_range.min,
        config.reward_range.max,
        rng.seed()
    );

    let mut tree = GameTree::generate(config, &mut rng)?;
    tree.solve();

    println!("Game values for each player:");
    print!("{}", tree.game_values());
    log::info!("{}", tree.stats());

    if let Some(path) = &cli.json {
        if let Err(e) = write_snapshot(&tree, path) {
            log::warn!("{:#}", e);
        }
    }

    match render::write_dot_file(&tree, &DotStyle::default(), &cli.dot) {
        Err(e) => log::warn!("{}", e),
        Ok(()) if cli.no_render => {}
        Ok(()) => {
            let output = cli.dot.with_extension(&cli.format);
            if let Err(e) = render::render(&cli.dot, &output, &cli.format) {
                log::warn!("{}", e);
            }
        }
    }

    Ok(())
}
