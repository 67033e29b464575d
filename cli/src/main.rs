#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod bench;
mod loader;

use simplelog::*;
use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use suffix_tree::{Strategy, SuffixTree, Text};

// CLI tools
use anyhow::{anyhow, bail, Context, Result};
use console::style;
use indicatif::HumanBytes;
use structopt::StructOpt;

// Docs @ https://docs.rs/structopt/0.3.20/structopt/
#[derive(StructOpt)]
#[structopt(name = "suffix-tree", about = "Build suffix trees over text and query them")]
struct CliInput {
    /// Log more (-v for debug, -vv for trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Also write the log to this file
    #[structopt(long, parse(from_os_str))]
    log_file: Option<PathBuf>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Build a tree over "banana" and run every query on it
    Demo {
        /// Construction strategy: naive, mccreight or ukkonen
        #[structopt(short, long, default_value = "ukkonen")]
        strategy: Strategy,
    },

    /// Build a tree over (a prefix of) a file and query it
    Query(QueryArgs),

    /// Time the construction strategies over growing prefixes of a text
    Bench(BenchArgs),
}

#[derive(StructOpt)]
struct QueryArgs {
    /// The file to build the tree over
    #[structopt(parse(from_os_str))]
    path: PathBuf,

    /// Only use the first `limit` bytes of the file
    #[structopt(short, long)]
    limit: Option<usize>,

    /// Construction strategy: naive, mccreight or ukkonen
    #[structopt(short, long, default_value = "ukkonen")]
    strategy: Strategy,

    /// Terminating byte, must not occur in the used part of the file
    #[structopt(long, default_value = "$")]
    sentinel: char,

    /// Check whether the pattern occurs
    #[structopt(short, long)]
    contains: Vec<String>,

    /// List every position the pattern occurs at
    #[structopt(short, long)]
    find: Vec<String>,

    /// Count the occurrences of the pattern
    #[structopt(short = "n", long)]
    count: Vec<String>,

    /// Show the node the pattern leads to, with its path label and depth
    #[structopt(long)]
    node: Vec<String>,

    /// Print the suffix array of the text
    #[structopt(long)]
    suffix_array: bool,

    /// Print the whole tree
    #[structopt(short, long)]
    print: bool,
}

#[derive(StructOpt)]
struct BenchArgs {
    /// File to take the prefixes from, random text is generated when left out
    #[structopt(parse(from_os_str))]
    path: Option<PathBuf>,

    /// Prefix lengths to time (defaults to 100 up to 50000)
    #[structopt(short, long)]
    sizes: Vec<usize>,

    /// Where to write the csv results
    #[structopt(short, long, parse(from_os_str), default_value = "benchmark_results.csv")]
    output: PathBuf,

    /// Bytes the random text is drawn from
    #[structopt(short, long, default_value = "ACGT")]
    alphabet: String,

    /// Seed for the random text
    #[structopt(long, default_value = "42")]
    seed: u64,

    /// Terminating byte appended to every prefix
    #[structopt(long, default_value = "$")]
    sentinel: char,

    /// Leave out the quadratic strategy
    #[structopt(long)]
    skip_naive: bool,

    /// Fail if the strategies do not produce the same suffix array
    #[structopt(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let args = CliInput::from_args();
    init_logging(args.verbose, args.log_file.as_ref())?;

    match args.command {
        Command::Demo { strategy } => demo(strategy),
        Command::Query(query_args) => query(&query_args),
        Command::Bench(bench_args) => benchmark(&bench_args),
    }
}

fn demo(strategy: Strategy) -> Result<()> {
    let text = Text::terminated("banana", Text::DEFAULT_SENTINEL);
    let st = SuffixTree::build(text, strategy);

    println!("{} {}\n", style("text:").bold(), String::from_utf8_lossy(st.text().as_bytes()));
    print!("{}", st);

    println!("\n{}", style("contains").bold());
    print_contains(&st, "ana");
    print_contains(&st, "begin");

    println!("\n{}", style("find_all").bold());
    print_find_all(&st, "na");

    println!("\n{}", style("node_from_pattern").bold());
    print_node(&st, "ana");

    println!("\n{}", style("suffix_array").bold());
    print_suffix_array(&st);

    Ok(())
}

fn query(args: &QueryArgs) -> Result<()> {
    let sentinel = sentinel_byte(args.sentinel)?;
    let text = loader::load_text(&args.path, args.limit, sentinel)?;
    let size = text.len();

    let stopwatch = Instant::now();
    let st = SuffixTree::build(text, args.strategy);
    info!(
        "Built {} suffix tree over `{}` ({}) with {} nodes, taking {:?}",
        args.strategy,
        args.path.display(),
        HumanBytes(size as u64),
        st.node_count(),
        stopwatch.elapsed()
    );

    if args.print {
        print!("{}", st);
    }
    for pattern in &args.contains {
        print_contains(&st, pattern);
    }
    for pattern in &args.find {
        print_find_all(&st, pattern);
    }
    for pattern in &args.count {
        println!("count_all({:?}): {}", pattern, st.count_all(pattern));
    }
    for pattern in &args.node {
        print_node(&st, pattern);
    }
    if args.suffix_array {
        print_suffix_array(&st);
    }

    Ok(())
}

fn benchmark(args: &BenchArgs) -> Result<()> {
    let corpus = match &args.path {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Could not read file `{}`", path.display()))?;
            info!("Benchmarking prefixes of `{}` ({})", path.display(), HumanBytes(bytes.len() as u64));
            bench::Corpus::File(bytes)
        }
        None => {
            info!("Benchmarking random text over {:?} (seed {})", args.alphabet, args.seed);
            bench::Corpus::Random {
                alphabet: args.alphabet.as_bytes().to_vec(),
                seed: args.seed,
            }
        }
    };

    let sizes = if args.sizes.is_empty() {
        bench::DEFAULT_SIZES.to_vec()
    } else {
        args.sizes.clone()
    };
    let options = bench::Options {
        sentinel: sentinel_byte(args.sentinel)?,
        skip_naive: args.skip_naive,
        verify: args.verify,
    };

    eprintln!("{} Building trees...", style("[1/2]").bold().dim());
    let rows = bench::run(&corpus, &sizes, &options)?;

    eprintln!("{} Writing results...", style("[2/2]").bold().dim());
    print_bench_table(&rows);
    bench::write_csv(&rows, &args.output)?;
    info!("Results written to `{}`", args.output.display());

    Ok(())
}

fn sentinel_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("Sentinel `{}` is not a single byte", c);
    }
    Ok(c as u8)
}

fn print_contains(st: &SuffixTree, pattern: &str) {
    let found = st.contains(pattern);
    let styled = if found {
        style(found).green()
    } else {
        style(found).red()
    };
    println!("contains({:?}): {}", pattern, styled);
}

fn print_find_all(st: &SuffixTree, pattern: &str) {
    let positions = st.find_all(pattern);
    println!(
        "find_all({:?}): {} match(es) {:?}",
        pattern,
        positions.len(),
        positions
    );
}

fn print_node(st: &SuffixTree, pattern: &str) {
    match st.node_from_pattern(pattern) {
        Some(id) => {
            let node = st.node(id);
            let kind = if node.is_leaf() {
                format!("leaf of suffix {}", node.suffix_index().unwrap_or_default())
            } else if node.is_root() {
                String::from("root")
            } else {
                format!("internal node with {} children", node.children().len())
            };
            println!("node_from_pattern({:?}): {}", pattern, kind);
            println!(
                "  path label: {:?}",
                String::from_utf8_lossy(&st.path_label(id))
            );
            println!("  string depth: {}", st.string_depth(id));
        }
        None => println!("node_from_pattern({:?}): {}", pattern, style("no node").red()),
    }
}

fn print_suffix_array(st: &SuffixTree) {
    let sa = st
        .suffix_array()
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", sa);
}

fn print_bench_table(rows: &[bench::Row]) {
    print!("{:>10}", style("n").bold());
    for strategy in Strategy::ALL.iter() {
        print!("{:>14}", style(strategy).bold());
    }
    println!();

    for row in rows {
        print!("{:>10}", row.n);
        let fastest = row.fastest();
        for &strategy in Strategy::ALL.iter() {
            let cell = match row.timing(strategy) {
                Some(t) => format!("{:.2?}", t),
                None => String::from("-"),
            };
            let styled = if fastest == Some(strategy) {
                style(cell).green()
            } else {
                style(cell)
            };
            print!("{:>14}", styled);
        }
        println!();
    }
}

fn init_logging(verbose: u8, log_file: Option<&PathBuf>) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![TermLogger::new(level, Config::default(), TerminalMode::Mixed)];
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Could not create log file `{}`", path.display()))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    CombinedLogger::init(loggers).map_err(|e| anyhow!("Could not initialize loggers: {}", e))?;

    debug!("Loggers initialized.");
    Ok(())
}
