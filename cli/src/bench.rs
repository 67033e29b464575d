use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use suffix_tree::{Strategy, SuffixTree, Text};

use crate::loader::prepare_text;

pub const DEFAULT_SIZES: [usize; 13] = [
    100, 2500, 5000, 7500, 10000, 15000, 20000, 25000, 30000, 35000, 40000, 45000, 50000,
];

// Where the benchmarked texts come from
pub enum Corpus {
    File(Vec<u8>),
    Random { alphabet: Vec<u8>, seed: u64 },
}

impl Corpus {
    pub fn prefix(&self, n: usize, sentinel: u8) -> Result<Text> {
        let text = match self {
            Corpus::File(bytes) => {
                prepare_text(bytes[..n.min(bytes.len())].to_vec(), None, sentinel)?
            }
            Corpus::Random { alphabet, seed } => {
                prepare_text(random_text(n, alphabet, *seed)?, None, sentinel)?
            }
        };
        Ok(text)
    }
}

pub fn random_text(len: usize, alphabet: &[u8], seed: u64) -> Result<Vec<u8>> {
    if alphabet.is_empty() {
        bail!("Cannot generate random text from an empty alphabet");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..len)
        .map(|_| alphabet[rng.gen_range(0, alphabet.len())])
        .collect())
}

pub struct Row {
    pub n: usize,
    // None when the strategy was skipped
    pub timings: Vec<(Strategy, Option<Duration>)>,
}

impl Row {
    pub fn timing(&self, strategy: Strategy) -> Option<Duration> {
        self.timings
            .iter()
            .find(|(s, _)| *s == strategy)
            .and_then(|(_, t)| *t)
    }

    pub fn fastest(&self) -> Option<Strategy> {
        self.timings
            .iter()
            .filter_map(|(s, t)| t.map(|t| (*s, t)))
            .min_by_key(|(_, t)| *t)
            .map(|(s, _)| s)
    }
}

pub struct Options {
    pub sentinel: u8,
    pub skip_naive: bool,
    pub verify: bool,
}

pub fn run(corpus: &Corpus, sizes: &[usize], options: &Options) -> Result<Vec<Row>> {
    let strategies = Strategy::ALL
        .iter()
        .copied()
        .filter(|&s| !(options.skip_naive && s == Strategy::Naive))
        .collect::<Vec<_>>();

    let pb = ProgressBar::new((sizes.len() * strategies.len()) as u64);
    pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {wide_msg}"));

    let mut rows = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let text = corpus.prefix(n, options.sentinel)?;
        let mut timings = vec![];
        let mut reference: Option<(Strategy, Vec<usize>)> = None;

        for &strategy in Strategy::ALL.iter() {
            if !strategies.contains(&strategy) {
                timings.push((strategy, None));
                continue;
            }

            pb.set_message(&format!("{} over {} bytes", strategy, text.len()));
            let input = text.clone();
            let stopwatch = Instant::now();
            let tree = SuffixTree::build(input, strategy);
            let elapsed = stopwatch.elapsed();
            pb.inc(1);

            debug!("n = {}: {} took {:?}", n, strategy, elapsed);
            timings.push((strategy, Some(elapsed)));

            if options.verify {
                let sa = tree.suffix_array();
                let (first, expected) = reference.get_or_insert_with(|| (strategy, sa.clone()));
                if *expected != sa {
                    pb.finish_and_clear();
                    bail!(
                        "{} and {} disagree on the suffix array for n = {}",
                        first,
                        strategy,
                        n
                    );
                }
            }
        }

        rows.push(Row { n, timings });
    }

    pb.finish_and_clear();
    Ok(rows)
}

pub fn to_csv(rows: &[Row]) -> String {
    let mut csv = String::from("n");
    for strategy in Strategy::ALL.iter() {
        csv.push(',');
        csv.push_str(strategy.name());
    }
    csv.push('\n');

    for row in rows {
        csv.push_str(&row.n.to_string());
        for &strategy in Strategy::ALL.iter() {
            csv.push(',');
            if let Some(t) = row.timing(strategy) {
                csv.push_str(&t.as_millis().to_string());
            }
        }
        csv.push('\n');
    }
    csv
}

pub fn write_csv(rows: &[Row], path: &Path) -> Result<()> {
    fs::write(path, to_csv(rows))
        .with_context(|| format!("Could not write benchmark results to `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_text_is_seeded() {
        let a = random_text(500, b"ACGT", 7).unwrap();
        let b = random_text(500, b"ACGT", 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(500, a.len());
        assert!(a.iter().all(|c| b"ACGT".contains(c)));
    }

    #[test]
    fn empty_alphabet_is_an_error() {
        assert!(random_text(10, b"", 1).is_err());
    }

    #[test]
    fn random_corpus_prefix() {
        let corpus = Corpus::Random {
            alphabet: b"ab".to_vec(),
            seed: 3,
        };
        let text = corpus.prefix(20, b'$').unwrap();
        assert_eq!(21, text.len());
        assert_eq!(Some(b'$'), text.sentinel());
    }

    #[test]
    fn sentinel_in_alphabet_is_rejected() {
        let corpus = Corpus::Random {
            alphabet: b"a$".to_vec(),
            seed: 11,
        };
        assert!(corpus.prefix(200, b'$').is_err());
    }

    #[test]
    fn file_corpus_prefix() {
        let corpus = Corpus::File(b"abracadabra".to_vec());
        assert_eq!(b"abra$", corpus.prefix(4, b'$').unwrap().as_bytes());
        assert_eq!(b"abracadabra$", corpus.prefix(500, b'$').unwrap().as_bytes());
        assert_eq!(b"$", corpus.prefix(0, b'$').unwrap().as_bytes());
    }

    #[test]
    fn runs_and_verifies() {
        let corpus = Corpus::File(b"it was the best of times, it was the worst of times".to_vec());
        let options = Options {
            sentinel: b'$',
            skip_naive: true,
            verify: true,
        };
        let rows = run(&corpus, &[5, 30, 1000], &options).unwrap();

        assert_eq!(vec![5, 30, 1000], rows.iter().map(|r| r.n).collect::<Vec<_>>());
        for row in &rows {
            assert_eq!(None, row.timing(Strategy::Naive));
            assert!(row.timing(Strategy::McCreight).is_some());
            assert!(row.timing(Strategy::Ukkonen).is_some());
            assert_ne!(Some(Strategy::Naive), row.fastest());
        }
    }

    #[test]
    fn csv_layout() {
        let rows = vec![
            Row {
                n: 100,
                timings: vec![
                    (Strategy::Naive, Some(Duration::from_millis(12))),
                    (Strategy::McCreight, Some(Duration::from_millis(3))),
                    (Strategy::Ukkonen, Some(Duration::from_micros(2500))),
                ],
            },
            Row {
                n: 2500,
                timings: vec![
                    (Strategy::Naive, None),
                    (Strategy::McCreight, Some(Duration::from_millis(40))),
                    (Strategy::Ukkonen, Some(Duration::from_millis(31))),
                ],
            },
        ];

        assert_eq!(
            "n,naive,mccreight,ukkonen\n100,12,3,2\n2500,,40,31\n",
            to_csv(&rows)
        );
        assert_eq!(Some(Strategy::Ukkonen), rows[0].fastest());
    }
}
