use clap::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use swalign::{NUCLEOTIDES, Sequence};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("random")
        .about("Aligns two random nucleotide sequences")
        .after_help(
            r###"
Generates two sequences of uniformly random A, C, G and T. Useful to compare the speed of the
engines on long inputs.

Examples:
1. Two 10 kbp sequences, timing only:
   swalign random 10000 10000

2. Reproducible input:
   swalign random 200 300 --seed 42 --show
"###,
        )
        .arg(
            Arg::new("len1")
                .required(true)
                .index(1)
                .value_parser(value_parser!(usize))
                .help("Length of the first sequence"),
        )
        .arg(
            Arg::new("len2")
                .required(true)
                .index(2)
                .value_parser(value_parser!(usize))
                .help("Length of the second sequence"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .num_args(1)
                .value_parser(value_parser!(u64))
                .help("Seed of the random generator"),
        )
        .args(super::common_args())
}

fn random_sequence(rng: &mut StdRng, label: &str, len: usize) -> Sequence {
    let symbols: Vec<u8> = (0..len)
        .map(|_| NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())])
        .collect();
    Sequence::new(label, symbols)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let len1 = *args.get_one::<usize>("len1").unwrap();
    let len2 = *args.get_one::<usize>("len2").unwrap();
    let mut rng = match args.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let seq1 = random_sequence(&mut rng, "random1", len1);
    let seq2 = random_sequence(&mut rng, "random2", len2);

    super::report(&seq1, &seq2, args)
}
