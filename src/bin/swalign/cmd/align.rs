use anyhow::Context;
use clap::*;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("align")
        .about("Aligns the first two records of a FASTA file")
        .after_help(
            r###"
Reads the first two records of the input, further records are ignored. Files ending in .gz are
decompressed, use `stdin` or `-` to read from standard input.

The vector engine only accepts A, C, G and T. The scalar engine scores any other byte as a mismatch.

Examples:
1. Compare both engines:
   swalign align pair.fa

2. Show the alignment found by the vector engine:
   swalign align pair.fa --mode vector --show

3. Custom scoring:
   swalign align pair.fa --match 5 --mismatch -4 --gap-open -10 --gap-extend -1
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file with at least two records"),
        )
        .args(super::common_args())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let (seq1, seq2) =
        swalign::fasta::read_pair(infile).with_context(|| format!("could not read {infile}"))?;

    println!("Seq1: {} ({} bp)", seq1.label(), seq1.len());
    println!("Seq2: {} ({} bp)", seq2.label(), seq2.len());

    super::report(&seq1, &seq2, args)
}
