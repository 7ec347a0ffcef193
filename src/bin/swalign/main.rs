use clap::*;

mod cmd;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = Command::new("swalign")
        .version(crate_version!())
        .about("`swalign` - Smith-Waterman local alignment of nucleotide sequences")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd::align::make_subcommand())
        .subcommand(cmd::random::make_subcommand())
        .after_help(
            r###"Subcommands:

* align  - Align the first two records of a FASTA file
* random - Align two random sequences of the given lengths

Set RUST_LOG=debug to see the selected SIMD backend and timings.
"###,
        );

    match app.get_matches().subcommand() {
        Some(("align", sub_matches)) => cmd::align::execute(sub_matches),
        Some(("random", sub_matches)) => cmd::random::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
