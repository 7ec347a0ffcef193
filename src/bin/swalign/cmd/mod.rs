use anyhow::Context;
use clap::*;
use log::warn;
use swalign::{AlignmentReport, Config, Mode, Scoring, Sequence, run_with_config};

pub mod align;
pub mod random;

/// Arguments shared by every subcommand: engine selection, output and scoring
pub fn common_args() -> Vec<Arg> {
    let score_arg = |name: &'static str, default: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .num_args(1)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i32))
            .default_value(default)
            .help(help)
    };

    vec![
        Arg::new("mode")
            .long("mode")
            .short('m')
            .num_args(1)
            .default_value("both")
            .help("Engine: scalar, vector or both"),
        Arg::new("show")
            .long("show")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("Print the alignment below each report"),
        score_arg("match", "2", "Score of a match"),
        score_arg("mismatch", "-1", "Score of a mismatch"),
        score_arg("gap-open", "-2", "Score of the first position of a gap"),
        score_arg("gap-extend", "-1", "Score of each further gap position"),
    ]
}

fn modes(args: &ArgMatches) -> anyhow::Result<Vec<Mode>> {
    let mode = args.get_one::<String>("mode").unwrap();
    if mode.eq_ignore_ascii_case("both") {
        return Ok(vec![Mode::Scalar, Mode::VectorLane]);
    }
    Ok(vec![mode.parse::<Mode>()?])
}

fn scoring(args: &ArgMatches) -> Scoring {
    Scoring {
        match_score: *args.get_one::<i32>("match").unwrap(),
        mismatch_score: *args.get_one::<i32>("mismatch").unwrap(),
        gap_open: *args.get_one::<i32>("gap-open").unwrap(),
        gap_extend: *args.get_one::<i32>("gap-extend").unwrap(),
    }
}

/// Run every selected engine on the pair and print one report line each
pub fn report(seq1: &Sequence, seq2: &Sequence, args: &ArgMatches) -> anyhow::Result<()> {
    let show = args.get_flag("show");
    let scoring = scoring(args);

    let mut reports: Vec<AlignmentReport> = vec![];
    for mode in modes(args)? {
        let report = run_with_config(seq1, seq2, &Config { mode, scoring })
            .with_context(|| format!("{mode} alignment failed"))?;

        println!("{report}");
        if show {
            println!("{}", report.result);
        }
        reports.push(report);
    }

    if let [first, second] = reports.as_slice() {
        if !first.same_alignment(second) {
            warn!(
                "engines disagree: {} scored {}, {} scored {}",
                first.mode, first.score, second.mode, second.score
            );
        }
    }

    Ok(())
}
