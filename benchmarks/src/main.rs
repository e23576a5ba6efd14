use std::time::Instant;

use anyhow::{bail, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use rand::seq::SliceRandom;

use tokenvote_ledger::model::common::{Address, CandidateId, Weight};
use tokenvote_ledger::model::election::{ElectionSpec, Schedule};
use tokenvote_ledger::store::Store;
use tokenvote_ledger::tokens::FixedSupplyLedger;
use tokenvote_ledger::{Config, Ledger};

#[rustfmt::skip]
const CANDIDATES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Eve",
    "Fred", "Grace", "Henry", "Irene", "Joe",
];

/// Drive a full synthetic election through the ledger and report
/// registration and vote-casting throughput.
#[derive(Parser)]
struct Args {
    /// How many voters to fund, register and vote.
    #[arg(long, default_value_t = 10_000)]
    voters: u32,

    /// How many candidates to nominate (at most ten).
    #[arg(long, default_value_t = 5)]
    candidates: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.candidates == 0 || args.candidates > CANDIDATES.len() {
        bail!("--candidates must be between 1 and {}", CANDIDATES.len());
    }

    let treasury = Address::new("0x7e00000000000000000000000000000000000000");
    let supply: Weight = 10_000_000_000;
    let tokens = FixedSupplyLedger::new(treasury.clone(), supply);
    let mut ledger = Ledger::new(Store::new(), tokens, Config::open());

    // One hour of nominations, then an hour of voting. The ledger takes
    // every instant as an argument, so nobody actually waits.
    let t = Utc::now();
    let spec = ElectionSpec {
        name: "Throughput benchmark".to_string(),
        description: "Synthetic election used to measure the ledger.".to_string(),
        schedule: Schedule {
            nomination_start: t,
            nomination_end: t + Duration::hours(1),
            voting_start: t + Duration::hours(1) + Duration::seconds(1),
            voting_end: t + Duration::hours(2),
        },
    };
    let election = ledger.create_election(spec, &treasury, t)?.election_id;

    for (i, name) in CANDIDATES.iter().take(args.candidates).enumerate() {
        let nominator = Address::new(format!("0xc{i:039x}"));
        ledger.nominate(
            election,
            &nominator,
            name.to_string(),
            format!("ipfs://manifesto/{name}"),
            t,
        )?;
    }

    // Fund every voter up front so only ledger work is timed below.
    let voters: Vec<Address> = (0..args.voters)
        .map(|i| Address::new(format!("0x{:040x}", u64::from(i) + 1)))
        .collect();
    for voter in &voters {
        ledger.tokens_mut().transfer(&treasury, voter, 100)?;
    }

    let polls_open = t + Duration::hours(1) + Duration::seconds(1);
    let candidate_ids: Vec<CandidateId> = (1..=args.candidates as CandidateId).collect();
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    for voter in &voters {
        ledger.register_voter(election, voter, polls_open)?;
    }
    let registration = start.elapsed();

    let start = Instant::now();
    for voter in &voters {
        let candidate = *candidate_ids.choose(&mut rng).unwrap();
        ledger.cast_vote(election, candidate, voter, polls_open)?;
    }
    let casting = start.elapsed();

    let results = ledger.results(election)?;
    let tallied: Weight = results.iter().map(|(_, count)| count).sum();
    if ledger.election(election)?.total_votes != tallied {
        bail!("tally mismatch: the election total diverged from the candidate sums");
    }

    println!(
        "registered {} voters in {registration:?} ({:.0}/s)",
        voters.len(),
        voters.len() as f64 / registration.as_secs_f64()
    );
    println!(
        "cast {} votes in {casting:?} ({:.0}/s)",
        voters.len(),
        voters.len() as f64 / casting.as_secs_f64()
    );
    for (candidate, count) in results {
        println!("candidate {candidate}: {count}");
    }

    Ok(())
}
