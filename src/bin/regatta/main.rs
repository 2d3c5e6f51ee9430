use std::io::Write;
use std::time::Duration;

use anyhow::bail;
use anyhow::Context;
use clap::Parser;
use log::info;
use log::LevelFilter;
use regatta::branching::ValueOrder;
use regatta::statistics::configure;
use regatta::termination::Combinator;
use regatta::termination::OsSignal;
use regatta::termination::TimeBudget;
use regatta::InstanceGenerator;
use regatta::OptimisationResult;
use regatta::ProblemInstance;
use regatta::Solver;
use regatta::SolverOptions;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Action,

    /// The number of worker threads.
    #[arg(short = 'j', long, global = true, default_value_t = 1)]
    threads: usize,

    /// The number of leading host flags along which the search is split between the workers.
    #[arg(short = 'd', long, global = true, default_value_t = 3)]
    partition_depth: usize,

    /// The value tried first when deciding whether a vessel hosts.
    #[arg(long, global = true, value_enum, default_value_t = ValueOrder::FalseFirst)]
    host_value_order: ValueOrder,

    /// The value tried first when deciding whether a visit takes place.
    #[arg(long, global = true, value_enum, default_value_t = ValueOrder::TrueFirst)]
    visit_value_order: ValueOrder,

    /// The number of seconds the solver is allowed to run.
    ///
    /// Without a time-out the solver runs until the search is complete, or until it is
    /// interrupted.
    #[arg(short = 't', long = "time-out", global = true)]
    time_out: Option<u64>,

    /// Log the progress of the search.
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Print the search statistics when the solver is done.
    #[arg(short = 's', long, global = true)]
    statistics: bool,
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Action {
    /// Solve a fleet given on the command line.
    Solve {
        /// The crew size of every vessel, separated by commas.
        #[arg(long, value_delimiter = ',', required = true)]
        crew: Vec<u32>,

        /// The capacity of every vessel, in the same order as the crew sizes.
        #[arg(long, value_delimiter = ',', required = true)]
        capacity: Vec<u32>,

        /// The number of time slots.
        #[arg(long, default_value_t = 2)]
        slots: usize,
    },

    /// Solve a randomly generated fleet.
    Generate {
        /// The number of vessels in the fleet.
        #[arg(long, default_value_t = 12)]
        vessels: usize,

        /// The number of time slots.
        #[arg(long, default_value_t = 2)]
        slots: usize,

        /// The seed of the random generator.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Crew sizes are drawn below this bound.
        #[arg(long, default_value_t = 20)]
        max_crew: u32,

        /// The spare capacity of a vessel is drawn below this multiple of the maximum crew size.
        #[arg(long, default_value_t = 5)]
        capacity_multiplier: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    configure(args.statistics, "%%", None);

    let level_filter = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");

    let instance = match &args.command {
        Action::Solve {
            crew,
            capacity,
            slots,
        } => {
            if crew.len() != capacity.len() {
                bail!(
                    "Got {} crew sizes but {} capacities",
                    crew.len(),
                    capacity.len()
                );
            }

            ProblemInstance::new(crew.iter().copied().zip(capacity.iter().copied()), *slots)
                .context("Invalid fleet")?
        }

        Action::Generate {
            vessels,
            slots,
            seed,
            max_crew,
            capacity_multiplier,
        } => InstanceGenerator::new(*seed)
            .with_max_crew_size(*max_crew)
            .with_capacity_multiplier(*capacity_multiplier)
            .generate(*vessels, *slots)
            .context("Invalid generated fleet")?,
    };

    solve(&args, &instance)
}

fn solve(args: &Cli, instance: &ProblemInstance) -> anyhow::Result<()> {
    for (index, vessel) in instance.vessels().enumerate() {
        info!(
            "Vessel {}: crew {}, capacity {}",
            index + 1,
            vessel.crew_size(),
            vessel.capacity()
        );
    }

    let mut solver = Solver::with_options(SolverOptions {
        threads: args.threads,
        partition_depth: args.partition_depth,
        host_value_order: args.host_value_order,
        visit_value_order: args.visit_value_order,
        ..Default::default()
    });

    let signal = OsSignal::install().context("Failed to install the signal handlers")?;
    let time_budget = args
        .time_out
        .map(|seconds| TimeBudget::starting_now(Duration::from_secs(seconds)));

    let result = solver
        .solve(instance, Combinator::new(signal, time_budget))
        .context("Cannot build a schedule for this fleet")?;

    match result {
        OptimisationResult::Optimal(schedule) => {
            println!("{}", schedule.report(instance));
            println!("----------");
            println!("==========");
        }
        OptimisationResult::Satisfiable(schedule) => {
            println!("{}", schedule.report(instance));
            println!("----------");
        }
        OptimisationResult::Unsatisfiable => println!("UNSATISFIABLE"),
        OptimisationResult::Unknown => println!("UNKNOWN"),
    }

    solver.log_statistics();

    Ok(())
}
