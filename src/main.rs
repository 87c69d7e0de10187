use clap::Parser;
use dense_max_flow::loader::load_graph;
use dense_max_flow::maximum_flow::edmonds_karp::EdmondsKarp;
use dense_max_flow::maximum_flow::graph::Graph;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dense-max-flow")]
#[command(about = "Maximum flow of an edge-list graph (Edmonds-Karp)", long_about = None)]
struct Cli {
    /// Edge list, one `<from> <to> <weight>` per line
    #[arg(default_value = "data/data_1.txt")]
    path: PathBuf,
    /// Source vertex
    #[arg(short, long, default_value = "S")]
    source: String,
    /// Sink vertex
    #[arg(short = 't', long, default_value = "T")]
    sink: String,
    /// Do not print the capacity matrix
    #[arg(long)]
    no_matrix: bool,
    /// Also print the source side of a minimum cut
    #[arg(long)]
    cut: bool,
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> dense_max_flow::Result<()> {
    let graph: Graph<i64> = load_graph(&cli.path)?;

    for (num, vertex) in graph.vertices().iter().enumerate() {
        debug!("[{}]: {}", num + 1, vertex);
    }

    if !cli.no_matrix {
        let n = graph.num_vertices();
        println!("Graph matrix ({n}x{n}):");
        println!("{graph}");
    }

    let mut solver = EdmondsKarp::default();
    let max_flow = solver.solve(&graph, &cli.source, &cli.sink)?;
    println!("Max flow is: {max_flow}");

    if cli.cut {
        let names = solver
            .minimum_cut(&graph)
            .into_iter()
            .map(|v| graph.vertex_name(v))
            .collect::<dense_max_flow::Result<Vec<_>>>()?;
        println!("Minimum cut: {}", names.join(" "));
    }
    Ok(())
}
