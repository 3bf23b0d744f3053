use std::env;
use std::process;

use dijkstra_sssp::input::GraphSpec;
use dijkstra_sssp::report::{print_shortest_paths, write_paths};
use dijkstra_sssp::{Dijkstra, Graph, ShortestPathSolver};

const USAGE: &str = "usage: sssp [GRAPH.json] [--source N] [--paths] [--strict]";

struct Options {
    graph_path: Option<String>,
    source: Option<i64>,
    paths: bool,
    strict: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        graph_path: None,
        source: None,
        paths: false,
        strict: false,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--source" | "-s" => {
                let value = args.next().ok_or("--source needs a value")?;
                let source = value
                    .parse()
                    .map_err(|_| format!("invalid source vertex: {}", value))?;
                options.source = Some(source);
            }
            "--paths" | "-p" => options.paths = true,
            "--strict" => options.strict = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if options.graph_path.is_none() && !arg.starts_with('-') => options.graph_path = Some(arg),
            _ => return Err(format!("unexpected argument: {}\n{}", arg, USAGE)),
        }
    }

    Ok(options)
}

fn run(options: Options) -> dijkstra_sssp::Result<()> {
    let mut spec = match &options.graph_path {
        Some(path) => GraphSpec::<u64>::from_path(path)?,
        None => GraphSpec::sample(),
    };
    if options.source.is_some() {
        spec.source = options.source;
    }

    let graph = spec.build()?;
    let source = spec.source_in(&graph)?;
    log::info!(
        "graph with {} vertices and {} edges, source {}",
        graph.vertex_count(),
        graph.edge_count(),
        source
    );

    let solver = Dijkstra::new().with_weight_validation(options.strict);
    if options.paths {
        let (distances, predecessors) = solver.solve_with_paths(&graph, source)?;
        let stdout = std::io::stdout();
        write_paths(&mut stdout.lock(), &distances, &predecessors)?;
    } else {
        let distances = solver.solve_distances(&graph, source)?;
        print_shortest_paths(&distances)?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
