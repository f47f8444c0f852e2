//! Interactive shell to query minimum latency paths
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use route_core::prelude::*;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} routers and {} links",
        context.graph.num_routers(),
        context.graph.num_links()
    )))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (Some(src), Some(dst)) = (
        args.get_one::<String>("src"),
        args.get_one::<String>("dst"),
    ) else {
        return Ok(Some("Source and destination are required".to_string()));
    };

    let mut dijkstra = Dijkstra::with_params(&context.graph, context.params);
    let sp = dijkstra.search(src, dst);

    if let Some(sp) = sp {
        Ok(Some(format!(
            "path: {}, latency: {}\n{}",
            sp, sp.latency, dijkstra.stats
        )))
    } else {
        Ok(Some("No path found".to_string()))
    }
}

fn set_strategy(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let strategy = match args.get_one::<String>("strategy").map(String::as_str) {
        Some("every") => RelaxationStrategy::EveryEdge,
        Some("improve") => RelaxationStrategy::OnImprovement,
        _ => return Ok(Some("Possible values are \"every\" and \"improve\"".to_string())),
    };
    context.params = context.params.relaxation(strategy);
    Ok(Some(format!("Relaxation strategy: {:?}", strategy)))
}

fn measure_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::seq::SliceRandom;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    // Select n random start and end routers
    let routers: Vec<&String> = context.graph.routers().collect();
    if routers.is_empty() {
        return Ok(Some("Graph is empty".to_string()));
    }
    let mut rng = rand::thread_rng();
    let pairs: Vec<(&String, &String)> = (0..n)
        .filter_map(|_| Some((*routers.choose(&mut rng)?, *routers.choose(&mut rng)?)))
        .collect();

    let mut res = String::new();
    let pb = ProgressBar::new(pairs.len() as u64);
    // Run Dijkstra for each pair of routers
    for (src, dst) in pairs {
        pb.inc(1);
        let mut dijkstra = Dijkstra::with_params(&context.graph, context.params);
        let Some(sp) = dijkstra.search(src, dst) else {
            continue;
        };
        res.push_str(&format!(
            "{} -> {}: {} in {:?}\n",
            src, dst, sp.latency, dijkstra.stats.duration
        ));
    }
    pb.finish_and_clear();

    Ok(Some(res))
}

struct Context {
    graph: RouterGraph,
    params: SearchParams,
}

impl Context {
    fn new(graph: RouterGraph) -> Self {
        Self {
            graph,
            params: SearchParams::default(),
        }
    }
}

fn load_graph() -> RouterGraph {
    let Some(path_to_csv) = std::env::args().nth(1) else {
        println!("No csv file given, using a 20x20 grid");
        return generate_grid_graph(20, 20);
    };

    match RouterGraph::from_csv(Path::new(&path_to_csv)) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let context = Context::new(load_graph());

    let mut repl = Repl::new(context)
        .with_name("Latency Router")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query minimum latency paths")
        .with_banner("Welcome to Latency Router")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("route")
                .arg(Arg::new("src").required(true).help("ID of source router"))
                .arg(
                    Arg::new("dst")
                        .required(true)
                        .help("ID of destination router"),
                )
                .about("Calculate the minimum latency path"),
            run_route,
        )
        .with_command(
            Command::new("strategy")
                .arg(
                    Arg::new("strategy")
                        .required(true)
                        .help("\"every\" to push on every link, \"improve\" to push on improvement"),
                )
                .about("Set the relaxation strategy"),
            set_strategy,
        )
        .with_command(
            Command::new("routem")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random paths to calculate"),
                )
                .about("Measure `n` random minimum latency path calculations"),
            measure_route,
        );

    repl.run()
}
