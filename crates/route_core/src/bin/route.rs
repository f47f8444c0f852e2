use route_core::prelude::*;
use route_core::util::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let g: RouterGraph = RouterGraph::from_csv(&cfg.links_file)?;
    g.print_info();

    let (path, latency) = find_minimum_latency_path_with(
        &g,
        cfg.params,
        &cfg.compression_routers,
        &cfg.source,
        &cfg.target,
    );

    if path.is_empty() {
        println!("No path found");
    } else {
        println!("path: {}, latency: {}", path, latency);
    }

    Ok(())
}
