use std::path::PathBuf;

use clap::Parser;

use crate::search_params::{RelaxationStrategy, SearchParams};

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the .csv file with the header `source,target,latency`
    links_file: String,

    /// Router to start from
    source: String,

    /// Router to reach
    target: String,

    /// Push a frontier entry for every traversed link, not only on improvement
    #[arg(long, default_value = "false")]
    every_edge: bool,

    /// Stop the search once the target is settled
    #[arg(long, default_value = "false")]
    stop_at_target: bool,

    /// Router capable of compression. Accepted but not used for routing
    #[arg(short, long = "compression", value_name = "router")]
    compression: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub links_file: PathBuf,
    pub source: String,
    pub target: String,
    pub compression_routers: Vec<String>,
    pub params: SearchParams,
}

pub fn parse() -> Cfg {
    cfg_from(Cli::parse())
}

fn cfg_from(cli: Cli) -> Cfg {
    let mut params = SearchParams::new().stop_at_target(cli.stop_at_target);

    if cli.every_edge {
        params = params.relaxation(RelaxationStrategy::EveryEdge);
    }

    Cfg {
        links_file: PathBuf::from(cli.links_file),
        source: cli.source,
        target: cli.target,
        compression_routers: cli.compression,
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags() {
        let cli = Cli::try_parse_from([
            "route",
            "links.csv",
            "A",
            "D",
            "--every-edge",
            "-c",
            "A",
            "--compression",
            "B",
        ])
        .unwrap();
        let cfg = cfg_from(cli);

        assert_eq!(cfg.links_file, PathBuf::from("links.csv"));
        assert_eq!(cfg.source, "A");
        assert_eq!(cfg.target, "D");
        assert_eq!(cfg.compression_routers, vec!["A", "B"]);
        assert_eq!(
            cfg.params,
            SearchParams::new().relaxation(RelaxationStrategy::EveryEdge)
        );
    }

    #[test]
    fn missing_target_is_rejected() {
        assert!(Cli::try_parse_from(["route", "links.csv", "A"]).is_err());
    }
}
