use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_t, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use gdv::{
    front_end::read_edge_list,
    graph::Graph,
    graphlet::{Graphlet, Orbit},
    task::Task,
};
use log::info;
use std::{
    error::Error,
    io::{stdout, BufWriter, Write},
    time::Instant,
};

fn load_graph(matches: &ArgMatches) -> Result<Graph, Box<dyn Error>> {
    let time_now = Instant::now();
    let edge_list = read_edge_list(matches.value_of("EDGELIST").unwrap())?;
    info!("parse_time: {}", time_now.elapsed().as_millis());
    let time_now = Instant::now();
    let graph = Graph::from_edge_list(&edge_list)?;
    info!("build_time: {}", time_now.elapsed().as_millis());
    Ok(graph)
}

fn handle_count(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    let mut task = Task::new(&graph);
    if matches.is_present("threads") {
        task = task.threads(value_t!(matches, "threads", usize)?);
    }
    let census = task.run()?;
    let mut out = BufWriter::new(stdout());
    if matches.is_present("graphlets") {
        for graphlet in Graphlet::all() {
            writeln!(
                out,
                "{} {} {}",
                graphlet,
                graphlet.name(),
                census.graphlet_count(graphlet)
            )?;
        }
    } else if census.num_vertices() > 0 {
        writeln!(out, "{}", census)?;
    }
    Ok(())
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", load_graph(matches)?.info());
    Ok(())
}

fn handle_orbits() -> std::io::Result<()> {
    let mut out = BufWriter::new(stdout());
    for orbit in Orbit::all() {
        writeln!(out, "{} {} {}", orbit, orbit.graphlet().name(), orbit.name())?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("count")
                .about("Counts the graphlet degree vector of every vertex")
                .after_help(
                    r"The edge list is a header `num_vertices num_edges` followed by
num_edges whitespace-separated pairs `src dst` with ids in 1..=num_vertices.
Id 0 is rejected as out of range. Self-loops and repeated edges are dropped.

Prints one line per vertex: id, degree, then the 72 orbit counts.",
                )
                .arg(Arg::with_name("EDGELIST").required(true))
                .arg(
                    Arg::with_name("threads")
                        .help("Number of worker threads (1 counts on the main thread)")
                        .long("threads")
                        .short("t")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("graphlets")
                        .help("Prints the number of instances of each graphlet instead")
                        .long("graphlets")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("info")
                .about("Displays the number of vertices and edges of the graph")
                .arg(Arg::with_name("EDGELIST").required(true)),
        )
        .subcommand(SubCommand::with_name("orbits").about("Lists the orbits"))
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("count") {
        handle_count(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    } else if matches.subcommand_matches("orbits").is_some() {
        handle_orbits()?;
    }
    Ok(())
}
