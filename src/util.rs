use std::rc::Rc;
use std::str::FromStr;

use clap::ArgMatches;
use log::{info, warn};
use serde_json::Value;

use crate::{
    color::{checker, CheckerResult, ColoringInstance},
    dimacs,
    error::InputError,
    generator::{seeded_random_graph, DEFAULT_EDGE_PROBABILITY, DEFAULT_NB_VERTICES},
    graph::{check_nb_vertices, Graph},
    search::color_budget,
    trace::{Trace, TraceOutcome},
};

/// parameters of a coloring run, read from the command line
#[derive(Debug)]
pub struct Params {
    /// instance name (file name, or description of the random graph)
    pub inst_name: String,
    /// instance to color
    pub instance: Rc<Graph>,
    /// color budget
    pub nb_colors: usize,
    /// where to write the solution (if any)
    pub sol_file: Option<String>,
    /// where to write the run statistics (if any)
    pub perf_file: Option<String>,
    /// where to write the trace (if any)
    pub trace_file: Option<String>,
}

/// parses the value of an argument if it is given
pub fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>, InputError> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| InputError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// optional file name argument
fn read_filename(main_args:&ArgMatches, name:&str) -> Option<String> {
    main_args.value_of(name).map(|e| {
        info!("printing {} in: {}", name, e);
        e.to_string()
    })
}

/** reads the instance (DIMACS file or random graph) from the command line input */
pub fn read_instance(main_args:&ArgMatches) -> Result<(String, Rc<Graph>), InputError> {
    let instance = match main_args.value_of("instance") {
        Some(inst_filename) => {
            info!("reading instance: {}...", inst_filename);
            (inst_filename.to_string(), dimacs::read_from_file(inst_filename)?)
        },
        None => {
            let n = parse_arg::<i64>(main_args, "random")?.unwrap_or(DEFAULT_NB_VERTICES as i64);
            if n < 0 { return Err(InputError::NegativeVertexCount(n)); }
            check_nb_vertices(n as usize)?;
            let p = parse_arg::<f64>(main_args, "probability")?.unwrap_or(DEFAULT_EDGE_PROBABILITY);
            let seed = parse_arg::<u64>(main_args, "seed")?.unwrap_or(0);
            info!("generating a random graph (n={}, p={}, seed={})...", n, p, seed);
            (format!("random_{}_{}_{}", n, p, seed), seeded_random_graph(n as usize, p, seed))
        }
    };
    Ok((instance.0, Rc::new(instance.1)))
}

/** reads command line input and returns the run parameters */
pub fn read_params(main_args:&ArgMatches) -> Result<Params, InputError> {
    let (inst_name, instance) = read_instance(main_args)?;
    let k = parse_arg::<i64>(main_args, "colors")?.unwrap_or(0);
    let nb_colors = color_budget(k)?;
    let sol_file = read_filename(main_args, "solution");
    let perf_file = read_filename(main_args, "perf");
    let trace_file = read_filename(main_args, "trace");
    instance.display_statistics();
    println!("\t{} \t colors", nb_colors);
    println!("=======================");
    Ok(Params { inst_name, instance, nb_colors, sol_file, perf_file, trace_file })
}

/// exports search results to files
pub fn export_results(
    instance:&dyn ColoringInstance,
    trace:&Trace,
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
    trace_file:Option<String>,
) -> Result<(), InputError> {
    // export statistics
    if let Some(filename) = perf_file {
        std::fs::write(filename.as_str(), serde_json::to_string(stats)?)?;
    }
    // export trace
    if let Some(filename) = trace_file {
        trace.to_file(filename.as_str())?;
    }
    // export solution
    if let Some(filename) = sol_file {
        match trace.outcome(instance.nb_vertices()) {
            TraceOutcome::Colored => {
                let coloring = trace.final_coloring(instance.nb_vertices());
                match checker(instance, &coloring) {
                    CheckerResult::Ok(_) => {},
                    checker_result => warn!("invalid solution (reason: {:?})", checker_result),
                };
                instance.write_solution(filename.as_str(), &coloring)?;
            },
            _ => warn!("no solution to write in {}", filename),
        }
    }
    Ok(())
}
