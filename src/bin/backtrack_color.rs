use std::error::Error;
use std::time::Instant;

use clap::{App, load_yaml};
use log::info;
use serde_json::json;

use trace_color::color::ColoringInstance;
use trace_color::search::backtracking::backtracking_coloring;
use trace_color::trace::TraceOutcome;
use trace_color::util::{read_params, export_results};


/** colors an instance with an exact backtracking search and exports its trace */
pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    // parse arguments
    let yaml = load_yaml!("backtrack_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    let n = params.instance.nb_vertices();

    // solve it
    let t_start = Instant::now();
    let trace = backtracking_coloring(params.instance.clone(), params.nb_colors);
    let duration = t_start.elapsed().as_secs_f32();
    info!("search done in {:.3} seconds", duration);
    if main_args.is_present("verbose") {
        for (i,step) in trace.iter().enumerate() {
            println!("{:>8}\t{}", i+1, step);
        }
    }
    let trace_stats = trace.stats();
    match trace.outcome(n) {
        TraceOutcome::Colored => println!(
            "backtracking took {:.3} seconds ({} steps, {} backtracks). coloring found within a budget of {} colors",
            duration, trace_stats.nb_steps, trace_stats.nb_unassign, params.nb_colors
        ),
        TraceOutcome::Exhausted(reason) => println!(
            "backtracking took {:.3} seconds ({} steps). no valid coloring: {}",
            duration, trace_stats.nb_steps, reason
        ),
        TraceOutcome::Incomplete => unreachable!("the search always runs to completion"),
    }
    let stats = json!({
        "inst_name": params.inst_name,
        "nb_vertices": n,
        "nb_edges": params.instance.nb_edges(),
        "nb_colors": params.nb_colors,
        "time_searched": duration,
        "trace": trace_stats,
    });

    // export results
    export_results(
        params.instance.as_ref(),
        &trace,
        &stats,
        params.perf_file,
        params.sol_file,
        params.trace_file,
    )?;
    Ok(())
}
