use std::error::Error;

use clap::{App, load_yaml};
use log::info;

use trace_color::color::ColoringInstance;
use trace_color::dimacs;
use trace_color::player::TracePlayer;
use trace_color::search::color_budget;
use trace_color::trace::{Trace, TraceOutcome};
use trace_color::util::parse_arg;


/** replays a trace on its instance and prints the coloring reached */
pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    // parse arguments
    let yaml = load_yaml!("replay_trace.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let trace_filename = main_args.value_of("trace").unwrap_or_default();
    let instance = dimacs::read_from_file(inst_filename)?;
    let trace = Trace::from_file(trace_filename)?;
    let n = instance.nb_vertices();
    let nb_colors = color_budget(parse_arg::<i64>(&main_args, "colors")?.unwrap_or_default())?;
    trace.validate(n, nb_colors)?;
    info!("read trace {} ({} steps)", trace_filename, trace.len());
    let offset = parse_arg::<usize>(&main_args, "offset")?.unwrap_or_else(|| trace.len());

    // replay it
    let mut player = TracePlayer::new(&trace, n);
    if main_args.is_present("verbose") {
        while player.position() < offset {
            match player.step_forward() {
                Some(step) => println!("{:>8}\t{}", player.position(), step),
                None => break,
            }
        }
    } else {
        player.seek(offset);
    }

    println!("step {} / {}", player.position(), trace.len());
    for (v,c) in player.coloring().iter().enumerate() {
        match c {
            Some(c) => println!("\tnode {}:\tcolor {}", v, c.saturating_add(1)),
            None => println!("\tnode {}:\tuncolored", v),
        }
    }
    match player.status() {
        TraceOutcome::Incomplete => println!("search in progress"),
        TraceOutcome::Colored => println!("coloring found"),
        TraceOutcome::Exhausted(reason) => println!("no valid coloring found: {}", reason),
    }
    Ok(())
}
