mod cli;
mod commands;
mod grammars;

#[cfg(test)]
mod grammars_tests;

use cli::build_cli;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("show", m)) => {
            let name = m.get_one::<String>("grammar").expect("required arg");
            commands::show(name);
        }
        Some(("match", m)) => {
            let name = m.get_one::<String>("grammar").expect("required arg");
            let input = m.get_one::<String>("input").cloned();
            let trace = m.get_flag("trace");
            commands::run_match(name, input, trace);
        }
        _ => unreachable!("clap should have caught this"),
    }
}
