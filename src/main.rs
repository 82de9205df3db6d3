#![allow(nonstandard_style)]

mod assigning;
mod commanding;
mod error_handling;
mod evaluating;
mod parsing;
mod resolving;
mod scanning;
mod variables;

use assigning::*;
use commanding::*;
use variables::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut variables = Variables::new();

    for line in std::io::stdin().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("could not read from stdin: {e}");
                break;
            },
        };

        if line.trim().is_empty() {
            continue;
        }

        if let Some(command) = Command::parse(&line) {
            println!("{}", command.reply());
            if command == Command::exit {
                break;
            }
            continue;
        }

        match evaluate_line(&line, &mut variables) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => println!("{e}"),
        }
    }
}
