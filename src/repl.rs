use crate::error::Result;
use crate::session::{Reply, Session};
use crate::view;
use rustyline::{error::ReadlineError, Config, DefaultEditor};
use tracing::debug;

/// Line mode: each typed line is a run of keys or a `:command`.
pub fn run(session: &mut Session) -> Result<()> {
    let config = Config::builder().auto_add_history(false).build();
    let mut rl = DefaultEditor::with_config(config)?;

    view::print(&[
        view::message("Type keys like `12 * 3 =`, :help for more.", session.palette()),
        session.display_line(),
    ]);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    println!("Goodbye!");
                    break;
                }
                rl.add_history_entry(line.as_str())?;

                debug!(%line, "Processing input");
                match session.execute(&line) {
                    Ok(Reply::Quit) => break,
                    Ok(Reply::Display) => view::print(&[session.display_line()]),
                    Ok(Reply::Output(mut lines)) => {
                        lines.push(session.display_line());
                        view::print(&lines);
                    }
                    Err(err) => view::print(&session.error_lines(&line, &err)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Pressing enter with no input will exit as well.");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Runs `keys` as one line and prints the final display without colour.
pub fn eval(session: &mut Session, keys: &str) -> Result<()> {
    if let Reply::Output(lines) = session.execute(keys)? {
        view::print(&lines);
    }
    println!("{}", session.calculator().display());
    Ok(())
}
