// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Interactive console frontend.
//!
//! Stands in for a map page's tool buttons and click events: each input line
//! is a command routed into the session. Stdin doubles as the host UI's
//! modal prompt, which is safe because command handling runs to completion
//! before the next line is read, so commands and prompts never interleave.

use crate::editing::EditSession;
use crate::error::EditError;
use crate::host::HostUi;
use crate::map::{HeadlessMap, PopupAction};
use crate::model::{LatLng, ShapeId, ShapeKind};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Host UI over stdin/stdout: prompts read a line, alerts print one
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl HostUi for ConsoleUi {
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String> {
        print!("{message} [{default}] ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF while prompting is a cancel.
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    // Accepting the prompt unchanged returns the default.
                    Some(default.to_owned())
                } else {
                    Some(answer.to_owned())
                }
            }
        }
    }

    fn alert(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Run the interactive loop until EOF or `quit`
pub fn run(session: &mut EditSession<HeadlessMap, ConsoleUi>) -> Result<()> {
    print_help();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "none" => {
                session.clear_tool();
                println!("tool cleared");
            }
            "list" => list_shapes(session),
            "click" => click(session, parts.next(), parts.next()),
            "edit" => match lookup(session, parts.next()) {
                Some(id) => report(session.popup_action(PopupAction::Edit(id))),
                None => println!("usage: edit <id> (see `list`)"),
            },
            "remove" => match lookup(session, parts.next()) {
                Some(id) => report(session.popup_action(PopupAction::Remove(id))),
                None => println!("usage: remove <id> (see `list`)"),
            },
            other => match ShapeKind::parse(other) {
                Some(kind) => {
                    session.select_tool(kind);
                    println!("{kind} tool armed");
                }
                None => println!("unknown command: {other} (try `help`)"),
            },
        }
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  circle | triangle | rectangle   arm a shape tool");
    println!("  none                            disarm the tool");
    println!("  click <lat> <lng>               click the map");
    println!("  edit <id>                       resize a placed shape");
    println!("  remove <id>                     remove a placed shape");
    println!("  list                            show placed shapes");
    println!("  quit");
}

fn list_shapes(session: &EditSession<HeadlessMap, ConsoleUi>) {
    if session.registry().is_empty() {
        println!("no shapes placed");
        return;
    }
    for record in session.registry().iter() {
        println!(
            "#{} {} at {} size {} m",
            record.id.raw(),
            record.kind,
            record.anchor,
            record.size
        );
    }
}

fn click(
    session: &mut EditSession<HeadlessMap, ConsoleUi>,
    lat: Option<&str>,
    lng: Option<&str>,
) {
    let at = match (
        lat.and_then(|v| v.parse::<f64>().ok()),
        lng.and_then(|v| v.parse::<f64>().ok()),
    ) {
        (Some(lat), Some(lng)) => LatLng::new(lat, lng),
        _ => {
            println!("usage: click <lat> <lng>");
            return;
        }
    };

    match session.map_click(at) {
        Ok(id) => println!("placed shape #{}", id.raw()),
        Err(EditError::NoToolSelected) => println!("no shape selected"),
        // Invalid dimension input was already surfaced as an alert.
        Err(_) => {}
    }
}

/// Resolve a raw numeric argument to a registered shape id
fn lookup(
    session: &EditSession<HeadlessMap, ConsoleUi>,
    arg: Option<&str>,
) -> Option<ShapeId> {
    let raw = arg?.parse::<u64>().ok()?;
    session
        .registry()
        .iter()
        .find(|record| record.id.raw() == raw)
        .map(|record| record.id)
}

fn report(result: Result<(), EditError>) {
    match result {
        Ok(()) => println!("done"),
        Err(EditError::UnknownShape(id)) => println!("no shape #{}", id.raw()),
        // Invalid dimension input was already surfaced as an alert.
        Err(_) => {}
    }
}
