// TlsPair - TLS Identity Loading and Validation
// Copyright (C) 2026 TlsPair Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Shared output formatting for CLI commands.

use console::style;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("ok").green().bold(), msg);
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("error").red().bold(), msg);
}

/// Print a section heading.
pub fn heading(msg: &str) {
    println!("{}", style(msg).bold());
}

/// Print an indented key-value detail line.
pub fn detail(key: &str, value: &str) {
    println!("  {} {}", style(format!("{key}:")).dim(), value);
}
