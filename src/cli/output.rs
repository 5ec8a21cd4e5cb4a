//! Terminal output formatting
//!
//! Status lines use colors (respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE
//! automatically). Contact data goes to stdout as a table or as JSON.

use std::io::Write;

use colored::Colorize;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, Table};
use serde::Serialize;

use crate::domain::Contact;
use crate::infrastructure::{InfraError, InfraResult};

/// Printed for a lookup or removal that found nothing.
pub const ABSENT: &str = "null";

/// Print error (red bold "error:" prefix) to stderr, followed by its causes
pub fn error(err: &(dyn std::error::Error + 'static)) {
    eprintln!("{}: {}", "error".red().bold(), err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  {}: {}", "caused by".red(), cause);
        source = cause.source();
    }
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// How contact data is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Render contacts as a table with one row per contact.
pub fn contacts_table(contacts: &[Contact]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("NAME"),
        Cell::new("EMAIL"),
        Cell::new("PHONE"),
    ]);

    for contact in contacts {
        table.add_row(vec![
            Cell::new(&contact.id),
            Cell::new(&contact.name),
            Cell::new(&contact.email),
            Cell::new(&contact.phone),
        ]);
    }
    table.to_string()
}

/// Render the whole collection.
pub fn render_contacts(contacts: &[Contact], format: OutputFormat) -> InfraResult<String> {
    match format {
        OutputFormat::Table => Ok(contacts_table(contacts)),
        OutputFormat::Json => to_json(contacts),
    }
}

/// Render a single lookup result; absent renders as `null` in both formats.
pub fn render_contact(contact: Option<&Contact>, format: OutputFormat) -> InfraResult<String> {
    match (contact, format) {
        (None, _) => Ok(ABSENT.to_string()),
        (Some(c), OutputFormat::Table) => Ok(contacts_table(std::slice::from_ref(c))),
        (Some(c), OutputFormat::Json) => to_json(c),
    }
}

/// Write rendered output to stdout.
pub fn emit(rendered: &str) -> InfraResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").map_err(|e| InfraError::io("write to stdout", e))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> InfraResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        InfraError::io(
            "serialize output",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Contact {
        Contact {
            id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".into(),
            name: "Ada".into(),
            email: "ada@x.com".into(),
            phone: "555-0100".into(),
            extra: Default::default(),
        }
    }

    #[test]
    fn given_contacts_when_rendering_table_then_has_header_and_rows() {
        let rendered = contacts_table(&[ada()]);

        for expected in ["ID", "NAME", "EMAIL", "PHONE", "Ada", "ada@x.com", "555-0100"] {
            assert!(rendered.contains(expected), "missing {expected} in\n{rendered}");
        }
    }

    #[test]
    fn given_absent_contact_when_rendering_then_prints_null() {
        assert_eq!(render_contact(None, OutputFormat::Table).unwrap(), "null");
        assert_eq!(render_contact(None, OutputFormat::Json).unwrap(), "null");
    }

    #[test]
    fn given_contact_when_rendering_json_then_round_trips() {
        let rendered = render_contact(Some(&ada()), OutputFormat::Json).unwrap();
        let parsed: Contact = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, ada());
    }

    #[test]
    fn given_empty_collection_when_rendering_json_then_empty_array() {
        assert_eq!(render_contacts(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
