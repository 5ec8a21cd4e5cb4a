//! Action dispatch: maps `--action` to contact store operations

use tracing::{debug, instrument};

use crate::cli::args::{Action, Cli};
use crate::cli::output::{self, OutputFormat};
use crate::cli::{CliError, CliResult};
use crate::infrastructure::di::ServiceContainer;

/// Printed when `--action` is missing or not one of list|get|add|remove.
pub const UNKNOWN_ACTION: &str = "Unknown action type!";

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let format = OutputFormat::from_json_flag(cli.json);

    let Some(action) = cli.requested_action() else {
        debug!("action: {:?}", cli.action);
        output::warning(UNKNOWN_ACTION);
        return Ok(());
    };

    match action {
        Action::List => cmd_list(container, format),
        Action::Get => cmd_get(container, required_id(cli, "get")?, format),
        Action::Add => cmd_add(
            container,
            cli.name.as_deref().unwrap_or_default(),
            cli.email.as_deref().unwrap_or_default(),
            cli.phone.as_deref().unwrap_or_default(),
            format,
        ),
        Action::Remove => cmd_remove(container, required_id(cli, "remove")?, format),
    }
}

fn required_id<'a>(cli: &'a Cli, action: &str) -> CliResult<&'a str> {
    cli.id
        .as_deref()
        .ok_or_else(|| CliError::InvalidArgs(format!("--id is required for '{action}'")))
}

#[instrument(skip(container))]
fn cmd_list(container: &ServiceContainer, format: OutputFormat) -> CliResult<()> {
    let contacts = container.contacts.list()?;
    output::emit(&output::render_contacts(&contacts, format)?)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_get(container: &ServiceContainer, id: &str, format: OutputFormat) -> CliResult<()> {
    let contact = container.contacts.get_by_id(id)?;
    output::emit(&output::render_contact(contact.as_ref(), format)?)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_add(
    container: &ServiceContainer,
    name: &str,
    email: &str,
    phone: &str,
    format: OutputFormat,
) -> CliResult<()> {
    let contact = container.contacts.add(name, email, phone)?;
    output::emit(&output::render_contact(Some(&contact), format)?)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_remove(container: &ServiceContainer, id: &str, format: OutputFormat) -> CliResult<()> {
    let removed = container.contacts.remove(id)?;
    output::emit(&output::render_contact(removed.as_ref(), format)?)?;
    Ok(())
}
