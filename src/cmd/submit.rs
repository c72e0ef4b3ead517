use std::io::{self, BufRead, IsTerminal, Write};

use tokio::sync::watch;
use tracing::{debug, info};

use crate::cmd::fields::{TicketFieldArgs, prompt_field};
use crate::context::AppContext;
use crate::domain::ticket::{TicketDraft, TicketField};
use crate::error::AppResult;
use crate::workflow::submit::{SubmitOutcome, TicketForm};

#[derive(Debug, Clone)]
pub struct SubmitCommandArgs {
    pub fields: TicketFieldArgs,
    pub interactive: bool,
}

impl SubmitCommandArgs {
    pub fn new(fields: TicketFieldArgs, no_input: bool) -> Self {
        Self {
            fields,
            interactive: !no_input && io::stdin().is_terminal(),
        }
    }
}

/// Fills the form from stdin and submits it. Returns whether the ticket was
/// accepted.
pub async fn run(ctx: &AppContext, args: SubmitCommandArgs) -> AppResult<bool> {
    let stdin = io::stdin();
    run_with(ctx, args, &mut stdin.lock(), &mut io::stdout()).await
}

/// In interactive mode a rejected draft re-prompts the offending field with
/// everything else kept, and a failed send offers to try again. End of input
/// gives up without sending.
pub async fn run_with(
    ctx: &AppContext,
    args: SubmitCommandArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> AppResult<bool> {
    info!(base_url = %ctx.config.base_url, "opening ticket form");
    let form = ctx.new_form();
    tokio::spawn(log_draft_changes(form.draft().subscribe()));
    args.fields.apply(form.draft());

    if args.interactive && !prompt_missing(&form, input, output)? {
        return Ok(false);
    }

    loop {
        match form.submit().await {
            SubmitOutcome::Submitted(receipt) => {
                debug!(response = %receipt.response, "ticket accepted");
                return Ok(true);
            }
            SubmitOutcome::Rejected(err) if args.interactive => {
                if !prompt_field(input, output, form.draft(), err.field())? {
                    return Ok(false);
                }
            }
            SubmitOutcome::Failed if args.interactive => {
                if !confirm(input, output, "Try again?")? {
                    return Ok(false);
                }
            }
            SubmitOutcome::Rejected(_) | SubmitOutcome::Failed | SubmitOutcome::AlreadySubmitting => {
                return Ok(false);
            }
        }
    }
}

fn prompt_missing(
    form: &TicketForm,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> AppResult<bool> {
    for field in TicketField::ALL {
        if form.draft().get(field).trim().is_empty()
            && !prompt_field(input, output, form.draft(), field)?
        {
            return Ok(false);
        }
    }
    Ok(true)
}

fn confirm(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> AppResult<bool> {
    write!(output, "{question} [y/N]: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

// Ends once the form, and with it the draft store, is dropped.
async fn log_draft_changes(mut changes: watch::Receiver<TicketDraft>) {
    while changes.changed().await.is_ok() {
        let filled = {
            let draft = changes.borrow_and_update();
            TicketField::ALL
                .iter()
                .filter(|field| !draft.get(**field).is_empty())
                .count()
        };
        debug!(filled, "draft updated");
    }
}
