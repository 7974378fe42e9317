//! Interactive console session
//!
//! Reads one intent per line, forwards it to the orchestrator and redraws
//! the view. Generic over reader and writer so sessions can be scripted.

use std::ops::ControlFlow;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use catalog::{CatalogClient, CatalogError};

use crate::error::{OrchestratorError, OrchestratorResult};
use crate::orchestrator::{SearchDisposition, SearchOrchestrator};
use crate::presentation::intent::UserIntent;
use crate::presentation::render::{render_help, render_loading, render_view};

const PROMPT: &str = "> ";

/// Run until `/quit` or end of input
pub async fn run_console<C, R, W>(orchestrator: &SearchOrchestrator<C>, input: R, mut output: W) -> OrchestratorResult<()>
where
    C: CatalogClient + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let snapshot = orchestrator.snapshot().await;
    output.write_all(render_view(&snapshot).as_bytes()).await?;
    output.write_all(b"Type /help for commands.\n").await?;

    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if handle_intent(orchestrator, UserIntent::parse(&line), &mut output).await?.is_break() {
            break;
        }
    }

    output.flush().await?;
    Ok(())
}

/// Apply one intent and write whatever should be shown next
pub async fn handle_intent<C, W>(
    orchestrator: &SearchOrchestrator<C>,
    intent: UserIntent,
    output: &mut W,
) -> OrchestratorResult<ControlFlow<()>>
where
    C: CatalogClient + 'static,
    W: AsyncWrite + Unpin,
{
    let outcome = match intent {
        UserIntent::Quit => return Ok(ControlFlow::Break(())),
        UserIntent::Help => {
            output.write_all(render_help().as_bytes()).await?;
            return Ok(ControlFlow::Continue(()));
        }
        UserIntent::Invalid(line) => {
            output
                .write_all(format!("Unrecognized command: {line} (try /help)\n").as_bytes())
                .await?;
            return Ok(ControlFlow::Continue(()));
        }
        UserIntent::SubmitSearch(term) => {
            if !term.trim().is_empty() {
                output.write_all(render_loading(term.trim()).as_bytes()).await?;
                output.flush().await?;
            }
            match orchestrator.submit_search(&term).await {
                SearchDisposition::Ignored => return Ok(ControlFlow::Continue(())),
                _ => Ok(()),
            }
        }
        UserIntent::RerunRecent(position) => orchestrator.rerun_recent(position - 1).await.map(|_| ()),
        UserIntent::SelectCategory(category) => orchestrator.select_category(category.as_deref()).await,
        UserIntent::OpenRecipe(id) => orchestrator.open_recipe(&id).await.map(|_| ()),
        UserIntent::CloseDetail => {
            orchestrator.close_detail().await;
            Ok(())
        }
        UserIntent::ReturnHome => {
            orchestrator.return_home().await;
            Ok(())
        }
    };

    match outcome {
        Ok(()) => {
            let snapshot = orchestrator.snapshot().await;
            output.write_all(render_view(&snapshot).as_bytes()).await?;
        }
        Err(e) => {
            output.write_all(describe_failure(&e).as_bytes()).await?;
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// User-facing line for a failed intent
fn describe_failure(error: &OrchestratorError) -> String {
    match error {
        OrchestratorError::Catalog(CatalogError::NotFound { what }) => format!("Not found: {what}\n"),
        OrchestratorError::Catalog(_) => "The recipe catalog could not be reached. Try again later.\n".to_string(),
        other => format!("{other}\n"),
    }
}
