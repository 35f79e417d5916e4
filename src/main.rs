use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_discovery::{
    config::Config,
    console::{parse_command, Command, ConsoleSurface, HELP},
    services::{
        Applied, Completion, MetadataProvider, Presenter, QueryOrchestrator, RenderSurface, Task,
        TmdbProvider, UiEvent,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not interleave with the listing output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let provider: Arc<dyn MetadataProvider> = Arc::new(
        TmdbProvider::from_config(&config).context("failed to build TMDB client")?,
    );
    info!(
        provider = provider.name(),
        api_url = %config.tmdb_api_url,
        "Starting movie discovery"
    );

    let mut orchestrator = QueryOrchestrator::new(provider, Presenter::from_config(&config));
    let mut surface = ConsoleSurface::new(std::io::stdout());
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<Completion>();

    surface.line(HELP);
    let tasks = orchestrator.prepare(UiEvent::Initialize, &mut surface);
    spawn_tasks(tasks, &orchestrator.provider(), &completion_tx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };

                match parse_command(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => surface.line(HELP),
                    Ok(Some(Command::ListGenres)) => surface.print_genres(),
                    Ok(Some(Command::Event(event))) => {
                        let tasks = orchestrator.prepare(event, &mut surface);
                        spawn_tasks(tasks, &orchestrator.provider(), &completion_tx);
                    }
                    Err(message) => surface.show_notice(&message),
                }
            }
            Some(completion) = completion_rx.recv() => {
                if let Applied::Reissued(task) = orchestrator.apply(completion, &mut surface) {
                    spawn_tasks(vec![task], &orchestrator.provider(), &completion_tx);
                }
            }
        }
    }

    info!("Exiting");
    Ok(())
}

/// Runs each task on its own tokio task; completions come back over the channel
fn spawn_tasks(
    tasks: Vec<Task>,
    provider: &Arc<dyn MetadataProvider>,
    completion_tx: &mpsc::UnboundedSender<Completion>,
) {
    for task in tasks {
        let provider = Arc::clone(provider);
        let completion_tx = completion_tx.clone();
        tokio::spawn(async move {
            let completion = task.run(provider.as_ref()).await;
            if completion_tx.send(completion).is_err() {
                tracing::debug!("Completion dropped after shutdown");
            }
        });
    }
}
