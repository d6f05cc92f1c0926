use anyhow::Result;
use slang_term::application::cli;
use slang_term::application::ui;
use slang_term::destruct_terminal_for_panic;
use slang_term::domain::services::ActionsService;
use slang_term::Action;
use slang_term::Config;
use slang_term::DictionaryClientManager;
use slang_term::DictionaryName;
use slang_term::Event;
use tokio::sync::mpsc;
use tokio::task;

async fn run() -> Result<()> {
    let dictionary_client = DictionaryClientManager::get(DictionaryName::default())?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move {
        ActionsService::start(dictionary_client, event_tx, &mut action_rx).await
    });

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = ui::start(action_tx, event_rx) => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    return result;
}

#[tokio::main]
async fn main() {
    cli::parse();

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let guard = match cli::setup_tracing() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Logging disabled: {err}");
            None
        }
    };
    Config::load_defaults();

    if let Err(err) = run().await {
        tracing::error!(error = ?err, "terminal runtime failed");
        println!("Alas, there's been an error: {err}");
        drop(guard);
        std::process::exit(1);
    }
}
