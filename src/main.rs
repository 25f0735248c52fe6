use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use viewbind::app::{AppAction, AppReducer, AppState};
use viewbind::binding::{Connected, Connection, Container};
use viewbind::chat::ConversationList;
use viewbind::config::Config;
use viewbind::devices::{DeviceList, DevicesOwnProps, RouteState};
use viewbind::logging::init_tracing;
use viewbind::store::{SharedDispatch, Store};

#[derive(Parser, Debug)]
#[command(name = "viewbind", version, about = "Render container props from a state snapshot")]
struct Cli {
    /// Config file (default: ~/.config/viewbind/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the conversation list props
    Conversations {
        /// JSON state snapshot
        #[arg(long)]
        state: PathBuf,
    },
    /// Print the device list props
    Devices {
        /// JSON state snapshot
        #[arg(long)]
        state: PathBuf,
        /// Route state: show revoked devices
        #[arg(long)]
        show_revoked: bool,
    },
}

type AppStore = Store<AppReducer>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_required(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging.filter);

    let equality = config.selectors.equality;
    let output = match cli.command {
        Command::Conversations { state } => {
            let store = open_store(&state, &config)?;
            let props = mount(&store, ConversationList::new(equality), ())?;
            serde_json::to_string_pretty(&props)?
        }
        Command::Devices {
            state,
            show_revoked,
        } => {
            let store = open_store(&state, &config)?;
            let own = DevicesOwnProps::new(
                RouteState {
                    showing_revoked: show_revoked,
                },
                |_: RouteState| {},
            );
            let props = mount(&store, DeviceList::new(equality), own)??;
            serde_json::to_string_pretty(&props)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn open_store(path: &Path, config: &Config) -> anyhow::Result<Arc<AppStore>> {
    let snapshot = AppState::load_snapshot(path)?;
    Ok(Arc::new(AppStore::with_state(
        snapshot,
        config.store.action_log_capacity,
    )))
}

/// Connect the container to the store and return the props it settled on.
fn mount<C>(store: &Arc<AppStore>, container: C, own: C::OwnProps) -> anyhow::Result<C::Props>
where
    C: Container<State = AppState, Action = AppAction> + Send + 'static,
    C::OwnProps: Send + Sync + 'static,
    C::Props: Send,
{
    let dispatch: SharedDispatch<AppAction> = store.clone();
    let connected = Connected::new(container, dispatch);
    let connection = Connection::open(store.as_ref(), connected, own, |_| {
        tracing::debug!("Props changed");
    });

    for entry in store.action_log() {
        tracing::debug!(action = entry.action, version = entry.version, "Mount dispatched");
    }

    let props = connection.props().context("Container rendered no props")?;
    connection.close(store.as_ref());
    Ok(props)
}
