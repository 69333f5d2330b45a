use action_list::{
    Action, ActionsContext, FieldArray,
    action_manager::{
        command::{commands_from_json_str, replay},
        summary::ActionListSummary,
    },
    actions::action_list::invariant_holds,
    types::config_wrapper::ConfigWrapper,
};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use eyre::{Result, eyre};
use log::info;
use serde_json::json;
use std::{env, fs};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV_VAR: &str = "ACTION_LIST_CONFIG";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config (falls back to $ACTION_LIST_CONFIG, then action_list.toml)
    #[arg(long = "config", short = 'c', global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON script of add/remove/duplicate/select commands
    Replay {
        /// Path to the command script JSON file
        #[arg(long = "script", short = 's')]
        script_path: String,
    },
    /// Check a JSON array of actions for a settled multisig settings action
    Check {
        /// Path to the actions JSON file
        #[arg(long = "actions", short = 'a')]
        actions_path: String,
    },
}

fn setup_logging(config: &ConfigWrapper) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_filter()?)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| eyre!("Failed to install logger: {}", e))
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let config_path = cli
        .config_path
        .clone()
        .or_else(|| env::var(CONFIG_ENV_VAR).ok());
    let config = ConfigWrapper::from_file(config_path.as_deref())?;
    setup_logging(&config)?;

    match &cli.command {
        Commands::Replay { script_path } => {
            let script = fs::read_to_string(script_path)?;
            let commands = commands_from_json_str(&script)?;

            let mut ctx = ActionsContext::new(FieldArray::new(config.form_field_name()));
            let applied = replay(&mut ctx, commands);
            info!("Replayed {} command(s) from {}", applied, script_path);

            let summary = ActionListSummary::from_context(&ctx);
            println!("{}", serde_json::to_string_pretty(&summary)?);
            if !summary.invariant_holds {
                return Err(eyre!("Replay left the action list unsettled"));
            }
        }
        Commands::Check { actions_path } => {
            let content = fs::read_to_string(actions_path)?;
            let actions: Vec<Action> = serde_json::from_str(&content)?;

            let membership_changes = actions
                .iter()
                .filter(|a| a.updates_multisig_voting())
                .count();
            let settings_actions = actions.iter().filter(|a| a.is_multisig_settings()).count();
            let settled = invariant_holds(&actions);
            let report = json!({
                "actions": actions.len(),
                "membership_changes": membership_changes,
                "settings_actions": settings_actions,
                "invariant_holds": settled,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !settled {
                return Err(eyre!(
                    "{}: expected {} settings action(s), found {}",
                    actions_path,
                    if membership_changes > 0 { 1 } else { 0 },
                    settings_actions
                ));
            }
        }
    }

    Ok(())
}
