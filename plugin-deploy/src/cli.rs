//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use plugin_config::{modules::DeploymentModule, networks::Network};

use crate::{
    commands::{check_parameters, codegen, deploy, show_deployments},
    constants::{
        DEFAULT_FRAMEWORK_BIN, DEFAULT_PROJECT_ROOT, FRAMEWORK_BIN_ENV_VAR, NETWORK_ENV_VAR,
        PROJECT_ROOT_ENV_VAR,
    },
    errors::ScriptError,
    types::ScriptContext,
};

/// Deploy and inspect the strategy-builder plugin contracts
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The network to target, as named in the Hardhat config
    #[arg(short, long, env = NETWORK_ENV_VAR, value_enum)]
    pub network: Network,

    /// Root of the Hardhat project
    #[arg(long, env = PROJECT_ROOT_ENV_VAR, default_value = DEFAULT_PROJECT_ROOT)]
    pub project_root: PathBuf,

    /// Program used to launch Hardhat
    #[arg(long, env = FRAMEWORK_BIN_ENV_VAR, default_value = DEFAULT_FRAMEWORK_BIN)]
    pub framework_bin: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Split the CLI into the shared context and the command to run
    pub fn into_parts(self) -> (ScriptContext, Command) {
        let Cli {
            network,
            project_root,
            framework_bin,
            command,
        } = self;

        let ctx = ScriptContext {
            network,
            project_root,
            framework_bin,
        };
        (ctx, command)
    }
}

/// The deploy script commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy an Ignition module to the network
    Deploy(DeployArgs),
    /// Validate the network's parameter file against a module without deploying
    CheckParameters(CheckParametersArgs),
    /// Print the plugin contracts deployed on the network
    ShowDeployments,
    /// Generate the Ignition module sources
    Codegen(CodegenArgs),
}

impl Command {
    /// Run the command against the given context
    pub async fn run(self, ctx: &ScriptContext) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, ctx).await,
            Command::CheckParameters(args) => check_parameters(args, ctx),
            Command::ShowDeployments => show_deployments(ctx),
            Command::Codegen(args) => codegen(args, ctx),
        }
    }
}

/// Deploy a module through Hardhat Ignition.
///
/// The parameter file is resolved from the network name and validated
/// before the framework is launched.
#[derive(Args)]
pub struct DeployArgs {
    /// The module to deploy
    #[arg(short, long, value_enum)]
    pub module: DeploymentModule,
}

/// Validate a parameter file
#[derive(Args)]
pub struct CheckParametersArgs {
    /// The module whose parameters to check
    #[arg(short, long, value_enum)]
    pub module: DeploymentModule,
}

/// Render every module descriptor to an Ignition module source
#[derive(Args)]
pub struct CodegenArgs {
    /// Directory to write the sources to,
    /// defaults to the project's Ignition modules directory
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Fail if the sources on disk differ from the descriptors,
    /// instead of writing them
    #[arg(long)]
    pub check: bool,
}
