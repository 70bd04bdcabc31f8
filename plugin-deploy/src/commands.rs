//! Implementations of the various deploy scripts

use plugin_config::registry::DeploymentRegistry;
use tracing::{info, warn};

use crate::{
    cli::{CheckParametersArgs, CodegenArgs, DeployArgs},
    errors::ScriptError,
    types::ScriptContext,
    utils::{
        ignition_deploy_command, load_module_parameters, run_command, stale_module_sources,
        write_module_sources,
    },
};

/// Validate the network's parameters for a module, then deploy it through Ignition
pub async fn deploy(args: DeployArgs, ctx: &ScriptContext) -> Result<(), ScriptError> {
    let module = args.module;
    let network = ctx.network;

    let parameters_path = ctx.parameters_path();
    info!("Using parameters from {}", parameters_path.display());
    let parameters = load_module_parameters(&parameters_path, module)?;
    for (param, address) in parameters.iter() {
        info!("\t{}: {}", param, address);
    }

    if !network.is_testnet() {
        warn!(
            "Deploying `{}` to {} (chain {}) - THIS IS A PRODUCTION NETWORK",
            module,
            network,
            network.chain_id()
        );
    }

    let module_path = ctx.modules_dir().join(module.source_file());
    let cmd = ignition_deploy_command(&ctx.framework_bin, &module_path, network, &parameters_path);
    info!("Deploying {} to {}", module, network);
    run_command(cmd).await?;

    info!("Deployed {} to {}", module, network);
    Ok(())
}

/// Validate the network's parameters for a module
pub fn check_parameters(args: CheckParametersArgs, ctx: &ScriptContext) -> Result<(), ScriptError> {
    let parameters_path = ctx.parameters_path();
    let parameters = load_module_parameters(&parameters_path, args.module)?;

    info!(
        "{} provides all {} parameters of {}",
        parameters_path.display(),
        parameters.len(),
        args.module
    );
    Ok(())
}

/// Print the plugin contract addresses deployed on the network
pub fn show_deployments(ctx: &ScriptContext) -> Result<(), ScriptError> {
    let registry = DeploymentRegistry::builtin()?;
    let deployment = registry.lookup(ctx.network)?;

    for (role, address) in deployment.iter() {
        println!("{}: {}", role, address);
    }
    Ok(())
}

/// Write, or check, the Ignition module sources rendered from the descriptors
pub fn codegen(args: CodegenArgs, ctx: &ScriptContext) -> Result<(), ScriptError> {
    let out_dir = args.out_dir.unwrap_or_else(|| ctx.modules_dir());

    if args.check {
        let stale = stale_module_sources(&out_dir)?;
        if !stale.is_empty() {
            return Err(ScriptError::StaleModuleSources(stale));
        }
        info!("Module sources in {} are up to date", out_dir.display());
        return Ok(());
    }

    for path in write_module_sources(&out_dir)? {
        info!("Wrote {}", path.display());
    }
    Ok(())
}
