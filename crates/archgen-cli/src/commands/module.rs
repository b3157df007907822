//! Implementation of the `archgen module` command.

use tracing::{info, instrument};

use crate::{
    cli::{ModuleArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Create a module directory under the modules root.
///
/// Idempotent: asking for an existing module succeeds and leaves it
/// untouched, so this is safe to script.
#[instrument(skip_all, fields(module = %args.name))]
pub fn execute(
    args: ModuleArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = super::resolve_modules_root(&global, &config);
    let service = super::generation_service(root);

    let path = service.create_module(&args.name)?;
    info!(path = %path.display(), "module ready");

    output.success(&format!("Module ready at {}", path.display()))?;
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  archgen service --module {} --layer domain --name <service>",
            args.name.to_ascii_lowercase()
        ))?;
    }

    Ok(())
}
