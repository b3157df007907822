//! Implementation of the `archgen service` command.
//!
//! Responsibility: gather a complete `ServiceConfig` from flags and
//! prompts, run the generation pipeline, and display the report. Any
//! input missing from the command line is asked for interactively.

use tracing::{debug, info, instrument};

use archgen_core::{
    application::{GenerationReport, GenerationService, ModuleCatalog},
    domain::{LayerKind, SHARED_MODULE, ServiceConfig},
};

use crate::{
    cli::{ServiceArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `archgen service` command.
#[instrument(skip_all)]
pub fn execute(
    args: ServiceArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = super::resolve_modules_root(&global, &config);
    let service = super::generation_service(root);

    let request = gather_inputs(&args, &config, &service)?;
    debug!(
        service = %request.name(),
        module = %request.module(),
        layer = %request.layer(),
        dtos = request.create_dtos(),
        "inputs resolved"
    );

    output.header(&format!(
        "Generating {} service '{}'...",
        request.layer(),
        request.name()
    ))?;

    let report = service.generate(&request)?;
    info!(path = %report.service_path.display(), "generation completed");

    show_report(&request, &report, &output)?;
    Ok(())
}

/// Resolve the four inputs, prompting for whatever the flags left out.
fn gather_inputs(
    args: &ServiceArgs,
    config: &AppConfig,
    service: &GenerationService,
) -> CliResult<ServiceConfig> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt::ask_text("Service name")?,
    };

    let layer = match args.layer {
        Some(layer) => LayerKind::from(layer),
        None => {
            let items: Vec<String> = LayerKind::ALL.iter().map(|l| l.to_string()).collect();
            let index = prompt::ask_select("Layer", &items)?;
            LayerKind::ALL[index]
        }
    };

    // Shared services bypass module selection entirely; a `--module`
    // flag given alongside `--layer shared` is ignored as documented.
    let module = if layer.is_shared() {
        SHARED_MODULE.to_string()
    } else {
        resolve_module(args.module.as_deref(), service)?
    };

    let create_dtos = match args.dto_choice() {
        Some(choice) => choice,
        None => prompt::ask_confirm(
            "Generate the request/response DTO pair?",
            config.generator.create_dtos,
        )?,
    };

    ServiceConfig::new(&name, &module, layer, create_dtos)
        .map_err(|e| CliError::Core(e.into()))
}

/// Pick the target module, from the flag or from a catalog menu.
///
/// Either way the catalog is consulted first, so a missing or empty
/// modules root fails here with the core's own errors rather than deep
/// inside the pipeline.
fn resolve_module(flag: Option<&str>, service: &GenerationService) -> CliResult<String> {
    let modules = service.catalog().list()?;

    match flag {
        Some(module) => {
            let module = module.to_ascii_lowercase();
            if modules.iter().any(|m| m == &module) {
                Ok(module)
            } else {
                Err(CliError::ModuleNotFound {
                    module,
                    available: modules,
                })
            }
        }
        None => {
            let index = prompt::ask_select("Module", &modules)?;
            let module = ModuleCatalog::validate_selection(index, &modules)?;
            Ok(module.to_string())
        }
    }
}

/// Success summary: what was written where, and the names to use.
fn show_report(
    request: &ServiceConfig,
    report: &GenerationReport,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!(
        "Service '{}' created!",
        report.names.service_class
    ))?;
    output.print(&format!("  Service: {}", report.service_path.display()))?;
    if let Some(dto_dir) = &report.dto_dir {
        output.print(&format!("  DTOs:    {}", dto_dir.display()))?;
        output.print(&format!(
            "  Classes: {}, {}",
            report.names.request_dto, report.names.response_dto
        ))?;
    }
    if !report.names.base_class.is_empty() {
        output.print(&format!(
            "  Extends: {} ({} layer)",
            report.names.base_class,
            request.layer()
        ))?;
    }
    Ok(())
}
