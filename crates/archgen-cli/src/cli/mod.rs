//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use archgen_core::domain::LayerKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "archgen",
    bin_name = "archgen",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{26a1} Layered-architecture boilerplate generator",
    long_about = "Archgen creates module directories and generates service \
                  and DTO boilerplate under src/modules, following fixed \
                  per-layer naming and placement conventions.",
    after_help = "EXAMPLES:\n\
        \x20 archgen module billing\n\
        \x20 archgen service --name invoice --layer application --module billing --dtos\n\
        \x20 archgen service              # fully interactive\n\
        \x20 archgen completions bash > /usr/share/bash-completion/completions/archgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a module directory.
    #[command(
        visible_alias = "m",
        about = "Create a module under the modules root",
        after_help = "EXAMPLES:\n\
            \x20 archgen module billing\n\
            \x20 archgen module inventory --root backend/src/modules"
    )]
    Module(ModuleArgs),

    /// Generate a service (and optionally its DTO pair).
    #[command(
        visible_alias = "s",
        about = "Generate a service",
        after_help = "EXAMPLES:\n\
            \x20 archgen service\n\
            \x20 archgen service --name invoice --layer application --module billing --dtos\n\
            \x20 archgen service --name mailer --layer shared --no-dtos"
    )]
    Service(ServiceArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 archgen completions bash > ~/.local/share/bash-completion/completions/archgen\n\
            \x20 archgen completions zsh  > ~/.zfunc/_archgen\n\
            \x20 archgen completions fish > ~/.config/fish/completions/archgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── module ────────────────────────────────────────────────────────────────────

/// Arguments for `archgen module`.
#[derive(Debug, Args)]
pub struct ModuleArgs {
    /// Module name (lower snake case).
    #[arg(value_name = "NAME", help = "Module name")]
    pub name: String,
}

// ── service ───────────────────────────────────────────────────────────────────

/// Arguments for `archgen service`.
///
/// Every input can be given as a flag; anything missing is gathered
/// interactively. The generation engine itself only ever sees the
/// resulting `ServiceConfig`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Service name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Service name")]
    pub name: Option<String>,

    /// Architectural layer.
    #[arg(
        short = 'l',
        long = "layer",
        value_name = "LAYER",
        value_enum,
        help = "Architectural layer"
    )]
    pub layer: Option<Layer>,

    /// Target module (ignored for the shared layer).
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Target module"
    )]
    pub module: Option<String>,

    /// Generate the request/response DTO pair.
    #[arg(long = "dtos", help = "Generate the DTO pair")]
    pub dtos: bool,

    /// Skip DTO generation.
    #[arg(long = "no-dtos", conflicts_with = "dtos", help = "Skip the DTO pair")]
    pub no_dtos: bool,
}

impl ServiceArgs {
    /// Tri-state DTO choice: `None` means "not specified, ask".
    pub fn dto_choice(&self) -> Option<bool> {
        match (self.dtos, self.no_dtos) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `archgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Architectural layers, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Layer {
    Domain,
    Application,
    /// Also accepted as `infrastructure`.
    #[value(alias = "infrastructure")]
    Infra,
    Shared,
}

impl From<Layer> for LayerKind {
    fn from(layer: Layer) -> Self {
        match layer {
            Layer::Domain => LayerKind::Domain,
            Layer::Application => LayerKind::Application,
            Layer::Infra => LayerKind::Infra,
            Layer::Shared => LayerKind::Shared,
        }
    }
}

impl std::fmt::Display for Layer {
    // Delegates to the core identifier so menus, logs, and paths always
    // agree on spelling.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        LayerKind::from(*self).fmt(f)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn layer_display_matches_core() {
        assert_eq!(Layer::Domain.to_string(), "domain");
        assert_eq!(Layer::Application.to_string(), "application");
        assert_eq!(Layer::Infra.to_string(), "infra");
        assert_eq!(Layer::Shared.to_string(), "shared");
    }

    #[test]
    fn parse_service_command_with_flags() {
        let cli = Cli::parse_from([
            "archgen", "service", "--name", "invoice", "--layer", "application", "--module",
            "billing", "--dtos",
        ]);
        match cli.command {
            Commands::Service(args) => {
                assert_eq!(args.name.as_deref(), Some("invoice"));
                assert_eq!(args.layer, Some(Layer::Application));
                assert_eq!(args.module.as_deref(), Some("billing"));
                assert_eq!(args.dto_choice(), Some(true));
            }
            other => panic!("expected Service command, got {other:?}"),
        }
    }

    #[test]
    fn parse_module_alias() {
        let cli = Cli::parse_from(["archgen", "m", "billing"]);
        assert!(matches!(cli.command, Commands::Module(_)));
    }

    #[test]
    fn infrastructure_alias_maps_to_infra() {
        let cli = Cli::parse_from(["archgen", "s", "-l", "infrastructure"]);
        if let Commands::Service(args) = cli.command {
            assert_eq!(args.layer, Some(Layer::Infra));
        } else {
            panic!("expected Service command");
        }
    }

    #[test]
    fn dto_flags_are_tristate() {
        let none = Cli::parse_from(["archgen", "s"]);
        let yes = Cli::parse_from(["archgen", "s", "--dtos"]);
        let no = Cli::parse_from(["archgen", "s", "--no-dtos"]);
        for (cli, expected) in [(none, None), (yes, Some(true)), (no, Some(false))] {
            if let Commands::Service(args) = cli.command {
                assert_eq!(args.dto_choice(), expected);
            } else {
                panic!("expected Service command");
            }
        }
    }

    #[test]
    fn dtos_and_no_dtos_conflict() {
        let result = Cli::try_parse_from(["archgen", "s", "--dtos", "--no-dtos"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["archgen", "--quiet", "--verbose", "module", "x"]);
        assert!(result.is_err());
    }
}
