use clap::Parser;
use prepkg::commands;
use prepkg::platform::DefaultPlatformDetector;
use prepkg::runtime::RealRuntime;
use std::path::PathBuf;

/// prepkg - packaging chores for the native binding package
///
/// Runs the small maintenance steps the publish pipeline needs before the
/// binding package is archived: syncing the canonical VERSION file into
/// package.json, and trimming the generated loader down to the current
/// platform.
///
/// Examples:
///   prepkg patch-versions     # sync VERSION into package.json
///   prepkg strip-platforms    # report the platform the loader targets
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Binding package directory (defaults to the working directory; also via PREPKG_DIR)
    #[arg(
        long = "package-dir",
        short = 'C',
        env = "PREPKG_DIR",
        value_name = "PATH",
        global = true
    )]
    pub package_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Sync the version from the repository VERSION file into package.json
    PatchVersions,

    /// Strip the generated loader down to the current platform
    StripPlatforms,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let (label, result) = match cli.command {
        Commands::PatchVersions => (
            "Error patching versions",
            commands::patch_versions(&runtime, cli.package_dir),
        ),
        Commands::StripPlatforms => (
            "Error stripping platforms",
            commands::strip_platforms(&runtime, &DefaultPlatformDetector, cli.package_dir),
        ),
    };

    if let Err(e) = result {
        eprintln!("{label}: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_patch_versions_parsing() {
        let cli = Cli::try_parse_from(&["prepkg", "patch-versions"]).unwrap();
        assert!(matches!(cli.command, Commands::PatchVersions));
        assert_eq!(cli.package_dir, None);
    }

    #[test]
    fn test_cli_strip_platforms_parsing() {
        let cli = Cli::try_parse_from(&["prepkg", "strip-platforms"]).unwrap();
        assert!(matches!(cli.command, Commands::StripPlatforms));
        assert_eq!(cli.package_dir, None);
    }

    #[test]
    fn test_cli_package_dir_parsing() {
        let cli = Cli::try_parse_from(&["prepkg", "patch-versions", "-C", "/tmp/bindings/node"])
            .unwrap();
        assert_eq!(cli.package_dir, Some(PathBuf::from("/tmp/bindings/node")));
    }

    #[test]
    fn test_cli_global_package_dir_parsing() {
        let cli =
            Cli::try_parse_from(&["prepkg", "--package-dir", "/tmp", "strip-platforms"]).unwrap();
        assert_eq!(cli.package_dir, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(&["prepkg"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_unknown_subcommand_fails() {
        let result = Cli::try_parse_from(&["prepkg", "publish"]);
        assert!(result.is_err());
    }
}
