use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use project_version::analyzer::CheckOutcome;
use project_version::config::{self, ProviderKind};
use project_version::provider::RepoId;
use project_version::services;
use project_version::ui;

#[derive(Parser)]
#[command(
    name = "project-version",
    version,
    about = "Explicitly and strictly control a project version with semantic versioning"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the project version is increased properly
    Check(CheckArgs),
    /// Bump the patch component of the project version
    Bump(BumpArgs),
    /// Make a release based on a project version
    Release(ReleaseArgs),
}

#[derive(Args)]
struct CheckArgs {
    #[command(flatten)]
    common: CommonArgs,

    #[arg(long, help = "A branch to compare a project version with. Usually, a default branch")]
    base_branch: String,

    #[arg(
        long,
        help = "A branch to get its project version for comparison. Usually, a feature branch"
    )]
    head_branch: String,
}

#[derive(Args)]
struct BumpArgs {
    #[command(flatten)]
    common: CommonArgs,

    #[arg(long, help = "A branch to get a project version from. Usually, a default branch")]
    base_branch: String,

    #[arg(
        long,
        help = "A branch to push the bumped project version to. Usually, a feature branch"
    )]
    head_branch: String,
}

#[derive(Args)]
struct ReleaseArgs {
    #[command(flatten)]
    common: CommonArgs,

    #[arg(long, help = "A branch to make a release for")]
    branch: String,

    #[arg(long, help = "A project version to make a release with")]
    project_version: String,
}

#[derive(Args)]
struct CommonArgs {
    #[arg(long, value_enum, help = "A provider of hosting for software development")]
    provider: ProviderKind,

    #[arg(long, help = "The provider's organization name")]
    organization: String,

    #[arg(long, help = "The provider's repository name")]
    repository: String,

    #[arg(
        long,
        help = "The provider's API access token. Falls back to the ACCESS_TOKEN environment variable"
    )]
    access_token: Option<String>,
}

impl CommonArgs {
    /// Resolve the access token and construct the provider.
    ///
    /// Exits with code 1 on a missing token, before any network call.
    fn into_provider_and_repo(self) -> (Box<dyn project_version::provider::Provider>, RepoId) {
        let access_token = match config::resolve_access_token(self.access_token) {
            Ok(token) => token,
            Err(err) => {
                ui::display_error(&err.to_string());
                std::process::exit(1);
            }
        };

        let provider = config::build_provider(self.provider, access_token);
        let repo = RepoId::new(self.organization, self.repository);

        (provider, repo)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Bump(args) => run_bump(args),
        Commands::Release(args) => run_release(args),
    }
}

fn run_check(args: CheckArgs) -> Result<()> {
    let (provider, repo) = args.common.into_provider_and_repo();

    match services::check_project_version(
        provider.as_ref(),
        &repo,
        &args.base_branch,
        &args.head_branch,
    ) {
        Ok(CheckOutcome::Accepted) => Ok(()),
        Ok(CheckOutcome::Rejected(violation)) => {
            ui::display_rejection(&violation.to_string());
            std::process::exit(1);
        }
        Err(err) => {
            ui::display_error(&err.to_string());
            std::process::exit(1);
        }
    }
}

fn run_bump(args: BumpArgs) -> Result<()> {
    let (provider, repo) = args.common.into_provider_and_repo();

    match services::bump_project_version(
        provider.as_ref(),
        &repo,
        &args.base_branch,
        &args.head_branch,
    ) {
        Ok(next) => {
            ui::display_success(&format!("Bumped project version to {}", next));
            Ok(())
        }
        Err(err) => {
            ui::display_error(&err.to_string());
            std::process::exit(1);
        }
    }
}

fn run_release(args: ReleaseArgs) -> Result<()> {
    let (provider, repo) = args.common.into_provider_and_repo();

    match services::release_project_version(
        provider.as_ref(),
        &repo,
        &args.branch,
        &args.project_version,
    ) {
        Ok(descriptor) => {
            ui::display_success(&format!("Created release {}", descriptor.tag));
            Ok(())
        }
        Err(err) => {
            ui::display_error(&err.to_string());
            std::process::exit(1);
        }
    }
}
