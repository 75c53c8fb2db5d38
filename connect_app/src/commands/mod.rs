mod avatar;
mod directory;
mod profile;
mod search;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use connect_api::http::HttpConnectApi;
use connect_api::session::{FileSession, SessionStore};

use crate::config::Config;
use crate::notify::TerminalNotifier;

#[derive(clap::Subcommand)]
pub enum Command {
    /// List all users with their follow state.
    Users,

    /// Follow a user by id.
    Follow { user_id: String },

    /// Unfollow a user by id.
    Unfollow { user_id: String },

    /// Show or edit the logged-in user's profile.
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Search users by tag.
    Search { tag: String },

    /// Manage the stored session.
    #[command(subcommand)]
    Session(SessionCommand),

    /// Manage local avatar overrides.
    #[command(subcommand)]
    Avatar(AvatarCommand),
}

#[derive(clap::Subcommand)]
pub enum ProfileCommand {
    /// Show the profile.
    Show,

    /// Update bio and tags.
    Edit {
        #[arg(long)]
        bio: Option<String>,

        /// Comma-separated tag list.
        #[arg(long)]
        tags: Option<String>,
    },

    /// Upload a profile picture.
    Upload { file: PathBuf },
}

#[derive(clap::Subcommand)]
pub enum SessionCommand {
    /// Persist the identity and bearer token used for API requests.
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        token: String,
    },

    /// Clear the stored session.
    Logout,
}

#[derive(clap::Subcommand)]
pub enum AvatarCommand {
    /// Store a local avatar override for a username.
    Set { username: String, image: String },

    /// Remove a local avatar override.
    Clear { username: String },
}

pub async fn run(config: Config, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Users => directory::users(&config).await,
        Command::Follow { user_id } => directory::follow(&config, &user_id).await,
        Command::Unfollow { user_id } => directory::unfollow(&config, &user_id).await,
        Command::Profile(ProfileCommand::Show) => profile::show(&config).await,
        Command::Profile(ProfileCommand::Edit { bio, tags }) => {
            profile::edit(&config, bio, tags).await
        }
        Command::Profile(ProfileCommand::Upload { file }) => profile::upload(&config, &file).await,
        Command::Search { tag } => search::search(&config, &tag).await,
        Command::Session(SessionCommand::Login { username, token }) => {
            session::login(&config, username, token)
        }
        Command::Session(SessionCommand::Logout) => session::logout(&config),
        Command::Avatar(AvatarCommand::Set { username, image }) => {
            avatar::set(&config, username, image)
        }
        Command::Avatar(AvatarCommand::Clear { username }) => avatar::clear(&config, &username),
    }
}

/// Session shared between the HTTP client (for the bearer token) and the
/// screens (for the identity).
fn load_session(config: &Config) -> anyhow::Result<Arc<FileSession>> {
    Ok(Arc::new(FileSession::load(&config.session_path())?))
}

fn http_api(config: &Config, session: &Arc<FileSession>) -> HttpConnectApi {
    let session: Arc<FileSession> = Arc::clone(session);
    let session: Arc<dyn SessionStore> = session;
    HttpConnectApi::new(config.api_base_url.clone(), session)
}

fn notifier() -> TerminalNotifier {
    TerminalNotifier
}
