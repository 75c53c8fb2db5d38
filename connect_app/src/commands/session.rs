//! Login / logout: persists the identity and bearer token the screens and
//! the HTTP client read. Obtaining a token is the backend's auth flow, not
//! handled here.

use connect_api::session::Session;

use crate::config::Config;

pub fn login(config: &Config, username: String, token: String) -> anyhow::Result<()> {
    let session = Session {
        username: Some(username.clone()),
        token: Some(token),
    };
    session.save(&config.session_path())?;

    println!("Logged in as {username}.");
    Ok(())
}

pub fn logout(config: &Config) -> anyhow::Result<()> {
    Session::default().save(&config.session_path())?;
    println!("Logged out.");
    Ok(())
}
