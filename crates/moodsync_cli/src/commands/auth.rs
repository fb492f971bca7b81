//! login / register / logout against the credential service.

use console::Term;
use moodsync_auth::{AuthClient, TokenStore};

use crate::output;

fn prompt(term: &Term, label: &str) -> anyhow::Result<String> {
    term.write_str(&format!("{label}: "))?;
    Ok(term.read_line()?.trim().to_string())
}

fn prompt_password(term: &Term) -> anyhow::Result<String> {
    term.write_str("Password: ")?;
    Ok(term.read_secure_line()?)
}

pub async fn login(email: Option<String>) -> anyhow::Result<()> {
    let term = Term::stderr();
    let email = match email {
        Some(email) => email,
        None => prompt(&term, "Email")?,
    };
    let password = prompt_password(&term)?;

    let client = AuthClient::from_env();
    let store = TokenStore::new()?;
    let pb = output::spinner("Signing in...");
    let result = client.login(email, password).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => {
            store.save(&response.token)?;
            output::success("Login successful!");
            if let Some(user) = response.user {
                output::header(&format!("Welcome back, {}", user.username));
            }
            Ok(())
        }
        Err(error) => {
            output::error(&error.to_string());
            std::process::exit(1);
        }
    }
}

pub async fn register(username: Option<String>, email: Option<String>) -> anyhow::Result<()> {
    let term = Term::stderr();
    let username = match username {
        Some(username) => username,
        None => prompt(&term, "Username")?,
    };
    let email = match email {
        Some(email) => email,
        None => prompt(&term, "Email")?,
    };
    let password = prompt_password(&term)?;

    let client = AuthClient::from_env();
    let store = TokenStore::new()?;
    let pb = output::spinner("Registering...");
    let result = client
        .register_and_login(username, email, password, &store)
        .await;
    pb.finish_and_clear();

    match result {
        Ok(_) => {
            output::success("User registered successfully");
            output::header("You are now logged in — run `moodsync tui` to start");
            Ok(())
        }
        Err(error) => {
            output::error(&error.to_string());
            std::process::exit(1);
        }
    }
}

pub fn logout() -> anyhow::Result<()> {
    let store = TokenStore::new()?;
    store.clear()?;
    output::success("Logged out");
    Ok(())
}
