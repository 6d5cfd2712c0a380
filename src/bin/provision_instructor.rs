//! Interactive instructor provisioning.
//!
//! Same three steps as the auto variant (register, log in, promote to the
//! instructor role with an optional elevated-token fallback), but every
//! account detail is prompted on stdin.

use std::io::Write;
use std::sync::Arc;

use elearn_core::client::ApiClient;
use elearn_core::config::{ApiConfig, DEFAULT_GROUP_CODE};
use elearn_core::error::Result;
use elearn_core::model::{LoginRequest, RegisterRequest, User};
use elearn_core::session::{MemorySession, SessionStore};
use elearn_core::store::AuthState;
use tracing_subscriber::EnvFilter;

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_with_default(label: &str, default: &str) -> Result<String> {
    let value = prompt(&format!("{label} [{default}]"))?;
    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

async fn run() -> Result<()> {
    println!("Instructor account provisioning");
    println!("===============================");

    let register = RegisterRequest {
        account_id: prompt("Account id")?,
        password: prompt("Password")?,
        display_name: prompt("Full name")?,
        email: prompt("Email")?,
        phone: prompt_with_default("Phone", "0123456789")?,
        group_code: prompt_with_default("Group code", DEFAULT_GROUP_CODE)?,
    };
    let admin_token = prompt("Admin token (blank to skip)")?;

    let session = Arc::new(MemorySession::new());
    let api = ApiClient::new(ApiConfig::from_env(), session.clone())?;
    let mut auth = AuthState::new(session.as_ref());

    println!("\nStep 1: registering account {}", register.account_id);
    api.auth().register(&register).await?;
    println!("Registered.");

    println!("Step 2: logging in as {}", register.account_id);
    auth.login(
        &api,
        &LoginRequest {
            account_id: Some(register.account_id.clone()),
            email: None,
            password: Some(register.password.clone()),
        },
    )
    .await?;
    println!("Logged in.");

    println!("Step 3: promoting {} to instructor", register.account_id);
    let update = User {
        account_id: register.account_id.clone(),
        display_name: register.display_name.clone(),
        email: register.email.clone(),
        phone: Some(register.phone.clone()),
        user_type_code: Some("GV".to_string()),
        group_code: Some(register.group_code.clone()),
        password: Some(register.password.clone()),
    };

    match api.user().update(&update).await {
        Ok(_) => {}
        Err(e) if !admin_token.is_empty() => {
            println!("Self-token update rejected ({e}), retrying with the admin token");
            session.set_token(&admin_token);
            api.user().update(&update).await?;
        }
        Err(e) => {
            eprintln!("Self-token update rejected: {e}");
            eprintln!("The account exists but keeps the default role.");
            return Err(e);
        }
    }

    println!("\nDone. Instructor account ready:");
    println!("  account:  {}", register.account_id);
    println!("  name:     {}", register.display_name);
    println!("  email:    {}", register.email);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Provisioning failed: {e}");
        std::process::exit(1);
    }
}
