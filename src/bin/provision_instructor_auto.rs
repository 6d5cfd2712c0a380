//! Non-interactive instructor provisioning.
//!
//! Registers an account, logs in with it, then tries to promote it to the
//! instructor role. The self-obtained token usually lacks the privilege, so
//! an elevated token can be supplied with `--admin-token=` as the fallback
//! credential. Exits 0 only when every step succeeded.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use elearn_core::client::ApiClient;
use elearn_core::config::{ApiConfig, DEFAULT_GROUP_CODE};
use elearn_core::error::Result;
use elearn_core::model::{LoginRequest, RegisterRequest, User};
use elearn_core::session::{MemorySession, SessionStore};
use elearn_core::store::AuthState;
use tracing_subscriber::EnvFilter;

struct Args {
    register: RegisterRequest,
    admin_token: Option<String>,
}

fn parse_args() -> Args {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let mut register = RegisterRequest {
        account_id: format!("gv_{timestamp}"),
        password: "GV@123".to_string(),
        display_name: format!("Instructor {timestamp}"),
        phone: "0123456789".to_string(),
        group_code: DEFAULT_GROUP_CODE.to_string(),
        email: format!("gv_{timestamp}@example.com"),
    };
    let mut admin_token = None;

    for arg in std::env::args().skip(1) {
        if let Some(v) = arg.strip_prefix("--user=") {
            register.account_id = v.to_string();
        } else if let Some(v) = arg.strip_prefix("--pass=") {
            register.password = v.to_string();
        } else if let Some(v) = arg.strip_prefix("--name=") {
            register.display_name = v.to_string();
        } else if let Some(v) = arg.strip_prefix("--email=") {
            register.email = v.to_string();
        } else if let Some(v) = arg.strip_prefix("--phone=") {
            register.phone = v.to_string();
        } else if let Some(v) = arg.strip_prefix("--admin-token=") {
            admin_token = Some(v.to_string());
        }
    }

    Args {
        register,
        admin_token,
    }
}

async fn run(args: &Args) -> Result<()> {
    let session = Arc::new(MemorySession::new());
    let api = ApiClient::new(ApiConfig::from_env(), session.clone())?;
    let mut auth = AuthState::new(session.as_ref());

    println!("Step 1: registering account {}", args.register.account_id);
    api.auth().register(&args.register).await?;
    println!("Registered.");

    println!("Step 2: logging in as {}", args.register.account_id);
    auth.login(
        &api,
        &LoginRequest {
            account_id: Some(args.register.account_id.clone()),
            email: None,
            password: Some(args.register.password.clone()),
        },
    )
    .await?;
    println!("Logged in.");

    println!("Step 3: promoting {} to instructor", args.register.account_id);
    let update = User {
        account_id: args.register.account_id.clone(),
        display_name: args.register.display_name.clone(),
        email: args.register.email.clone(),
        phone: Some(args.register.phone.clone()),
        user_type_code: Some("GV".to_string()),
        group_code: Some(args.register.group_code.clone()),
        password: Some(args.register.password.clone()),
    };

    match api.user().update(&update).await {
        Ok(_) => {}
        Err(e) => {
            let Some(admin_token) = &args.admin_token else {
                eprintln!("Self-token update rejected: {e}");
                eprintln!("Re-run with --admin-token=YOUR_ADMIN_TOKEN to promote the account.");
                return Err(e);
            };
            println!("Self-token update rejected ({e}), retrying with the admin token");
            session.set_token(admin_token);
            api.user().update(&update).await?;
        }
    }

    println!("Done. Instructor account ready:");
    println!("  account:  {}", args.register.account_id);
    println!("  password: {}", args.register.password);
    println!("  name:     {}", args.register.display_name);
    println!("  email:    {}", args.register.email);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args();
    if let Err(e) = run(&args).await {
        eprintln!("Provisioning failed: {e}");
        std::process::exit(1);
    }
}
