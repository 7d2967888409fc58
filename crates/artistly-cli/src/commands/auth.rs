use anyhow::Result;
use artistly_core::identity::{IdentityProvider, MockIdentityProvider, SignIn, SignUp};
use artistly_core::model::{Role, User};
use artistly_core::session::SessionContext;

use super::{open_store, report};
use crate::config::Config;

const MOCK_NOTICE: &str =
    "Note: accounts are kept in a local file by a mock identity provider; not for production use.";

#[derive(Debug)]
pub struct SignUpArgs {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
}

#[derive(Debug)]
pub struct SignInArgs {
    pub email: String,
    pub password: String,
}

fn welcome(user: &User) {
    println!("✓ Signed in as {} <{}> ({})", user.name, user.email, user.role.title());
    println!("  {}", user.role.description());
}

pub fn sign_up(config: &Config, args: SignUpArgs) -> Result<()> {
    let mut store = open_store(config)?;
    let request = SignUp {
        name: args.name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
        role: args.role,
    };

    let user = MockIdentityProvider::new(&mut store)
        .sign_up(&request)
        .map_err(report)?;
    SessionContext::new(&mut store).begin(&user)?;

    welcome(&user);
    for feature in user.role.features() {
        println!("    - {feature}");
    }
    println!("\n{MOCK_NOTICE}");
    Ok(())
}

pub fn sign_in(config: &Config, args: SignInArgs) -> Result<()> {
    let mut store = open_store(config)?;
    let request = SignIn {
        email: args.email,
        password: args.password,
    };

    let user = MockIdentityProvider::new(&mut store)
        .sign_in(&request)
        .map_err(report)?;
    SessionContext::new(&mut store).begin(&user)?;

    welcome(&user);
    Ok(())
}

pub fn sign_out(config: &Config) -> Result<()> {
    let mut session = SessionContext::new(open_store(config)?);
    if session.is_signed_in()? {
        session.end()?;
        println!("✓ Signed out");
    } else {
        println!("Not signed in");
    }
    Ok(())
}

pub fn who_am_i(config: &Config) -> Result<()> {
    let session = SessionContext::new(open_store(config)?);
    match session.current_user()? {
        Some(user) => {
            println!("[{}] {} <{}>", user.initials(), user.name, user.email);
            println!("Role: {}", user.role.title());
        }
        None => println!("Not signed in. Run `artistly signup` or `artistly signin` to get started."),
    }
    Ok(())
}

pub fn show_navigation(config: &Config) -> Result<()> {
    let session = SessionContext::new(open_store(config)?);
    for item in session.navigation()? {
        println!("  {:<16} {}", item.label, item.href);
    }
    Ok(())
}
