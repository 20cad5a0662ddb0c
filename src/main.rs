// src/main.rs
use clap::Parser;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod cli;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use cli::{Cli, Command};
use survey_client::cache::{CurrentAccountAdapter, FileStorage};
use survey_client::common::{safe_email_log, ClientConfig, RemoteCallError};
use survey_client::http::ReqwestHttpClient;
use survey_client::usecases::{
    AccountModel, AddAccount, AddAccountParams, Authentication, AuthenticationParams,
    LoadSurveyList, RemoteAddAccount, RemoteAuthentication, RemoteLoadSurveyList,
};
use survey_client::validation::forms::{
    EMAIL_FIELD, NAME_FIELD, PASSWORD_CONFIRMATION_FIELD, PASSWORD_FIELD,
};
use survey_client::validation::{login_validation, signup_validation, FormSnapshot, ValidationComposite};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = cli.apply(ClientConfig::from_env());
    info!(
        api_url = %config.api_url,
        store = %config.store_path.display(),
        "Configuration loaded"
    );

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let http_client = Arc::new(ReqwestHttpClient::from_config(&config)?);
    let account_cache = CurrentAccountAdapter::new(
        Arc::new(FileStorage::new(config.store_path.clone())),
        config.account_integrity,
    );

    // ========================================================================
    // COMMAND DISPATCH
    // ========================================================================

    match cli.command {
        Command::Login { email, password } => {
            let form = FormSnapshot::new()
                .with(EMAIL_FIELD, email.as_str())
                .with(PASSWORD_FIELD, password.as_str());
            ensure_form_valid(&login_validation(), &form)?;

            let authentication =
                RemoteAuthentication::new(config.make_api_url("/login"), http_client)
                    .with_integrity(config.account_integrity);
            let account = settle(
                authentication
                    .auth(AuthenticationParams { email, password })
                    .await,
            )?;
            store_account(&account_cache, &account)?;
            println!("Bem-vindo, {}!", display_name(&account));
        }
        Command::Signup {
            name,
            email,
            password,
            password_confirmation,
        } => {
            let form = FormSnapshot::new()
                .with(NAME_FIELD, name.as_str())
                .with(EMAIL_FIELD, email.as_str())
                .with(PASSWORD_FIELD, password.as_str())
                .with(PASSWORD_CONFIRMATION_FIELD, password_confirmation.as_str());
            ensure_form_valid(&signup_validation(), &form)?;

            info!(email = %safe_email_log(&email), "Submitting signup");
            let add_account = RemoteAddAccount::new(config.make_api_url("/signup"), http_client)
                .with_integrity(config.account_integrity);
            let account = settle(
                add_account
                    .add(AddAccountParams {
                        name,
                        email,
                        password,
                        password_confirmation,
                    })
                    .await,
            )?;
            store_account(&account_cache, &account)?;
            println!("Conta criada. Bem-vindo, {}!", display_name(&account));
        }
        Command::Surveys => {
            if account_cache.get_current_account()?.is_none() {
                warn!("No cached account, the API may deny access");
            }

            let load_survey_list =
                RemoteLoadSurveyList::new(config.make_api_url("/surveys"), http_client);
            let surveys = settle(load_survey_list.load_all().await)?;

            if surveys.is_empty() {
                println!("Nenhuma enquete encontrada.");
            }
            for survey in surveys {
                let marker = if survey.did_answer { "x" } else { " " };
                println!(
                    "[{}] {} ({})",
                    marker,
                    survey.question,
                    survey.date.format("%d/%m/%Y")
                );
                for answer in &survey.answers {
                    println!("      - {}", answer.answer);
                }
            }
        }
        Command::WhoAmI => match account_cache.get_current_account()? {
            Some(account) => println!("{}", display_name(&account)),
            None => println!("Nenhuma conta conectada."),
        },
        Command::Logout => {
            account_cache.clear_current_account()?;
            println!("Sessão encerrada.");
        }
    }

    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

/// Prints every failing field and stops before any request is sent
fn ensure_form_valid(composite: &ValidationComposite, form: &FormSnapshot) -> anyhow::Result<()> {
    let result = composite.validate_form(form);
    if result.is_valid {
        return Ok(());
    }
    for error in &result.errors {
        eprintln!("{}: {}", error.field, error.message);
    }
    anyhow::bail!("Formulário inválido")
}

/// Domain failures are shown as their message; network faults propagate
fn settle<T>(result: Result<T, RemoteCallError>) -> anyhow::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(RemoteCallError::Domain(error)) => {
            warn!(code = error.code(), "Request rejected");
            anyhow::bail!("{}", error)
        }
        Err(error @ RemoteCallError::Network(_)) => Err(error.into()),
    }
}

fn store_account(cache: &CurrentAccountAdapter, account: &AccountModel) -> anyhow::Result<()> {
    cache.set_current_account(Some(account))?;
    Ok(())
}

// Token-only accounts may come back without a name
fn display_name(account: &AccountModel) -> &str {
    if account.name.is_empty() {
        "(sem nome)"
    } else {
        &account.name
    }
}
