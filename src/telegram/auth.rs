use crate::credentials;
use crate::error::{Result, TgrabError};
use crate::models::ApiCredentials;
use crate::telegram::client::{connect, remove_session, save_session};
use crate::ui::output::verbose_log;
use crate::ui::prompt;
use colored::*;
use grammers_client::{Client, SignInError};

/// Resolve credentials for `session` and sign it in, prompting for whatever
/// is missing. Stored credentials and the session file are dropped on a hard
/// sign-in failure so the next attempt starts clean.
pub async fn authorize(session: &str, new_login: bool, verbose: bool) -> Result<Client> {
    if new_login {
        remove_session(session)?;
    }

    loop {
        let stored = if new_login {
            None
        } else {
            credentials::load(session)
        };
        let had_stored = stored.is_some();
        if verbose {
            if had_stored {
                verbose_log(&format!("using stored credentials for '{}'", session));
            } else {
                verbose_log(&format!("no stored credentials for '{}'", session));
            }
        }

        let creds = match stored {
            Some(creds) => creds,
            None => prompt_credentials()?,
        };

        let client = connect(session, &creds).await?;

        if client.is_authorized().await? {
            if !had_stored {
                credentials::save(session, &creds)
                    .map_err(|e| TgrabError::Credentials(e.to_string()))?;
            }
            return Ok(client);
        }

        match login(&client).await {
            Ok(()) => {
                save_session(&client, session)?;
                if !had_stored {
                    credentials::save(session, &creds)
                        .map_err(|e| TgrabError::Credentials(e.to_string()))?;
                }
                return Ok(client);
            }
            Err(e) => {
                eprintln!("{} {}", "Sign-in failed:".red(), e);
                let _ = credentials::delete(session);
                let _ = remove_session(session);
                if !prompt::confirm("Try again? [y/N]: ")? {
                    return Err(TgrabError::Auth("sign-in aborted".to_string()));
                }
            }
        }
    }
}

/// The interactive login flow: phone, login code, and the two-factor
/// password when the account has one.
async fn login(client: &Client) -> Result<()> {
    let phone = prompt::prompt_nonempty("Enter your phone number (international format): ")?;
    let token = client
        .request_login_code(&phone)
        .await
        .map_err(|e| TgrabError::Auth(e.to_string()))?;

    loop {
        let code = prompt::prompt_nonempty("Enter the login code you received: ")?;
        match client.sign_in(&token, &code).await {
            Ok(_) => return Ok(()),
            Err(SignInError::InvalidCode) => {
                println!("{}", "Invalid code, try again.".yellow());
            }
            Err(SignInError::PasswordRequired(password_token)) => {
                let password = prompt::prompt_password("Two-factor password: ")?;
                return match client.check_password(password_token, password.trim()).await {
                    Ok(_) => Ok(()),
                    Err(e) => Err(TgrabError::Auth(e.to_string())),
                };
            }
            Err(e) => return Err(TgrabError::Auth(e.to_string())),
        }
    }
}

fn prompt_credentials() -> Result<ApiCredentials> {
    let api_id = prompt::prompt_api_id("Enter your API ID: ")?;
    let api_hash = prompt::prompt_nonempty("Enter your API hash: ")?;
    Ok(ApiCredentials { api_id, api_hash })
}
