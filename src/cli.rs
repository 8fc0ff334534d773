// src/cli.rs
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use empleaworks::auth::models::{LoginRequest, RegisterRequest};
use empleaworks::common::Validator;
use empleaworks::offers::models::{ApplyRequest, OfferFilters, OfferInput};
use empleaworks::offers::validators::OfferValidator;
use empleaworks::profile::models::{PasswordUpdate, ProfileUpdate};
use empleaworks::profile::validators::PasswordValidator;
use empleaworks::verification::Guarded;
use empleaworks::{ApiError, AppContext};

#[derive(Parser)]
#[command(name = "empleaworks")]
#[command(about = "Command-line client for the EmpleaWorks job board")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the backend API
    #[arg(long, env = "EMPLEAWORKS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Session store location
    #[arg(long, env = "EMPLEAWORKS_STORE_URL", global = true)]
    pub store: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in with email and password
    Login { email: String, password: String },
    /// Create an account
    Register {
        name: String,
        email: String,
        password: String,
        #[arg(long)]
        role: Option<String>,
    },
    /// Log in with a Google ID token
    GoogleLogin { id_token: String },
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Delete the account and sign out
    DeleteAccount,
    #[command(subcommand)]
    Offers(OffersCommand),
    /// Apply to an offer
    Apply {
        offer_id: u64,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        /// Cover letter
        #[arg(long)]
        cover_letter: String,
        /// Accept the data processing terms
        #[arg(long)]
        consent: bool,
    },
    #[command(subcommand)]
    Saved(SavedCommand),
    /// Candidate dashboard
    Dashboard,
    /// Company dashboard
    CompanyDashboard,
    /// Whether you already applied to an offer
    Applied { offer_id: u64 },
    #[command(subcommand)]
    Profile(ProfileCommand),
    #[command(subcommand)]
    Password(PasswordCommand),
    #[command(subcommand)]
    Verify(VerifyCommand),
}

#[derive(Subcommand)]
pub enum OffersCommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        contract_type: Option<String>,
        #[arg(long)]
        job_location: Option<String>,
    },
    Show { id: u64 },
    Create(OfferArgs),
    Update {
        id: u64,
        #[command(flatten)]
        offer: OfferArgs,
    },
    Delete { id: u64 },
}

#[derive(Args)]
pub struct OfferArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub contract_type: String,
    #[arg(long)]
    pub job_location: String,
    #[arg(long)]
    pub degree: String,
    #[arg(long)]
    pub description: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub closing_date: String,
    #[arg(long)]
    pub email: String,
}

impl From<OfferArgs> for OfferInput {
    fn from(args: OfferArgs) -> Self {
        OfferInput {
            name: args.name,
            category: args.category,
            contract_type: args.contract_type,
            job_location: args.job_location,
            degree: args.degree,
            description: args.description,
            closing_date: args.closing_date,
            email: args.email,
        }
    }
}

#[derive(Subcommand)]
pub enum SavedCommand {
    List,
    /// Save or unsave an offer
    Toggle { offer_id: u64 },
    Status { offer_id: u64 },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Profile picture to upload
        #[arg(long)]
        image: Option<PathBuf>,
        /// CV to upload
        #[arg(long)]
        cv: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PasswordCommand {
    Show,
    Update {
        #[arg(long)]
        current: Option<String>,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirmation: String,
    },
}

#[derive(Subcommand)]
pub enum VerifyCommand {
    Status,
    /// Send the verification email again
    Resend,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_guarded<T: Serialize>(outcome: Guarded<T>) -> Result<()> {
    match outcome {
        Guarded::Completed(value) => print_json(&value),
        Guarded::NeedsVerification { action, message } => {
            println!("✉️  Verify your email before you can {}.", action.replace('_', " "));
            if let Some(message) = message {
                println!("   {}", message);
            }
            println!("   Run `empleaworks verify resend` to get a new link.");
            Ok(())
        }
    }
}

pub async fn handle_command(app: &AppContext, command: Command) -> Result<()> {
    let client = &app.client;

    match command {
        Command::Login { email, password } => {
            let user = app.auth.login(&LoginRequest { email, password }).await?;
            info!("✅ Logged in");
            print_json(&user)?;
        }

        Command::Register {
            name,
            email,
            password,
            role,
        } => {
            let request = RegisterRequest {
                name,
                email,
                password_confirmation: password.clone(),
                password,
                role,
            };
            let user = app.auth.register(&request).await?;
            info!("✅ Account created, check your inbox to verify your email");
            print_json(&user)?;
        }

        Command::GoogleLogin { id_token } => {
            let user = app.auth.google_login(&id_token).await?;
            print_json(&user)?;
        }

        Command::Logout => {
            app.auth.logout().await?;
            println!("Logged out.");
        }

        Command::Whoami => match app.auth.user() {
            Some(user) => print_json(&user)?,
            None => println!("Not logged in."),
        },

        Command::DeleteAccount => {
            let response = app.auth.delete_account().await?;
            print_json(&response)?;
        }

        Command::Offers(command) => match command {
            OffersCommand::List {
                search,
                category,
                contract_type,
                job_location,
            } => {
                let filters = OfferFilters {
                    search,
                    category,
                    contract_type,
                    job_location,
                };
                print_json(&client.list_offers(&filters).await?)?;
            }
            OffersCommand::Show { id } => print_json(&client.get_offer(id).await?)?,
            OffersCommand::Create(args) => {
                let input = validated_offer(args)?;
                print_json(&client.create_offer(&input).await?)?;
            }
            OffersCommand::Update { id, offer } => {
                let input = validated_offer(offer)?;
                print_json(&client.update_offer(id, &input).await?)?;
            }
            OffersCommand::Delete { id } => print_json(&client.delete_offer(id).await?)?,
        },

        Command::Apply {
            offer_id,
            phone,
            email,
            cover_letter,
            consent,
        } => {
            let request = ApplyRequest {
                offer_id,
                phone,
                email,
                cover_letter,
                data_consent: consent,
            };
            print_guarded(app.applications().apply(&request).await?)?;
        }

        Command::Saved(command) => match command {
            SavedCommand::List => print_json(&app.saved_offers().list().await?)?,
            SavedCommand::Toggle { offer_id } => {
                print_guarded(app.saved_offers().toggle(offer_id).await?)?
            }
            SavedCommand::Status { offer_id } => {
                let saved = client.is_offer_saved(offer_id).await?;
                print_json(&serde_json::json!({ "offer_id": offer_id, "saved": saved }))?;
            }
        },

        Command::Dashboard => print_json(&client.candidate_dashboard().await?)?,

        Command::CompanyDashboard => print_json(&client.company_dashboard().await?)?,

        Command::Applied { offer_id } => {
            let applied = app.applications().has_applied(offer_id).await?;
            print_json(&serde_json::json!({ "offer_id": offer_id, "applied": applied }))?;
        }

        Command::Profile(command) => match command {
            ProfileCommand::Show => print_json(&client.get_profile().await?)?,
            ProfileCommand::Update {
                name,
                surname,
                email,
                description,
                image,
                cv,
            } => {
                let update = ProfileUpdate {
                    name,
                    surname,
                    email,
                    description,
                    image,
                    cv,
                };
                print_json(&app.auth.update_profile(&update).await?)?;
            }
        },

        Command::Password(command) => match command {
            PasswordCommand::Show => print_json(&client.password_settings().await?)?,
            PasswordCommand::Update {
                current,
                password,
                confirmation,
            } => {
                let update = PasswordUpdate {
                    current_password: current,
                    password,
                    password_confirmation: confirmation,
                };
                PasswordValidator
                    .validate(&update)
                    .into_result()
                    .map_err(ApiError::from)?;
                print_json(&client.update_password(&update).await?)?;
            }
        },

        Command::Verify(command) => match command {
            VerifyCommand::Status => print_json(&client.email_verification_status().await?)?,
            VerifyCommand::Resend => print_json(&app.guard.resend_email().await?)?,
        },
    }

    Ok(())
}

fn validated_offer(args: OfferArgs) -> Result<OfferInput> {
    let input = OfferInput::from(args);
    OfferValidator
        .validate(&input)
        .into_result()
        .map_err(ApiError::from)?;
    Ok(input)
}
