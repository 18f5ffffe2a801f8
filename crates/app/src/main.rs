//! Bazaar Application CLI

use std::process;

use bazaar_app::{
    database::{self, Db},
    domain::users::{
        PgUsersService, UsersService,
        data::NewUser,
        models::{Role, UserUuid},
        service::hash_token,
    },
};
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "bazaar-app", about = "Bazaar CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(UserCommand),
}

#[derive(Debug, Args)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    Create(CreateUserArgs),
}

#[derive(Debug, Args)]
struct CreateUserArgs {
    /// User email address
    #[arg(long)]
    email: String,

    /// User role: buyer, seller, or admin
    #[arg(long)]
    role: Role,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,

    /// Optional raw API token; generated when omitted
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::User(UserCommand {
            command: UserSubcommand::Create(args),
        }) => create_user(args).await,
    }
}

async fn create_user(args: CreateUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgUsersService::new(Db::new(pool));
    let user_uuid = args.user_uuid.unwrap_or_else(Uuid::now_v7);
    let raw_token = args.token.unwrap_or_else(generate_token);

    if raw_token.trim().is_empty() {
        return Err("token cannot be empty".to_string());
    }

    let user = service
        .create_user(NewUser {
            uuid: UserUuid::from_uuid(user_uuid),
            email: args.email,
            role: args.role,
            token_hash: hash_token(&raw_token),
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("email: {}", user.email);
    println!("role: {}", user.role.as_str());
    println!("api_token: {raw_token}");
    println!("store this token now; it is only shown once");

    Ok(())
}

fn generate_token() -> String {
    format!("bz_{}{}", Uuid::now_v7().simple(), Uuid::now_v7().simple())
}
