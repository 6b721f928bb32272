use project_tools::tokens::{check_token, TokenCheck, TOKEN_ENV_KEYS};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();

    let client = reqwest::Client::new();
    let mut any_valid = false;

    for env_key in TOKEN_ENV_KEYS {
        let result = check_token(&client, env_key).await;
        println!("{}", "-".repeat(40));
        println!("Environment variable: {env_key}");
        match result {
            TokenCheck::Valid {
                user_id,
                rows,
                has_rows,
                ..
            } => {
                any_valid = true;
                println!("User id: {user_id}");
                if has_rows {
                    println!("Quota records: {rows}");
                } else {
                    println!("Quota records: [] (no expiring credit records returned)");
                }
            }
            TokenCheck::Invalid { message, .. } => {
                println!("Check failed: {message}");
            }
        }
    }

    if !any_valid {
        eprintln!("No valid TuShare token detected.");
        std::process::exit(1);
    }
}
