use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::cloudflare::CloudflareClient;

/// Print the accounts the configured API token can access.
pub async fn cloudflare_account(api_token: String) -> Result<()> {
    let client = CloudflareClient::new(api_token);
    let accounts = client.list_accounts().await?;

    if accounts.is_empty() {
        bail!("The API token has no accessible Cloudflare accounts");
    }

    println!("Accessible Cloudflare accounts:");
    for account in &accounts {
        println!("  {}  {}", account.id, account.name);
    }
    println!();
    println!("To pin the deployment target, save:");
    println!("  CLOUDFLARE_ACCOUNT_ID={}", accounts[0].id);
    Ok(())
}

/// Upload a Worker script, resolving the account from the flag or the
/// token's first account when none is given.
pub async fn cloudflare_deploy(
    api_token: String,
    account_id: Option<String>,
    script_path: &str,
    worker_name: &str,
) -> Result<()> {
    let script_body = std::fs::read_to_string(script_path)
        .with_context(|| format!("failed to read Worker script at {}", script_path))?;
    debug!("Read {} bytes of Worker script", script_body.len());

    let client = CloudflareClient::new(api_token);

    let account_id = match account_id {
        Some(id) => id,
        None => {
            info!("No account ID given, using the token's first account");
            let accounts = client.list_accounts().await?;
            match accounts.into_iter().next() {
                Some(account) => {
                    info!("Deploying to account '{}' ({})", account.name, account.id);
                    account.id
                }
                None => bail!("The API token has no accessible Cloudflare accounts"),
            }
        }
    };

    let script = client
        .deploy_worker(&account_id, worker_name, script_body)
        .await?;

    println!("Worker '{}' deployed successfully", script.id);
    if let Some(modified_on) = script.modified_on {
        println!("Last modified: {}", modified_on);
    }
    println!(
        "Once your workers.dev subdomain is enabled it will be reachable at \
         https://{}.<your-subdomain>.workers.dev",
        worker_name
    );
    Ok(())
}
