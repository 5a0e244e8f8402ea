pub mod serve;
pub mod tunnel;

pub use serve::serve;
pub use tunnel::{cloudflare_account, cloudflare_deploy};
